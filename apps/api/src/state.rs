use std::sync::Arc;

use crate::notify::Notifier;
use crate::platforms::ProfileSource;
use crate::scoring::composite::ScoringWeights;
use crate::store::ReadinessStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReadinessStore>,
    /// Live platform APIs in production; a canned source in tests.
    pub platforms: Arc<dyn ProfileSource>,
    pub notifier: Arc<dyn Notifier>,
    pub weights: ScoringWeights,
}
