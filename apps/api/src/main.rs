mod analysis;
mod config;
mod errors;
mod models;
mod notify;
mod platforms;
mod profile;
mod resume;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notify::TracingNotifier;
use crate::platforms::PlatformClient;
use crate::routes::build_router;
use crate::scoring::composite::ScoringWeights;
use crate::state::AppState;
use crate::store::JsonStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonStore::open(&config.data_dir)
        .await
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    info!("JSON store at {}", config.data_dir.display());

    let platform_config = config.platform_config();
    info!(
        "Platform fetches: {} attempts, {}ms base delay, {}s timeout, GitHub token {}",
        platform_config.max_attempts,
        platform_config.base_delay.as_millis(),
        platform_config.timeout.as_secs(),
        if platform_config.github_token.is_some() { "set" } else { "not set" }
    );
    let platforms = PlatformClient::new(platform_config).context("Failed to build HTTP client")?;

    let state = AppState {
        store: Arc::new(store),
        platforms: Arc::new(platforms),
        notifier: Arc::new(TracingNotifier),
        weights: ScoringWeights::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
