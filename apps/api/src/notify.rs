//! Analysis lifecycle events.
//!
//! Handlers report what happened through an injected [`Notifier`]; the
//! default implementation writes structured log lines.

use tracing::{info, warn};

use crate::models::stats::Platform;
use crate::models::user::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    ProfileSaved {
        user_id: UserId,
    },
    AnalysisCompleted {
        user_id: UserId,
        final_score: u32,
        previous_score: Option<u32>,
    },
    PlatformUnavailable {
        user_id: UserId,
        platform: Platform,
        reason: String,
    },
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::ProfileSaved { user_id } => {
                info!(user = %user_id, "Profile saved");
            }
            Notification::AnalysisCompleted {
                user_id,
                final_score,
                previous_score,
            } => match previous_score {
                Some(previous) => info!(
                    user = %user_id,
                    final_score,
                    change = i64::from(final_score) - i64::from(previous),
                    "Analysis completed"
                ),
                None => info!(user = %user_id, final_score, "First analysis completed"),
            },
            Notification::PlatformUnavailable {
                user_id,
                platform,
                reason,
            } => {
                warn!(user = %user_id, %platform, %reason, "Platform data unavailable");
            }
        }
    }
}
