//! Clients for the public coding-platform APIs.
//!
//! Every fetch goes through [`retry::retry`] with a policy that retries
//! transport failures and 5xx responses. CodeChef has no public API and is
//! never fetched; its stats can only be supplied by the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::profile::CodingHandles;
use crate::models::stats::{CodingStats, Platform, PlatformStats};

pub mod codeforces;
pub mod github;
pub mod handlers;
pub mod leetcode;
pub mod retry;

use retry::{retry, RetryPolicy};

const USER_AGENT: &str = concat!("readiness-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{platform} API error (status {status}): {message}")]
    Api {
        platform: Platform,
        status: u16,
        message: String,
    },

    #[error("{platform} user '{handle}' not found")]
    NotFound { platform: Platform, handle: String },

    #[error("unexpected {platform} response: {message}")]
    Payload { platform: Platform, message: String },

    #[error("{0} has no public API")]
    Unsupported(Platform),
}

impl FetchError {
    /// Transport failures and server-side errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.is_request()
                    || e.status().is_some_and(|s| s.is_server_error())
            }
            FetchError::Api { status, .. } => *status >= 500,
            FetchError::NotFound { .. } | FetchError::Payload { .. } | FetchError::Unsupported(_) => {
                false
            }
        }
    }

    /// User-facing hint shown next to the error message.
    pub fn suggestion(&self) -> &'static str {
        match self {
            FetchError::Http(e) if e.is_timeout() => {
                "The request took too long to complete. Please try again."
            }
            FetchError::Http(_) => "Please check your internet connection and try again.",
            FetchError::Api { status, .. } if *status >= 500 => {
                "Our servers are experiencing issues. Please try again in a few moments."
            }
            FetchError::Api { status: 429, .. } => {
                "Too many requests were made to the platform. Please wait a minute and try again."
            }
            FetchError::Api { .. } => "The platform rejected the request. Please verify the handle and try again.",
            FetchError::NotFound { .. } => {
                "Please check that the handle is spelled exactly as it appears on the platform."
            }
            FetchError::Payload { .. } => {
                "The platform returned data in an unexpected format. Please try again later."
            }
            FetchError::Unsupported(_) => {
                "This platform has no public API. Enter your rating manually instead."
            }
        }
    }
}

/// Turns a non-success response into a typed error. 404 means the handle
/// does not exist.
pub(crate) async fn check_status(
    platform: Platform,
    handle: &str,
    response: Response,
) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound {
            platform,
            handle: handle.to_string(),
        });
    }
    let message = response.text().await.unwrap_or_default();
    Err(FetchError::Api {
        platform,
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    platform: Platform,
    response: Response,
) -> Result<T, FetchError> {
    response.json::<T>().await.map_err(|e| FetchError::Payload {
        platform,
        message: e.to_string(),
    })
}

/// Source of per-platform statistics. Held as a trait object in `AppState`
/// so route tests can substitute a canned implementation.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, platform: Platform, handle: &str) -> Result<PlatformStats, FetchError>;
}

#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub leetcode_base_url: String,
    pub github_base_url: String,
    pub codeforces_base_url: String,
    pub github_token: Option<String>,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            leetcode_base_url: "https://leetcode.com".to_string(),
            github_base_url: "https://api.github.com".to_string(),
            codeforces_base_url: "https://codeforces.com".to_string(),
            github_token: None,
            timeout: Duration::from_secs(10),
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// reqwest-backed [`ProfileSource`] talking to the live platform APIs.
#[derive(Clone)]
pub struct PlatformClient {
    http: Client,
    config: PlatformConfig,
    policy: RetryPolicy<FetchError>,
}

impl PlatformClient {
    pub fn new(config: PlatformConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        let policy = RetryPolicy::new(
            config.max_attempts,
            config.base_delay,
            FetchError::is_retryable,
        );
        Ok(Self {
            http,
            config,
            policy,
        })
    }
}

#[async_trait]
impl ProfileSource for PlatformClient {
    async fn fetch(&self, platform: Platform, handle: &str) -> Result<PlatformStats, FetchError> {
        debug!("Fetching {platform} stats for '{handle}'");
        let http = &self.http;
        let config = &self.config;

        match platform {
            Platform::LeetCode => {
                let base = config.leetcode_base_url.as_str();
                retry(&self.policy, "leetcode", move || {
                    leetcode::fetch(http, base, handle)
                })
                .await
                .map(PlatformStats::LeetCode)
            }
            Platform::GitHub => {
                let base = config.github_base_url.as_str();
                let token = config.github_token.as_deref();
                retry(&self.policy, "github", move || {
                    github::fetch(http, base, token, handle)
                })
                .await
                .map(PlatformStats::GitHub)
            }
            Platform::Codeforces => {
                let base = config.codeforces_base_url.as_str();
                retry(&self.policy, "codeforces", move || {
                    codeforces::fetch(http, base, handle)
                })
                .await
                .map(PlatformStats::Codeforces)
            }
            Platform::CodeChef => Err(FetchError::Unsupported(Platform::CodeChef)),
        }
    }
}

/// Result of fanning out over every handle a user has configured.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub stats: CodingStats,
    pub failures: Vec<(Platform, FetchError)>,
}

/// Fetches all configured platforms concurrently. A failed platform is
/// recorded in `failures` and left out of `stats`.
pub async fn fetch_all(source: &dyn ProfileSource, handles: &CodingHandles) -> FetchOutcome {
    let fetch_one = move |platform: Platform| async move {
        let Some(handle) = handles.get(platform) else {
            return None;
        };
        if platform == Platform::CodeChef {
            info!("Skipping CodeChef handle '{handle}': no public API");
            return None;
        }
        Some((platform, source.fetch(platform, handle).await))
    };

    let (leetcode, github, codeforces) = tokio::join!(
        fetch_one(Platform::LeetCode),
        fetch_one(Platform::GitHub),
        fetch_one(Platform::Codeforces),
    );

    let mut outcome = FetchOutcome::default();
    for (platform, result) in [leetcode, github, codeforces].into_iter().flatten() {
        match result {
            Ok(stats) => {
                debug!("Received {} stats", stats.platform());
                outcome.stats.insert(stats);
            }
            Err(e) => {
                warn!("{platform} fetch failed, excluding it from the coding score: {e}");
                outcome.failures.push((platform, e));
            }
        }
    }
    outcome
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Canned [`ProfileSource`] keyed by platform.
    #[derive(Default)]
    pub struct StubSource {
        pub responses: HashMap<Platform, PlatformStats>,
    }

    impl StubSource {
        pub fn with(mut self, stats: PlatformStats) -> Self {
            self.responses.insert(stats.platform(), stats);
            self
        }
    }

    #[async_trait]
    impl ProfileSource for StubSource {
        async fn fetch(&self, platform: Platform, handle: &str) -> Result<PlatformStats, FetchError> {
            self.responses
                .get(&platform)
                .cloned()
                .ok_or_else(|| FetchError::NotFound {
                    platform,
                    handle: handle.to_string(),
                })
        }
    }
}
