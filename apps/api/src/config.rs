use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::platforms::PlatformConfig;

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_dir: PathBuf,
    pub fetch_max_attempts: u32,
    pub fetch_base_delay_ms: u64,
    pub http_timeout_secs: u64,
    pub leetcode_base_url: String,
    pub github_base_url: String,
    pub codeforces_base_url: String,
    /// Raises the GitHub rate limit from 60 to 5000 requests per hour.
    pub github_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = PlatformConfig::default();

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            fetch_max_attempts: parse_env("FETCH_MAX_ATTEMPTS", defaults.max_attempts)?,
            fetch_base_delay_ms: parse_env(
                "FETCH_BASE_DELAY_MS",
                defaults.base_delay.as_millis() as u64,
            )?,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", defaults.timeout.as_secs())?,
            leetcode_base_url: env_or("LEETCODE_BASE_URL", &defaults.leetcode_base_url),
            github_base_url: env_or("GITHUB_BASE_URL", &defaults.github_base_url),
            codeforces_base_url: env_or("CODEFORCES_BASE_URL", &defaults.codeforces_base_url),
            github_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn platform_config(&self) -> PlatformConfig {
        PlatformConfig {
            leetcode_base_url: self.leetcode_base_url.clone(),
            github_base_url: self.github_base_url.clone(),
            codeforces_base_url: self.codeforces_base_url.clone(),
            github_token: self.github_token.clone(),
            timeout: Duration::from_secs(self.http_timeout_secs),
            max_attempts: self.fetch_max_attempts,
            base_delay: Duration::from_millis(self.fetch_base_delay_ms),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 6] = [
        "PORT",
        "DATA_DIR",
        "FETCH_MAX_ATTEMPTS",
        "FETCH_BASE_DELAY_MS",
        "GITHUB_BASE_URL",
        "GITHUB_TOKEN",
    ];

    fn clear() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear();

        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.data_dir, PathBuf::from("./data"));
        assert_eq!(cfg.fetch_max_attempts, 3);
        assert_eq!(cfg.github_base_url, "https://api.github.com");
        assert!(cfg.github_token.is_none());
    }

    #[test]
    fn test_overrides_flow_into_platform_config() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear();
        env::set_var("FETCH_MAX_ATTEMPTS", "5");
        env::set_var("FETCH_BASE_DELAY_MS", "250");
        env::set_var("GITHUB_BASE_URL", "http://localhost:9999");
        env::set_var("GITHUB_TOKEN", "ghp_test");

        let platform = Config::from_env().unwrap().platform_config();
        assert_eq!(platform.max_attempts, 5);
        assert_eq!(platform.base_delay, Duration::from_millis(250));
        assert_eq!(platform.github_base_url, "http://localhost:9999");
        assert_eq!(platform.github_token.as_deref(), Some("ghp_test"));

        clear();
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear();
        env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(format!("{err:#}").contains("PORT"), "got: {err:#}");

        clear();
    }
}
