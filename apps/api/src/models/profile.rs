use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::stats::Platform;

const MAX_HANDLE_LEN: usize = 64;

/// Coding-platform handles a user has linked. Every field is optional;
/// platforms without a handle are simply not fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingHandles {
    #[serde(default)]
    pub leetcode: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub codeforces: Option<String>,
    #[serde(default)]
    pub codechef: Option<String>,
}

impl CodingHandles {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let handle = match platform {
            Platform::LeetCode => &self.leetcode,
            Platform::GitHub => &self.github,
            Platform::Codeforces => &self.codeforces,
            Platform::CodeChef => &self.codechef,
        };
        handle.as_deref().map(str::trim).filter(|h| !h.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Platform::ALL.iter().all(|p| self.get(*p).is_none())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for platform in Platform::ALL {
            if let Some(handle) = self.get(platform) {
                validate_handle(platform, handle)?;
            }
        }
        Ok(())
    }
}

/// Handles end up in URL paths, so they are restricted to the character set
/// the supported platforms allow for usernames.
pub fn validate_handle(platform: Platform, handle: &str) -> Result<(), AppError> {
    let valid = !handle.is_empty()
        && handle.len() <= MAX_HANDLE_LEN
        && handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "'{handle}' is not a valid {platform} handle"
        )))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Role used for benchmark comparison, e.g. "Full Stack Developer".
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub handles: CodingHandles,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_handles_are_treated_as_missing() {
        let handles = CodingHandles {
            leetcode: Some("   ".to_string()),
            github: Some(String::new()),
            ..Default::default()
        };
        assert!(handles.is_empty());
        assert!(handles.validate().is_ok());
    }

    #[test]
    fn test_handle_is_trimmed() {
        let handles = CodingHandles {
            github: Some(" octocat ".to_string()),
            ..Default::default()
        };
        assert_eq!(handles.get(Platform::GitHub), Some("octocat"));
    }

    #[test]
    fn test_rejects_handle_with_slash() {
        let handles = CodingHandles {
            codeforces: Some("tourist/../x".to_string()),
            ..Default::default()
        };
        assert!(handles.validate().is_err());
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let profile: UserProfile = serde_json::from_str(r#"{"display_name": "Asha"}"#).unwrap();
        assert_eq!(profile.display_name.as_deref(), Some("Asha"));
        assert!(profile.handles.is_empty());
        assert!(profile.target_role.is_none());
    }
}
