use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Coding practice sites the scorer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LeetCode,
    GitHub,
    Codeforces,
    CodeChef,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::LeetCode,
        Platform::GitHub,
        Platform::Codeforces,
        Platform::CodeChef,
    ];
}

/// Case-insensitive; accepts the same lowercase names used on the wire.
impl FromStr for Platform {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown platform '{raw}'. Supported: leetcode, github, codeforces, codechef"
                ))
            })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::LeetCode => "LeetCode",
            Platform::GitHub => "GitHub",
            Platform::Codeforces => "Codeforces",
            Platform::CodeChef => "CodeChef",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeetCodeStats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    #[serde(default)]
    pub ranking: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitHubStats {
    pub public_repos: u32,
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    /// Stars summed over the ten most recently updated repositories.
    pub total_stars: u32,
    #[serde(default)]
    pub top_languages: Vec<String>,
}

/// Contest-rating platforms (Codeforces, CodeChef).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub rating: u32,
    #[serde(default)]
    pub max_rating: Option<u32>,
}

/// Stats for a single platform, tagged by platform on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "stats", rename_all = "lowercase")]
pub enum PlatformStats {
    LeetCode(LeetCodeStats),
    GitHub(GitHubStats),
    Codeforces(RatingStats),
    CodeChef(RatingStats),
}

impl PlatformStats {
    pub fn platform(&self) -> Platform {
        match self {
            PlatformStats::LeetCode(_) => Platform::LeetCode,
            PlatformStats::GitHub(_) => Platform::GitHub,
            PlatformStats::Codeforces(_) => Platform::Codeforces,
            PlatformStats::CodeChef(_) => Platform::CodeChef,
        }
    }
}

/// Everything fetched for one analysis. A `None` means the platform was not
/// linked or could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingStats {
    #[serde(default)]
    pub leetcode: Option<LeetCodeStats>,
    #[serde(default)]
    pub github: Option<GitHubStats>,
    #[serde(default)]
    pub codeforces: Option<RatingStats>,
    #[serde(default)]
    pub codechef: Option<RatingStats>,
}

impl CodingStats {
    pub fn insert(&mut self, stats: PlatformStats) {
        match stats {
            PlatformStats::LeetCode(s) => self.leetcode = Some(s),
            PlatformStats::GitHub(s) => self.github = Some(s),
            PlatformStats::Codeforces(s) => self.codeforces = Some(s),
            PlatformStats::CodeChef(s) => self.codechef = Some(s),
        }
    }

    pub fn platform_count(&self) -> usize {
        [
            self.leetcode.is_some(),
            self.github.is_some(),
            self.codeforces.is_some(),
            self.codechef.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}
