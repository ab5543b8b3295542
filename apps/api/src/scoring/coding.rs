//! Coding profile scorer: per-platform capped linear scores averaged over
//! the platforms that returned data.

use serde::{Deserialize, Serialize};

use crate::models::stats::{
    CodingStats, GitHubStats, LeetCodeStats, Platform, PlatformStats, RatingStats,
};

const PLATFORM_CAP: f64 = 100.0;
const RATING_DIVISOR: f64 = 35.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformScore {
    pub platform: Platform,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodingScore {
    /// Rounded mean of the per-platform scores; 0 when no platform has data.
    pub overall: u32,
    pub platforms: Vec<PlatformScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl CodingScore {
    pub fn platform_score(&self, platform: Platform) -> Option<f64> {
        self.platforms
            .iter()
            .find(|p| p.platform == platform)
            .map(|p| p.score)
    }
}

/// min(100, 2*total + 2*medium + 3*hard)
pub fn leetcode_score(stats: &LeetCodeStats) -> f64 {
    let raw = 2 * u64::from(stats.total_solved)
        + 2 * u64::from(stats.medium_solved)
        + 3 * u64::from(stats.hard_solved);
    (raw as f64).min(PLATFORM_CAP)
}

/// min(100, 5*repos + 2*stars + followers)
pub fn github_score(stats: &GitHubStats) -> f64 {
    let raw = 5 * u64::from(stats.public_repos)
        + 2 * u64::from(stats.total_stars)
        + u64::from(stats.followers);
    (raw as f64).min(PLATFORM_CAP)
}

/// min(100, rating / 35), shared by Codeforces and CodeChef.
pub fn rating_score(stats: &RatingStats) -> f64 {
    (f64::from(stats.rating) / RATING_DIVISOR).min(PLATFORM_CAP)
}

pub fn platform_stats_score(stats: &PlatformStats) -> f64 {
    match stats {
        PlatformStats::LeetCode(s) => leetcode_score(s),
        PlatformStats::GitHub(s) => github_score(s),
        PlatformStats::Codeforces(s) | PlatformStats::CodeChef(s) => rating_score(s),
    }
}

pub fn score_coding_profile(stats: &CodingStats) -> CodingScore {
    let mut platforms = Vec::with_capacity(4);

    if let Some(lc) = &stats.leetcode {
        platforms.push(PlatformScore {
            platform: Platform::LeetCode,
            score: leetcode_score(lc),
        });
    }
    if let Some(gh) = &stats.github {
        platforms.push(PlatformScore {
            platform: Platform::GitHub,
            score: github_score(gh),
        });
    }
    if let Some(cf) = &stats.codeforces {
        platforms.push(PlatformScore {
            platform: Platform::Codeforces,
            score: rating_score(cf),
        });
    }
    if let Some(cc) = &stats.codechef {
        platforms.push(PlatformScore {
            platform: Platform::CodeChef,
            score: rating_score(cc),
        });
    }

    let overall = if platforms.is_empty() {
        0
    } else {
        let sum: f64 = platforms.iter().map(|p| p.score).sum();
        (sum / platforms.len() as f64).round() as u32
    };

    let mut score = CodingScore {
        overall,
        platforms,
        strengths: Vec::new(),
        weaknesses: Vec::new(),
    };
    score.strengths = identify_strengths(&score);
    score.weaknesses = identify_weaknesses(&score);
    score
}

fn identify_strengths(score: &CodingScore) -> Vec<String> {
    let rules = [
        (Platform::LeetCode, 80.0, "Problem Solving"),
        (Platform::GitHub, 75.0, "Project Development"),
        (Platform::Codeforces, 70.0, "Competitive Programming"),
    ];
    rules
        .iter()
        .filter(|(platform, threshold, _)| {
            score.platform_score(*platform).is_some_and(|s| s > *threshold)
        })
        .map(|(_, _, label)| label.to_string())
        .collect()
}

// Only platforms with data can be weak; an unlinked platform is not a weakness.
fn identify_weaknesses(score: &CodingScore) -> Vec<String> {
    let rules = [
        (Platform::LeetCode, 60.0, "Algorithm Practice"),
        (Platform::GitHub, 50.0, "Open Source Contribution"),
        (Platform::CodeChef, 50.0, "Contest Participation"),
    ];
    rules
        .iter()
        .filter(|(platform, threshold, _)| {
            score.platform_score(*platform).is_some_and(|s| s < *threshold)
        })
        .map(|(_, _, label)| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leetcode(total: u32, medium: u32, hard: u32) -> LeetCodeStats {
        LeetCodeStats {
            total_solved: total,
            medium_solved: medium,
            hard_solved: hard,
            ..Default::default()
        }
    }

    #[test]
    fn test_leetcode_example_caps_at_100() {
        // min(100, 200 + 80 + 30)
        assert_eq!(leetcode_score(&leetcode(100, 40, 10)), 100.0);
    }

    #[test]
    fn test_leetcode_below_cap() {
        // 2*20 + 2*5 + 3*1
        assert_eq!(leetcode_score(&leetcode(20, 5, 1)), 53.0);
    }

    #[test]
    fn test_leetcode_huge_counts_do_not_overflow() {
        assert_eq!(leetcode_score(&leetcode(u32::MAX, u32::MAX, u32::MAX)), 100.0);
    }

    #[test]
    fn test_github_formula() {
        let gh = GitHubStats {
            public_repos: 6,
            total_stars: 10,
            followers: 12,
            ..Default::default()
        };
        // 30 + 20 + 12
        assert_eq!(github_score(&gh), 62.0);
    }

    #[test]
    fn test_rating_formula() {
        let cf = RatingStats {
            rating: 1750,
            max_rating: None,
        };
        assert_eq!(rating_score(&cf), 50.0);
        let high = RatingStats {
            rating: 3800,
            max_rating: None,
        };
        assert_eq!(rating_score(&high), 100.0);
    }

    #[test]
    fn test_no_platforms_scores_zero() {
        let score = score_coding_profile(&CodingStats::default());
        assert_eq!(score.overall, 0);
        assert!(score.platforms.is_empty());
        assert!(score.strengths.is_empty());
        assert!(score.weaknesses.is_empty());
    }

    #[test]
    fn test_average_over_present_platforms_only() {
        let stats = CodingStats {
            leetcode: Some(leetcode(100, 40, 10)), // 100
            codeforces: Some(RatingStats {
                rating: 1750,
                max_rating: None,
            }), // 50
            ..Default::default()
        };
        let score = score_coding_profile(&stats);
        assert_eq!(score.overall, 75);
        assert_eq!(score.platforms.len(), 2);
    }

    #[test]
    fn test_average_is_rounded() {
        let stats = CodingStats {
            codeforces: Some(RatingStats {
                rating: 1000,
                max_rating: None,
            }), // 28.57
            codechef: Some(RatingStats {
                rating: 1010,
                max_rating: None,
            }), // 28.86
            ..Default::default()
        };
        assert_eq!(score_coding_profile(&stats).overall, 29);
    }

    #[test]
    fn test_leetcode_monotonic_in_each_count() {
        let base = leetcode(10, 3, 1);
        let base_score = leetcode_score(&base);
        for bump in 1..60 {
            assert!(leetcode_score(&leetcode(10 + bump, 3, 1)) >= base_score);
            assert!(leetcode_score(&leetcode(10, 3 + bump, 1)) >= base_score);
            assert!(leetcode_score(&leetcode(10, 3, 1 + bump)) >= base_score);
        }
    }

    #[test]
    fn test_github_monotonic_in_each_count() {
        let github = |repos: u32, stars: u32, followers: u32| GitHubStats {
            public_repos: repos,
            followers,
            following: 0,
            total_stars: stars,
            top_languages: vec![],
        };
        let base_score = github_score(&github(3, 2, 5));
        for bump in 1..60 {
            assert!(github_score(&github(3 + bump, 2, 5)) >= base_score);
            assert!(github_score(&github(3, 2 + bump, 5)) >= base_score);
            assert!(github_score(&github(3, 2, 5 + bump)) >= base_score);
        }
    }

    #[test]
    fn test_rating_monotonic() {
        let mut previous = 0.0;
        for rating in (0..5000).step_by(50) {
            let s = rating_score(&RatingStats {
                rating,
                max_rating: None,
            });
            assert!(s >= previous);
            previous = s;
        }
    }

    #[test]
    fn test_strengths_and_weaknesses() {
        let stats = CodingStats {
            leetcode: Some(leetcode(100, 40, 10)),
            github: Some(GitHubStats {
                public_repos: 2,
                ..Default::default()
            }),
            ..Default::default()
        };
        let score = score_coding_profile(&stats);
        assert_eq!(score.strengths, vec!["Problem Solving"]);
        assert_eq!(score.weaknesses, vec!["Open Source Contribution"]);
    }
}
