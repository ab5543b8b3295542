//! Response-side view of an analysis: the persisted result plus the
//! derived presentation fields recomputed on every read.

use serde::Serialize;

use crate::models::analysis::AnalysisResult;
use crate::models::stats::Platform;
use crate::platforms::FetchError;
use crate::scoring::benchmarks::{
    community_benchmark, compare_to_role, readiness_level, BenchmarkComparison, ReadinessLevel,
};
use crate::scoring::coding::CodingScore;
use crate::scoring::demand::{skill_demand_score, top_in_demand, SkillDemand};
use crate::scoring::industry::{industry_recommendations, IndustryRecommendations};
use crate::scoring::linkedin::LinkedInAnalysis;
use crate::scoring::roadmap::{generate_roadmap, Roadmap};
use crate::scoring::skills::{categorize_skills, group_by_category, CategoryGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Positions 0-2 are high priority, 3-5 medium, the rest low.
pub fn priority_for(position: usize) -> Priority {
    match position {
        0..=2 => Priority::High,
        3..=5 => Priority::Medium,
        _ => Priority::Low,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrioritizedRecommendation {
    pub text: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnavailablePlatform {
    pub platform: Platform,
    pub message: String,
    pub suggestion: &'static str,
}

impl From<&(Platform, FetchError)> for UnavailablePlatform {
    fn from((platform, error): &(Platform, FetchError)) -> Self {
        Self {
            platform: *platform,
            message: error.to_string(),
            suggestion: error.suggestion(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub readiness_level: ReadinessLevel,
    /// Share of candidates scoring at or below this one, as a label.
    pub community_benchmark: &'static str,
    pub skills_by_category: Vec<CategoryGroup>,
    pub recommendations: Vec<PrioritizedRecommendation>,
    pub demand_score: u32,
    pub top_in_demand: Vec<SkillDemand>,
    /// Guidance for the target role, or for the role inferred from skills.
    pub industry: IndustryRecommendations,
    pub roadmap: Roadmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_comparison: Option<BenchmarkComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<CodingScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<LinkedInAnalysis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unavailable_platforms: Vec<UnavailablePlatform>,
}

impl AnalysisReport {
    pub fn new(
        analysis: AnalysisResult,
        target_role: Option<&str>,
        previous_score: Option<u32>,
    ) -> Self {
        let recommendations = analysis
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, text)| PrioritizedRecommendation {
                text: text.clone(),
                priority: priority_for(i),
            })
            .collect();

        Self {
            readiness_level: readiness_level(analysis.final_score),
            community_benchmark: community_benchmark(analysis.final_score),
            skills_by_category: group_by_category(&categorize_skills(&analysis.skills)),
            recommendations,
            demand_score: skill_demand_score(&analysis.skills),
            top_in_demand: top_in_demand(&analysis.skills),
            industry: industry_recommendations(&analysis.skills, target_role),
            roadmap: generate_roadmap(analysis.final_score),
            role_comparison: target_role.and_then(|r| compare_to_role(analysis.final_score, r)),
            previous_score,
            coding: None,
            linkedin: None,
            unavailable_platforms: Vec::new(),
            analysis,
        }
    }

    /// Attaches the per-run details only available right after the pipeline.
    pub fn with_run_details(
        mut self,
        coding: CodingScore,
        linkedin: Option<LinkedInAnalysis>,
        failures: &[(Platform, FetchError)],
    ) -> Self {
        self.coding = Some(coding);
        self.linkedin = linkedin;
        self.unavailable_platforms = failures.iter().map(UnavailablePlatform::from).collect();
        self
    }
}
