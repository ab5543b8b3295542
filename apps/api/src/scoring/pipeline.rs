//! Composes the individual scorers into one `AnalysisResult`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::analysis::AnalysisResult;
use crate::models::resume::ResumeAnalysis;
use crate::models::stats::CodingStats;
use crate::scoring::coding::{score_coding_profile, CodingScore};
use crate::scoring::composite::{compute_final_score, ScoringWeights};
use crate::scoring::gaps::identify_skill_gaps;
use crate::scoring::linkedin::{analyze_linkedin, LinkedInAnalysis};
use crate::scoring::recommendations::{generate_recommendations, RecommendationInput};
use crate::scoring::skills::merge_skills;

pub struct PipelineInput<'a> {
    pub resume: &'a ResumeAnalysis,
    pub coding: &'a CodingStats,
    pub linkedin_text: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub result: AnalysisResult,
    pub coding: CodingScore,
    pub linkedin: Option<LinkedInAnalysis>,
}

pub fn run_analysis(
    input: &PipelineInput<'_>,
    weights: &ScoringWeights,
    analysis_date: DateTime<Utc>,
) -> PipelineOutput {
    let coding = score_coding_profile(input.coding);

    let linkedin = input
        .linkedin_text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(analyze_linkedin);
    let linkedin_score = linkedin.as_ref().map_or(0, |l| l.score);
    let linkedin_skills = linkedin
        .as_ref()
        .map(|l| l.skills.as_slice())
        .unwrap_or(&[]);

    let resume_score = input.resume.score.overall.min(100);
    let final_score = compute_final_score(resume_score, coding.overall, linkedin_score, weights);

    let skills = merge_skills([input.resume.skills.as_slice(), linkedin_skills]);
    let skill_gaps = identify_skill_gaps(&skills);
    let recommendations = generate_recommendations(&RecommendationInput {
        resume_score,
        skills: &skills,
        experience: input.resume.experience,
        project_count: input.resume.projects.len(),
        coding_score: coding.overall,
    });

    let result = AnalysisResult {
        id: Uuid::new_v4(),
        resume_score,
        coding_score: coding.overall,
        linkedin_score,
        final_score,
        skills,
        skill_gaps,
        recommendations,
        analysis_date,
    };

    PipelineOutput {
        result,
        coding,
        linkedin,
    }
}
