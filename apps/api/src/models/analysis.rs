use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::composite::{compute_final_score, ScoringWeights};
use crate::scoring::gaps::MAX_GAPS;
use crate::scoring::recommendations::MAX_RECOMMENDATIONS;

/// Number of superseded analyses kept per user.
pub const HISTORY_LIMIT: usize = 5;

/// One readiness analysis. Immutable once created; a new analysis replaces
/// it and pushes it onto the user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub resume_score: u32,
    pub coding_score: u32,
    pub linkedin_score: u32,
    pub final_score: u32,
    pub skills: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default = "Utc::now")]
    pub analysis_date: DateTime<Utc>,
}

impl AnalysisResult {
    /// Checks score ranges and the composite invariant for results that
    /// arrive from outside the pipeline.
    pub fn validate(&self, weights: &ScoringWeights) -> Result<(), AppError> {
        for (name, score) in [
            ("resume_score", self.resume_score),
            ("coding_score", self.coding_score),
            ("linkedin_score", self.linkedin_score),
            ("final_score", self.final_score),
        ] {
            if score > 100 {
                return Err(AppError::Validation(format!(
                    "{name} must be within 0-100, got {score}"
                )));
            }
        }

        let expected = compute_final_score(
            self.resume_score,
            self.coding_score,
            self.linkedin_score,
            weights,
        );
        if expected != self.final_score {
            return Err(AppError::UnprocessableEntity(format!(
                "final_score {} does not match weighted sub-scores (expected {expected})",
                self.final_score
            )));
        }

        check_list("skills", &self.skills, None)?;
        check_list("skill_gaps", &self.skill_gaps, Some(MAX_GAPS))?;
        check_list("recommendations", &self.recommendations, Some(MAX_RECOMMENDATIONS))?;
        Ok(())
    }
}

/// Rejects case-insensitive duplicates and lists longer than `limit`.
fn check_list(name: &str, items: &[String], limit: Option<usize>) -> Result<(), AppError> {
    if let Some(limit) = limit {
        if items.len() > limit {
            return Err(AppError::UnprocessableEntity(format!(
                "{name} has {} entries; at most {limit} are allowed",
                items.len()
            )));
        }
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.trim().to_lowercase()) {
            return Err(AppError::UnprocessableEntity(format!(
                "{name} contains '{item}' more than once"
            )));
        }
    }
    Ok(())
}

/// Persisted per-user analysis document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub current: AnalysisResult,
    /// Newest first, at most `HISTORY_LIMIT` entries.
    #[serde(default)]
    pub history: Vec<AnalysisResult>,
}

impl AnalysisRecord {
    pub fn new(current: AnalysisResult) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }

    /// Replaces the current analysis, moving the old one to the front of
    /// the history and dropping the oldest beyond the limit.
    pub fn supersede(mut self, next: AnalysisResult) -> Self {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.insert(0, previous);
        self.history.truncate(HISTORY_LIMIT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(final_score: u32) -> AnalysisResult {
        AnalysisResult {
            id: Uuid::new_v4(),
            resume_score: final_score,
            coding_score: final_score,
            linkedin_score: final_score,
            final_score,
            skills: vec!["Rust".to_string()],
            skill_gaps: vec![],
            recommendations: vec![],
            analysis_date: Utc::now(),
        }
    }

    #[test]
    fn test_supersede_pushes_previous_to_front() {
        let record = AnalysisRecord::new(sample(10)).supersede(sample(20));
        assert_eq!(record.current.final_score, 20);
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.history[0].final_score, 10);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut record = AnalysisRecord::new(sample(0));
        for score in 1..=8 {
            record = record.supersede(sample(score));
        }
        assert_eq!(record.current.final_score, 8);
        assert_eq!(record.history.len(), HISTORY_LIMIT);
        let scores: Vec<u32> = record.history.iter().map(|a| a.final_score).collect();
        assert_eq!(scores, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_validate_accepts_consistent_scores() {
        let mut a = sample(0);
        a.resume_score = 80;
        a.coding_score = 60;
        a.linkedin_score = 75;
        a.final_score = 71;
        assert!(a.validate(&ScoringWeights::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_inconsistent_final_score() {
        let mut a = sample(50);
        a.final_score = 90;
        assert!(a.validate(&ScoringWeights::default()).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut a = sample(50);
        a.coding_score = 101;
        assert!(a.validate(&ScoringWeights::default()).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_skills_ignoring_case() {
        let mut a = sample(50);
        a.skills = vec!["React".to_string(), "react".to_string()];
        assert!(matches!(
            a.validate(&ScoringWeights::default()),
            Err(AppError::UnprocessableEntity(msg)) if msg.contains("skills")
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_or_repeated_lists() {
        let weights = ScoringWeights::default();

        let mut a = sample(50);
        a.skill_gaps = vec!["Testing".to_string(), "Testing".to_string()];
        assert!(matches!(a.validate(&weights), Err(AppError::UnprocessableEntity(_))));

        let mut a = sample(50);
        a.skill_gaps = (0..=MAX_GAPS).map(|i| format!("gap {i}")).collect();
        assert!(matches!(a.validate(&weights), Err(AppError::UnprocessableEntity(_))));

        let mut a = sample(50);
        a.recommendations = (0..=MAX_RECOMMENDATIONS).map(|i| format!("rec {i}")).collect();
        assert!(matches!(a.validate(&weights), Err(AppError::UnprocessableEntity(_))));

        let mut a = sample(50);
        a.recommendations = (0..MAX_RECOMMENDATIONS).map(|i| format!("rec {i}")).collect();
        a.skill_gaps = (0..MAX_GAPS).map(|i| format!("gap {i}")).collect();
        assert!(a.validate(&weights).is_ok());
    }

    #[test]
    fn test_id_and_date_default_when_missing() {
        let a: AnalysisResult = serde_json::from_str(
            r#"{"resume_score": 0, "coding_score": 0, "linkedin_score": 0, "final_score": 0,
                "skills": [], "skill_gaps": [], "recommendations": []}"#,
        )
        .unwrap();
        assert!(!a.id.is_nil());
    }
}
