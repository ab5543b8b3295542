use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeScore {
    pub overall: u32,
}

/// Structured resume signals consumed by the scoring pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub score: ResumeScore,
    /// Experience signal in [0, 100]. `None` or zero means unknown.
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl ResumeAnalysis {
    /// Boundary check for records supplied by callers.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.score.overall > 100 {
            return Err(AppError::Validation(format!(
                "Resume score must be within 0-100, got {}",
                self.score.overall
            )));
        }
        if let Some(exp) = self.experience {
            if exp > 100 {
                return Err(AppError::Validation(format!(
                    "Experience signal must be within 0-100, got {exp}"
                )));
            }
        }
        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "Skill names must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// The resume part of an analyze request: either an already-parsed record
/// or raw text to run through the resume analyzer.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeInput {
    Parsed(ResumeAnalysis),
    Text { text: String },
}
