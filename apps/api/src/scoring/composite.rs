use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub resume: f64,
    pub coding: f64,
    pub linkedin: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            resume: 0.4,
            coding: 0.4,
            linkedin: 0.2,
        }
    }
}

/// Readiness score: round(0.4*resume + 0.4*coding + 0.2*linkedin).
/// Sub-scores are clamped to [0, 100] first, so the result never leaves that range.
pub fn compute_final_score(resume: u32, coding: u32, linkedin: u32, weights: &ScoringWeights) -> u32 {
    let resume = f64::from(resume.min(100));
    let coding = f64::from(coding.min(100));
    let linkedin = f64::from(linkedin.min(100));

    let weighted = weights.resume * resume + weights.coding * coding + weights.linkedin * linkedin;
    weighted.round().clamp(0.0, 100.0) as u32
}
