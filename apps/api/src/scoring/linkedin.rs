use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scoring::resume::experience_signal;
use crate::scoring::skills::extract_skills;

const SUMMARY_SENTENCES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInAnalysis {
    pub skills: Vec<String>,
    pub experience: u32,
    pub leadership: bool,
    pub score: u32,
    pub summary: String,
}

fn leadership_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:led|managed|coordinated|organized|mentored)\b")
            .expect("leadership pattern is a valid regex")
    })
}

/// min(4*skills, 40) + min(experience, 40) + 20 for leadership wording.
pub fn linkedin_score(skill_count: usize, experience: u32, leadership: bool) -> u32 {
    let skills = (skill_count as u32).saturating_mul(4).min(40);
    let experience = experience.min(40);
    let leadership = if leadership { 20 } else { 0 };
    skills + experience + leadership
}

pub fn analyze_linkedin(text: &str) -> LinkedInAnalysis {
    let skills = extract_skills(text);
    let experience = experience_signal(text);
    let leadership = leadership_pattern().is_match(text);
    let score = linkedin_score(skills.len(), experience, leadership);

    let summary = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(". ");

    LinkedInAnalysis {
        skills,
        experience,
        leadership,
        score,
        summary,
    }
}
