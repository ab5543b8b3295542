//! Resume analyzer: turns raw resume text into a `ResumeAnalysis`.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::resume::{ResumeAnalysis, ResumeScore};
use crate::scoring::skills::extract_skills;

const RESUME_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work",
    "employment",
    "qualification",
    "degree",
    "university",
    "college",
    "project",
];
const CONTACT_KEYWORDS: &[&str] = &["email", "phone", "mobile", "contact"];
const MIN_RESUME_KEYWORDS: usize = 3;
const MIN_RESUME_CHARS: usize = 200;

const PROJECT_KEYWORDS: &[&str] = &["project", "built", "developed", "created", "implemented"];
const PROJECTS_PER_KEYWORD: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResumeRejection {
    #[error("This file does not appear to be a valid resume. Please upload a proper resume document.")]
    NotAResume,

    #[error("The uploaded file appears to be too short to be a complete resume.")]
    TooShort,
}

/// A document passes when it has at least 3 resume section keywords, at
/// least one contact keyword, and 200+ characters.
pub fn validate_resume_text(text: &str) -> Result<(), ResumeRejection> {
    let lower = text.to_lowercase();
    let resume_hits = RESUME_KEYWORDS.iter().filter(|k| lower.contains(*k)).count();
    let contact_hits = CONTACT_KEYWORDS.iter().filter(|k| lower.contains(*k)).count();

    if resume_hits < MIN_RESUME_KEYWORDS || contact_hits < 1 {
        return Err(ResumeRejection::NotAResume);
    }
    if text.chars().count() < MIN_RESUME_CHARS {
        return Err(ResumeRejection::TooShort);
    }
    Ok(())
}

fn experience_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\d+\s*(?:years|months|internship|experience|worked)")
            .expect("experience pattern is a valid regex")
    })
}

fn project_patterns() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        PROJECT_KEYWORDS
            .iter()
            .map(|kw| {
                Regex::new(&format!(r"(?i){kw}[^.\n]*")).expect("project pattern is a valid regex")
            })
            .collect()
    })
}

/// Each "<number> years|months|internship|experience|worked" mention is
/// worth 10, capped at 100.
pub fn experience_signal(text: &str) -> u32 {
    let mentions = experience_pattern().find_iter(text).count() as u32;
    mentions.saturating_mul(10).min(100)
}

/// Phrases starting at a project verb, at most three per verb.
pub fn extract_projects(text: &str) -> Vec<String> {
    project_patterns()
        .iter()
        .flat_map(|re| {
            re.find_iter(text)
                .take(PROJECTS_PER_KEYWORD)
                .map(|m| m.as_str().trim().to_string())
        })
        .collect()
}

/// min(5*skills, 40) + min(experience, 30) + min(10*projects, 30)
pub fn resume_score(skill_count: usize, experience: u32, project_count: usize) -> u32 {
    let skills = (skill_count as u32).saturating_mul(5).min(40);
    let experience = experience.min(30);
    let projects = (project_count as u32).saturating_mul(10).min(30);
    skills + experience + projects
}

pub fn analyze_resume_text(text: &str) -> Result<ResumeAnalysis, ResumeRejection> {
    validate_resume_text(text)?;

    let skills = extract_skills(text);
    let experience = experience_signal(text);
    let projects = extract_projects(text);
    let overall = resume_score(skills.len(), experience, projects.len());

    Ok(ResumeAnalysis {
        skills,
        score: ResumeScore { overall },
        experience: Some(experience),
        projects,
    })
}
