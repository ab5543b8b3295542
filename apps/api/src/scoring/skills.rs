//! Skill extraction and categorization.
//!
//! Extraction matches free text against `SKILL_DICTIONARY` and returns the
//! canonical names in dictionary order. Matching is case-insensitive and
//! token-bounded, so "Go" does not fire on "good" and "Java" does not fire
//! on "JavaScript".

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const SKILL_DICTIONARY: &[&str] = &[
    // Languages & frameworks
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Svelte",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring Boot",
    "Spring",
    "Hibernate",
    "HTML",
    "CSS",
    // Data stores
    "SQL",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "REST",
    // Tools
    "Git",
    "GitHub",
    "GitLab",
    "Jira",
    "Figma",
    // Cloud & DevOps
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Terraform",
    "Jenkins",
    "CI/CD",
    "DevOps",
    "Cloud Computing",
    // Data science
    "Machine Learning",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    // Fundamentals
    "Data Structures",
    "Algorithms",
    "Dynamic Programming",
    // System design
    "System Design",
    "System Architecture",
    "Microservices",
    "Distributed Systems",
    "Load Balancing",
    "Caching",
    "Database Design",
    "Scalability",
    "API Design",
    // Quality
    "Testing",
    "Jest",
    // Soft skills
    "Leadership",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Project Management",
    "Collaboration",
];

fn skill_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SKILL_DICTIONARY
            .iter()
            .map(|skill| {
                let pattern = format!(
                    r"(?i)(?:^|[^a-z0-9+#]){}(?:$|[^a-z0-9+#])",
                    regex::escape(skill)
                );
                let re = Regex::new(&pattern).expect("skill pattern is a valid regex");
                (*skill, re)
            })
            .collect()
    })
}

/// Returns every dictionary skill mentioned in `text`, deduplicated, in
/// dictionary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    skill_patterns()
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Merges skill lists, dropping case-insensitive duplicates and keeping the
/// first spelling seen.
pub fn merge_skills<'a>(lists: impl IntoIterator<Item = &'a [String]>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut merged = Vec::new();
    for list in lists {
        for skill in list {
            let trimmed = skill.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_lowercase()) {
                merged.push(trimmed.to_string());
            }
        }
    }
    merged
}

// ────────────────────────────────────────────────────────────────────────────
// Categorization
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    DevOps,
    #[serde(rename = "Data Science")]
    DataScience,
    Tools,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::DevOps,
        SkillCategory::DataScience,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
    pub in_demand: bool,
}

use SkillCategory::*;
use SkillLevel::*;

/// Lowercase skill name → (typical level, category, in demand).
const SKILL_TABLE: &[(&str, SkillLevel, SkillCategory, bool)] = &[
    ("react", Intermediate, Frontend, true),
    ("angular", Intermediate, Frontend, true),
    ("vue", Intermediate, Frontend, true),
    ("javascript", Intermediate, Frontend, true),
    ("typescript", Advanced, Frontend, true),
    ("html", Beginner, Frontend, true),
    ("css", Beginner, Frontend, true),
    ("next.js", Advanced, Frontend, true),
    ("svelte", Advanced, Frontend, false),
    ("node.js", Intermediate, Backend, true),
    ("python", Intermediate, Backend, true),
    ("java", Intermediate, Backend, true),
    ("c++", Advanced, Backend, true),
    ("go", Advanced, Backend, true),
    ("rust", Advanced, Backend, true),
    ("django", Intermediate, Backend, true),
    ("flask", Intermediate, Backend, true),
    ("express", Intermediate, Backend, true),
    ("spring", Intermediate, Backend, true),
    ("mysql", Intermediate, Backend, true),
    ("postgresql", Intermediate, Backend, true),
    ("mongodb", Intermediate, Backend, true),
    ("redis", Advanced, Backend, true),
    ("docker", Advanced, DevOps, true),
    ("kubernetes", Advanced, DevOps, true),
    ("aws", Advanced, DevOps, true),
    ("gcp", Advanced, DevOps, true),
    ("azure", Advanced, DevOps, true),
    ("ci/cd", Intermediate, DevOps, true),
    ("jenkins", Intermediate, DevOps, true),
    ("terraform", Advanced, DevOps, true),
    ("machine learning", Advanced, DataScience, true),
    ("tensorflow", Advanced, DataScience, true),
    ("pytorch", Advanced, DataScience, true),
    ("pandas", Intermediate, DataScience, true),
    ("numpy", Intermediate, DataScience, true),
    ("sql", Intermediate, DataScience, true),
    ("git", Intermediate, Tools, true),
    ("github", Intermediate, Tools, true),
    ("gitlab", Intermediate, Tools, true),
    ("jira", Beginner, Tools, true),
    ("figma", Intermediate, Tools, true),
    ("vs code", Beginner, Tools, true),
    ("leadership", Advanced, SoftSkills, true),
    ("communication", Intermediate, SoftSkills, true),
    ("teamwork", Intermediate, SoftSkills, true),
    ("problem solving", Intermediate, SoftSkills, true),
];

/// Looks a skill up in the table; unknown skills default to
/// Intermediate / Tools / in demand.
pub fn categorize_skill(name: &str) -> SkillRecord {
    let key = name.trim().to_lowercase();
    let (level, category, in_demand) = SKILL_TABLE
        .iter()
        .find(|(skill, ..)| *skill == key)
        .map(|(_, level, category, demand)| (*level, *category, *demand))
        .unwrap_or((Intermediate, Tools, true));

    SkillRecord {
        name: name.to_string(),
        level,
        category,
        in_demand,
    }
}

pub fn categorize_skills(skills: &[String]) -> Vec<SkillRecord> {
    skills.iter().map(|s| categorize_skill(s)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: SkillCategory,
    pub skills: Vec<SkillRecord>,
}

/// Groups records by category, keeping every category (possibly empty) in
/// `SkillCategory::ALL` order.
pub fn group_by_category(records: &[SkillRecord]) -> Vec<CategoryGroup> {
    SkillCategory::ALL
        .iter()
        .map(|category| CategoryGroup {
            category: *category,
            skills: records
                .iter()
                .filter(|r| r.category == *category)
                .cloned()
                .collect(),
        })
        .collect()
}
