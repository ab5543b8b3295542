//! Recommendation generator.
//!
//! Rules fire in a fixed order (resume bands, skill count, named gaps,
//! experience, projects, coding bands). The output is deduplicated keeping
//! first-seen order and truncated to `MAX_RECOMMENDATIONS`; list position is
//! the only notion of priority.

use crate::scoring::gaps::{lowercase_all, mentions_any};

pub const MAX_RECOMMENDATIONS: usize = 10;
const MIN_SKILLS: usize = 5;
const MIN_PROJECTS: usize = 2;

#[derive(Debug, Clone)]
pub struct RecommendationInput<'a> {
    pub resume_score: u32,
    pub skills: &'a [String],
    /// Experience signal; `None` or zero means unknown and skips the rule.
    pub experience: Option<u32>,
    pub project_count: usize,
    pub coding_score: u32,
}

const NAMED_GAP_RULES: &[(&[&str], &str)] = &[
    (
        &["system", "design"],
        "Learn System Design - critical for senior and mid-level roles",
    ),
    (
        &["docker", "kubernetes", "container"],
        "Learn containerization (Docker/Kubernetes) for modern DevOps practices",
    ),
    (
        &["aws", "gcp", "azure", "cloud"],
        "Get cloud platform certification (AWS, GCP, or Azure)",
    ),
    (
        &["react", "angular", "vue", "frontend"],
        "Build expertise in modern frontend frameworks (React, Angular, Vue)",
    ),
    (
        &["testing", "jest", "unit test"],
        "Learn testing frameworks (Jest, Mocha) - quality code is crucial",
    ),
];

pub fn generate_recommendations(input: &RecommendationInput<'_>) -> Vec<String> {
    let mut recs: Vec<&str> = Vec::new();

    if input.resume_score < 60 {
        recs.push("Enhance resume with quantified achievements and metrics");
        recs.push("Add impact statements to your experience sections");
    } else if input.resume_score < 75 {
        recs.push("Improve impact descriptions with concrete numbers and percentages");
    }

    if input.skills.len() < MIN_SKILLS {
        recs.push("Expand your technical skill set - aim for at least 8-10 key skills");
    }

    let skills_lower = lowercase_all(input.skills);
    for &(keywords, rec) in NAMED_GAP_RULES {
        if !mentions_any(&skills_lower, keywords) {
            recs.push(rec);
        }
    }

    match input.experience.filter(|e| *e > 0) {
        Some(e) if e < 30 => {
            recs.push("Seek more internship/work experience - focus on real-world projects")
        }
        Some(e) if e < 60 => recs.push("Document and highlight your practical project outcomes"),
        _ => {}
    }

    if input.project_count < MIN_PROJECTS {
        recs.push("Build and showcase 2-3 production-ready projects on GitHub");
        recs.push("Create projects that solve real problems to impress recruiters");
    }

    if input.coding_score < 50 {
        recs.push("Start with consistent LeetCode practice (3-5 problems daily)");
        recs.push("Master fundamental data structures and algorithms");
    } else if input.coding_score < 70 {
        recs.push("Solve medium-level coding problems regularly");
        recs.push("Participate in competitive programming contests (Codeforces, CodeChef)");
    }

    dedup_preserving_order(recs)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

fn dedup_preserving_order(recs: Vec<&str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    recs.into_iter()
        .filter(|r| seen.insert(*r))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn input(skills: &[String]) -> RecommendationInput<'_> {
        RecommendationInput {
            resume_score: 80,
            skills,
            experience: None,
            project_count: 3,
            coding_score: 80,
        }
    }

    #[test]
    fn test_empty_profile_hits_skill_rules() {
        let none: Vec<String> = vec![];
        let recs = generate_recommendations(&RecommendationInput {
            resume_score: 0,
            skills: &none,
            experience: None,
            project_count: 0,
            coding_score: 0,
        });
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs.contains(
            &"Expand your technical skill set - aim for at least 8-10 key skills".to_string()
        ));
        // Coding rules come last and are truncated away.
        assert!(!recs.iter().any(|r| r.contains("LeetCode practice")));
        assert_eq!(recs[0], "Enhance resume with quantified achievements and metrics");
    }

    #[test]
    fn test_strong_profile_gets_nothing() {
        let s = skills(&["System Design", "Docker", "AWS", "React", "Testing"]);
        assert!(generate_recommendations(&input(&s)).is_empty());
    }

    #[test]
    fn test_resume_mid_band() {
        let s = skills(&["System Design", "Docker", "AWS", "React", "Testing"]);
        let mut i = input(&s);
        i.resume_score = 70;
        assert_eq!(
            generate_recommendations(&i),
            vec!["Improve impact descriptions with concrete numbers and percentages"]
        );
    }

    #[test]
    fn test_named_gaps_follow_rule_order() {
        let s = skills(&["React", "Jest", "Python", "Go", "Rust"]);
        let recs = generate_recommendations(&input(&s));
        assert_eq!(
            recs,
            vec![
                "Learn System Design - critical for senior and mid-level roles",
                "Learn containerization (Docker/Kubernetes) for modern DevOps practices",
                "Get cloud platform certification (AWS, GCP, or Azure)",
            ]
        );
    }

    #[test]
    fn test_experience_rules() {
        let s = skills(&["System Design", "Docker", "AWS", "React", "Testing"]);
        let mut i = input(&s);
        i.experience = Some(20);
        assert_eq!(
            generate_recommendations(&i),
            vec!["Seek more internship/work experience - focus on real-world projects"]
        );
        i.experience = Some(45);
        assert_eq!(
            generate_recommendations(&i),
            vec!["Document and highlight your practical project outcomes"]
        );
        i.experience = Some(0);
        assert!(generate_recommendations(&i).is_empty());
    }

    #[test]
    fn test_coding_bands() {
        let s = skills(&["System Design", "Docker", "AWS", "React", "Testing"]);
        let mut i = input(&s);
        i.coding_score = 65;
        assert_eq!(
            generate_recommendations(&i),
            vec![
                "Solve medium-level coding problems regularly",
                "Participate in competitive programming contests (Codeforces, CodeChef)",
            ]
        );
        i.coding_score = 10;
        assert_eq!(generate_recommendations(&i).len(), 2);
    }

    #[test]
    fn test_output_has_no_duplicates_and_is_bounded() {
        let s = skills(&["Excel"]);
        for resume_score in [0, 59, 60, 74, 75, 100] {
            for coding_score in [0, 49, 50, 69, 70] {
                for project_count in [0, 1, 2] {
                    let recs = generate_recommendations(&RecommendationInput {
                        resume_score,
                        skills: &s,
                        experience: Some(10),
                        project_count,
                        coding_score,
                    });
                    assert!(recs.len() <= MAX_RECOMMENDATIONS);
                    let unique: std::collections::HashSet<_> = recs.iter().collect();
                    assert_eq!(unique.len(), recs.len());
                }
            }
        }
    }
}
