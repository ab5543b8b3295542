//! Gap identifier: a required keyword group with no match in the user's
//! skills is a gap. Output follows dictionary order, not severity.

pub const MAX_GAPS: usize = 8;

const GAP_DICTIONARY: &[(&str, &[&str])] = &[
    ("System Design", &["system", "design", "architecture", "scalability"]),
    ("Docker/Kubernetes", &["docker", "kubernetes", "container"]),
    ("AWS/Cloud", &["aws", "gcp", "azure", "cloud"]),
    ("Microservices", &["microservices", "distributed"]),
    ("DevOps", &["devops", "ci/cd", "jenkins", "pipeline"]),
    ("Testing", &["testing", "jest", "unit test", "e2e"]),
    ("API Design", &["api", "rest", "graphql"]),
    ("Database Optimization", &["database", "optimization", "sql"]),
];

/// True when any (already lowercased) skill contains any of the keywords.
pub(crate) fn mentions_any(skills_lower: &[String], keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|kw| skills_lower.iter().any(|skill| skill.contains(kw)))
}

pub(crate) fn lowercase_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

pub fn identify_skill_gaps(skills: &[String]) -> Vec<String> {
    let skills_lower = lowercase_all(skills);
    GAP_DICTIONARY
        .iter()
        .filter(|(_, keywords)| !mentions_any(&skills_lower, keywords))
        .map(|(label, _)| label.to_string())
        .take(MAX_GAPS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skills_report_every_gap_in_order() {
        let gaps = identify_skill_gaps(&[]);
        assert_eq!(
            gaps,
            vec![
                "System Design",
                "Docker/Kubernetes",
                "AWS/Cloud",
                "Microservices",
                "DevOps",
                "Testing",
                "API Design",
                "Database Optimization",
            ]
        );
    }

    #[test]
    fn test_full_stack_without_cloud() {
        let gaps = identify_skill_gaps(&skills(&["React", "Node.js"]));
        assert!(gaps.contains(&"AWS/Cloud".to_string()));
        assert_eq!(gaps.len(), 8);
    }

    #[test]
    fn test_substring_match_closes_gap() {
        let gaps = identify_skill_gaps(&skills(&["PostgreSQL", "REST APIs", "Docker Compose"]));
        assert!(!gaps.contains(&"Database Optimization".to_string()));
        assert!(!gaps.contains(&"API Design".to_string()));
        assert!(!gaps.contains(&"Docker/Kubernetes".to_string()));
        assert!(gaps.contains(&"Testing".to_string()));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let gaps = identify_skill_gaps(&skills(&["AWS", "JEST"]));
        assert!(!gaps.contains(&"AWS/Cloud".to_string()));
        assert!(!gaps.contains(&"Testing".to_string()));
    }

    #[test]
    fn test_identifier_is_idempotent() {
        let input = skills(&["Kubernetes", "GraphQL", "System Design"]);
        let first = identify_skill_gaps(&input);
        let second = identify_skill_gaps(&input);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec!["AWS/Cloud", "Microservices", "DevOps", "Testing", "Database Optimization"]
        );
    }

    #[test]
    fn test_no_gaps_when_everything_covered() {
        let all = skills(&[
            "System Design",
            "Docker",
            "AWS",
            "Microservices",
            "CI/CD",
            "Testing",
            "GraphQL",
            "SQL",
        ]);
        assert!(identify_skill_gaps(&all).is_empty());
    }
}
