//! Three-sprint improvement roadmap keyed off the readiness score.

use serde::Serialize;

use crate::scoring::skills::SkillLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPhase {
    pub title: &'static str,
    pub duration: &'static str,
    pub goals: Vec<String>,
    pub resources: &'static [&'static str],
    pub milestones: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roadmap {
    pub current_level: SkillLevel,
    pub target_level: SkillLevel,
    /// Index into `phases` of the sprint the user should work on now.
    pub current_phase: usize,
    pub phases: Vec<RoadmapPhase>,
}

/// <60 foundation, <75 intermediate, otherwise expert.
pub fn roadmap_phase(final_score: u32) -> usize {
    match final_score {
        0..=59 => 0,
        60..=74 => 1,
        _ => 2,
    }
}

/// <50 Beginner, <70 Intermediate, otherwise Advanced.
pub fn current_level(final_score: u32) -> SkillLevel {
    match final_score {
        0..=49 => SkillLevel::Beginner,
        50..=69 => SkillLevel::Intermediate,
        _ => SkillLevel::Advanced,
    }
}

fn goals(items: &[&str]) -> Vec<String> {
    items.iter().map(|g| g.to_string()).collect()
}

pub fn generate_roadmap(final_score: u32) -> Roadmap {
    let mut foundation_goals = goals(&[
        "Complete core DSA fundamentals",
        "Master 1-2 primary tech stacks",
        "Build 2-3 small projects",
    ]);
    foundation_goals.push(format!("Increase score from {final_score}% to 65%"));

    let phases = vec![
        RoadmapPhase {
            title: "3-Month Sprint: Foundation Building",
            duration: "3 months",
            goals: foundation_goals,
            resources: &[
                "LeetCode 30-day challenge",
                "Udemy courses on chosen tech",
                "YouTube tutorials",
                "GitHub portfolio setup",
            ],
            milestones: &[
                "Month 1: Complete DSA basics",
                "Month 2: 2 projects completed",
                "Month 3: Code 100 LeetCode problems",
            ],
        },
        RoadmapPhase {
            title: "3-Month Sprint: Intermediate Skills",
            duration: "3 months",
            goals: goals(&[
                "Master system design concepts",
                "Build 1 production-ready project",
                "Contribute to 3 open-source projects",
                "Increase score to 75%",
            ]),
            resources: &[
                "System Design Primer",
                "Interview.io mock interviews",
                "GitHub Issues from popular repos",
                "Technical blogs (Medium, Dev.to)",
            ],
            milestones: &[
                "Month 1: System design fundamentals",
                "Month 2: Production project deployed",
                "Month 3: 3 OSS contributions merged",
            ],
        },
        RoadmapPhase {
            title: "3-Month Sprint: Expert Level",
            duration: "3 months",
            goals: goals(&[
                "Master advanced topics (Microservices, Scalability)",
                "Publish technical blog posts",
                "Mentor 2-3 junior developers",
                "Achieve 85%+ readiness score",
            ]),
            resources: &[
                "Research papers on distributed systems",
                "Advanced Udemy courses",
                "Mentorship platforms",
                "Tech conference talks",
            ],
            milestones: &[
                "Month 1: Microservices deep dive",
                "Month 2: 4 blog posts published",
                "Month 3: Mentored 2+ juniors",
            ],
        },
    ];

    Roadmap {
        current_level: current_level(final_score),
        target_level: SkillLevel::Expert,
        current_phase: roadmap_phase(final_score),
        phases,
    }
}
