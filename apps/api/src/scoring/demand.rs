use serde::{Deserialize, Serialize};

const UNKNOWN_SKILL_DEMAND: u32 = 70;
const TOP_DEMAND_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTrend {
    Rising,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDemand {
    pub skill: &'static str,
    pub demand_score: u32,
    pub trend: DemandTrend,
    pub job_openings: &'static str,
}

const fn demand(
    skill: &'static str,
    demand_score: u32,
    trend: DemandTrend,
    job_openings: &'static str,
) -> SkillDemand {
    SkillDemand {
        skill,
        demand_score,
        trend,
        job_openings,
    }
}

use DemandTrend::{Rising, Stable};

const SKILL_DEMAND: &[SkillDemand] = &[
    demand("React", 95, Rising, "50K+"),
    demand("JavaScript", 98, Stable, "80K+"),
    demand("Python", 96, Rising, "70K+"),
    demand("Java", 92, Stable, "60K+"),
    demand("AWS", 94, Rising, "45K+"),
    demand("Docker", 89, Rising, "35K+"),
    demand("Kubernetes", 87, Rising, "25K+"),
    demand("System Design", 91, Stable, "30K+"),
    demand("Node.js", 88, Stable, "40K+"),
    demand("TypeScript", 90, Rising, "30K+"),
    demand("Angular", 82, Stable, "25K+"),
    demand("Vue.js", 78, Rising, "15K+"),
    demand("MongoDB", 85, Stable, "20K+"),
    demand("PostgreSQL", 83, Stable, "25K+"),
    demand("Redis", 81, Rising, "15K+"),
    demand("GraphQL", 79, Rising, "12K+"),
    demand("Machine Learning", 93, Rising, "35K+"),
    demand("Data Science", 91, Rising, "40K+"),
    demand("TensorFlow", 86, Rising, "18K+"),
    demand("PyTorch", 84, Rising, "15K+"),
    demand("Git", 96, Stable, "100K+"),
    demand("CI/CD", 88, Rising, "30K+"),
    demand("Microservices", 89, Stable, "28K+"),
];

/// First table entry equal to, or contained in, the lowercase skill name.
fn lookup(skill: &str) -> Option<&'static SkillDemand> {
    let normalized = skill.trim().to_lowercase();
    SKILL_DEMAND.iter().find(|d| {
        let key = d.skill.to_lowercase();
        normalized == key || normalized.contains(&key)
    })
}

/// Mean market demand across the skills; unknown skills count as 70 and an
/// empty list scores 0.
pub fn skill_demand_score(skills: &[String]) -> u32 {
    if skills.is_empty() {
        return 0;
    }
    let total: u32 = skills
        .iter()
        .map(|s| lookup(s).map_or(UNKNOWN_SKILL_DEMAND, |d| d.demand_score))
        .sum();
    (f64::from(total) / skills.len() as f64).round() as u32
}

/// The user's skills with the highest market demand, best first.
pub fn top_in_demand(skills: &[String]) -> Vec<SkillDemand> {
    let mut matched: Vec<SkillDemand> = skills.iter().filter_map(|s| lookup(s)).cloned().collect();
    matched.sort_by(|a, b| b.demand_score.cmp(&a.demand_score));
    matched.truncate(TOP_DEMAND_LIMIT);
    matched
}
