use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

pub fn readiness_level(final_score: u32) -> ReadinessLevel {
    match final_score {
        s if s >= 80 => ReadinessLevel::Excellent,
        s if s >= 70 => ReadinessLevel::Good,
        s if s >= 60 => ReadinessLevel::Average,
        _ => ReadinessLevel::NeedsImprovement,
    }
}

/// Share of the community the score beats, as a display label.
pub fn community_benchmark(final_score: u32) -> &'static str {
    match final_score {
        s if s >= 90 => "99%",
        s if s >= 85 => "95%",
        s if s >= 80 => "90%",
        s if s >= 75 => "80%",
        s if s >= 70 => "70%",
        s if s >= 65 => "60%",
        s if s >= 60 => "50%",
        _ => "40%",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleBenchmark {
    pub role: &'static str,
    pub average_score: u32,
    pub resume_score: u32,
    pub coding_score: u32,
    pub linkedin_score: u32,
}

const fn role(
    role: &'static str,
    average_score: u32,
    resume_score: u32,
    coding_score: u32,
    linkedin_score: u32,
) -> RoleBenchmark {
    RoleBenchmark {
        role,
        average_score,
        resume_score,
        coding_score,
        linkedin_score,
    }
}

const ROLE_BENCHMARKS: &[RoleBenchmark] = &[
    role("Web Developer", 72, 75, 68, 73),
    role("Data Scientist", 78, 80, 75, 79),
    role("Software Engineer", 75, 77, 72, 76),
    role("Frontend Developer", 70, 73, 67, 70),
    role("Backend Developer", 74, 76, 71, 75),
    role("Full Stack Developer", 76, 78, 73, 77),
    role("DevOps Engineer", 77, 79, 74, 78),
    role("Mobile Developer", 73, 75, 70, 74),
];

pub fn role_benchmark(name: &str) -> Option<&'static RoleBenchmark> {
    let name = name.trim();
    ROLE_BENCHMARKS
        .iter()
        .find(|b| b.role.eq_ignore_ascii_case(name))
}

/// Coarse percentile from the distance to the role average.
pub fn percentile(user_score: u32, average_score: u32) -> u32 {
    let diff = i64::from(user_score) - i64::from(average_score);
    match diff {
        d if d >= 20 => 95,
        d if d >= 15 => 90,
        d if d >= 10 => 80,
        d if d >= 5 => 70,
        d if d >= 0 => 60,
        d if d >= -5 => 50,
        d if d >= -10 => 40,
        d if d >= -15 => 30,
        _ => 20,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub benchmark: RoleBenchmark,
    pub percentile: u32,
    /// Signed distance from the role average.
    pub delta: i64,
}

pub fn compare_to_role(final_score: u32, role_name: &str) -> Option<BenchmarkComparison> {
    role_benchmark(role_name).map(|b| BenchmarkComparison {
        benchmark: b.clone(),
        percentile: percentile(final_score, b.average_score),
        delta: i64::from(final_score) - i64::from(b.average_score),
    })
}
