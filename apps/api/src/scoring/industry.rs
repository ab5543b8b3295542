//! Role-specific guidance: essential skills and recommendations per role,
//! with the role either given by the user or inferred from their skills.

use serde::Serialize;

use crate::scoring::gaps::{lowercase_all, mentions_any};

/// Used when no skill signal points at any role.
pub const FALLBACK_ROLE: &str = "Full Stack Developer";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryProfile {
    pub role: &'static str,
    pub essential_skills: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

const fn profile(
    role: &'static str,
    essential_skills: &'static [&'static str],
    recommendations: &'static [&'static str],
) -> IndustryProfile {
    IndustryProfile {
        role,
        essential_skills,
        recommendations,
    }
}

static INDUSTRY_PROFILES: &[IndustryProfile] = &[
    profile(
        "Frontend Developer",
        &["React", "JavaScript", "CSS", "HTML", "TypeScript"],
        &[
            "Master React hooks and state management (Redux/Context)",
            "Learn CSS Grid and Flexbox deeply",
            "Practice responsive design and mobile-first development",
            "Build a strong portfolio with 3-5 production projects",
            "Contribute to open-source frontend projects",
            "Learn testing frameworks (Jest, React Testing Library)",
            "Master browser DevTools and performance optimization",
            "Study web accessibility (WCAG) standards",
        ],
    ),
    profile(
        "Backend Developer",
        &["Node.js", "Python", "Java", "SQL", "MongoDB"],
        &[
            "Master RESTful API design and GraphQL",
            "Learn database optimization and indexing",
            "Understand microservices architecture",
            "Practice designing scalable systems",
            "Learn authentication & authorization (JWT, OAuth)",
            "Study message queues (RabbitMQ, Kafka)",
            "Master Docker and containerization",
            "Learn caching strategies (Redis)",
        ],
    ),
    profile(
        "Full Stack Developer",
        &["React", "Node.js", "JavaScript", "SQL", "MongoDB"],
        &[
            "Build end-to-end applications (frontend + backend)",
            "Master both client and server-side rendering",
            "Learn deployment strategies (AWS, Heroku)",
            "Practice database design and optimization",
            "Understand security best practices",
            "Learn testing at all levels (unit, integration, e2e)",
            "Master version control and CI/CD pipelines",
            "Study performance optimization techniques",
        ],
    ),
    profile(
        "DevOps Engineer",
        &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux"],
        &[
            "Master Kubernetes orchestration",
            "Deep dive into AWS services (EC2, S3, RDS, Lambda)",
            "Learn Infrastructure as Code (Terraform, CloudFormation)",
            "Master CI/CD pipelines (Jenkins, GitLab CI, GitHub Actions)",
            "Understand monitoring & logging (Prometheus, ELK)",
            "Learn shell scripting and Linux administration",
            "Practice disaster recovery and backup strategies",
            "Study cloud security best practices",
        ],
    ),
    profile(
        "Data Scientist",
        &["Python", "Machine Learning", "SQL", "TensorFlow", "Pandas"],
        &[
            "Master machine learning algorithms (supervised & unsupervised)",
            "Learn deep learning with TensorFlow/PyTorch",
            "Practice feature engineering and data preprocessing",
            "Study statistical analysis and hypothesis testing",
            "Learn data visualization (Matplotlib, Seaborn, Plotly)",
            "Master SQL for complex queries",
            "Practice building end-to-end ML pipelines",
            "Study A/B testing and experimentation",
        ],
    ),
    profile(
        "Product Manager",
        &["Analytics", "Communication", "Problem Solving", "Leadership"],
        &[
            "Learn product metrics and KPIs",
            "Master user research methodologies",
            "Study competitive analysis frameworks",
            "Practice roadmap planning and prioritization",
            "Learn technical fundamentals of your domain",
            "Master stakeholder communication",
            "Study product strategy and positioning",
            "Practice data-driven decision making",
        ],
    ),
    profile(
        "Mobile Developer",
        &["React Native", "Flutter", "Swift", "Kotlin", "JavaScript"],
        &[
            "Master React Native for cross-platform development",
            "Learn native development (Swift for iOS, Kotlin for Android)",
            "Practice mobile UI/UX best practices",
            "Learn mobile app testing and debugging",
            "Master app performance optimization",
            "Study mobile security (encryption, secure storage)",
            "Learn push notifications and background processing",
            "Practice API integration and data persistence",
        ],
    ),
];

/// Roles that can be inferred from skills, in tie-break order. Product
/// Manager is only reachable as an explicit target role.
const DETECTABLE_ROLES: [&str; 6] = [
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Mobile Developer",
];

/// Keyword group and the points it adds to each role.
const ROLE_SIGNALS: &[(&[&str], &[(&str, u32)])] = &[
    (
        &["react", "angular", "vue"],
        &[("Frontend Developer", 2), ("Full Stack Developer", 1)],
    ),
    (
        &["node", "python", "java"],
        &[("Backend Developer", 2), ("Full Stack Developer", 1)],
    ),
    (&["docker", "kubernetes", "aws"], &[("DevOps Engineer", 2)]),
    (
        &["tensorflow", "pandas", "machine learning"],
        &[("Data Scientist", 2)],
    ),
    (
        &["swift", "kotlin", "react native"],
        &[("Mobile Developer", 2)],
    ),
];

pub fn industry_profile(role: &str) -> Option<&'static IndustryProfile> {
    let role = role.trim();
    INDUSTRY_PROFILES
        .iter()
        .find(|p| p.role.eq_ignore_ascii_case(role))
}

/// Points per detectable role, in `DETECTABLE_ROLES` order.
pub fn role_scores(skills: &[String]) -> [(&'static str, u32); 6] {
    let lower = lowercase_all(skills);
    let mut scores = DETECTABLE_ROLES.map(|role| (role, 0));
    for (keywords, awards) in ROLE_SIGNALS {
        if !mentions_any(&lower, keywords) {
            continue;
        }
        for (role, points) in *awards {
            if let Some(entry) = scores.iter_mut().find(|(r, _)| r == role) {
                entry.1 += points;
            }
        }
    }
    scores
}

/// Highest-scoring role; ties go to the earlier role, no signal at all to
/// `FALLBACK_ROLE`.
pub fn detect_role(skills: &[String]) -> &'static str {
    let mut best = (FALLBACK_ROLE, 0);
    for (role, score) in role_scores(skills) {
        if score > best.1 {
            best = (role, score);
        }
    }
    best.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryRecommendations {
    pub role: &'static str,
    /// True when the role was inferred rather than taken from the profile.
    pub detected: bool,
    pub essential_skills: &'static [&'static str],
    /// Essential skills not present in the user's skill list.
    pub missing_skills: Vec<&'static str>,
    pub recommendations: &'static [&'static str],
}

/// Guidance for `target_role` when it names a known role, otherwise for
/// the role detected from `skills`.
pub fn industry_recommendations(
    skills: &[String],
    target_role: Option<&str>,
) -> IndustryRecommendations {
    let (profile, detected) = match target_role.and_then(industry_profile) {
        Some(profile) => (profile, false),
        None => {
            let role = detect_role(skills);
            let profile = industry_profile(role)
                .or_else(|| industry_profile(FALLBACK_ROLE))
                .unwrap_or(&INDUSTRY_PROFILES[2]);
            (profile, true)
        }
    };

    let missing_skills = profile
        .essential_skills
        .iter()
        .copied()
        .filter(|essential| !skills.iter().any(|s| s.eq_ignore_ascii_case(essential)))
        .collect();

    IndustryRecommendations {
        role: profile.role,
        detected,
        essential_skills: profile.essential_skills,
        missing_skills,
        recommendations: profile.recommendations,
    }
}
