use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, AnalysisResult};
use crate::models::profile::CodingHandles;
use crate::models::resume::{ResumeAnalysis, ResumeInput};
use crate::models::stats::{PlatformStats, RatingStats};
use crate::models::user::UserId;
use crate::notify::Notification;
use crate::platforms::fetch_all;
use crate::scoring::pipeline::{run_analysis, PipelineInput};
use crate::scoring::resume::analyze_resume_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: ResumeInput,
    /// Falls back to the handles stored in the user's profile.
    #[serde(default)]
    pub handles: Option<CodingHandles>,
    #[serde(default)]
    pub linkedin_text: Option<String>,
    /// CodeChef has no public API, so its rating is taken as given.
    #[serde(default)]
    pub codechef: Option<RatingStats>,
    #[serde(default)]
    pub target_role: Option<String>,
}

fn resolve_resume(input: ResumeInput) -> Result<ResumeAnalysis, AppError> {
    match input {
        ResumeInput::Parsed(resume) => {
            resume.validate()?;
            Ok(resume)
        }
        ResumeInput::Text { text } => Ok(analyze_resume_text(&text)?),
    }
}

/// POST /api/users/:uid/analyze
/// Runs the whole pipeline: resume, platform fan-out, LinkedIn, scoring,
/// then persists the result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let user_id = UserId::parse(&uid)?;
    let resume = resolve_resume(req.resume)?;

    let profile = state.store.get_profile(&user_id).await?;
    let handles = match req.handles {
        Some(handles) => handles,
        None => profile
            .as_ref()
            .map(|p| p.handles.clone())
            .unwrap_or_default(),
    };
    handles.validate()?;
    if handles.is_empty() && req.codechef.is_none() {
        info!("No coding handles for {user_id}; coding score will be 0");
    }
    let target_role = req
        .target_role
        .or_else(|| profile.and_then(|p| p.target_role));

    let mut fetched = fetch_all(state.platforms.as_ref(), &handles).await;
    if let Some(codechef) = req.codechef {
        fetched.stats.insert(PlatformStats::CodeChef(codechef));
    }
    for (platform, error) in &fetched.failures {
        state.notifier.notify(Notification::PlatformUnavailable {
            user_id: user_id.clone(),
            platform: *platform,
            reason: error.to_string(),
        });
    }

    let output = run_analysis(
        &PipelineInput {
            resume: &resume,
            coding: &fetched.stats,
            linkedin_text: req.linkedin_text.as_deref(),
        },
        &state.weights,
        Utc::now(),
    );

    let record = state.store.save_analysis(&user_id, output.result).await?;
    let previous_score = record.history.first().map(|a| a.final_score);
    info!(
        "Analysis {} for {user_id}: final {} (resume {}, coding {} over {} platforms, linkedin {})",
        record.current.id,
        record.current.final_score,
        record.current.resume_score,
        record.current.coding_score,
        fetched.stats.platform_count(),
        record.current.linkedin_score,
    );
    state.notifier.notify(Notification::AnalysisCompleted {
        user_id,
        final_score: record.current.final_score,
        previous_score,
    });

    let report = AnalysisReport::new(record.current, target_role.as_deref(), previous_score)
        .with_run_details(output.coding, output.linkedin, &fetched.failures);
    Ok(Json(report))
}

/// POST /api/users/:uid/analysis
/// Stores an externally computed result after checking its invariants.
pub async fn handle_save_analysis(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(result): Json<AnalysisResult>,
) -> Result<(StatusCode, Json<AnalysisRecord>), AppError> {
    let user_id = UserId::parse(&uid)?;
    result.validate(&state.weights)?;

    let record = state.store.save_analysis(&user_id, result).await?;
    state.notifier.notify(Notification::AnalysisCompleted {
        user_id,
        final_score: record.current.final_score,
        previous_score: record.history.first().map(|a| a.final_score),
    });
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/users/:uid/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<AnalysisReport>, AppError> {
    let user_id = UserId::parse(&uid)?;
    let record = state
        .store
        .get_analysis(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No analysis for user {user_id}")))?;
    let target_role = state
        .store
        .get_profile(&user_id)
        .await?
        .and_then(|p| p.target_role);

    let previous_score = record.history.first().map(|a| a.final_score);
    Ok(Json(AnalysisReport::new(
        record.current,
        target_role.as_deref(),
        previous_score,
    )))
}

/// GET /api/users/:uid/analysis/history
/// Previous analyses, newest first. Empty when the user has none.
pub async fn handle_analysis_history(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<AnalysisResult>>, AppError> {
    let user_id = UserId::parse(&uid)?;
    let history = state
        .store
        .get_analysis(&user_id)
        .await?
        .map(|r| r.history)
        .unwrap_or_default();
    Ok(Json(history))
}
