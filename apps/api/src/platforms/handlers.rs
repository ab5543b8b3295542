use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::validate_handle;
use crate::models::stats::{Platform, PlatformStats};
use crate::scoring::coding::platform_stats_score;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub handle: String,
    pub score: u32,
    pub data: PlatformStats,
}

/// GET /api/platforms/:platform/:handle
pub async fn handle_fetch_platform(
    State(state): State<AppState>,
    Path((platform, handle)): Path<(String, String)>,
) -> Result<Json<PlatformStatsResponse>, AppError> {
    let platform: Platform = platform.parse()?;
    validate_handle(platform, &handle)?;
    let data = state.platforms.fetch(platform, &handle).await?;
    let score = platform_stats_score(&data).round() as u32;
    Ok(Json(PlatformStatsResponse {
        handle,
        score,
        data,
    }))
}
