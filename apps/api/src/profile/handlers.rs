use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::models::user::UserId;
use crate::notify::Notification;
use crate::state::AppState;
use crate::store::UserSummary;

/// POST /api/users/:uid/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(mut profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    let user_id = UserId::parse(&uid)?;
    profile.handles.validate()?;
    profile.updated_at = Utc::now();

    state.store.save_profile(&user_id, &profile).await?;
    state
        .notifier
        .notify(Notification::ProfileSaved { user_id });
    Ok(Json(profile))
}

/// GET /api/users/:uid/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let user_id = UserId::parse(&uid)?;
    state
        .store
        .get_profile(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {user_id}")))
}

/// GET /api/admin/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.store.list_users().await?))
}
