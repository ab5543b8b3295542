pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::platforms::handlers as platforms;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::resume::pdf::MAX_PDF_BYTES;
use crate::state::AppState;

/// Room for multipart boundaries and headers around the PDF itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles
        .route(
            "/api/users/:uid/profile",
            get(profile::handle_get_profile).post(profile::handle_save_profile),
        )
        // Analyses
        .route("/api/users/:uid/analyze", post(analysis::handle_analyze))
        .route(
            "/api/users/:uid/analysis",
            get(analysis::handle_get_analysis).post(analysis::handle_save_analysis),
        )
        .route(
            "/api/users/:uid/analysis/history",
            get(analysis::handle_analysis_history),
        )
        // Resume upload
        .route(
            "/api/resume/parse",
            post(resume::handle_parse_resume)
                .layer(DefaultBodyLimit::max(MAX_PDF_BYTES + MULTIPART_OVERHEAD)),
        )
        // Platforms
        .route(
            "/api/platforms/:platform/:handle",
            get(platforms::handle_fetch_platform),
        )
        // Admin
        .route("/api/admin/users", get(profile::handle_list_users))
        .with_state(state)
}
