use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeAnalysis;
use crate::resume::pdf::{check_upload, extract_text};
use crate::scoring::resume::analyze_resume_text;

const FILE_FIELD: &str = "resume";

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

/// POST /api/resume/parse
/// Accepts a multipart upload with the PDF in the `resume` field.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(FILE_FIELD) {
            let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;
            check_upload(&bytes)?;
            upload = Some((file_name, bytes));
        } else {
            // drain unknown fields
            field.bytes().await.map_err(multipart_error)?;
        }
    }

    let (file_name, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing '{FILE_FIELD}' file field"))
    })?;
    info!("Parsing uploaded resume '{file_name}' ({} bytes)", bytes.len());

    let text = extract_text(bytes.to_vec()).await?;
    let analysis = analyze_resume_text(&text)?;
    Ok(Json(analysis))
}
