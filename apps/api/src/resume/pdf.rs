use crate::errors::AppError;

/// Largest accepted upload.
pub const MAX_PDF_BYTES: usize = 5 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Checks size and file signature before any parsing happens.
pub fn check_upload(bytes: &[u8]) -> Result<(), AppError> {
    if bytes.len() > MAX_PDF_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {} bytes; the maximum is {MAX_PDF_BYTES} bytes",
            bytes.len()
        )));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("The uploaded file is empty".to_string()));
    }
    if !is_pdf(bytes) {
        return Err(AppError::Validation(
            "Only PDF files are supported. Please upload your resume as a PDF.".to_string(),
        ));
    }
    Ok(())
}

/// Extracts plain text from a PDF. Parsing is CPU-bound, so it runs on the
/// blocking pool.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, AppError> {
    check_upload(&bytes)?;
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                unreadable("malformed document")
            } else {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
            }
        })?;
    extracted.map_err(|e| unreadable(&e.to_string()))
}

fn unreadable(reason: &str) -> AppError {
    AppError::Validation(format!(
        "Could not read text from the PDF ({reason}). Make sure it is not scanned or password protected."
    ))
}
