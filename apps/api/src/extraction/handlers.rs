use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use resume_models::{ExtractUrlRequest, ExtractionResponse};
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::ingest::process_document;
use crate::extraction::text::DocumentFormat;
use crate::state::AppState;

/// POST /extract-resume-file/
///
/// Multipart body with one file field. The format is taken from the
/// filename's extension and checked before any text extraction.
pub async fn handle_extract_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    let (format, bytes) = read_upload(multipart).await?;
    let response = process_document(&state, format, bytes).await?;
    Ok(Json(response))
}

/// POST /extract-resume-url/
///
/// Downloads the document at `file_url` and runs the same extraction as an upload.
pub async fn handle_extract_url(
    State(state): State<AppState>,
    Json(request): Json<ExtractUrlRequest>,
) -> Result<Json<ExtractionResponse>, AppError> {
    let url = reqwest::Url::parse(request.file_url.trim())
        .map_err(|e| AppError::Validation(format!("Invalid file_url: {e}")))?;
    let file_name = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string();
    let format = DocumentFormat::from_file_name(&file_name)?;

    let bytes = download(&state.http, url).await?;
    let response = process_document(&state, format, bytes).await?;
    Ok(Json(response))
}

/// Takes the field named `file`, or failing that the first field carrying a filename.
async fn read_upload(mut multipart: Multipart) -> Result<(DocumentFormat, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            if field.name() == Some("file") {
                return Err(AppError::Validation(
                    "Uploaded file has no filename".to_string(),
                ));
            }
            continue;
        };

        let format = DocumentFormat::from_file_name(&file_name)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        debug!(file_name = %file_name, size = bytes.len(), "Received resume upload");
        return Ok((format, bytes));
    }

    Err(AppError::Validation(
        "Missing 'file' field in multipart body".to_string(),
    ))
}

async fn download(http: &reqwest::Client, url: reqwest::Url) -> Result<Bytes, AppError> {
    let response = http
        .get(url.clone())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AppError::Extraction(format!("Download failed for {url}: {e}")))?;

    response
        .bytes()
        .await
        .map_err(|e| AppError::Extraction(format!("Download failed for {url}: {e}")))
}
