use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resume_models::{ErrorBody, ErrorDetail};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad file type, missing upload field, malformed request.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The document parsed but yielded no text.
    #[error("Failed to extract text from resume")]
    NoTextFound,

    /// Model invocation failed or its output was not valid JSON.
    #[error("AI processing failed: {0}")]
    Structuring(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Error saving JSON: {0}")]
    Persistence(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_ERROR"),
            AppError::NoTextFound => (StatusCode::INTERNAL_SERVER_ERROR, "NO_TEXT_FOUND"),
            AppError::Structuring(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STRUCTURING_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            other if status.is_server_error() => {
                tracing::error!(code, "{other}");
                other.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
