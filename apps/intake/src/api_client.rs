//! HTTP client for the extraction service.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use resume_models::{ErrorBody, ExtractionResponse, SaveFullJsonRequest, SaveFullJsonResponse};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::IntakeError;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uploads a resume to `POST /extract-resume-file/`.
    pub async fn extract_file(&self, path: &Path) -> Result<ExtractionResponse, IntakeError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());

        debug!(file_name = %file_name, size = bytes.len(), "Uploading resume");

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self
            .client
            .post(format!("{}/extract-resume-file/", self.base_url))
            .multipart(form)
            .send()
            .await?;

        decode(response).await
    }

    /// Confirms an extraction with `POST /save-full-json/`.
    pub async fn save_full_json(
        &self,
        request: &SaveFullJsonRequest,
    ) -> Result<SaveFullJsonResponse, IntakeError> {
        let response = self
            .client
            .post(format!("{}/save-full-json/", self.base_url))
            .json(request)
            .send()
            .await?;

        decode(response).await
    }
}

/// Success bodies decode into `T`; failures become `IntakeError::Service`
/// carrying the server's message when it sent one.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, IntakeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    Err(IntakeError::Service {
        status: status.as_u16(),
        message,
    })
}
