use std::sync::Arc;

use crate::config::Config;
use crate::extraction::store::ExtractionStore;
use crate::extraction::text::DocumentReader;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Structuring backend. Default: `OllamaClient`.
    pub llm: Arc<dyn ChatModel>,
    /// Text extraction for uploaded documents. Default: `NativeReader`.
    pub reader: Arc<dyn DocumentReader>,
    pub store: Arc<dyn ExtractionStore>,
    /// Plain HTTP client for URL-based extraction downloads.
    pub http: reqwest::Client,
}
