//! Model client: the single point of entry for structuring-backend calls.
//!
//! Other modules talk to the model only through the `ChatModel` trait, so the
//! backend can be swapped (or stubbed in tests) without touching orchestration.
//!
//! No retry and no backoff: a failed call fails the request that made it.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A language model that answers a single prompt with JSON-formatted text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    format: &'a str,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Ollama `/api/chat` client, non-streaming with `format: "json"`.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout: Option<Duration>) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            format: "json",
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        debug!(
            model = %self.model,
            prompt_tokens = chat.prompt_eval_count.unwrap_or_default(),
            output_tokens = chat.eval_count.unwrap_or_default(),
            "LLM call succeeded"
        );

        chat.message
            .map(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips a ```json ... ``` or ``` ... ``` fence from model output.
/// The language tag is matched case-insensitively; surrounding whitespace is ignored.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };

    let body = body.trim_start();
    let body = match body.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => body[4..].trim_start(),
        _ => body,
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}
