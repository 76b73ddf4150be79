//! Structuring: resume text → `RawExtraction` via the language model.

use serde_json::Value;

use crate::errors::AppError;
use crate::extraction::prompts::RESUME_PARSE_PROMPT;
use crate::llm_client::{strip_json_fences, ChatModel};
use crate::models::extraction::RawExtraction;

pub fn build_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text)
}

/// Model failures and unparseable replies are both `AppError::Structuring`;
/// the caller cannot remediate either differently.
pub async fn structure_resume(
    llm: &dyn ChatModel,
    resume_text: &str,
) -> Result<RawExtraction, AppError> {
    let reply = llm
        .complete_json(&build_prompt(resume_text))
        .await
        .map_err(|e| AppError::Structuring(e.to_string()))?;

    parse_model_reply(&reply)
}

pub fn parse_model_reply(reply: &str) -> Result<RawExtraction, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(reply))
        .map_err(|e| AppError::Structuring(format!("model output is not valid JSON: {e}")))?;

    match value {
        Value::Object(fields) => Ok(RawExtraction::from_model_output(fields)),
        _ => Err(AppError::Structuring(
            "model output is not a JSON object".to_string(),
        )),
    }
}
