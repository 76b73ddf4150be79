//! Wire shapes shared by the extraction service and the intake client.
//!
//! Everything here crosses the HTTP boundary or lands on disk as JSON, so the
//! serde field names are part of the contract.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timestamp layout used in artifact filenames on both sides.
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// ────────────────────────────────────────────────────────────────────────────
// Extraction result
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Filled,
    Empty,
}

/// Completeness of one structured record against the fixed field checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccuracyMetrics {
    pub filled_fields: usize,
    pub empty_fields: usize,
    pub total_fields: usize,
    /// Percentage 0–100, rounded to two decimals.
    pub extraction_rate: f64,
    pub field_status: BTreeMap<String, FieldStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillsView {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
}

/// Flattened, form-friendly projection of a structured record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractedInfoView {
    pub first_name: String,
    pub last_name: String,
    pub current_designation: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    pub linkedin_url: String,
    pub skills: SkillsView,
    pub total_experience: String,
    /// Passed through as the model returned it, normally `{institution, degree}` objects.
    pub education: Vec<Value>,
}

/// Body of a successful `POST /extract-resume-file/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionResponse {
    #[serde(flatten)]
    pub info: ExtractedInfoView,
    pub extraction_id: String,
    pub accuracy_metrics: AccuracyMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractUrlRequest {
    pub file_url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Confirmation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFullJsonRequest {
    pub extraction_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFullJsonResponse {
    pub message: String,
    pub filepath: String,
}

/// The human-confirmed candidate record kept by the intake client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateProfile {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub address: String,
    pub linkedin_url: String,
    pub email: String,
    pub education: String,
    pub total_exp: String,
    pub designation: String,
    pub primary_skills: String,
    pub secondary_skills: String,
}

impl CandidateProfile {
    /// Labels of required fields that are blank, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Mobile Number", &self.mobile),
            ("Email", &self.email),
            ("Education", &self.education),
            ("Total Experience (years)", &self.total_exp),
            ("Current Designation", &self.designation),
            ("Primary Skills", &self.primary_skills),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Artifact naming
// ────────────────────────────────────────────────────────────────────────────

/// `{first}_{last}_{YYYYMMDD_HHMMSS}.json`. Second granularity is the only
/// collision protection.
pub fn artifact_file_name(first_name: &str, last_name: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}.json",
        sanitize_name_part(first_name),
        sanitize_name_part(last_name),
        at.format(ARTIFACT_TIMESTAMP_FORMAT)
    )
}

/// Keeps a name part inside the target directory.
fn sanitize_name_part(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .replace("..", "_")
}
