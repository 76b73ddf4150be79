//! Accuracy scoring: a flat completeness checklist over a structured record.
//!
//! Every field counts equally and values are never checked for plausibility.

use std::collections::BTreeMap;

use resume_models::{AccuracyMetrics, FieldStatus};
use serde_json::Value;

use crate::models::extraction::RawExtraction;

/// Dotted paths into the record; at most two levels deep.
pub const EXPECTED_FIELDS: [&str; 10] = [
    "full_name",
    "current_designation",
    "contact_info.email",
    "contact_info.phone",
    "contact_info.linkedin_url",
    "address",
    "skills.primary_skills",
    "skills.secondary_skills",
    "total_experience.years",
    "education",
];

pub fn calculate_accuracy(record: &RawExtraction) -> AccuracyMetrics {
    let field_status: BTreeMap<String, FieldStatus> = EXPECTED_FIELDS
        .iter()
        .map(|path| {
            let status = if is_empty_field(resolve(record, path)) {
                FieldStatus::Empty
            } else {
                FieldStatus::Filled
            };
            (path.to_string(), status)
        })
        .collect();

    let total_fields = EXPECTED_FIELDS.len();
    let filled_fields = field_status
        .values()
        .filter(|s| **s == FieldStatus::Filled)
        .count();

    AccuracyMetrics {
        filled_fields,
        empty_fields: total_fields - filled_fields,
        total_fields,
        extraction_rate: round2(filled_fields as f64 / total_fields as f64 * 100.0),
        field_status,
    }
}

fn resolve<'a>(record: &'a RawExtraction, path: &str) -> Option<&'a Value> {
    let parts: Vec<&str> = path.split('.').collect();
    match parts.as_slice() {
        [key] => record.get(key),
        [parent, key] => record.get_nested(parent, key),
        _ => None,
    }
}

/// Absent, null, `""`, `[]`, `{}`, or a list whose every element is falsy.
pub fn is_empty_field(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Array(items)) => items.iter().all(is_falsy),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
