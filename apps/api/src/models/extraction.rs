use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The structuring backend's output, kept as the model returned it apart from
/// education normalization and the two server-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawExtraction {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub extraction_id: Uuid,
    pub processing_date: DateTime<Local>,
}

impl RawExtraction {
    /// Wraps a parsed model object. Any `extraction_id` / `processing_date` the
    /// model emitted is discarded; both are assigned here, exactly once.
    pub fn from_model_output(mut fields: Map<String, Value>) -> Self {
        fields.remove("extraction_id");
        fields.remove("processing_date");

        if let Some(education) = fields.get_mut("education") {
            if education.is_object() {
                *education = Value::Array(vec![education.take()]);
            }
        }

        Self {
            fields,
            extraction_id: Uuid::new_v4(),
            processing_date: Local::now(),
        }
    }

    pub fn id(&self) -> String {
        self.extraction_id.to_string()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// One level of mapping nesting; a missing or non-mapping parent yields `None`.
    pub fn get_nested(&self, parent: &str, key: &str) -> Option<&Value> {
        self.fields.get(parent)?.as_object()?.get(key)
    }
}
