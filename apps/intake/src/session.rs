//! Client-side workflow state. Every step is a pure transition on `Session`.

use std::path::PathBuf;

use resume_models::{CandidateProfile, ExtractedInfoView, ExtractionResponse};
use serde_json::Value;

use crate::errors::IntakeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Idle,
    Extracted {
        extraction: ExtractionResponse,
    },
    Decided {
        extraction_id: String,
        decision: Decision,
        defaults: CandidateProfile,
    },
    Submitted {
        service_path: String,
        local_path: Option<PathBuf>,
    },
}

impl Session {
    pub fn extracted(self, extraction: ExtractionResponse) -> Result<Session, IntakeError> {
        match self {
            Session::Idle => Ok(Session::Extracted { extraction }),
            _ => Err(IntakeError::InvalidTransition(
                "an extraction is already in progress",
            )),
        }
    }

    /// Accepting pre-fills the form from the extraction; rejecting leaves it blank.
    /// Either way the extraction id is kept for the final submit.
    pub fn decide(self, decision: Decision) -> Result<Session, IntakeError> {
        match self {
            Session::Extracted { extraction } => {
                let defaults = match decision {
                    Decision::Accepted => form_defaults(&extraction.info),
                    Decision::Rejected => CandidateProfile::default(),
                };
                Ok(Session::Decided {
                    extraction_id: extraction.extraction_id,
                    decision,
                    defaults,
                })
            }
            _ => Err(IntakeError::InvalidTransition("nothing to accept or reject")),
        }
    }

    pub fn submitted(
        self,
        service_path: String,
        local_path: Option<PathBuf>,
    ) -> Result<Session, IntakeError> {
        match self {
            Session::Decided { .. } => Ok(Session::Submitted {
                service_path,
                local_path,
            }),
            _ => Err(IntakeError::InvalidTransition(
                "accept or reject the extraction before submitting",
            )),
        }
    }

    pub fn extraction_id(&self) -> Option<&str> {
        match self {
            Session::Extracted { extraction } => Some(&extraction.extraction_id),
            Session::Decided { extraction_id, .. } => Some(extraction_id),
            _ => None,
        }
    }

    pub fn decision(&self) -> Option<Decision> {
        match self {
            Session::Decided { decision, .. } => Some(*decision),
            _ => None,
        }
    }

    pub fn form_defaults(&self) -> CandidateProfile {
        match self {
            Session::Decided { defaults, .. } => defaults.clone(),
            _ => CandidateProfile::default(),
        }
    }
}

/// Maps the server's view onto the editable form fields.
pub fn form_defaults(view: &ExtractedInfoView) -> CandidateProfile {
    CandidateProfile {
        first_name: view.first_name.clone(),
        last_name: view.last_name.clone(),
        mobile: view.mobile_number.clone(),
        address: view.address.clone(),
        linkedin_url: view.linkedin_url.clone(),
        email: view.email.clone(),
        education: flatten_education(&view.education),
        total_exp: view.total_experience.clone(),
        designation: view.current_designation.clone(),
        primary_skills: view.skills.primary.join(", "),
        secondary_skills: view.skills.secondary.join(", "),
    }
}

/// `"institution: degree"` pairs joined by `", "`.
fn flatten_education(education: &[Value]) -> String {
    education
        .iter()
        .map(|item| match item {
            Value::Object(entry) => {
                let field = |key: &str| entry.get(key).and_then(Value::as_str).unwrap_or_default();
                format!("{}: {}", field("institution"), field("degree"))
            }
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
