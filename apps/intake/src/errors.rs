use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Please fill all required fields (marked with *): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The extraction service answered with a non-success status.
    #[error("{message} (status {status})")]
    Service { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not allowed in the current step: {0}")]
    InvalidTransition(&'static str),
}

impl IntakeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, IntakeError::Service { status: 404, .. })
    }
}
