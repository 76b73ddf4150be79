use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use resume_models::artifact_file_name;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::extraction::RawExtraction;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationDetails {
    pub first_name: String,
    pub last_name: String,
    pub confirmation_timestamp: DateTime<Local>,
}

/// On-disk shape of a confirmed extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmedArtifact {
    pub original_extraction: RawExtraction,
    pub confirmation_details: ConfirmationDetails,
}

/// Writes `{first}_{last}_{YYYYMMDD_HHMMSS}.json` under `dir`, creating it if needed.
pub async fn write_artifact(
    dir: &Path,
    record: &RawExtraction,
    first_name: &str,
    last_name: &str,
) -> Result<PathBuf, AppError> {
    let now = Local::now();

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Persistence(format!("cannot create {}: {e}", dir.display())))?;

    let artifact = ConfirmedArtifact {
        original_extraction: record.clone(),
        confirmation_details: ConfirmationDetails {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            confirmation_timestamp: now,
        },
    };
    let json = serde_json::to_vec_pretty(&artifact)
        .map_err(|e| AppError::Persistence(e.to_string()))?;

    let path = dir.join(artifact_file_name(first_name, last_name, now.naive_local()));
    tokio::fs::write(&path, json)
        .await
        .map_err(|e| AppError::Persistence(format!("cannot write {}: {e}", path.display())))?;

    Ok(path)
}
