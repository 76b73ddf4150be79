use std::path::{Path, PathBuf};

use chrono::Local;
use resume_models::{artifact_file_name, CandidateProfile};
use tracing::info;

use crate::errors::IntakeError;

/// Writes the confirmed profile as `{first}_{last}_{YYYYMMDD_HHMMSS}.json` under `dir`.
///
/// Independent of the service-side artifact; nothing is rolled back if this fails.
pub async fn save_local_copy(dir: &Path, profile: &CandidateProfile) -> Result<PathBuf, IntakeError> {
    tokio::fs::create_dir_all(dir).await?;

    let file_name = artifact_file_name(
        &profile.first_name,
        &profile.last_name,
        Local::now().naive_local(),
    );
    let path = dir.join(file_name);
    tokio::fs::write(&path, serde_json::to_vec_pretty(profile)?).await?;

    info!(path = %path.display(), "Saved local profile copy");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_copy_round_trips_profile() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("resumes");
        let profile = CandidateProfile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            primary_skills: "Python, Django".to_string(),
            ..Default::default()
        };

        let path = save_local_copy(&target, &profile).await.unwrap();
        assert!(path.starts_with(&target));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("Jane_Doe_"));

        let saved: CandidateProfile =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(saved, profile);
    }
}
