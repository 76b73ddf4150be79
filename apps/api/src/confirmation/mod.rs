// Confirmation: a reviewed extraction is written to disk once and leaves the store.

pub mod handlers;
pub mod persistence;

use std::path::{Path, PathBuf};

use resume_models::SaveFullJsonRequest;
use tracing::{info, warn};

use crate::confirmation::persistence::write_artifact;
use crate::errors::AppError;
use crate::extraction::store::ExtractionStore;

/// Consumes the stored extraction and writes the confirmed artifact.
///
/// The entry is taken out before writing, so concurrent confirmations of one
/// id produce a single artifact. A failed write puts the entry back with its
/// original expiry.
pub async fn confirm_extraction(
    store: &dyn ExtractionStore,
    save_dir: &Path,
    request: &SaveFullJsonRequest,
) -> Result<PathBuf, AppError> {
    let entry = store
        .take(&request.extraction_id)
        .await
        .ok_or_else(|| AppError::NotFound("Extraction data not found".to_string()))?;

    let written =
        write_artifact(save_dir, &entry.record, &request.first_name, &request.last_name).await;
    match written {
        Ok(path) => {
            info!(
                extraction_id = %request.extraction_id,
                path = %path.display(),
                "Saved confirmed extraction"
            );
            Ok(path)
        }
        Err(e) => {
            warn!(extraction_id = %request.extraction_id, "Save failed, extraction kept for retry");
            store.restore(entry).await;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::store::InMemoryStore;
    use crate::models::extraction::RawExtraction;
    use serde_json::{json, Map};
    use std::time::Duration;

    fn request(id: &str) -> SaveFullJsonRequest {
        SaveFullJsonRequest {
            extraction_id: id.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_confirm_writes_once_and_consumes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryStore::new(Duration::from_secs(60));
        let record = RawExtraction::from_model_output(Map::new());
        let id = record.id();
        store.put(record).await;

        let path = confirm_extraction(&store, dir.path(), &request(&id))
            .await
            .unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path.exists());

        let second = confirm_extraction(&store, dir.path(), &request(&id)).await;
        assert!(matches!(second, Err(AppError::NotFound(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("saved_resumes");
        let store = InMemoryStore::new(Duration::from_secs(60));

        let result = confirm_extraction(&store, &save_dir, &request("never-seen")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(!save_dir.exists());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_entry() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be makes the write fail.
        let blocked = dir.path().join("saved_resumes");
        std::fs::write(&blocked, b"not a directory").unwrap();

        let store = InMemoryStore::new(Duration::from_secs(60));
        let record = RawExtraction::from_model_output(
            json!({"full_name": "Jane Doe"}).as_object().unwrap().clone(),
        );
        let id = record.id();
        store.put(record).await;

        let result = confirm_extraction(&store, &blocked, &request(&id)).await;
        assert!(matches!(result, Err(AppError::Persistence(_))));
        assert!(store.get(&id).await.is_some());
    }
}
