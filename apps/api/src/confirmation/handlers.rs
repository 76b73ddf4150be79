use axum::{extract::State, Json};
use resume_models::{SaveFullJsonRequest, SaveFullJsonResponse};

use crate::confirmation::confirm_extraction;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /save-full-json/
///
/// Persists the stored extraction together with the confirmed name.
/// 404 when the id is unknown, expired, or already confirmed.
pub async fn handle_save_full_json(
    State(state): State<AppState>,
    Json(request): Json<SaveFullJsonRequest>,
) -> Result<Json<SaveFullJsonResponse>, AppError> {
    let path = confirm_extraction(state.store.as_ref(), &state.config.save_dir, &request).await?;

    Ok(Json(SaveFullJsonResponse {
        message: "JSON saved successfully".to_string(),
        filepath: path.display().to_string(),
    }))
}
