pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::confirmation::handlers::handle_save_full_json;
use crate::extraction::handlers::{handle_extract_file, handle_extract_url};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/extract-resume-file/", post(handle_extract_file))
        .route("/extract-resume-url/", post(handle_extract_url))
        .route("/save-full-json/", post(handle_save_full_json))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
