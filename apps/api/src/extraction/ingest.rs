use bytes::Bytes;
use resume_models::ExtractionResponse;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::scoring::calculate_accuracy;
use crate::extraction::structuring::structure_resume;
use crate::extraction::text::{extract_text, DocumentFormat};
use crate::extraction::view::build_view;
use crate::state::AppState;

/// Runs one document through the whole extraction sequence.
///
/// Nothing is stored unless every step succeeds.
pub async fn process_document(
    state: &AppState,
    format: DocumentFormat,
    bytes: Bytes,
) -> Result<ExtractionResponse, AppError> {
    let document_bytes = bytes.len();
    let text = extract_text(state.reader.clone(), bytes, format).await?;
    let record = structure_resume(state.llm.as_ref(), &text).await?;

    let accuracy_metrics = calculate_accuracy(&record);
    let info = build_view(&record);
    let extraction_id = record.id();

    state.store.put(record).await;

    info!(
        extraction_id = %extraction_id,
        ?format,
        document_bytes,
        text_chars = text.chars().count(),
        extraction_rate = accuracy_metrics.extraction_rate,
        "Stored extraction awaiting confirmation"
    );

    Ok(ExtractionResponse {
        info,
        extraction_id,
        accuracy_metrics,
    })
}
