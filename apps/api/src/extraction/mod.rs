// Extraction workflow: document → text → structured record → metrics → view.
// The record is held in the store until a human confirms it.

pub mod handlers;
pub mod ingest;
pub mod prompts;
pub mod scoring;
pub mod store;
pub mod structuring;
pub mod text;
pub mod view;
