//! Text extraction: uploaded document bytes → plain text.
//!
//! PDF goes through `pdf-extract`; DOCX is a zip archive whose
//! `word/document.xml` is walked with `quick-xml` for paragraph and run text.

use std::io::{Cursor, Read};
use std::mem;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Recognizes `.pdf` and `.docx` (any case). Anything else is a client error.
    pub fn from_file_name(file_name: &str) -> Result<Self, AppError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(AppError::Validation(
                "Unsupported file format. Only PDF and DOCX are allowed.".to_string(),
            )),
        }
    }
}

/// Turns document bytes into plain text. Implementations may block; callers
/// run them off the async executor via [`extract_text`].
pub trait DocumentReader: Send + Sync {
    fn read_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, AppError>;
}

/// Production reader backed by `pdf-extract` and `zip`.
pub struct NativeReader;

impl DocumentReader for NativeReader {
    fn read_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, AppError> {
        match format {
            DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| AppError::Extraction(format!("PDF text extraction failed: {e}"))),
            DocumentFormat::Docx => docx_text(bytes),
        }
    }
}

/// Runs the reader on the blocking pool and trims the result.
/// A document with no text left after trimming is `NoTextFound`.
pub async fn extract_text(
    reader: Arc<dyn DocumentReader>,
    bytes: Bytes,
    format: DocumentFormat,
) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || reader.read_text(&bytes, format))
        .await
        .map_err(|e| AppError::Extraction(format!("text extraction aborted: {e}")))??;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::NoTextFound);
    }
    Ok(text.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// DOCX
// ────────────────────────────────────────────────────────────────────────────

fn docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx_err = |e: &dyn std::fmt::Display| {
        AppError::Extraction(format!("DOCX text extraction failed: {e}"))
    };

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| docx_err(&e))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| docx_err(&e))?
        .read_to_string(&mut xml)
        .map_err(|e| docx_err(&e))?;

    Ok(paragraph_texts(&xml).map_err(|e| docx_err(&e))?.join("\n"))
}

/// One string per `<w:p>`, tabs and breaks rendered as `\t` / `\n`.
///
/// Paragraphs nested inside text boxes become lines of their own; text of the
/// enclosing paragraph before and after the box is kept on separate lines.
fn paragraph_texts(document_xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(document_xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    // Tab stops inside <w:pPr> are layout, not content.
    let mut in_props = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    if depth > 0 && !current.is_empty() {
                        paragraphs.push(mem::take(&mut current));
                    }
                    depth += 1;
                }
                b"w:pPr" => in_props += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    depth = depth.saturating_sub(1);
                    paragraphs.push(mem::take(&mut current));
                }
                b"w:pPr" => in_props = in_props.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => {
                    if !current.is_empty() {
                        paragraphs.push(mem::take(&mut current));
                    }
                    paragraphs.push(String::new());
                }
                b"w:tab" if depth > 0 && in_props == 0 => current.push('\t'),
                b"w:br" | b"w:cr" if depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
