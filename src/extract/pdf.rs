// PDF text extraction via lopdf.
//
// Text is pulled page by page and concatenated in page order. A page whose
// content stream can't be decoded contributes nothing; only a document that
// fails to load at all is an error. Scanned PDFs come back empty, which the
// ranker treats as a valid (zero-scoring) resume.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::debug;

use super::traits::TextExtractor;

/// Extracts text from PDF bytes using lopdf.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Read a PDF from disk and extract its text.
    pub fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        self.extract(&bytes)
            .with_context(|| format!("Failed to extract text from {}", path.display()))
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let doc = Document::load_mem(bytes).context("Not a readable PDF document")?;

        let mut text = String::new();
        for (page_num, _page_id) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    debug!(page = page_num, error = %e, "No extractable text on page");
                }
            }
        }

        Ok(text)
    }
}
