// Text extractor trait.
//
// The evaluation pipeline only needs raw text per uploaded file. Keeping the
// extractor behind a trait lets tests feed plain text through the same path
// the PDF extractor uses.

use anyhow::Result;

/// Trait for pulling raw text out of an uploaded document.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of `bytes`.
    ///
    /// An `Err` means the document could not be read at all. Partial failures
    /// (a single unreadable page) should yield empty text for that part rather
    /// than an error.
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}
