// Text extraction from uploaded resume files.

pub mod pdf;
pub mod traits;

pub use pdf::PdfTextExtractor;
pub use traits::TextExtractor;
