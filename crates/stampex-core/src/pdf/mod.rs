//! PDF text extraction module.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for text source implementations.
///
/// A text source turns one document into a single line-delimited string,
/// pages concatenated in reading order. Pages with no extractable text
/// contribute nothing rather than failing the document.
pub trait TextSource {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract text from the entire document, line breaks preserved.
    fn extract_text(&self) -> Result<String>;
}
