//! Error types for the stampex-core library.

use thiserror::Error;

/// Main error type for the stampex library.
#[derive(Error, Debug)]
pub enum StampexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Archive unpacking error.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to archive unpacking.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Failed to open or parse the archive.
    #[error("failed to open archive: {0}")]
    Open(String),

    /// Failed to read or extract one archive entry.
    #[error("failed to extract entry {name}: {reason}")]
    Entry { name: String, reason: String },

    /// Failed to prepare the extraction workspace.
    #[error("failed to prepare extraction workspace: {0}")]
    Workspace(#[source] std::io::Error),
}

/// Errors related to spreadsheet export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to serialize or write CSV data.
    #[error("failed to write spreadsheet: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to flush buffered output.
    #[error("failed to flush spreadsheet: {0}")]
    Flush(String),

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the stampex library.
pub type Result<T> = std::result::Result<T, StampexError>;
