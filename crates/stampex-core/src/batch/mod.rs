//! Batch processing across documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::archive::unpack_pdfs;
use crate::certificate::CertificateParser;
use crate::error::Result;
use crate::models::config::UnreadablePolicy;
use crate::models::record::{Batch, CertificateRecord};
use crate::pdf::{PdfTextExtractor, TextSource};

/// One document queued for extraction.
#[derive(Debug, Clone)]
pub struct InputDocument {
    /// Document identifier, the file name within the batch.
    pub filename: String,
    /// Location on disk.
    pub path: PathBuf,
}

impl InputDocument {
    /// Build an input document from a path, using its file name as the
    /// identifier.
    pub fn from_path(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { filename, path }
    }
}

/// Result of processing a single document.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    /// Document identifier.
    pub filename: String,
    /// Extracted record, absent when the document was unreadable.
    pub record: Option<CertificateRecord>,
    /// Text-extraction error, when the document was unreadable.
    pub error: Option<String>,
}

/// Runs the extraction engine over a set of documents.
///
/// Documents are independent: an unreadable one never aborts the batch,
/// it is folded in according to the configured [`UnreadablePolicy`] and
/// recorded in the batch's failure list either way.
pub struct BatchRunner {
    parser: CertificateParser,
    policy: UnreadablePolicy,
    min_text_length: usize,
}

impl BatchRunner {
    /// Create a runner with the default policy.
    pub fn new() -> Self {
        Self {
            parser: CertificateParser::new(),
            policy: UnreadablePolicy::default(),
            min_text_length: 50,
        }
    }

    /// Set the unreadable-document policy.
    pub fn with_policy(mut self, policy: UnreadablePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the text length below which a document is logged as
    /// suspiciously empty.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Read and parse one document.
    pub fn process_document(&self, document: &InputDocument) -> DocumentResult {
        match read_document_text(&document.path) {
            Ok(text) => {
                if text.len() < self.min_text_length {
                    debug!(
                        "{}: only {} chars of text extracted",
                        document.filename,
                        text.len()
                    );
                }
                let result = self.parser.parse(&document.filename, &text);
                DocumentResult {
                    filename: document.filename.clone(),
                    record: Some(result.record),
                    error: None,
                }
            }
            Err(e) => {
                warn!("Failed to extract text from {}: {}", document.filename, e);
                DocumentResult {
                    filename: document.filename.clone(),
                    record: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Fold one document result into the batch per the policy.
    pub fn absorb(&self, batch: &mut Batch, result: DocumentResult) {
        match (result.record, result.error) {
            (Some(record), _) => batch.push_record(record),
            (None, error) => {
                let error = error.unwrap_or_else(|| "unknown error".to_string());
                if self.policy == UnreadablePolicy::BlankRecord {
                    batch.push_record(CertificateRecord::blank(result.filename.clone()));
                }
                batch.push_failure(result.filename, error);
            }
        }
    }

    /// Process a list of documents into a batch, preserving order.
    pub fn run(&self, documents: &[InputDocument]) -> Batch {
        let mut batch = Batch::new();
        for document in documents {
            let result = self.process_document(document);
            self.absorb(&mut batch, result);
        }
        debug!(
            "Batch complete: {} records, {} failures",
            batch.records.len(),
            batch.failures.len()
        );
        batch
    }

    /// Unpack a ZIP archive and process every PDF inside it.
    pub fn run_archive(&self, zip_path: &Path) -> Result<Batch> {
        let unpacked = unpack_pdfs(zip_path)?;
        Ok(self.run(unpacked.documents()))
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a PDF from disk and linearize its text.
fn read_document_text(path: &Path) -> Result<String> {
    let data = fs::read(path)?;
    let mut extractor = PdfTextExtractor::new();
    extractor.load(&data)?;
    let text = extractor.extract_text()?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreadable_document(dir: &Path, name: &str) -> InputDocument {
        let path = dir.join(name);
        fs::write(&path, b"not a pdf at all").unwrap();
        InputDocument::from_path(path)
    }

    #[test]
    fn test_blank_record_policy_keeps_row_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        let documents = vec![unreadable_document(dir.path(), "broken.pdf")];

        let runner = BatchRunner::new().with_policy(UnreadablePolicy::BlankRecord);
        let batch = runner.run(&documents);

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0], CertificateRecord::blank("broken.pdf"));
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].filename, "broken.pdf");
    }

    #[test]
    fn test_skip_policy_omits_row_but_keeps_failure() {
        let dir = tempfile::tempdir().unwrap();
        let documents = vec![unreadable_document(dir.path(), "broken.pdf")];

        let runner = BatchRunner::new().with_policy(UnreadablePolicy::Skip);
        let batch = runner.run(&documents);

        assert!(batch.records.is_empty());
        assert_eq!(batch.failures.len(), 1);
    }

    #[test]
    fn test_unreadable_document_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let documents = vec![
            unreadable_document(dir.path(), "first.pdf"),
            unreadable_document(dir.path(), "second.pdf"),
        ];

        let batch = BatchRunner::new().run(&documents);

        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.failures.len(), 2);
        assert_eq!(batch.records[0].filename, "first.pdf");
        assert_eq!(batch.records[1].filename, "second.pdf");
    }

    #[test]
    fn test_input_document_from_path() {
        let document = InputDocument::from_path(PathBuf::from("/tmp/batch/cert.pdf"));
        assert_eq!(document.filename, "cert.pdf");
    }
}
