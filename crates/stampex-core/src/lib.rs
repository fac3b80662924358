//! Core library for stamp certificate extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - ZIP archive unpacking into a scoped workspace
//! - Bilingual (Malay/English) field recognizers for stamp certificates
//! - Batch processing with per-document failure isolation
//! - CSV export of extracted batches

pub mod archive;
pub mod batch;
pub mod certificate;
pub mod error;
pub mod export;
pub mod models;
pub mod pdf;

pub use archive::{unpack_pdfs, UnpackedArchive};
pub use batch::{BatchRunner, DocumentResult, InputDocument};
pub use certificate::{CertificateParser, ExtractionResult};
pub use error::{Result, StampexError};
pub use export::{batch_to_csv, write_batch, EXPORT_FILE_NAME};
pub use models::config::{StampexConfig, UnreadablePolicy};
pub use models::record::{Batch, BatchFailure, CertificateRecord, FIELD_NAMES};
