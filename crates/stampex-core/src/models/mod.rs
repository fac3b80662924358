//! Data models for records, batches, and configuration.

pub mod config;
pub mod record;

pub use config::{StampexConfig, UnreadablePolicy};
pub use record::{Batch, BatchFailure, CertificateRecord, FIELD_NAMES};
