//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::export::EXPORT_FILE_NAME;

/// Main configuration for the stampex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StampexConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Batch extraction configuration.
    pub extraction: ExtractionConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

impl Default for StampexConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Documents with less extracted text than this are logged as
    /// suspiciously empty. They are still processed.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
        }
    }
}

/// How to represent a document whose text could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreadablePolicy {
    /// Emit a record with every optional field absent.
    BlankRecord,
    /// Omit the record entirely.
    Skip,
}

impl Default for UnreadablePolicy {
    fn default() -> Self {
        Self::BlankRecord
    }
}

/// Batch extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Policy for unreadable documents. The failure is recorded either way.
    pub on_unreadable: UnreadablePolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            on_unreadable: UnreadablePolicy::BlankRecord,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output spreadsheet file name.
    pub output_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl StampexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
