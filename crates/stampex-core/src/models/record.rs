//! Record and batch models for extracted certificate data.

use serde::{Deserialize, Serialize};

/// Column names for the tabular export, in output order.
pub const FIELD_NAMES: [&str; 8] = [
    "FILENAME",
    "CARA_BAYARAN",
    "NO_ADJUDIKASI",
    "JENIS_SURAT_CARA",
    "TARIKH_SURAT_CARA",
    "BALASAN_RM",
    "PIHAK_PERTAMA",
    "PIHAK_KEDUA",
];

/// Fields extracted from one stamp certificate document.
///
/// The filename is always present; every other field is `None` when its
/// recognizer found no usable value. "Matched but empty" collapses to
/// `None` as well, so consumers never see an empty-vs-missing split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Source document identifier.
    pub filename: String,

    /// Payment method (Cara Bayaran / Payment Method).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cara_bayaran: Option<String>,

    /// Adjudication number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_adjudikasi: Option<String>,

    /// Instrument type, possibly a Malay+English concatenation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_surat_cara: Option<String>,

    /// Instrument date as it appeared in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarikh_surat_cara: Option<String>,

    /// Consideration amount in RM, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balasan_rm: Option<String>,

    /// First party name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pihak_pertama: Option<String>,

    /// Second party name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pihak_kedua: Option<String>,
}

impl CertificateRecord {
    /// A record with every optional field absent.
    pub fn blank(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            cara_bayaran: None,
            no_adjudikasi: None,
            jenis_surat_cara: None,
            tarikh_surat_cara: None,
            balasan_rm: None,
            pihak_pertama: None,
            pihak_kedua: None,
        }
    }

    /// Cell values in [`FIELD_NAMES`] order, absent fields as empty strings.
    pub fn row(&self) -> [&str; 8] {
        [
            &self.filename,
            self.cara_bayaran.as_deref().unwrap_or(""),
            self.no_adjudikasi.as_deref().unwrap_or(""),
            self.jenis_surat_cara.as_deref().unwrap_or(""),
            self.tarikh_surat_cara.as_deref().unwrap_or(""),
            self.balasan_rm.as_deref().unwrap_or(""),
            self.pihak_pertama.as_deref().unwrap_or(""),
            self.pihak_kedua.as_deref().unwrap_or(""),
        ]
    }

    /// Names of optional fields that were not extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.cara_bayaran.is_none() {
            missing.push("CARA_BAYARAN");
        }
        if self.no_adjudikasi.is_none() {
            missing.push("NO_ADJUDIKASI");
        }
        if self.jenis_surat_cara.is_none() {
            missing.push("JENIS_SURAT_CARA");
        }
        if self.tarikh_surat_cara.is_none() {
            missing.push("TARIKH_SURAT_CARA");
        }
        if self.balasan_rm.is_none() {
            missing.push("BALASAN_RM");
        }
        if self.pihak_pertama.is_none() {
            missing.push("PIHAK_PERTAMA");
        }
        if self.pihak_kedua.is_none() {
            missing.push("PIHAK_KEDUA");
        }
        missing
    }
}

/// A document whose text could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Source document identifier.
    pub filename: String,

    /// Why text extraction failed.
    pub error: String,
}

/// Ordered collection of records for one input container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Batch {
    /// Extracted records, in discovery order.
    pub records: Vec<CertificateRecord>,

    /// Documents that could not be read, in discovery order.
    pub failures: Vec<BatchFailure>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push_record(&mut self, record: CertificateRecord) {
        self.records.push(record);
    }

    pub fn push_failure(&mut self, filename: impl Into<String>, error: impl Into<String>) {
        self.failures.push(BatchFailure {
            filename: filename.into(),
            error: error.into(),
        });
    }
}
