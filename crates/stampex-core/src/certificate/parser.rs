//! Certificate parser applying the field recognizers.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::record::CertificateRecord;

use super::rules::{
    extract_adjudication_no, extract_consideration, extract_first_party, extract_instrument_date,
    extract_instrument_type, extract_payment_method, extract_second_party,
};

/// Result of certificate extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: CertificateRecord,
    /// Names of fields that could not be extracted.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based certificate parser.
///
/// Stateless; every recognizer runs against the same text and none can
/// affect another, so parsing the same text twice yields the same record.
pub struct CertificateParser;

impl CertificateParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Apply all recognizers to one document's text.
    pub fn parse(&self, filename: &str, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing certificate {} ({} chars)", filename, text.len());

        let record = CertificateRecord {
            filename: filename.to_string(),
            cara_bayaran: extract_payment_method(text),
            no_adjudikasi: extract_adjudication_no(text),
            jenis_surat_cara: extract_instrument_type(text),
            tarikh_surat_cara: extract_instrument_date(text),
            balasan_rm: extract_consideration(text),
            pihak_pertama: extract_first_party(text),
            pihak_kedua: extract_second_party(text),
        };

        let warnings: Vec<String> = record
            .missing_fields()
            .iter()
            .map(|field| format!("could not extract {}", field))
            .collect();

        if !warnings.is_empty() {
            debug!("{}: {} fields missing", filename, warnings.len());
        }

        ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for CertificateParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_payment_and_adjudication() {
        let parser = CertificateParser::new();
        let result = parser.parse("cert.pdf", "Cara Bayaran: Tunai\nAdjudication No. AB1234\n");

        assert_eq!(result.record.filename, "cert.pdf");
        assert_eq!(result.record.cara_bayaran, Some("Tunai".to_string()));
        assert_eq!(result.record.no_adjudikasi, Some("AB1234".to_string()));
        assert_eq!(result.record.jenis_surat_cara, None);
        assert_eq!(result.record.tarikh_surat_cara, None);
        assert_eq!(result.record.balasan_rm, None);
        assert_eq!(result.record.pihak_pertama, None);
        assert_eq!(result.record.pihak_kedua, None);
    }

    #[test]
    fn test_parse_consideration() {
        let parser = CertificateParser::new();
        let result = parser.parse("cert.pdf", "Balasan Consideration RM 15,000.00\n");

        assert_eq!(result.record.balasan_rm, Some("15,000.00".to_string()));
    }

    #[test]
    fn test_parse_parties() {
        let parser = CertificateParser::new();
        let text = "Maklumat Pihak Pertama\nAhmad Bin Ali\nMaklumat Pihak Kedua\nSiti Binti Hassan\n";
        let result = parser.parse("cert.pdf", text);

        assert_eq!(result.record.pihak_pertama, Some("Ahmad Bin Ali".to_string()));
        assert_eq!(result.record.pihak_kedua, Some("Siti Binti Hassan".to_string()));
    }

    #[test]
    fn test_parse_empty_text_yields_blank_record() {
        let parser = CertificateParser::new();
        let result = parser.parse("empty.pdf", "");

        assert_eq!(result.record, CertificateRecord::blank("empty.pdf"));
        assert_eq!(result.warnings.len(), 7);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = CertificateParser::new();
        let text = "Jenis Surat Cara Cek\nType Of Instrument Cheque\nTarikh Surat Cara 01/02/2024";

        let first = parser.parse("cert.pdf", text);
        let second = parser.parse("cert.pdf", text);

        assert_eq!(first.record, second.record);
        assert_eq!(
            first.record.jenis_surat_cara,
            Some("Cek Cheque".to_string())
        );
    }

    #[test]
    fn test_warnings_name_missing_fields() {
        let parser = CertificateParser::new();
        let result = parser.parse("cert.pdf", "Cara Bayaran Tunai");

        assert_eq!(result.warnings.len(), 6);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("NO_ADJUDIKASI")));
    }
}
