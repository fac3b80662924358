//! CSV export of extracted batches.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::ExportError;
use crate::models::record::{Batch, FIELD_NAMES};

/// Fixed output file name for batch exports.
pub const EXPORT_FILE_NAME: &str = "stamp_extracted_all.csv";

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Write a batch to a CSV file: one header row, one row per record,
/// absent fields as empty cells.
///
/// The batch is borrowed, not consumed, so a failed export can be
/// retried without re-extracting anything.
pub fn write_batch(path: &Path, batch: &Batch) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, batch)?;
    writer.flush()?;
    debug!("Wrote {} records to {}", batch.records.len(), path.display());
    Ok(())
}

/// Serialize a batch to a CSV string.
pub fn batch_to_csv(batch: &Batch) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    write_rows(&mut writer, batch)?;
    let data = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    String::from_utf8(data).map_err(|e| ExportError::Flush(e.to_string()))
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, batch: &Batch) -> Result<()> {
    writer.write_record(FIELD_NAMES)?;
    for record in &batch.records {
        writer.write_record(record.row())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::record::CertificateRecord;

    #[test]
    fn test_header_only_for_empty_batch() {
        let csv = batch_to_csv(&Batch::new()).unwrap();
        assert_eq!(
            csv,
            "FILENAME,CARA_BAYARAN,NO_ADJUDIKASI,JENIS_SURAT_CARA,TARIKH_SURAT_CARA,BALASAN_RM,PIHAK_PERTAMA,PIHAK_KEDUA\n"
        );
    }

    #[test]
    fn test_absent_fields_render_as_empty_cells() {
        let mut batch = Batch::new();
        let mut record = CertificateRecord::blank("cert.pdf");
        record.no_adjudikasi = Some("AB1234".to_string());
        record.balasan_rm = Some("15,000.00".to_string());
        batch.push_record(record);

        let csv = batch_to_csv(&batch).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "cert.pdf,,AB1234,,,\"15,000.00\",,");
    }

    #[test]
    fn test_rows_follow_discovery_order() {
        let mut batch = Batch::new();
        batch.push_record(CertificateRecord::blank("b.pdf"));
        batch.push_record(CertificateRecord::blank("a.pdf"));

        let csv = batch_to_csv(&batch).unwrap();
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows, vec!["b.pdf,,,,,,,", "a.pdf,,,,,,,"]);
    }

    #[test]
    fn test_write_batch_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let mut batch = Batch::new();
        batch.push_record(CertificateRecord::blank("cert.pdf"));
        write_batch(&path, &batch).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("FILENAME,"));
        assert_eq!(written.lines().count(), 2);
    }
}
