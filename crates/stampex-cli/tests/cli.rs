//! End-to-end tests for the stampex binary.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn stampex() -> Command {
    Command::cargo_bin("stampex").unwrap()
}

fn write_zip_with_unreadable_pdfs(path: &Path) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    writer.start_file("first.pdf", options).unwrap();
    writer.write_all(b"not really a pdf").unwrap();

    writer.start_file("second.pdf", options).unwrap();
    writer.write_all(b"also not a pdf").unwrap();

    writer.finish().unwrap();
}

#[test]
fn config_path_reports_location() {
    stampex()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"));
}

#[test]
fn process_rejects_missing_input() {
    stampex()
        .args(["process", "/nonexistent/cert.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_rejects_missing_archive() {
    stampex()
        .args(["batch", "/nonexistent/batch.zip"])
        .assert()
        .failure();
}

#[test]
fn batch_isolates_unreadable_documents() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("batch.zip");
    write_zip_with_unreadable_pdfs(&zip_path);

    let out_dir = dir.path().join("out");

    stampex()
        .arg("batch")
        .arg(&zip_path)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unreadable documents:"));

    let csv = std::fs::read_to_string(out_dir.join("stamp_extracted_all.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "FILENAME,CARA_BAYARAN,NO_ADJUDIKASI,JENIS_SURAT_CARA,TARIKH_SURAT_CARA,BALASAN_RM,PIHAK_PERTAMA,PIHAK_KEDUA"
    );
    // Blank-record policy keeps one row per document
    assert_eq!(lines.clone().count(), 2);
    assert!(lines.all(|l| l.starts_with("first.pdf") || l.starts_with("second.pdf")));
}

#[test]
fn batch_skip_policy_omits_unreadable_rows() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("batch.zip");
    write_zip_with_unreadable_pdfs(&zip_path);

    let out_dir = dir.path().join("out");

    stampex()
        .arg("batch")
        .arg(&zip_path)
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--skip-unreadable")
        .assert()
        .success();

    let csv = std::fs::read_to_string(out_dir.join("stamp_extracted_all.csv")).unwrap();
    // Header only: both documents were unreadable and skipped
    assert_eq!(csv.lines().count(), 1);
}
