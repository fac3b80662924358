//! Process command - extract fields from a single certificate file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use stampex_core::models::record::{Batch, CertificateRecord};
use stampex_core::pdf::{PdfTextExtractor, TextSource};
use stampex_core::{CertificateParser, StampexConfig};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input certificate PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        StampexConfig::from_file(std::path::Path::new(path))?
    } else {
        StampexConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let filename = args
        .input
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut extractor = PdfTextExtractor::new();
    extractor.load(&data)?;
    let text = extractor.extract_text()?;

    if text.len() < config.pdf.min_text_length {
        warn!(
            "{}: only {} chars of text extracted, fields are likely absent",
            filename,
            text.len()
        );
    }

    let parser = CertificateParser::new();
    let result = parser.parse(&filename, &text);

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing && !result.warnings.is_empty() {
        eprintln!("{}", style("Missing fields:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(record: &CertificateRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut batch = Batch::new();
            batch.push_record(record.clone());
            Ok(stampex_core::batch_to_csv(&batch)?)
        }
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &CertificateRecord) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();

    let mut output = String::new();
    output.push_str(&format!("Filename:          {}\n", record.filename));
    output.push_str(&format!("Cara Bayaran:      {}\n", field(&record.cara_bayaran)));
    output.push_str(&format!("No Adjudikasi:     {}\n", field(&record.no_adjudikasi)));
    output.push_str(&format!("Jenis Surat Cara:  {}\n", field(&record.jenis_surat_cara)));
    output.push_str(&format!("Tarikh Surat Cara: {}\n", field(&record.tarikh_surat_cara)));
    output.push_str(&format!("Balasan (RM):      {}\n", field(&record.balasan_rm)));
    output.push_str(&format!("Pihak Pertama:     {}\n", field(&record.pihak_pertama)));
    output.push_str(&format!("Pihak Kedua:       {}\n", field(&record.pihak_kedua)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_renders_absent_fields_as_dash() {
        let record = CertificateRecord::blank("cert.pdf");
        let text = format_text(&record);

        assert!(text.contains("Filename:          cert.pdf"));
        assert!(text.contains("Cara Bayaran:      -"));
    }

    #[test]
    fn test_format_csv_single_record() {
        let mut record = CertificateRecord::blank("cert.pdf");
        record.cara_bayaran = Some("Tunai".to_string());

        let csv = format_record(&record, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("FILENAME,"));
        assert!(csv.contains("cert.pdf,Tunai"));
    }
}
