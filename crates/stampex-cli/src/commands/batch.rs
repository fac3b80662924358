//! Batch command - extract fields from many certificates at once.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use stampex_core::models::record::Batch;
use stampex_core::{
    unpack_pdfs, BatchRunner, InputDocument, StampexConfig, UnreadablePolicy,
};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// ZIP archive of certificates, or a glob pattern of PDF files
    #[arg(required = true)]
    input: String,

    /// Output directory for the spreadsheet
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Omit unreadable documents instead of emitting blank rows
    #[arg(long)]
    skip_unreadable: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        StampexConfig::from_file(std::path::Path::new(path))?
    } else {
        StampexConfig::default()
    };

    let policy = if args.skip_unreadable {
        UnreadablePolicy::Skip
    } else {
        config.extraction.on_unreadable
    };
    let runner = BatchRunner::new()
        .with_policy(policy)
        .with_min_text_length(config.pdf.min_text_length);

    // A .zip input is unpacked into a scoped workspace; anything else is
    // treated as a glob of PDF files. The workspace must outlive
    // processing, hence the binding.
    let input_path = PathBuf::from(&args.input);
    let is_zip = input_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"));

    let unpacked;
    let documents: Vec<InputDocument> = if is_zip {
        unpacked = unpack_pdfs(&input_path)?;
        unpacked.documents().to_vec()
    } else {
        glob(&args.input)?
            .filter_map(|r| r.ok())
            .filter(|p| {
                let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
                ext.eq_ignore_ascii_case("pdf")
            })
            .map(InputDocument::from_path)
            .collect()
    };

    if documents.is_empty() {
        anyhow::bail!("No PDF documents found in input: {}", args.input);
    }

    println!(
        "{} Found {} certificates to process",
        style("ℹ").blue(),
        documents.len()
    );

    // Set up progress bar
    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut batch = Batch::new();
    for document in &documents {
        let result = runner.process_document(document);
        runner.absorb(&mut batch, result);
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    // Write the spreadsheet
    let output_dir = args.output_dir.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;
    let output_path = output_dir.join(&config.export.output_name);

    stampex_core::write_batch(&output_path, &batch)?;
    debug!("Wrote spreadsheet to {}", output_path.display());

    // Print summary
    println!();
    println!(
        "{} Processed {} certificates in {:?}",
        style("✓").green(),
        documents.len(),
        start.elapsed()
    );
    println!(
        "   {} rows exported to {}, {} unreadable",
        style(batch.records.len()).green(),
        output_path.display(),
        style(batch.failures.len()).red()
    );

    if !batch.failures.is_empty() {
        println!();
        println!("{}", style("Unreadable documents:").red());
        for failure in &batch.failures {
            println!("  - {}: {}", failure.filename, failure.error);
        }
    }

    Ok(())
}
