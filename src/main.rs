//! Main entry point for the unahs CLI application.
//!
//! This binary provides a command-line interface for listing and
//! extracting records from HPE Active Health System (.ahs) diagnostic
//! archives.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use unahs::{AhsError, AhsExtractor, AhsRecord, Cli, OutputWriter, read_source};

/// Application entry point.
///
/// Parses command-line arguments, loads the archive into memory, and
/// dispatches to listing or extraction.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The destination directory is derived from the source path, so a
    // path without the .ahs suffix has no usable destination either.
    if !cli.is_ahs() {
        bail!("please specify a .ahs file");
    }

    let buffer: Arc<[u8]> = read_source(Path::new(&cli.source)).await?.into();
    let extractor = AhsExtractor::new(buffer);

    // One linear pass over the archive. Records that fail to parse
    // become report entries; the rest are listed or extracted.
    let mut records = Vec::new();
    let mut failures = Vec::new();
    for outcome in extractor.list_records() {
        match outcome {
            Ok(record) => records.push(record),
            Err(failure) => failures.push(failure),
        }
    }

    // List mode is the default; -l and -v force it even alongside -x.
    if !cli.extract || cli.list || cli.verbose {
        list_records(&records, cli.verbose);
    } else {
        extract_records(&extractor, &records, &cli, &mut failures).await?;
    }

    report_failures(&failures);

    Ok(())
}

/// List records in the archive.
///
/// Supports two output formats:
/// - Simple format (default, `-l`): output names, one per line
/// - Verbose format (`-v`): table with offset, content length, and
///   compression kind, plus a summary line
///
/// # Arguments
///
/// * `records` - Records that parsed cleanly, in buffer order
/// * `verbose` - If true, display the detailed table format
fn list_records(records: &[AhsRecord], verbose: bool) {
    if verbose {
        // Print table header for verbose output
        println!("{:>10}  {:>10}  {:>5}  Name", "Offset", "Length", "Cmpr");
        println!("{}", "-".repeat(60));
    }

    let mut total_length = 0usize;

    for record in records {
        if verbose {
            let compression = if record.is_compressed() { "gzip" } else { "none" };

            println!(
                "{:>#10x}  {:>10}  {:>5}  {}",
                record.offset,
                record.content_len(),
                compression,
                record.output_name()
            );

            total_length += record.content_len();
        } else {
            // Simple format: just the output name
            println!("{}", record.output_name());
        }
    }

    // Print summary line in verbose mode
    if verbose {
        println!("{}", "-".repeat(60));
        println!(
            "{:>10}  {:>10}  {:>5}  {} records",
            "",
            format_size(total_length as u64),
            "",
            records.len()
        );
    }
}

/// Extract all records into the destination directory.
///
/// Extraction is all-or-nothing per record: a decompression failure
/// produces no output for that record and is queued for the run report,
/// while the remaining records still extract. Records with an empty
/// payload produce no output file.
///
/// # Arguments
///
/// * `extractor` - The AHS extractor instance
/// * `records` - Records that parsed cleanly, in buffer order
/// * `cli` - Parsed command-line arguments
/// * `failures` - Run-level failure collection to append to
///
/// # Returns
///
/// Returns `Ok(())` unless the destination itself cannot be written.
async fn extract_records(
    extractor: &AhsExtractor,
    records: &[AhsRecord],
    cli: &Cli,
    failures: &mut Vec<AhsError>,
) -> Result<()> {
    let writer = OutputWriter::new(cli.output_dir());

    let mut written = 0usize;
    let mut skipped_empty = 0usize;

    for record in records {
        let payload = match extractor.extract_to_memory(record) {
            Ok(payload) => payload,
            Err(failure) => {
                failures.push(failure);
                continue;
            }
        };

        // Empty content ranges are inter-record padding artifacts, not
        // meaningful files; they produce no output.
        if payload.is_empty() {
            skipped_empty += 1;
            continue;
        }

        // Display extraction progress
        if !cli.is_quiet() {
            println!("  extracting: {}", record.output_name());
        }

        writer.write(&record.output_name(), &payload).await?;
        written += 1;
    }

    if !cli.is_quiet() {
        let empty_note = if skipped_empty > 0 {
            format!(" ({} empty, skipped)", skipped_empty)
        } else {
            String::new()
        };
        println!(
            "{} records written to {}{}",
            written,
            writer.destination().display(),
            empty_note
        );
    }

    Ok(())
}

/// Print aggregated per-record failures after the pass.
///
/// Failures are reported together at the end of the run rather than
/// interleaved with progress output. They never change the exit status:
/// the only fatal conditions are an unreadable source and a bad
/// extension.
fn report_failures(failures: &[AhsError]) {
    if failures.is_empty() {
        return;
    }

    eprintln!("{} record(s) could not be processed:", failures.len());
    for failure in failures {
        eprintln!("  {}", failure);
    }
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_size(500), "500 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1048576), "1.00 MB");
/// ```
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
