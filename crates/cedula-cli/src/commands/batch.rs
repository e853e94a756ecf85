//! Batch processing command for scan dump files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use cedula_core::{wedge, CedulaParser, DocumentRecord};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (text dumps of raw scan events)
    #[arg(required = true)]
    input: String,

    /// Treat every non-empty line of each file as a separate scan event
    #[arg(long)]
    lines: bool,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each scan
    #[arg(long, value_enum, default_value = "json")]
    format: super::parse::OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Strip keyboard-wedge control markers before parsing
    #[arg(short, long)]
    wedge: bool,

    /// Continue when a scan yields no usable data
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of parsing a single scan event.
struct ScanResult {
    path: PathBuf,
    line: Option<usize>,
    record: DocumentRecord,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;
    let parser = CedulaParser::from_config(&config)?;
    let clean_wedge = args.wedge || config.extraction.clean_wedge_buffer;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "dat" | "raw" | "log")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::new();

    for path in files {
        let content = fs::read_to_string(&path)?;

        let events: Vec<(Option<usize>, &str)> = if args.lines {
            content
                .lines()
                .enumerate()
                .filter(|(_, l)| !l.trim().is_empty())
                .map(|(i, l)| (Some(i + 1), l))
                .collect()
        } else {
            vec![(None, content.as_str())]
        };

        for (line, raw) in events {
            let raw = if clean_wedge {
                wedge::clean_buffer(raw)
            } else {
                raw.to_string()
            };

            let record = parser.parse(&raw);
            if !record.is_match() {
                if args.continue_on_error {
                    warn!("No usable data in {} (line {:?})", path.display(), line);
                } else {
                    anyhow::bail!("No usable data in {}", path.display());
                }
            }

            results.push(ScanResult {
                path: path.clone(),
                line,
                record,
            });
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    // Write per-scan outputs
    if let Some(ref output_dir) = args.output_dir {
        for result in results.iter().filter(|r| r.record.is_match()) {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("scan");
            let name = match result.line {
                Some(line) => format!("{}-{}", stem, line),
                None => stem.to_string(),
            };

            let extension = match args.format {
                super::parse::OutputFormat::Json => "json",
                super::parse::OutputFormat::Csv => "csv",
                super::parse::OutputFormat::Text => "txt",
                super::parse::OutputFormat::Xml => "xml",
            };

            let output_path = output_dir.join(format!("{}.{}", name, extension));
            let content = super::parse::format_record(&result.record, args.format)?;
            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    let matched = results.iter().filter(|r| r.record.is_match()).count();
    let unmatched = results.len() - matched;

    println!();
    println!(
        "{} Parsed {} scan events in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} matched, {} without usable data",
        style(matched).green(),
        style(unmatched).red()
    );

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[ScanResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "line",
        "status",
        "kind",
        "idNumber",
        "surnames",
        "givenNames",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let line = result.line.map(|l| l.to_string()).unwrap_or_default();
        let status = if result.record.is_match() {
            "matched"
        } else {
            "no_match"
        };

        wtr.write_record([
            filename,
            &line,
            status,
            &result.record.kind.to_string(),
            &result.record.id_number,
            &result.record.surnames,
            &result.record.given_names,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
