//! Parse command - extract data from a single scan event.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;

use cedula_core::{ocr, wedge, CedulaParser, DocumentRecord};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Raw scan text (reads stdin when omitted and --file is not set)
    raw: Option<String>,

    /// Read the raw scan from a file
    #[arg(short, long, conflicts_with = "raw")]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Strip keyboard-wedge control markers before parsing
    #[arg(short, long)]
    wedge: bool,

    /// Treat the input as OCR text and salvage a bare numeric code
    #[arg(long)]
    ocr: bool,

    /// Print the sanitized text to stderr
    #[arg(long)]
    show_sanitized: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
    /// XML output
    Xml,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let raw = read_input(&args)?;
    let raw = if args.wedge || config.extraction.clean_wedge_buffer {
        wedge::clean_buffer(&raw)
    } else {
        raw
    };

    let record = if args.ocr {
        match ocr::extract_code(&raw) {
            Some(code) => DocumentRecord::simple_code(code),
            None => DocumentRecord::no_match(),
        }
    } else {
        let parser = CedulaParser::from_config(&config)?;
        let outcome = parser.parse_outcome(&raw);
        if args.show_sanitized {
            eprintln!("{} {}", style("sanitized:").dim(), outcome.sanitized);
        }
        outcome.record
    };

    // Format output
    let output = format_record(&record, args.format)?;

    // Write output
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

    if !record.is_match() {
        anyhow::bail!("no usable data in scan");
    }

    Ok(())
}

fn read_input(args: &ParseArgs) -> anyhow::Result<String> {
    if let Some(raw) = &args.raw {
        return Ok(raw.clone());
    }

    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return Ok(fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

pub(crate) fn format_record(record: &DocumentRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
        OutputFormat::Xml => Ok(quick_xml::se::to_string(record)?),
    }
}

fn format_csv(record: &DocumentRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["kind", "idNumber", "surnames", "givenNames"])?;
    wtr.write_record([
        &record.kind.to_string(),
        &record.id_number,
        &record.surnames,
        &record.given_names,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &DocumentRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Kind:        {}\n", record.kind));
    output.push_str(&format!("Id number:   {}\n", record.id_number));
    output.push_str(&format!("Surnames:    {}\n", record.surnames));
    output.push_str(&format!("Given names: {}\n", record.given_names));

    output
}
