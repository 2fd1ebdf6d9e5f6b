//! Validate every agentic coder record and report per-file errors.
//!
//! Exits 0 when every record passes (or the directory holds none) and 1
//! otherwise, so CI can gate on the data set directly.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use coder_schema::{ValidationReport, default_data_dir, validate_directory};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Validate the agentic coder data set against the record schema.
#[derive(Parser, Debug)]
#[command(name = "validate-schemas", version, about)]
struct Cli {
    /// Directory of record files (defaults to data/agentic-coders in the repo).
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("❌ {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let report = validate_directory(&data_dir)?;

    if report.is_empty() {
        eprintln!("⚠️  No JSON files found in {}", data_dir.display());
    }

    match cli.format {
        OutputFormat::Text => print_text(&report)?,
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&report.summary())
                .context("serializing validation report")?;
            println!("{rendered}");
        }
    }

    Ok(report.is_success())
}

fn print_text(report: &ValidationReport) -> Result<()> {
    if report.is_empty() {
        return Ok(());
    }
    let mut output = String::new();
    report
        .render_text(&mut output)
        .context("rendering validation report")?;
    print!("{output}");
    Ok(())
}
