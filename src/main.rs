//! Markline - A line-oriented markdown to HTML converter.
//!
//! This binary provides the CLI interface to the markline-core
//! library: it reads a markdown file, transforms it line by line,
//! and writes the HTML result.

mod cli;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, info, LevelFilter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use markline_core::{convert, MarklineError, Result};

fn main() {
    let cli = match <Cli as ClapParser>::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            // Usage errors exit 1, not clap's default 2 — the exit code
            // only distinguishes success from failure
            let _ = e.print();
            std::process::exit(1);
        }
    };

    setup_logging(&cli.log_level);
    info!("Markline v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    // Check input existence before touching the output path, so a
    // missing input never creates or truncates the output file
    if !cli.input.exists() {
        return Err(MarklineError::MissingInput(cli.input.clone()));
    }

    info!("Processing file: {}", cli.input.display());

    let reader = BufReader::new(File::open(&cli.input)?);
    let writer = BufWriter::new(File::create(&cli.output)?);

    let lines = convert(reader, writer)?;
    debug!("Wrote {} lines to {}", lines, cli.output.display());

    Ok(())
}
