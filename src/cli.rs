//! Command-line interface for Markline.

use clap::Parser;
use std::path::PathBuf;

/// Markline - A line-oriented markdown to HTML converter.
///
/// Converts a constrained markdown subset (headings, list items,
/// bold, emphasis, hash spans, strip spans) into HTML, one output
/// line per input line.
#[derive(Parser, Debug)]
#[command(
    name = "markline",
    version,
    about = "A line-oriented markdown to HTML converter",
    after_help = "Examples:\n  \
                  markline README.md README.html\n  \
                  markline -l debug notes.md notes.html"
)]
pub struct Cli {
    /// Markdown input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// HTML output file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}
