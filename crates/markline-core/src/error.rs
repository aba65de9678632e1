//! Error types for markline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for markline operations
#[derive(Error, Debug)]
pub enum MarklineError {
    /// IO error during read or write
    #[error("An error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// Input path does not resolve to an existing file
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),
}

/// Result type alias for markline operations
pub type Result<T> = std::result::Result<T, MarklineError>;
