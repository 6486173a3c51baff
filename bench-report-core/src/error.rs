//! Error types for benchmark result loading

use std::io;
use thiserror::Error;

/// Result type for benchmark result loading
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for benchmark result loading
#[derive(Error, Debug)]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV format error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("missing required column: {0}")]
    MissingColumn(String),
}
