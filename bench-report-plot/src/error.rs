//! Error types for speedup reporting

use thiserror::Error;

/// Result type for speedup reporting
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for speedup reporting
#[derive(Error, Debug)]
pub enum Error {
    /// Result file loading error
    #[error("load error: {0}")]
    Core(#[from] bench_report_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No NP=1, Threads=1 row to use as the speedup baseline
    #[error("no baseline row (NP=1, Threads=1) in results")]
    MissingBaseline,

    /// Chart rendering error
    #[error("chart error: {0}")]
    Chart(String),
}
