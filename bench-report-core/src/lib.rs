//! Shared record types and CSV loading for benchmark reporting tools
//!
//! This crate provides the data model and file loading used by the
//! `bench-compare` and `bench-plot` command-line tools. Result files are
//! comma-separated with a header row and are read fully into memory; the
//! tools then transform and print them in a single pass.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod record;

// Re-export key types for convenience
pub use error::{Error, Result};
pub use loader::{load_runs, load_samples, read_runs, read_samples};
pub use record::{ConfigKey, RunRecord, Sample};
