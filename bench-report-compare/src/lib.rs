//! Comparison of two benchmark runs
//!
//! Joins a baseline and an optimized run on their shared configuration key
//! and derives percentage improvements for each matched configuration. The
//! result is printed as a fixed-width text table by the `bench-compare`
//! binary.

pub mod join;
pub mod table;

pub use join::{improvement_pct, join_runs, ComparisonRow};
pub use table::render_table;
