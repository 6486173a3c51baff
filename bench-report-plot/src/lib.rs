//! Speedup reporting for a single benchmark run
//!
//! Computes per-configuration speedups relative to the serial (NP=1,
//! Threads=1) baseline, renders them as a markdown table, and draws a bar
//! chart of the raw times. Used by the `bench-plot` binary.

pub mod chart;
pub mod error;
pub mod speedup;

pub use chart::{render_chart, CHART_FILE};
pub use error::{Error, Result};
pub use speedup::{baseline_time, render_markdown, speedup_rows, SpeedupRow};
