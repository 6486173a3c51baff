//! Speedup computation and markdown rendering

use std::fmt::Write;

use bench_report_core::Sample;
use tracing::debug;

use crate::error::{Error, Result};

/// NP of the serial baseline configuration
const BASELINE_NP: u32 = 1;

/// Threads of the serial baseline configuration
const BASELINE_THREADS: u32 = 1;

/// One configuration with its speedup over the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupRow {
    /// Number of processes
    pub np: u32,

    /// Threads per process
    pub threads: u32,

    /// Wall-clock time in seconds
    pub time_s: f64,

    /// Baseline time divided by this configuration's time
    pub speedup: f64,
}

/// Time of the first NP=1, Threads=1 sample
pub fn baseline_time(samples: &[Sample]) -> Result<f64> {
    samples
        .iter()
        .find(|s| s.np == BASELINE_NP && s.threads == BASELINE_THREADS)
        .map(|s| s.time_s)
        .ok_or(Error::MissingBaseline)
}

/// Compute one speedup row per sample, preserving input order
pub fn speedup_rows(samples: &[Sample]) -> Result<Vec<SpeedupRow>> {
    let base = baseline_time(samples)?;
    debug!(rows = samples.len(), base_time_s = base, "computing speedups");

    Ok(samples
        .iter()
        .map(|s| SpeedupRow {
            np: s.np,
            threads: s.threads,
            time_s: s.time_s,
            speedup: base / s.time_s,
        })
        .collect())
}

/// Render speedup rows as a markdown table, times and speedups to three
/// decimals
pub fn render_markdown(rows: &[SpeedupRow]) -> String {
    let mut out = String::new();
    out.push_str("| NP | Threads | Time (s) | Speedup |\n");
    out.push_str("|----|---------|----------|---------|\n");

    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {:.3} | {:.3} |",
            row.np, row.threads, row.time_s, row.speedup
        );
    }

    out
}
