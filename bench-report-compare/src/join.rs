//! Inner join of two benchmark runs with derived improvement columns

use std::collections::HashMap;

use bench_report_core::{ConfigKey, RunRecord};
use tracing::debug;

/// One matched configuration with timings from both runs
///
/// Positive improvement percentages mean the optimized run was faster.
/// A zero baseline timing yields a non-finite percentage; the value is
/// carried through and formatted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Number of processes
    pub np: u32,

    /// Threads per process
    pub threads: u32,

    /// Baseline mean workload time in milliseconds
    pub workload_base_ms: f64,

    /// Optimized mean workload time in milliseconds
    pub workload_opt_ms: f64,

    /// Relative workload time reduction, percent
    pub improvement_workload_pct: f64,

    /// Baseline mean full-cycle time in milliseconds
    pub cycle_base_ms: f64,

    /// Optimized mean full-cycle time in milliseconds
    pub cycle_opt_ms: f64,

    /// Relative full-cycle time reduction, percent
    pub improvement_total_pct: f64,
}

/// Relative time reduction from `base` to `opt`, as a percentage
pub fn improvement_pct(base: f64, opt: f64) -> f64 {
    (1.0 - opt / base) * 100.0
}

/// Inner-join two runs on (size, np, threads)
///
/// Output rows follow the baseline run's order. Configurations present in
/// only one of the runs are dropped.
pub fn join_runs(baseline: &[RunRecord], optimized: &[RunRecord]) -> Vec<ComparisonRow> {
    let by_key: HashMap<ConfigKey, &RunRecord> =
        optimized.iter().map(|record| (record.key(), record)).collect();

    let rows: Vec<ComparisonRow> = baseline
        .iter()
        .filter_map(|base| {
            by_key.get(&base.key()).map(|opt| ComparisonRow {
                np: base.np,
                threads: base.threads,
                workload_base_ms: base.mean_workload_ms,
                workload_opt_ms: opt.mean_workload_ms,
                improvement_workload_pct: improvement_pct(
                    base.mean_workload_ms,
                    opt.mean_workload_ms,
                ),
                cycle_base_ms: base.mean_cycle_ms,
                cycle_opt_ms: opt.mean_cycle_ms,
                improvement_total_pct: improvement_pct(base.mean_cycle_ms, opt.mean_cycle_ms),
            })
        })
        .collect();

    debug!(
        baseline = baseline.len(),
        optimized = optimized.len(),
        matched = rows.len(),
        "joined benchmark runs"
    );

    rows
}
