//! Record types for benchmark result files

use serde::Deserialize;

/// One measured configuration from a full benchmark run
///
/// Rows come from the harness output CSV, one per (size, np, threads)
/// configuration. Timing fields are mean values over the run's iterations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunRecord {
    /// Problem size of the configuration
    pub size: u64,

    /// Number of processes
    pub np: u32,

    /// Threads per process
    pub threads: u32,

    /// Mean workload time in milliseconds
    pub mean_workload_ms: f64,

    /// Mean full-cycle time in milliseconds
    pub mean_cycle_ms: f64,
}

impl RunRecord {
    /// The composite key identifying this configuration
    pub fn key(&self) -> ConfigKey {
        ConfigKey {
            size: self.size,
            np: self.np,
            threads: self.threads,
        }
    }
}

/// Composite join key for a benchmark configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    /// Problem size
    pub size: u64,

    /// Number of processes
    pub np: u32,

    /// Threads per process
    pub threads: u32,
}

/// One timing sample from a single-run result file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    /// Number of processes
    #[serde(rename = "NP")]
    pub np: u32,

    /// Threads per process
    #[serde(rename = "Threads")]
    pub threads: u32,

    /// Wall-clock time in seconds
    #[serde(rename = "Time")]
    pub time_s: f64,
}

impl Sample {
    /// Configuration label used on chart axes, e.g. `"4×2"`
    pub fn label(&self) -> String {
        format!("{}×{}", self.np, self.threads)
    }
}
