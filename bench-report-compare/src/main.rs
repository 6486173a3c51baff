//! Compare a baseline and an optimized benchmark run

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bench_report_compare::{join_runs, render_table};
use bench_report_core::load_runs;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: bench-compare <baseline.csv> <optimized.csv>";

/// Compare two benchmark result files and print percentage improvements
#[derive(Parser)]
#[command(name = "bench-compare")]
#[command(about = "Compare a baseline and an optimized benchmark run")]
struct Cli {
    /// CSV file with the baseline run results
    baseline: PathBuf,

    /// CSV file with the optimized run results
    optimized: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let baseline = load_runs(&cli.baseline)
        .with_context(|| format!("reading {}", cli.baseline.display()))?;
    let optimized = load_runs(&cli.optimized)
        .with_context(|| format!("reading {}", cli.optimized.display()))?;

    let rows = join_runs(&baseline, &optimized);
    print!("{}", render_table(&rows));

    Ok(())
}
