//! Generate a markdown speedup table and a bar chart from benchmark results

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bench_report_core::load_samples;
use bench_report_plot::{render_chart, render_markdown, speedup_rows, CHART_FILE};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Generate a markdown table and a plot from benchmark results.

Usage:
    bench-plot <results.csv>

Output:
    - prints markdown table to stdout
    - saves plot to bench_plot.png";

/// Print per-configuration speedups and render a bar chart
#[derive(Parser)]
#[command(name = "bench-plot")]
#[command(about = "Generate a markdown table and a plot from benchmark results")]
struct Cli {
    /// CSV file with NP, Threads and Time columns
    results: PathBuf,
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
    let samples = load_samples(&cli.results)
        .with_context(|| format!("reading {}", cli.results.display()))?;

    let rows = speedup_rows(&samples)?;
    print!("{}", render_markdown(&rows));

    render_chart(&samples, CHART_FILE)?;
    println!("plot saved to {CHART_FILE}");

    Ok(())
}
