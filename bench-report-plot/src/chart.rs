//! Bar chart rendering of benchmark times

use std::fmt::Display;
use std::path::Path;

use bench_report_core::Sample;
use plotters::prelude::*;

use crate::error::{Error, Result};

/// File the `bench-plot` binary writes its chart to
pub const CHART_FILE: &str = "bench_plot.png";

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;

fn chart_error<E: Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}

/// Draw one bar per sample, in input order, to a PNG at `path`
///
/// Bars are labeled `"{NP}×{Threads}"` on the x axis; the y axis is the
/// raw time in seconds. An existing file at `path` is overwritten.
pub fn render_chart<P: AsRef<Path>>(samples: &[Sample], path: P) -> Result<()> {
    let labels: Vec<String> = samples.iter().map(Sample::label).collect();
    let bars = samples.len() as u32;

    let max_time = samples.iter().map(|s| s.time_s).fold(0.0_f64, f64::max);
    let y_max = if max_time > 0.0 { max_time * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(path.as_ref(), (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Benchmark times", ("sans-serif", 24).into_font())
        .margin(12)
        .x_label_area_size(64)
        .y_label_area_size(56)
        .build_cartesian_2d((0u32..bars).into_segmented(), 0.0..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(samples.len().max(1))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Time (s)")
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(samples.iter().enumerate().map(|(i, s)| {
            let i = i as u32;
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), s.time_s),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;

    Ok(())
}
