//! Fixed-width text rendering of comparison rows

use std::fmt::Write;

use crate::join::ComparisonRow;

/// Printed column order
const HEADERS: [&str; 8] = [
    "np",
    "threads",
    "mean_workload_ms_base",
    "mean_workload_ms_opt",
    "improvement_workload_%",
    "mean_cycle_ms_base",
    "mean_cycle_ms_opt",
    "improvement_total_%",
];

fn cells(row: &ComparisonRow) -> [String; 8] {
    [
        row.np.to_string(),
        row.threads.to_string(),
        format!("{:.2}", row.workload_base_ms),
        format!("{:.2}", row.workload_opt_ms),
        format!("{:.2}", row.improvement_workload_pct),
        format!("{:.2}", row.cycle_base_ms),
        format!("{:.2}", row.cycle_opt_ms),
        format!("{:.2}", row.improvement_total_pct),
    ]
}

/// Render rows as a fixed-width table with a header line and no row index
///
/// Columns are right-aligned and separated by a single space; every float
/// is formatted to two decimals. Each line including the last ends with a
/// newline.
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let formatted: Vec<[String; 8]> = rows.iter().map(cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &formatted {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, (header, width)) in HEADERS.iter().zip(widths.iter().copied()).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{header:>width$}");
    }
    out.push('\n');

    for row in &formatted {
        for (i, (cell, width)) in row.iter().zip(widths.iter().copied()).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{cell:>width$}");
        }
        out.push('\n');
    }

    out
}
