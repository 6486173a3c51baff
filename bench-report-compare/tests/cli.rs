//! End-to-end tests for the bench-compare binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bench_compare(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bench-compare"))
        .args(args)
        .output()
        .expect("failed to spawn bench-compare")
}

fn write_run(path: &Path, rows: &[(u64, u32, u32, f64, f64)]) {
    let mut csv = String::from("size,np,threads,mean_workload_ms,mean_cycle_ms\n");
    for (size, np, threads, workload, cycle) in rows {
        csv.push_str(&format!("{size},{np},{threads},{workload},{cycle}\n"));
    }
    fs::write(path, csv).unwrap();
}

#[test]
fn wrong_argument_count_prints_usage_and_exits_nonzero() {
    for args in [&[][..], &["one.csv"][..], &["a.csv", "b.csv", "c.csv"][..]] {
        let output = bench_compare(args);

        assert!(!output.status.success(), "args {args:?} should fail");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage:"), "no usage line for args {args:?}");
    }
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let baseline = dir.path().join("baseline.csv");
    write_run(&baseline, &[(100, 1, 1, 200.0, 250.0)]);

    let output = bench_compare(&[
        baseline.to_str().unwrap(),
        dir.path().join("absent.csv").to_str().unwrap(),
    ]);

    assert!(!output.status.success());
}

#[test]
fn valid_inputs_print_comparison_table() {
    let dir = tempfile::tempdir().unwrap();
    let baseline = dir.path().join("baseline.csv");
    let optimized = dir.path().join("optimized.csv");

    write_run(
        &baseline,
        &[(100, 1, 1, 200.0, 250.0), (100, 2, 2, 110.0, 130.0)],
    );
    write_run(
        &optimized,
        &[(100, 1, 1, 100.0, 125.0), (400, 4, 4, 10.0, 12.0)],
    );

    let output = bench_compare(&[baseline.to_str().unwrap(), optimized.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Header plus the single matched configuration
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("improvement_workload_%"));
    assert!(stdout.contains("50.00"));
}
