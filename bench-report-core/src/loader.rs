//! CSV loading for benchmark result files
//!
//! Both loaders read the whole file into memory: result tables are small
//! (one row per benchmark configuration), so there is no batching or
//! streaming. The file handle is held only for the duration of the load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{RunRecord, Sample};

/// Columns a full benchmark run file must carry
const RUN_COLUMNS: [&str; 5] = [
    "size",
    "np",
    "threads",
    "mean_workload_ms",
    "mean_cycle_ms",
];

/// Columns a single-run result file must carry
const SAMPLE_COLUMNS: [&str; 3] = ["NP", "Threads", "Time"];

/// Verify that every required column is present in the header row
fn check_columns(headers: &StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(Error::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}

/// Deserialize every row of a headered CSV stream, preserving row order
fn read_records<R: Read, T: DeserializeOwned>(reader: R, required: &[&str]) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    check_columns(csv_reader.headers()?, required)?;

    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }

    Ok(records)
}

/// Read benchmark run records from a CSV stream
pub fn read_runs<R: Read>(reader: R) -> Result<Vec<RunRecord>> {
    let records = read_records(reader, &RUN_COLUMNS)?;
    debug!(rows = records.len(), "loaded benchmark run records");
    Ok(records)
}

/// Load benchmark run records from a CSV file
pub fn load_runs<P: AsRef<Path>>(path: P) -> Result<Vec<RunRecord>> {
    let file = File::open(path.as_ref())?;
    read_runs(BufReader::new(file))
}

/// Read timing samples from a CSV stream
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let records = read_records(reader, &SAMPLE_COLUMNS)?;
    debug!(rows = records.len(), "loaded timing samples");
    Ok(records)
}

/// Load timing samples from a CSV file
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let file = File::open(path.as_ref())?;
    read_samples(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn test_read_runs_basic() {
        let csv_data = "\
size,np,threads,mean_workload_ms,mean_cycle_ms
100,1,1,200.0,250.0
100,2,2,120.5,140.25
";

        let records = read_runs(Cursor::new(csv_data)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].size, 100);
        assert_eq!(records[0].np, 1);
        assert_eq!(records[0].threads, 1);
        assert_eq!(records[0].mean_workload_ms, 200.0);
        assert_eq!(records[0].mean_cycle_ms, 250.0);
        assert_eq!(records[1].mean_workload_ms, 120.5);
    }

    #[test]
    fn test_read_runs_ignores_extra_columns() {
        let csv_data = "\
size,np,threads,iterations,mean_workload_ms,mean_cycle_ms
100,1,1,50,200.0,250.0
";

        let records = read_runs(Cursor::new(csv_data)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mean_workload_ms, 200.0);
    }

    #[test]
    fn test_read_runs_missing_column() {
        let csv_data = "\
size,np,threads,mean_workload_ms
100,1,1,200.0
";

        let err = read_runs(Cursor::new(csv_data)).unwrap_err();

        match err {
            Error::MissingColumn(column) => assert_eq!(column, "mean_cycle_ms"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_read_runs_malformed_row() {
        let csv_data = "\
size,np,threads,mean_workload_ms,mean_cycle_ms
100,1,one,200.0,250.0
";

        let err = read_runs(Cursor::new(csv_data)).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_read_samples_basic() {
        let csv_data = "\
NP,Threads,Time
1,1,10.0
1,2,4.0
2,2,2.5
";

        let samples = read_samples(Cursor::new(csv_data)).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].np, 1);
        assert_eq!(samples[0].threads, 1);
        assert_eq!(samples[0].time_s, 10.0);
        assert_eq!(samples[2].label(), "2×2");
    }

    #[test]
    fn test_read_samples_preserves_order() {
        let csv_data = "\
NP,Threads,Time
4,4,1.0
1,1,10.0
2,1,5.0
";

        let samples = read_samples(Cursor::new(csv_data)).unwrap();

        let order: Vec<(u32, u32)> = samples.iter().map(|s| (s.np, s.threads)).collect();
        assert_eq!(order, vec![(4, 4), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_load_runs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseline.csv");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "size,np,threads,mean_workload_ms,mean_cycle_ms").unwrap();
        writeln!(file, "200,4,2,33.3,41.7").unwrap();
        drop(file);

        let records = load_runs(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key().np, 4);
    }

    #[test]
    fn test_load_runs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_runs(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
