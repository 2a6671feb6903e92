//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `metrics.csv`
//! - `customer_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CustomerSnapshotRow, MetricsRow, OutputResult};

pub const METRICS_HEADER: [&str; 8] = [
    "time", "formatted_time", "entering", "queuing", "ordering", "eating", "exiting", "total",
];

pub const SNAPSHOT_HEADER: [&str; 5] = ["tick", "customer_id", "x", "y", "state"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    metrics:   Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record(METRICS_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("customer_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self {
            metrics,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.time.to_string(),
            row.formatted_time.clone(),
            row.entering.to_string(),
            row.queuing.to_string(),
            row.ordering.to_string(),
            row.eating.to_string(),
            row.exiting.to_string(),
            row.total.to_string(),
        ])?;
        Ok(())
    }

    fn write_customer_snapshots(&mut self, rows: &[CustomerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.customer_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
