//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CustomerSnapshotRow, MetricsRow, OutputResult};

/// Trait implemented by output backends such as [`CsvWriter`][crate::CsvWriter].
///
/// The observer never sees these errors directly.  It keeps the first one,
/// retrievable with
/// [`MetricsOutputObserver::take_error`][crate::MetricsOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's metrics row.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Write a batch of per-customer snapshots.
    fn write_customer_snapshots(&mut self, rows: &[CustomerSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
