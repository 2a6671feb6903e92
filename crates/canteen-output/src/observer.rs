//! `MetricsOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use canteen_agent::EntityStore;
use canteen_core::{SimClock, Tick};
use canteen_sim::{CustomerSnapshot, MetricsSnapshot, SimObserver};

use crate::row::{CustomerSnapshotRow, MetricsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every tick's metrics and, at snapshot
/// intervals, every customer's cell and state to any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct MetricsOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MetricsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for MetricsOutputObserver<W> {
    fn on_metrics(&mut self, metrics: &MetricsSnapshot) {
        let result = self.writer.write_metrics(&MetricsRow::from(metrics));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, clock: &SimClock, store: &EntityStore) {
        let tick = clock.current_tick.0;
        let rows: Vec<CustomerSnapshotRow> = CustomerSnapshot::collect(store)
            .iter()
            .map(|c| CustomerSnapshotRow::new(tick, c))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_customer_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
