//! `canteen-output`: simulation output writers for the canteen flow
//! simulator.
//!
//! The CSV backend writes `metrics.csv` and `customer_snapshots.csv` into one
//! directory.  Backends implement [`OutputWriter`] and are driven by
//! [`MetricsOutputObserver`], which implements `canteen_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use canteen_output::{CsvWriter, MetricsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MetricsOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MetricsOutputObserver;
pub use row::{CustomerSnapshotRow, MetricsRow};
pub use writer::OutputWriter;
