//! Simulation observer trait for progress reporting and data collection.

use canteen_agent::EntityStore;
use canteen_core::{SimClock, Tick};

use crate::MetricsSnapshot;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers get shared references only; they
/// cannot influence the run.
///
/// # Example: hourly progress
///
/// ```rust,ignore
/// struct Hourly;
///
/// impl SimObserver for Hourly {
///     fn on_metrics(&mut self, m: &MetricsSnapshot) {
///         if m.formatted_time.ends_with(":00") {
///             println!("{}: {} inside", m.formatted_time, m.total());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick with the counts taken before anyone moved.
    fn on_metrics(&mut self, _metrics: &MetricsSnapshot) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), with the same pre-move state `on_metrics` saw.
    fn on_snapshot(&mut self, _clock: &SimClock, _store: &EntityStore) {}

    /// Called at the end of each tick, after arrivals.
    ///
    /// `spawned` and `departed` are this tick's customer arrivals and exits.
    fn on_tick_end(&mut self, _tick: Tick, _spawned: usize, _departed: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
