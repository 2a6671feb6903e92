//! Per-tick aggregate metrics and per-customer snapshots.
//!
//! The collector only reads simulation state.  Recording a snapshot never
//! touches the grid, the store, or any RNG, so a run replays identically
//! whether or not anyone looks at its metrics.

use canteen_agent::{CustomerState, EntityStore, StateCounts};
use canteen_core::{EntityId, Position, SimClock, Tick};

/// Live customer counts at the start of one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    pub tick:           Tick,
    /// Time of day in fractional hours.
    pub time:           f64,
    /// `HH:MM`.
    pub formatted_time: String,
    pub counts:         StateCounts,
}

impl MetricsSnapshot {
    pub fn capture(clock: &SimClock, store: &EntityStore) -> Self {
        let tick = clock.current_tick;
        Self {
            tick,
            time:           clock.time_at(tick),
            formatted_time: clock.time_string_at(tick),
            counts:         store.count_by_state(),
        }
    }

    /// Total live customers.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.total()
    }
}

/// One customer's position and state at a snapshot tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerSnapshot {
    pub id:       EntityId,
    pub position: Position,
    pub state:    CustomerState,
}

impl CustomerSnapshot {
    /// Every live customer, in ascending id order.
    pub fn collect(store: &EntityStore) -> Vec<CustomerSnapshot> {
        let mut rows: Vec<CustomerSnapshot> = store
            .customers()
            .map(|c| CustomerSnapshot { id: c.id, position: c.position, state: c.state() })
            .collect();
        rows.sort_unstable_by_key(|r| r.id);
        rows
    }
}

/// Append-only, in-order history of [`MetricsSnapshot`]s.
#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    snapshots: Vec<MetricsSnapshot>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture and append a snapshot; returns a reference to it.
    pub fn record(&mut self, clock: &SimClock, store: &EntityStore) -> &MetricsSnapshot {
        self.snapshots.push(MetricsSnapshot::capture(clock, store));
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn snapshots(&self) -> &[MetricsSnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&MetricsSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn into_snapshots(self) -> Vec<MetricsSnapshot> {
        self.snapshots
    }
}
