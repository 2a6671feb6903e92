//! Plain data row types written by output backends.

use canteen_agent::CustomerState;
use canteen_sim::{CustomerSnapshot, MetricsSnapshot};

/// Customer counts per lifecycle state at the start of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub tick:           u64,
    /// Time of day in fractional hours.
    pub time:           f64,
    pub formatted_time: String,
    pub entering:       u64,
    pub queuing:        u64,
    pub ordering:       u64,
    pub eating:         u64,
    pub exiting:        u64,
    pub total:          u64,
}

impl From<&MetricsSnapshot> for MetricsRow {
    fn from(m: &MetricsSnapshot) -> Self {
        Self {
            tick:           m.tick.0,
            time:           m.time,
            formatted_time: m.formatted_time.clone(),
            entering:       m.counts.entering as u64,
            queuing:        m.counts.queuing as u64,
            ordering:       m.counts.ordering as u64,
            eating:         m.counts.eating as u64,
            exiting:        m.counts.exiting as u64,
            total:          m.total() as u64,
        }
    }
}

/// One customer's cell and state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerSnapshotRow {
    pub tick:        u64,
    pub customer_id: u32,
    pub x:           i32,
    pub y:           i32,
    pub state:       CustomerState,
}

impl CustomerSnapshotRow {
    pub fn new(tick: u64, snapshot: &CustomerSnapshot) -> Self {
        Self {
            tick,
            customer_id: snapshot.id.0,
            x:           snapshot.position.x,
            y:           snapshot.position.y,
            state:       snapshot.state,
        }
    }
}
