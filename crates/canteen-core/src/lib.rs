//! `canteen-core`: foundational types for the canteen flow simulator.
//!
//! This crate is a dependency of every other `canteen-*` crate.  It has no
//! `canteen-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`                                            |
//! | [`geo`]         | `Position`, Manhattan distance, greedy unit steps     |
//! | [`zone`]        | `Zone` static cell tag                                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-customer), `SimRng` (run-level)       |
//! | [`error`]       | `CanteenError`, `CanteenResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CanteenError, CanteenResult};
pub use geo::{MOORE_OFFSETS, Position};
pub use ids::EntityId;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
pub use zone::Zone;
