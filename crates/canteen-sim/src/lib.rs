//! `canteen-sim`: tick scheduler for the canteen flow simulator.
//!
//! # Tick loop
//!
//! ```text
//! while running:
//!   ① Metrics    : count live customers per state (pre-move).
//!   ② Activate   : shuffle all live entity ids; fixtures are inert,
//!                  customers run BehaviorModel::step; departed customers
//!                  leave the grid and the store immediately.
//!   ③ Clock      : advance one tick.
//!   ④ Stop check : running = false once the clock reaches end_time.
//!   ⑤ Arrivals   : spawn baseline + burst customers on the entry column.
//! ```
//!
//! Everything runs on the calling thread.  Given the same seed, two runs
//! produce identical metrics histories.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use canteen_behavior::{BehaviorParams, CanteenBehavior};
//! use canteen_core::SimConfig;
//! use canteen_grid::{Grid, ZoneLayout};
//! use canteen_sim::{NoopObserver, SimBuilder};
//!
//! let grid = Grid::new(44, 24, ZoneLayout::cafeteria())?;
//! let behavior = CanteenBehavior::new(BehaviorParams::default())?;
//! let mut sim = SimBuilder::new(SimConfig::from_hours(8, 18, 42), grid, behavior).build()?;
//! sim.run(&mut NoopObserver)?;
//! for m in sim.metrics.snapshots() {
//!     println!("{} {}", m.formatted_time, m.total());
//! }
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use arrivals::{ArrivalParams, ArrivalProcess};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{CustomerSnapshot, MetricsCollector, MetricsSnapshot};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
