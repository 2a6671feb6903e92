//! `canteen-behavior`: what a customer does on each activation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`context`]  | `StepContext<'a>`: read-only clock view shared by all customers |
//! | [`model`]    | `BehaviorModel` trait, `StepOutcome`                            |
//! | [`movement`] | `move_toward` (greedy unit step), `random_walk`                 |
//! | [`canteen`]  | `CanteenBehavior`: the entering → exiting state machine        |
//! | [`noop`]     | `NoopBehavior`: customers that never act                       |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Activation is sequential: each customer reads the grid, possibly moves,
//! and the next customer sees that move within the same tick.  A behaviour
//! model never removes anything itself; it reports
//! [`StepOutcome::Departed`] and the scheduler takes the customer off the
//! grid and out of the store.

pub mod canteen;
pub mod context;
pub mod error;
pub mod model;
pub mod movement;
pub mod noop;


pub use canteen::{BehaviorParams, CanteenBehavior};
pub use context::StepContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::{BehaviorModel, StepOutcome};
pub use noop::NoopBehavior;
