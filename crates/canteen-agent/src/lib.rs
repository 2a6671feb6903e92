//! `canteen-agent`: the things that live on the grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`customer`]  | `Customer`, `CustomerState`, `StateCounts`                |
//! | [`entity`]    | `Entity` (customer / fixture tagged variant), `Fixture`   |
//! | [`store`]     | `EntityStore`: live entities, id allocation, counters    |
//!
//! Static zone fixtures and customers share one `Entity` type with an
//! explicit discriminant.  The scheduler matches on it; nothing here relies
//! on dynamic dispatch.

pub mod customer;
pub mod entity;
pub mod store;

#[cfg(test)]
mod tests;

pub use customer::{Customer, CustomerState, StateCounts};
pub use entity::{Entity, EntityKind, Fixture};
pub use store::EntityStore;
