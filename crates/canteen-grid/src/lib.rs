//! `canteen-grid`: the spatial world model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`layout`]    | `ZoneLayout` (immutable zone coordinates), `ZoneLayoutBuilder`, the default cafeteria scenario |
//! | [`grid`]      | `Grid`: bounds, zone tags, per-cell customer occupancy     |
//! | [`allocator`] | `Allocator`, `SelectionPolicy`: free queue / seat lookup   |
//! | [`error`]     | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod allocator;
pub mod error;
pub mod grid;
pub mod layout;

#[cfg(test)]
mod tests;

pub use allocator::{Allocator, SelectionPolicy, manhattan_distance};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use layout::{CAFETERIA_HEIGHT, CAFETERIA_WIDTH, ZoneLayout, ZoneLayoutBuilder};
