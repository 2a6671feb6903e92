//! Grid-subsystem error type.

use thiserror::Error;

use canteen_core::{Position, Zone};

/// Errors produced while building or mutating a [`Grid`][crate::Grid].
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("{zone} cell {pos} lies outside the grid")]
    OutOfBounds { zone: Zone, pos: Position },

    #[error("cell {pos} is tagged both {first} and {second}")]
    ZoneOverlap { pos: Position, first: Zone, second: Zone },

    #[error("entry cell {0} is outside the grid or impassable")]
    EntryNotPassable(Position),

    #[error("layout has no {0} cells")]
    EmptyZone(Zone),

    #[error("cannot place a customer on {0}")]
    NotPassable(Position),
}

pub type GridResult<T> = Result<T, GridError>;
