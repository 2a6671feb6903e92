//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CanteenError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::EntityId;

/// The top-level error type for `canteen-core`.
#[derive(Debug, Error)]
pub enum CanteenError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `canteen-core`.
pub type CanteenResult<T> = Result<T, CanteenError>;
