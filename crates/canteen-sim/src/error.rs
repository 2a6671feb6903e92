use canteen_behavior::BehaviorError;
use canteen_core::CanteenError;
use canteen_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CanteenError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
