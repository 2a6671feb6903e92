//! A no-op behavior model: customers never act.

use canteen_agent::Customer;
use canteen_grid::Grid;

use crate::{BehaviorModel, StepContext, StepOutcome};

/// A [`BehaviorModel`] whose customers stand where they were spawned.
///
/// Useful in tests of the scheduler and arrival process, where customer
/// movement would only add noise.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(
        &self,
        _customer: &mut Customer,
        _grid:     &mut Grid,
        _ctx:      &StepContext<'_>,
    ) -> StepOutcome {
        StepOutcome::Active
    }
}
