//! The `BehaviorModel` trait: the extension point for customer behaviour.

use canteen_agent::Customer;
use canteen_grid::Grid;

use crate::StepContext;

/// What the scheduler should do with a customer after its activation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Still in the canteen.
    Active,
    /// Reached an exit while leaving; remove it from the grid and the store.
    Departed,
}

/// Pluggable customer behaviour.
///
/// Every random draw must go through `customer.rng` so runs replay exactly
/// from the seed.
///
/// # Example
///
/// ```rust,ignore
/// struct WalkAbout;
///
/// impl BehaviorModel for WalkAbout {
///     fn step(&self, customer: &mut Customer, grid: &mut Grid, _ctx: &StepContext) -> StepOutcome {
///         movement::random_walk(customer, grid);
///         StepOutcome::Active
///     }
/// }
/// ```
pub trait BehaviorModel: 'static {
    /// Called once when a customer is created, before it is placed on the
    /// grid.  Use it to draw per-customer constants.
    ///
    /// Default: does nothing.
    fn on_spawn(&self, _customer: &mut Customer) {}

    /// Called once per live customer per tick, in the scheduler's shuffled
    /// activation order.
    fn step(
        &self,
        customer: &mut Customer,
        grid:     &mut Grid,
        ctx:      &StepContext<'_>,
    ) -> StepOutcome;
}
