//! Movement primitives.
//!
//! Both primitives keep `Customer::position` and the grid's occupancy in
//! step: the position is only written after the grid accepted the move.

use canteen_agent::{Customer, CustomerState};
use canteen_core::Position;
use canteen_grid::Grid;

/// Take one greedy step toward `destination`.
///
/// The step is the per-axis sign of the delta, so it may be diagonal.  It is
/// skipped (the customer stays put) when the target cell is out of bounds or
/// impassable, or, for an eating customer, already holds another customer.
/// No path search happens; a customer blocked by a wall simply retries next
/// tick.
///
/// Returns `true` if the customer moved.
pub fn move_toward(customer: &mut Customer, grid: &mut Grid, destination: Position) -> bool {
    let from = customer.position;
    let next = from.step_toward(destination);
    if next == from || !grid.is_passable(next) {
        return false;
    }
    // Guarantee of this primitive; `CanteenBehavior` never moves an eating customer.
    if customer.state() == CustomerState::Eating && !grid.is_cell_empty(next) {
        return false;
    }
    relocate(customer, grid, next)
}

/// Step to a uniformly chosen neighbour with no customer on it.
///
/// Impassable neighbours are never candidates.  With no free neighbour the
/// customer stays put.  Returns `true` if the customer moved.
pub fn random_walk(customer: &mut Customer, grid: &mut Grid) -> bool {
    let from = customer.position;
    let free: Vec<Position> = grid
        .neighbors(from)
        .filter(|&n| grid.is_passable(n) && grid.is_cell_empty(n))
        .collect();
    match customer.rng.choose(&free) {
        Some(&next) => relocate(customer, grid, next),
        None        => false,
    }
}

fn relocate(customer: &mut Customer, grid: &mut Grid, next: Position) -> bool {
    let moved = grid.move_customer(customer.id, customer.position, next);
    if moved {
        customer.position = next;
    }
    moved
}
