//! Resource allocation: which cashier queue or seat a customer heads for.
//!
//! Both lookups share one policy.  The candidate set is every cell of the
//! relevant zone with no customer on it; from that set the default
//! [`SelectionPolicy::RandomOrNearest`] flips a fair coin and either picks
//! uniformly at random or takes the candidate with the smallest Manhattan
//! distance from the caller (first in layout order on ties).  The random half
//! keeps customers from all converging on the single nearest free cell.

use canteen_core::{AgentRng, Position};

use crate::Grid;

/// How a destination is chosen among the free candidates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionPolicy {
    /// 50/50 between a uniform pick and the nearest candidate.
    #[default]
    RandomOrNearest,
    /// Always a uniform pick.
    Random,
    /// Always the nearest candidate.
    Nearest,
}

/// Read-only queue/seat lookups over a [`Grid`].
#[derive(Copy, Clone)]
pub struct Allocator<'g> {
    grid:   &'g Grid,
    policy: SelectionPolicy,
}

impl<'g> Allocator<'g> {
    pub fn new(grid: &'g Grid, policy: SelectionPolicy) -> Self {
        Self { grid, policy }
    }

    /// A cashier-queue cell with no customer on it, or `None` if every queue
    /// cell is taken.
    pub fn find_empty_queue(&self, from: Position, rng: &mut AgentRng) -> Option<Position> {
        let free = self.free_cells(self.grid.layout().cashier_queues());
        self.select(&free, from, rng)
    }

    /// A dining-area cell with no customer on it, or `None` if every seat is
    /// taken.
    pub fn find_empty_seat(&self, from: Position, rng: &mut AgentRng) -> Option<Position> {
        let free = self.free_cells(self.grid.layout().dining_areas());
        self.select(&free, from, rng)
    }

    fn free_cells(&self, cells: &[Position]) -> Vec<Position> {
        cells
            .iter()
            .copied()
            .filter(|&p| self.grid.is_cell_empty(p))
            .collect()
    }

    fn select(&self, free: &[Position], from: Position, rng: &mut AgentRng) -> Option<Position> {
        if free.is_empty() {
            return None;
        }
        let random = match self.policy {
            SelectionPolicy::RandomOrNearest => rng.gen_bool(0.5),
            SelectionPolicy::Random          => true,
            SelectionPolicy::Nearest         => false,
        };
        if random {
            rng.choose(free).copied()
        } else {
            nearest(free, from)
        }
    }
}

/// `|ax - bx| + |ay - by|`.
#[inline]
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.manhattan_distance(b)
}

/// The candidate closest to `from` by Manhattan distance; the earliest one
/// wins ties.
pub fn nearest(candidates: &[Position], from: Position) -> Option<Position> {
    candidates
        .iter()
        .copied()
        .min_by_key(|&p| manhattan_distance(from, p))
}
