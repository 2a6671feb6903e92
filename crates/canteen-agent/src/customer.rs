//! One simulated customer and its lifecycle state.

use std::fmt;

use canteen_core::{AgentRng, EntityId, Position};

// ── CustomerState ─────────────────────────────────────────────────────────────

/// Lifecycle phase.  The derived ordering is the lifecycle order; a
/// customer's state never decreases.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CustomerState {
    #[default]
    Entering,
    Queuing,
    Ordering,
    Eating,
    Exiting,
}

impl CustomerState {
    pub const ALL: [CustomerState; 5] = [
        CustomerState::Entering,
        CustomerState::Queuing,
        CustomerState::Ordering,
        CustomerState::Eating,
        CustomerState::Exiting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerState::Entering => "entering",
            CustomerState::Queuing  => "queuing",
            CustomerState::Ordering => "ordering",
            CustomerState::Eating   => "eating",
            CustomerState::Exiting  => "exiting",
        }
    }

    /// Position in [`CustomerState::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CustomerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// A customer: position, lifecycle state, dwell counters, and its own RNG.
///
/// `position` must always match the cell the grid lists the customer on;
/// only the movement helpers in `canteen-behavior` write it.
#[derive(Debug)]
pub struct Customer {
    pub id:            EntityId,
    pub position:      Position,
    state:             CustomerState,
    /// Ticks spent in the current ordering attempt.  Reset each time the
    /// ordering threshold is reached.
    pub steps_queuing: u32,
    /// Ticks spent eating.  Only ever increases.
    pub steps_eating:  u32,
    /// Eating ticks after which the customer leaves.  Drawn once by the
    /// behaviour model at spawn.
    pub eat_threshold: u32,
    pub rng:           AgentRng,
}

impl Customer {
    /// A new customer in `Entering`, seeded from the run seed and its id.
    pub fn new(id: EntityId, position: Position, global_seed: u64) -> Self {
        Self {
            id,
            position,
            state: CustomerState::Entering,
            steps_queuing: 0,
            steps_eating: 0,
            eat_threshold: 0,
            rng: AgentRng::new(global_seed, id),
        }
    }

    #[inline]
    pub fn state(&self) -> CustomerState {
        self.state
    }

    /// Move to `next`.
    ///
    /// # Panics
    /// Panics in debug builds if `next` would move the lifecycle backwards.
    #[inline]
    pub fn transition(&mut self, next: CustomerState) {
        debug_assert!(
            next >= self.state,
            "{} cannot go from {} back to {}",
            self.id,
            self.state,
            next
        );
        self.state = next;
    }

    #[inline]
    pub fn is_exiting(&self) -> bool {
        self.state == CustomerState::Exiting
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Number of live customers in each lifecycle state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub entering: usize,
    pub queuing:  usize,
    pub ordering: usize,
    pub eating:   usize,
    pub exiting:  usize,
}

impl StateCounts {
    /// Tally a stream of states.
    pub fn tally<I: IntoIterator<Item = CustomerState>>(states: I) -> Self {
        let mut counts = Self::default();
        for state in states {
            *counts.get_mut(state) += 1;
        }
        counts
    }

    pub fn get(&self, state: CustomerState) -> usize {
        match state {
            CustomerState::Entering => self.entering,
            CustomerState::Queuing  => self.queuing,
            CustomerState::Ordering => self.ordering,
            CustomerState::Eating   => self.eating,
            CustomerState::Exiting  => self.exiting,
        }
    }

    fn get_mut(&mut self, state: CustomerState) -> &mut usize {
        match state {
            CustomerState::Entering => &mut self.entering,
            CustomerState::Queuing  => &mut self.queuing,
            CustomerState::Ordering => &mut self.ordering,
            CustomerState::Eating   => &mut self.eating,
            CustomerState::Exiting  => &mut self.exiting,
        }
    }

    /// Sum over all states.
    pub fn total(&self) -> usize {
        self.entering + self.queuing + self.ordering + self.eating + self.exiting
    }
}
