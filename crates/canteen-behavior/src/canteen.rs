//! The canteen customer state machine.
//!
//! | State      | Each tick                                                        | Leaves when                     |
//! |------------|------------------------------------------------------------------|---------------------------------|
//! | `Entering` | outside opening hours: switch to `Exiting`; else head for a free queue cell, or wander if none | standing on the chosen queue cell → `Ordering` |
//! | `Queuing`  | same search as `Entering`, without the hours check               | standing on the chosen queue cell → `Ordering` |
//! | `Ordering` | count a tick; once past a fresh Gaussian draw, head for a free seat, or wander if none | standing on the chosen seat → `Eating` |
//! | `Eating`   | count a tick                                                     | count reaches the per-customer threshold → `Exiting` |
//! | `Exiting`  | head for a random exit cell                                      | standing on any exit cell → departed |
//!
//! Destinations are re-chosen every tick, so a customer can change its mind
//! as cells fill up and free again.

use log::trace;
use rand::Rng;
use rand_distr::Normal;

use canteen_agent::{Customer, CustomerState};
use canteen_core::{Position, Zone};
use canteen_grid::{Allocator, Grid, SelectionPolicy};

use crate::movement::{move_toward, random_walk};
use crate::{BehaviorError, BehaviorModel, BehaviorResult, StepContext, StepOutcome};

// ── BehaviorParams ────────────────────────────────────────────────────────────

/// Tunables of [`CanteenBehavior`].  `Default` is the cafeteria scenario.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorParams {
    /// First hour (inclusive) in which arriving customers head for a queue.
    pub open_hour:       u32,
    /// Last hour (inclusive) in which arriving customers head for a queue.
    pub close_hour:      u32,
    /// Mean of the per-tick ordering threshold.
    pub order_mean:      f64,
    /// Standard deviation of the per-tick ordering threshold.
    pub order_std_dev:   f64,
    /// Inclusive range the per-customer eating threshold is drawn from.
    pub eat_ticks:       (u32, u32),
    pub queue_policy:    SelectionPolicy,
    pub seat_policy:     SelectionPolicy,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            open_hour:     8,
            close_hour:    16,
            order_mean:    2.0,
            order_std_dev: 1.0,
            eat_ticks:     (20, 30),
            queue_policy:  SelectionPolicy::RandomOrNearest,
            seat_policy:   SelectionPolicy::RandomOrNearest,
        }
    }
}

impl BehaviorParams {
    /// `true` if `hour` lies in `[open_hour, close_hour]`.
    #[inline]
    pub fn is_open(&self, hour: u32) -> bool {
        (self.open_hour..=self.close_hour).contains(&hour)
    }

    pub fn validate(&self) -> BehaviorResult<()> {
        if self.open_hour > self.close_hour {
            return Err(BehaviorError::Config(format!(
                "open hour {} is after close hour {}",
                self.open_hour, self.close_hour
            )));
        }
        if !self.order_mean.is_finite() {
            return Err(BehaviorError::Config("order_mean must be finite".into()));
        }
        if !self.order_std_dev.is_finite() || self.order_std_dev < 0.0 {
            return Err(BehaviorError::Config(format!(
                "order_std_dev must be finite and non-negative, got {}",
                self.order_std_dev
            )));
        }
        let (lo, hi) = self.eat_ticks;
        if lo > hi {
            return Err(BehaviorError::Config(format!("eat_ticks range {lo}..={hi} is empty")));
        }
        Ok(())
    }
}

// ── CanteenBehavior ───────────────────────────────────────────────────────────

pub struct CanteenBehavior {
    params:        BehaviorParams,
    order_minutes: Normal<f64>,
}

impl CanteenBehavior {
    pub fn new(params: BehaviorParams) -> BehaviorResult<Self> {
        params.validate()?;
        let order_minutes = Normal::new(params.order_mean, params.order_std_dev)
            .map_err(|e| BehaviorError::Config(format!("ordering distribution: {e}")))?;
        Ok(Self { params, order_minutes })
    }

    pub fn params(&self) -> &BehaviorParams {
        &self.params
    }

    fn seek_queue(&self, customer: &mut Customer, grid: &mut Grid) {
        let target = Allocator::new(grid, self.params.queue_policy)
            .find_empty_queue(customer.position, &mut customer.rng);
        let Some(queue) = target else {
            random_walk(customer, grid);
            return;
        };
        move_toward(customer, grid, queue);
        if customer.position == queue {
            advance(customer, CustomerState::Ordering);
        }
    }

    fn order(&self, customer: &mut Customer, grid: &mut Grid) {
        customer.steps_queuing += 1;
        let threshold = customer.rng.inner().sample(self.order_minutes).max(0.0);
        if (customer.steps_queuing as f64) < threshold {
            return;
        }
        customer.steps_queuing = 0;

        let target = Allocator::new(grid, self.params.seat_policy)
            .find_empty_seat(customer.position, &mut customer.rng);
        let Some(seat) = target else {
            random_walk(customer, grid);
            return;
        };
        move_toward(customer, grid, seat);
        if customer.position == seat {
            advance(customer, CustomerState::Eating);
        }
    }

    fn eat(&self, customer: &mut Customer) {
        customer.steps_eating += 1;
        if customer.steps_eating >= customer.eat_threshold {
            advance(customer, CustomerState::Exiting);
        }
    }

    fn leave(&self, customer: &mut Customer, grid: &mut Grid) -> StepOutcome {
        let target: Option<Position> = customer.rng.choose(grid.layout().exits()).copied();
        if let Some(exit) = target {
            move_toward(customer, grid, exit);
        }
        if grid.zone_at(customer.position) == Some(Zone::Exit) {
            trace!("{} left through {}", customer.id, customer.position);
            StepOutcome::Departed
        } else {
            StepOutcome::Active
        }
    }
}

impl BehaviorModel for CanteenBehavior {
    fn on_spawn(&self, customer: &mut Customer) {
        let (lo, hi) = self.params.eat_ticks;
        customer.eat_threshold = customer.rng.gen_range(lo..=hi);
    }

    fn step(
        &self,
        customer: &mut Customer,
        grid:     &mut Grid,
        ctx:      &StepContext<'_>,
    ) -> StepOutcome {
        match customer.state() {
            CustomerState::Entering => {
                if self.params.is_open(ctx.hour()) {
                    self.seek_queue(customer, grid);
                } else {
                    advance(customer, CustomerState::Exiting);
                }
            }
            CustomerState::Queuing  => self.seek_queue(customer, grid),
            CustomerState::Ordering => self.order(customer, grid),
            CustomerState::Eating   => self.eat(customer),
            CustomerState::Exiting  => return self.leave(customer, grid),
        }
        StepOutcome::Active
    }
}

fn advance(customer: &mut Customer, next: CustomerState) {
    trace!("{} {} -> {} at {}", customer.id, customer.state(), next, customer.position);
    customer.transition(next);
}
