//! The arrival process: how many customers walk in after each tick.
//!
//! Two independent sources are summed:
//!
//! - **Baseline**: one customer once the clock passes `next_arrival_minute`,
//!   while the hour lies in `baseline_hours`.
//! - **Burst**: while the hour lies in `burst_hours`, one customer every
//!   tick, one more during the lunch rush, and one more in the bump hour.
//!
//! Every spawned customer, whichever source produced it, pushes
//! `next_arrival_minute` to a fresh uniform draw, at least one minute after
//! the tick's time.

use canteen_core::SimRng;

use crate::{SimError, SimResult};

// ── ArrivalParams ─────────────────────────────────────────────────────────────

/// Time-of-day arrival profile.  `Default` is the cafeteria scenario.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalParams {
    /// Inclusive hour range in which the baseline source may fire.
    pub baseline_hours:         (u32, u32),
    /// Inclusive hour range in which the burst source fires every tick.
    pub burst_hours:            (u32, u32),
    /// Half-open hour range `[start, end)` of the lunch rush.
    pub lunch_hours:            (u32, u32),
    pub lunch_extra:            u32,
    pub bump_hour:              u32,
    pub bump_extra:             u32,
    /// Upper bound of the first baseline draw, in minutes after the start.
    pub initial_offset_minutes: u64,
    /// Upper bound of every later baseline draw, in minutes.
    pub redraw_minutes:         u64,
}

impl Default for ArrivalParams {
    fn default() -> Self {
        Self {
            baseline_hours:         (8, 16),
            burst_hours:            (7, 16),
            lunch_hours:            (11, 13),
            lunch_extra:            1,
            bump_hour:              9,
            bump_extra:             1,
            initial_offset_minutes: 60,
            redraw_minutes:         720,
        }
    }
}

impl ArrivalParams {
    /// No arrivals from either source.
    pub fn closed() -> Self {
        Self {
            baseline_hours: (1, 0),
            burst_hours:    (1, 0),
            lunch_extra:    0,
            bump_extra:     0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        let (lo, hi) = self.lunch_hours;
        if lo > hi {
            return Err(SimError::Config(format!("lunch hours [{lo}, {hi}) are inverted")));
        }
        if self.redraw_minutes == 0 {
            return Err(SimError::Config("redraw_minutes must be positive".into()));
        }
        Ok(())
    }

    /// Burst-source customers for a tick in `hour`.
    pub fn burst_size(&self, hour: u32) -> u32 {
        if !within(self.burst_hours, hour) {
            return 0;
        }
        let mut n = 1;
        if (self.lunch_hours.0..self.lunch_hours.1).contains(&hour) {
            n += self.lunch_extra;
        }
        if hour == self.bump_hour {
            n += self.bump_extra;
        }
        n
    }
}

fn within((lo, hi): (u32, u32), hour: u32) -> bool {
    (lo..=hi).contains(&hour)
}

// ── ArrivalProcess ────────────────────────────────────────────────────────────

/// Stateful arrival generator owned by the scheduler.
pub struct ArrivalProcess {
    params:              ArrivalParams,
    rng:                 SimRng,
    next_arrival_minute: u64,
}

impl ArrivalProcess {
    /// Draw the first baseline arrival in
    /// `[start_minute, start_minute + initial_offset_minutes]`.
    pub fn new(params: ArrivalParams, start_minute: u32, mut rng: SimRng) -> Self {
        let offset = rng.gen_range(0..=params.initial_offset_minutes);
        Self {
            next_arrival_minute: start_minute as u64 + offset,
            params,
            rng,
        }
    }

    pub fn params(&self) -> &ArrivalParams {
        &self.params
    }

    /// Minute of the day at which the baseline source next fires.
    pub fn next_arrival_minute(&self) -> u64 {
        self.next_arrival_minute
    }

    /// Customers due for a tick that started at `minute` in `hour`.
    ///
    /// Does not consume randomness; call [`spawned`](Self::spawned) once per
    /// customer actually created.
    pub fn due(&self, minute: u64, hour: u32) -> u32 {
        let baseline = minute >= self.next_arrival_minute
            && within(self.params.baseline_hours, hour);
        baseline as u32 + self.params.burst_size(hour)
    }

    /// Uniform row in `first..=last` for the next spawn.
    pub fn spawn_row(&mut self, (first, last): (i32, i32)) -> i32 {
        self.rng.gen_range(first..=last)
    }

    /// Record one spawn at `minute` and redraw the baseline arrival.
    ///
    /// The offset is a whole number of minutes in `1..=redraw_minutes`: the
    /// first minute at or after a continuous draw in `(0, redraw_minutes]`.
    /// A redraw therefore never lands on the minute that triggered it.
    pub fn spawned(&mut self, minute: u64) {
        self.next_arrival_minute = minute + self.rng.gen_range(1..=self.params.redraw_minutes);
    }
}
