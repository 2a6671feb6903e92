//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to time-of-day is held in `SimClock`:
//!
//!   minute_of_day = start_minute + tick * tick_minutes
//!   current_time  = minute_of_day / 60        (hours, e.g. 8.5 = 08:30)
//!
//! Using an integer tick as the canonical time unit means the clock never
//! drifts: a 08:00–18:00 window at one minute per tick ends after exactly
//! 600 ticks, with no accumulated floating-point error from adding 1/60.

use std::fmt;

use crate::{CanteenError, CanteenResult};

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and time of day.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Minute of the day corresponding to tick 0 (08:00 → 480).
    pub start_minute: u32,
    /// Simulated minutes per tick.  Default: 1.
    pub tick_minutes: u32,
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_minute: u32, tick_minutes: u32) -> Self {
        Self {
            start_minute,
            tick_minutes,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Minute of the day at `tick`.
    #[inline]
    pub fn minute_at(&self, tick: Tick) -> u64 {
        self.start_minute as u64 + tick.0 * self.tick_minutes as u64
    }

    /// Time at `tick` in fractional hours (08:30 → 8.5).
    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        self.minute_at(tick) as f64 / MINUTES_PER_HOUR as f64
    }

    /// Current time in fractional hours.
    #[inline]
    pub fn current_time(&self) -> f64 {
        self.time_at(self.current_tick)
    }

    /// `floor(time_at(tick))`.
    #[inline]
    pub fn hour_at(&self, tick: Tick) -> u32 {
        (self.minute_at(tick) / MINUTES_PER_HOUR as u64) as u32
    }

    /// `floor(current_time())`.
    #[inline]
    pub fn hour_of_day(&self) -> u32 {
        self.hour_at(self.current_tick)
    }

    /// `HH:MM` at `tick`.  Hours are not wrapped at midnight.
    pub fn time_string_at(&self, tick: Tick) -> String {
        let minute = self.minute_at(tick);
        format!("{:02}:{:02}", minute / 60, minute % 60)
    }

    /// `HH:MM` at the current tick.
    pub fn time_string(&self) -> String {
        self.time_string_at(self.current_tick)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.time_string())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: operating window, resolution, and seed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Minute of the day at which the run starts (08:00 → 480).
    pub start_minute: u32,

    /// Minute of the day at which the run stops (18:00 → 1080).  Exclusive.
    pub end_minute: u32,

    /// Simulated minutes per tick.  Default: 1.
    pub tick_minutes: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    /// 08:00–18:00 at one minute per tick.
    fn default() -> Self {
        Self {
            start_minute:          8 * MINUTES_PER_HOUR,
            end_minute:            18 * MINUTES_PER_HOUR,
            tick_minutes:          1,
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Window given in whole hours, one minute per tick.
    pub fn from_hours(start_hour: u32, end_hour: u32, seed: u64) -> Self {
        Self {
            start_minute: start_hour * MINUTES_PER_HOUR,
            end_minute:   end_hour * MINUTES_PER_HOUR,
            seed,
            ..Self::default()
        }
    }

    /// Start of the window in fractional hours.
    #[inline]
    pub fn start_time(&self) -> f64 {
        self.start_minute as f64 / MINUTES_PER_HOUR as f64
    }

    /// End of the window in fractional hours.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.end_minute as f64 / MINUTES_PER_HOUR as f64
    }

    /// Number of ticks between `start_time` and `end_time`.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        ((self.end_minute - self.start_minute) / self.tick_minutes) as u64
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_minute, self.tick_minutes)
    }

    /// Reject windows the clock cannot represent exactly.
    pub fn validate(&self) -> CanteenResult<()> {
        if self.tick_minutes == 0 {
            return Err(CanteenError::Config("tick_minutes must be positive".into()));
        }
        if self.start_minute >= self.end_minute {
            return Err(CanteenError::Config(format!(
                "start minute {} must precede end minute {}",
                self.start_minute, self.end_minute
            )));
        }
        if self.end_minute > MINUTES_PER_DAY {
            return Err(CanteenError::Config(format!(
                "end minute {} is past midnight",
                self.end_minute
            )));
        }
        if (self.end_minute - self.start_minute) % self.tick_minutes != 0 {
            return Err(CanteenError::Config(format!(
                "window of {} minutes is not a whole number of {}-minute ticks",
                self.end_minute - self.start_minute,
                self.tick_minutes
            )));
        }
        Ok(())
    }
}
