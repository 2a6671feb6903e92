//! Read-only simulation state passed to every behavior callback.

use canteen_core::{SimClock, Tick};

/// A read-only view of the clock for one tick's activations.
///
/// Built once per tick by the scheduler and shared by every customer
/// activated in that tick.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The run's clock, not yet advanced for this tick.
    pub clock: &'a SimClock,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(clock: &'a SimClock) -> Self {
        Self { tick: clock.current_tick, clock }
    }

    /// `floor(current_time)` for this tick.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.clock.hour_at(self.tick)
    }
}
