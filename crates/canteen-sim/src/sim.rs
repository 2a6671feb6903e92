//! The `Sim` struct and its tick loop.

use canteen_agent::{Customer, Entity, EntityStore};
use canteen_behavior::{BehaviorModel, StepContext, StepOutcome};
use canteen_core::{CanteenError, EntityId, Position, SimClock, SimConfig, SimRng, Tick};
use canteen_grid::Grid;
use log::{debug, info, trace};

use crate::{ArrivalProcess, CustomerSnapshot, MetricsCollector, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B>` owns the grid, every entity, and all randomness of a run, and
/// drives the five-phase tick:
///
/// 1. **Metrics**: record customer counts before anyone moves.
/// 2. **Activation**: shuffle every live entity id and activate each once.
///    Fixtures do nothing; customers run the behavior model, and departed
///    customers are removed from the grid and the store on the spot.
/// 3. **Clock**: advance one tick.
/// 4. **Stop check**: clear `running` once the clock reaches the end time.
/// 5. **Arrivals**: spawn the customers the arrival process asks for,
///    evaluated at the time the tick started.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Operating window, resolution, seed.
    pub config: SimConfig,

    /// Simulation clock.  `current_tick` is the next tick to run.
    pub clock: SimClock,

    /// Zone tags and customer occupancy.
    pub grid: Grid,

    /// Every live fixture and customer.
    pub store: EntityStore,

    /// The behavior model.  Called once per customer per tick.
    pub behavior: B,

    /// Per-tick metrics history.
    pub metrics: MetricsCollector,

    pub(crate) rng:      SimRng,
    pub(crate) arrivals: ArrivalProcess,
    pub(crate) running:  bool,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run ticks until the clock reaches `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "running {} ticks from {} (seed {})",
            self.config.total_ticks().saturating_sub(self.clock.current_tick.0),
            self.clock.time_string(),
            self.config.seed
        );
        while self.running {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(
            "stopped at {}: {} customers spawned, {} left, {} still inside",
            self.clock.time_string(),
            self.total_spawned(),
            self.total_removed(),
            self.live_customers()
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run one full tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: metrics ──────────────────────────────────────────────
        let snapshot = self.metrics.record(&self.clock, &self.store);
        observer.on_metrics(snapshot);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(&self.clock, &self.store);
        }

        // ── Phase 2: activation ───────────────────────────────────────────
        let departed = self.activate_all()?;

        // ── Phases 3 + 4: clock ───────────────────────────────────────────
        self.clock.advance();
        if self.clock.current_tick >= self.config.end_tick() {
            self.running = false;
        }

        // ── Phase 5: arrivals ─────────────────────────────────────────────
        let spawned = self.spawn_arrivals(now)?;

        debug!(
            "{} {}: +{spawned} -{departed}, {} inside",
            now,
            self.clock.time_string_at(now),
            self.live_customers()
        );
        observer.on_tick_end(now, spawned, departed);
        Ok(())
    }

    /// Create a customer at `pos`, place it on the grid, and register it for
    /// activation from the next tick on.
    pub fn spawn_customer(&mut self, pos: Position) -> SimResult<EntityId> {
        let id = self.store.allocate_id();
        let mut customer = Customer::new(id, pos, self.config.seed);
        self.behavior.on_spawn(&mut customer);
        self.grid.place_customer(id, pos)?;
        self.store.add_customer(customer);
        trace!("{id} entered at {pos}");
        Ok(id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `false` once the clock has reached the end of the operating window.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Current time in fractional hours.
    #[inline]
    pub fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    #[inline]
    pub fn total_spawned(&self) -> u64 {
        self.store.customers_spawned()
    }

    #[inline]
    pub fn total_removed(&self) -> u64 {
        self.store.customers_removed()
    }

    #[inline]
    pub fn live_customers(&self) -> usize {
        self.store.live_customers()
    }

    /// Position and state of every live customer, in ascending id order.
    pub fn customer_positions(&self) -> Vec<CustomerSnapshot> {
        CustomerSnapshot::collect(&self.store)
    }

    pub fn arrivals(&self) -> &ArrivalProcess {
        &self.arrivals
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Activate every live entity once in a fresh random order.  Returns the
    /// number of customers that left.
    fn activate_all(&mut self) -> SimResult<usize> {
        let mut order = self.store.ids();
        self.rng.shuffle(&mut order);

        let ctx = StepContext::new(&self.clock);
        let mut departed = 0;
        for id in order {
            let entity = self
                .store
                .get_mut(id)
                .ok_or(CanteenError::EntityNotFound(id))?;
            let customer = match entity {
                Entity::Customer(c) => c,
                Entity::Fixture(_)  => continue,
            };
            if self.behavior.step(customer, &mut self.grid, &ctx) == StepOutcome::Departed {
                let pos = customer.position;
                self.grid.remove_customer(id, pos);
                self.store.remove(id);
                trace!("{id} left at {pos}");
                departed += 1;
            }
        }
        Ok(departed)
    }

    /// Spawn the customers due for the tick that started at `started`.
    fn spawn_arrivals(&mut self, started: Tick) -> SimResult<usize> {
        let minute = self.clock.minute_at(started);
        let hour = self.clock.hour_at(started);
        let due = self.arrivals.due(minute, hour);

        let column = self.grid.layout().entry_column();
        let rows = self.grid.layout().entry_rows();
        for _ in 0..due {
            let row = self.arrivals.spawn_row(rows);
            self.spawn_customer(Position::new(column, row))?;
            self.arrivals.spawned(minute);
        }
        Ok(due as usize)
    }
}
