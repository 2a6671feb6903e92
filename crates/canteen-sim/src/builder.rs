//! Fluent builder for constructing a [`Sim`].

use canteen_agent::EntityStore;
use canteen_behavior::BehaviorModel;
use canteen_core::{Position, SimConfig, SimRng, Zone};
use canteen_grid::Grid;
use log::debug;

use crate::{ArrivalParams, ArrivalProcess, MetricsCollector, Sim, SimError, SimResult};

/// Seed offset of the arrival stream derived from the run-level RNG.
const ARRIVAL_STREAM: u64 = 1;

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: operating window, tick length, seed
/// - [`Grid`]: an empty grid with its zone layout
/// - `B: BehaviorModel`: the behavior implementation
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                     |
/// |-------------------|-----------------------------|
/// | `.arrivals(p)`    | `ArrivalParams::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let grid = Grid::new(44, 24, ZoneLayout::cafeteria())?;
/// let behavior = CanteenBehavior::new(BehaviorParams::default())?;
/// let mut sim = SimBuilder::new(SimConfig::from_hours(8, 18, 42), grid, behavior)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    grid:     Grid,
    behavior: B,
    arrivals: Option<ArrivalParams>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, grid: Grid, behavior: B) -> Self {
        Self {
            config,
            grid,
            behavior,
            arrivals: None,
        }
    }

    /// Replace the default arrival profile.
    pub fn arrivals(mut self, params: ArrivalParams) -> Self {
        self.arrivals = Some(params);
        self
    }

    /// Validate inputs, register one fixture per tagged cell, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;
        let params = self.arrivals.unwrap_or_default();
        params.validate()?;

        let mut grid = self.grid;
        if grid.customer_count() != 0 {
            return Err(SimError::Config(format!(
                "grid already holds {} customers",
                grid.customer_count()
            )));
        }

        // ── Static zone fixtures ──────────────────────────────────────────
        let tagged: Vec<(Zone, Position)> = grid
            .layout()
            .zones()
            .flat_map(|(zone, cells)| cells.iter().map(move |&pos| (zone, pos)))
            .collect();
        let mut store = EntityStore::new();
        for (zone, pos) in tagged {
            let id = store.add_fixture(pos, zone);
            grid.attach_fixture(pos, id)?;
        }
        debug!("registered {} zone fixtures", store.len());

        let mut rng = SimRng::new(self.config.seed);
        let arrivals = ArrivalProcess::new(params, self.config.start_minute, rng.child(ARRIVAL_STREAM));

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            grid,
            store,
            behavior: self.behavior,
            metrics:  MetricsCollector::new(),
            rng,
            arrivals,
            running:  true,
        })
    }
}
