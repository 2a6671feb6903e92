//! cafeteria: one operating day of the 44×24 canteen floor.
//!
//! Runs 08:00–18:00 at one minute per tick, writes `metrics.csv` and
//! `customer_snapshots.csv` to `output/cafeteria/`, and finishes with a JSON
//! summary of the day.  Set `RUST_LOG=debug` for per-tick logging.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use canteen_agent::{CustomerState, EntityStore};
use canteen_behavior::{BehaviorParams, CanteenBehavior};
use canteen_core::{SimClock, SimConfig, Tick};
use canteen_grid::{CAFETERIA_HEIGHT, CAFETERIA_WIDTH, Grid, ZoneLayout};
use canteen_output::{CsvWriter, MetricsOutputObserver, OutputWriter};
use canteen_sim::{ArrivalParams, MetricsSnapshot, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const OPEN_HOUR:             u32 = 8;
const CLOSE_HOUR:            u32 = 18;
const OUTPUT_INTERVAL_TICKS: u64 = 5;
const OUTPUT_DIR:            &str = "output/cafeteria";

// ── Observer wrapper: hourly progress + peak tracking ─────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:       MetricsOutputObserver<W>,
    peak:        usize,
    peak_time:   String,
    peak_eating: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: MetricsOutputObserver<W>) -> Self {
        Self { inner, peak: 0, peak_time: String::new(), peak_eating: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_metrics(&mut self, m: &MetricsSnapshot) {
        if m.formatted_time.ends_with(":00") {
            info!(
                "{}  inside {:>3}  (entering {}, ordering {}, eating {}, exiting {})",
                m.formatted_time,
                m.total(),
                m.counts.entering,
                m.counts.ordering,
                m.counts.eating,
                m.counts.exiting
            );
        }
        if m.total() > self.peak {
            self.peak = m.total();
            self.peak_time = m.formatted_time.clone();
        }
        self.peak_eating = self.peak_eating.max(m.counts.eating);
        self.inner.on_metrics(m);
    }

    fn on_snapshot(&mut self, clock: &SimClock, store: &EntityStore) {
        self.inner.on_snapshot(clock, store);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    // 1. Floor plan.
    let layout = ZoneLayout::cafeteria();
    let grid = Grid::new(CAFETERIA_WIDTH, CAFETERIA_HEIGHT, layout)?;
    info!(
        "floor {}x{}: {} seats, {} queue cells, {} exit cells",
        grid.width(),
        grid.height(),
        grid.layout().dining_areas().len(),
        grid.layout().cashier_queues().len(),
        grid.layout().exits().len()
    );

    // 2. Config and behaviour.
    let config = SimConfig {
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..SimConfig::from_hours(OPEN_HOUR, CLOSE_HOUR, SEED)
    };
    let params = BehaviorParams::default();
    let behavior = CanteenBehavior::new(params.clone())?;

    // 3. Build sim.
    let mut sim = SimBuilder::new(config.clone(), grid, behavior)
        .arrivals(ArrivalParams::default())
        .build()?;

    // 4. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(MetricsOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        log::error!("output error: {e}");
    }

    // 6. Summary.
    let remaining = sim.store.count_by_state();
    let summary = serde_json::json!({
        "config":           serde_json::to_value(&config)?,
        "behavior":         serde_json::to_value(&params)?,
        "ticks":            sim.current_tick().0,
        "customers_served": sim.total_removed(),
        "customers_total":  sim.total_spawned(),
        "still_inside":     sim.live_customers(),
        "remaining":        serde_json::to_value(remaining)?,
        "peak_inside":      obs.peak,
        "peak_time":        obs.peak_time,
        "peak_eating":      obs.peak_eating,
        "elapsed_secs":     elapsed.as_secs_f64(),
    });
    let summary_path = Path::new(OUTPUT_DIR).join("summary.json");
    serde_json::to_writer_pretty(File::create(&summary_path)?, &summary)?;

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  metrics.csv            : {} rows", sim.metrics.len());
    println!("  summary.json           : {}", summary_path.display());
    println!();
    println!("{:<10} {:>6}", "State", "Count");
    println!("{}", "-".repeat(17));
    for state in CustomerState::ALL {
        println!("{:<10} {:>6}", state.as_str(), remaining.get(state));
    }

    Ok(())
}
