use carsim_simulator::simulation::{Simulation, PHYSICS_TICK_LENGTH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap()]
struct Arguments {
    #[clap(short, long, value_parser, default_value = "3600")]
    ticks: u64,

    /// Seconds per tick. Defaults to 1/60.
    #[clap(long, value_parser)]
    dt: Option<f64>,

    #[clap(short, long, value_parser, default_value = "0")]
    seed: u32,

    /// JSON simulation config.
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Leave the car uncontrolled.
    #[clap(short, long)]
    manual: bool,

    /// Print only the final state hash.
    #[clap(long)]
    hash: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("carsim_headless=info,carsim_simulator=info"),
    )
    .init();

    let args = Arguments::parse();
    let config = carsim_tools::load_config(args.config.as_deref())?;
    let dt = args.dt.unwrap_or(PHYSICS_TICK_LENGTH);

    let mut sim = Simulation::new(config, args.seed)?;
    sim.set_manual_override(args.manual);
    let stats = carsim_tools::run(&mut sim, args.ticks, dt)?;
    log::info!(
        "Ran {} ticks ({:.1}s), {} laps, mean distance {:.1}, max distance {:.1}",
        stats.ticks,
        sim.time(),
        stats.laps,
        stats.mean_distance,
        stats.max_distance
    );
    log::info!(
        "Mean step time {:.3}us (path {:.3}us, control {:.3}us, physics {:.3}us)",
        stats.mean_timing.total() * 1e6,
        stats.mean_timing.path * 1e6,
        stats.mean_timing.control * 1e6,
        stats.mean_timing.physics * 1e6
    );

    if args.hash {
        println!("{:016x}", sim.hash());
    } else {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    }

    Ok(())
}
