use carsim_simulator::simulation::{Simulation, PHYSICS_TICK_LENGTH};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap()]
struct Arguments {
    #[clap(short, long, value_parser, default_value = "100")]
    rounds: u32,

    /// Base seed
    #[clap(short, long, value_parser, default_value = "0")]
    seed: u32,

    #[clap(short, long, value_parser, default_value = "3600")]
    ticks: u64,

    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("carsim_sweep=info"),
    )
    .init();

    let args = Arguments::parse();
    let config = carsim_tools::load_config(args.config.as_deref())?;

    let mut results = (args.seed..(args.seed + args.rounds))
        .into_par_iter()
        .map(|seed| -> anyhow::Result<_> {
            let mut sim = Simulation::new(config.clone(), seed)?;
            let stats = carsim_tools::run(&mut sim, args.ticks, PHYSICS_TICK_LENGTH)?;
            Ok((seed, stats))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    results.sort_by(|(_, a), (_, b)| a.mean_distance.total_cmp(&b.mean_distance));

    println!(
        "{:>10} {:>6} {:>10} {:>10} {:>10}",
        "seed", "laps", "mean", "max", "step (us)"
    );
    for (seed, stats) in results.iter() {
        println!(
            "{:>10} {:>6} {:>10.1} {:>10.1} {:>10.3}",
            seed,
            stats.laps,
            stats.mean_distance,
            stats.max_distance,
            stats.mean_timing.total() * 1e6
        );
    }

    if !results.is_empty() {
        let overall =
            results.iter().map(|(_, s)| s.mean_distance).sum::<f64>() / results.len() as f64;
        log::info!("Mean distance over {} seeds: {:.1}", results.len(), overall);
    }

    Ok(())
}
