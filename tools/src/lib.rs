use carsim_simulator::config::SimulationConfig;
use carsim_simulator::simulation::Simulation;
use carsim_simulator::snapshot::Timing;
use std::path::Path;

/// Loads the config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SimulationConfig> {
    match path {
        Some(path) => Ok(SimulationConfig::load(path)?),
        None => Ok(SimulationConfig::default()),
    }
}

/// Summary of a headless run.
#[derive(Clone, Debug, Default)]
pub struct RunStats {
    pub ticks: u64,
    pub laps: u64,
    pub mean_distance: f64,
    pub max_distance: f64,
    /// Per-step time spent in each phase, averaged over the run.
    pub mean_timing: Timing,
}

/// Steps `sim` for `ticks` ticks of `dt`, tracking the distance between the
/// pivot and the target after each step.
pub fn run(sim: &mut Simulation, ticks: u64, dt: f64) -> anyhow::Result<RunStats> {
    let mut stats = RunStats::default();
    let mut total_distance = 0.0;
    let mut total_timing = Timing::default();
    for _ in 0..ticks {
        sim.step(dt)?;
        total_timing += sim.timing().clone();
        let distance = (sim.target() - sim.vehicle().pivot()).norm();
        total_distance += distance;
        stats.max_distance = stats.max_distance.max(distance);
    }
    stats.ticks = ticks;
    stats.laps = sim.path().lap();
    if ticks > 0 {
        stats.mean_distance = total_distance / ticks as f64;
        stats.mean_timing = total_timing * (1.0 / ticks as f64);
    }
    Ok(stats)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_run_stats() {
        let mut sim = Simulation::new(SimulationConfig::default(), 3).unwrap();
        let stats = run(&mut sim, 120, 1.0 / 60.0).unwrap();
        assert_eq!(stats.ticks, 120);
        assert_eq!(sim.tick(), 120);
        assert!(stats.mean_distance.is_finite());
        assert!(stats.mean_distance <= stats.max_distance);
        assert!(stats.mean_timing.total() >= 0.0);
        assert!(stats.mean_timing.total().is_finite());
    }

    #[test]
    fn test_run_zero_ticks() {
        let mut sim = Simulation::new(SimulationConfig::default(), 3).unwrap();
        let stats = run(&mut sim, 0, 1.0 / 60.0).unwrap();
        assert_eq!(stats.ticks, 0);
        assert_eq!(stats.mean_distance, 0.0);
        assert_eq!(stats.mean_timing.total(), 0.0);
    }

    #[test]
    fn test_run_rejects_bad_dt() {
        let mut sim = Simulation::new(SimulationConfig::default(), 3).unwrap();
        assert!(run(&mut sim, 1, -1.0).is_err());
    }

    #[test]
    fn test_default_config() {
        assert_eq!(load_config(None).unwrap(), SimulationConfig::default());
    }
}
