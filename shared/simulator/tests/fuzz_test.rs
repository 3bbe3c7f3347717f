use carsim_simulator::config::SimulationConfig;
use carsim_simulator::simulation::{Simulation, PHYSICS_TICK_LENGTH};
use rayon::prelude::*;
use test_log::test;

#[test]
fn test_fuzz() {
    let mut config = SimulationConfig::default();
    config.path.lap_seconds = 10.0;
    (0..16u32).into_par_iter().for_each(|seed| {
        let mut sim = Simulation::new(config.clone(), seed).unwrap();
        for _ in 0..2000 {
            sim.step(PHYSICS_TICK_LENGTH).unwrap();
            let vehicle = sim.vehicle();
            assert!(vehicle.position().iter().all(|v| v.is_finite()));
            assert!(vehicle.velocity().iter().all(|v| v.is_finite()));
            assert!(vehicle.acceleration().iter().all(|v| v.is_finite()));
            assert!(vehicle.rotation().is_finite());
            let target = sim.target();
            assert!(target.iter().all(|v| v.is_finite()));
        }
        assert_eq!(sim.path().lap(), 3);
    });
}

#[test]
fn test_targets_stay_in_region() {
    (0..8u32).into_par_iter().for_each(|seed| {
        let mut sim = Simulation::new(SimulationConfig::default(), seed).unwrap();
        for _ in 0..600 {
            sim.step(0.25).unwrap();
            let target = sim.target();
            assert!((100.0..=1100.0).contains(&target.x), "{:?}", target);
            assert!((100.0..=700.0).contains(&target.y), "{:?}", target);
        }
    });
}
