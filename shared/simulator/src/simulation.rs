use crate::config::SimulationConfig;
use crate::controller::{Feedback, ManualCommand, ManualInput, PursuitController};
use crate::debug;
use crate::error::Error;
use crate::geometry::{null, Vec2};
use crate::path::{Advance, PathGenerator};
use crate::snapshot::*;
use crate::vehicle::VehicleModel;
use instant::Instant;

pub const PHYSICS_TICK_LENGTH: f64 = 1.0 / 60.0;

/// One car chasing a target that runs around a random loop.
pub struct Simulation {
    config: SimulationConfig,
    seed: u32,
    path: PathGenerator,
    vehicle: VehicleModel,
    controller: PursuitController,
    manual_override: bool,
    pending_commands: Vec<ManualCommand>,
    last_feedback: Option<Feedback>,
    trail: Vec<Vec2>,
    since_trail_sample: f64,
    tick: u64,
    time: f64,
    timing: Timing,
}

impl Simulation {
    pub fn new(config: SimulationConfig, seed: u32) -> Result<Simulation, Error> {
        log::info!("seed {seed}");
        config.validate()?;
        let path = PathGenerator::new(config.path.clone(), seed)?;
        let vehicle = VehicleModel::new(&config.vehicle, null())?;
        let mut sim = Simulation {
            config,
            seed,
            path,
            vehicle,
            controller: PursuitController,
            manual_override: false,
            pending_commands: Vec::new(),
            last_feedback: None,
            trail: Vec::new(),
            since_trail_sample: 0.0,
            tick: 0,
            time: 0.0,
            timing: Default::default(),
        };
        sim.place_vehicle_on_path();
        Ok(sim)
    }

    pub fn step(&mut self, dt: f64) -> Result<(), Error> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(Error::InvalidTimeStep(dt));
        }

        let path_start_time = Instant::now();
        if self.path.advance(dt) == Advance::Wrapped {
            self.place_vehicle_on_path();
        }
        let target = self.path.current_target();
        self.timing.path = (Instant::now() - path_start_time).as_secs_f64();

        let control_start_time = Instant::now();
        if self.manual_override {
            for command in self.pending_commands.drain(..) {
                command.apply(&mut self.vehicle);
            }
            self.last_feedback = None;
        } else {
            if !self.pending_commands.is_empty() {
                log::debug!(
                    "Dropping {} manual commands while the controller is driving",
                    self.pending_commands.len()
                );
                self.pending_commands.clear();
            }
            self.last_feedback = Some(self.controller.feed(&mut self.vehicle, dt, target));
        }
        self.timing.control = (Instant::now() - control_start_time).as_secs_f64();

        let physics_start_time = Instant::now();
        self.vehicle.update(dt);
        self.timing.physics = (Instant::now() - physics_start_time).as_secs_f64();

        self.since_trail_sample += dt;
        if self.since_trail_sample > self.config.trail_interval {
            self.trail.push(self.vehicle.pivot());
            self.since_trail_sample = 0.0;
        }

        self.tick += 1;
        self.time += dt;
        Ok(())
    }

    /// Puts the vehicle's pivot on the start of the loop and restarts the
    /// trail. Velocity and heading carry over.
    fn place_vehicle_on_path(&mut self) {
        let position = self.path.start() - self.vehicle.turn_center();
        self.vehicle.set_position(position);
        self.trail.clear();
        self.trail.push(self.vehicle.pivot());
        self.since_trail_sample = 0.0;
    }

    /// Queues a command for the next step. Commands only take effect while
    /// manual override is active.
    pub fn queue_command(&mut self, command: ManualCommand) {
        self.pending_commands.push(command);
    }

    /// Queues the command for `input` using the configured magnitudes.
    pub fn queue_input(&mut self, input: ManualInput, dt: f64) {
        let command = self.config.manual.command(input, dt);
        self.queue_command(command);
    }

    pub fn set_manual_override(&mut self, enabled: bool) {
        if enabled != self.manual_override {
            log::info!(
                "Manual override {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        self.manual_override = enabled;
    }

    pub fn toggle_manual_override(&mut self) {
        self.set_manual_override(!self.manual_override);
    }

    pub fn manual_override(&self) -> bool {
        self.manual_override
    }

    pub fn vehicle(&self) -> &VehicleModel {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut VehicleModel {
        &mut self.vehicle
    }

    pub fn path(&self) -> &PathGenerator {
        &self.path
    }

    pub fn target(&self) -> Vec2 {
        self.path.current_target()
    }

    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Time spent in each phase of the last step.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher;
        let fixedpoint = |v: f64| (v * 1e9) as i64;
        let mut s = DefaultHasher::new();
        let vehicle = &self.vehicle;
        s.write_i64(fixedpoint(vehicle.position().x));
        s.write_i64(fixedpoint(vehicle.position().y));
        s.write_i64(fixedpoint(vehicle.velocity().x));
        s.write_i64(fixedpoint(vehicle.velocity().y));
        s.write_i64(fixedpoint(vehicle.acceleration().x));
        s.write_i64(fixedpoint(vehicle.acceleration().y));
        s.write_i64(fixedpoint(vehicle.rotation()));
        s.write_i64(fixedpoint(self.path.progress()));
        s.write_u64(self.path.lap());
        s.finish()
    }

    pub fn snapshot(&self) -> Snapshot {
        let vehicle = &self.vehicle;
        let target = self.target();
        Snapshot {
            tick: self.tick,
            time: self.time,
            seed: self.seed,
            lap: self.path.lap(),
            progress: self.path.progress(),
            manual_override: self.manual_override,
            vehicle: VehicleSnapshot {
                position: vehicle.position(),
                velocity: vehicle.velocity(),
                acceleration: vehicle.acceleration(),
                rotation: vehicle.rotation(),
                turn_center: vehicle.turn_center(),
                outline: vehicle.bounds_world().closed_points(),
            },
            target_path: self.path.target_path().closed_points(),
            target,
            trail: self.trail.clone(),
            debug_lines: debug::vehicle_lines(vehicle, target),
            palette: Default::default(),
            timing: self.timing.clone(),
        }
    }
}
