use crate::geometry::{Vec2, Vec2Ext};
use crate::vehicle::VehicleModel;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Below this distance the throttle signal is undefined.
pub const THROTTLE_DEAD_ZONE: f64 = 30.0;
/// Distance inside which the controller starts braking.
pub const BRAKE_DISTANCE: f64 = 100.0;
pub const THROTTLE: f64 = 0.1;

/// Signals computed during one [PursuitController::feed] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Feedback {
    pub bearing: f64,
    pub distance: f64,
    /// Set when outside the dead zone, whether or not it was positive.
    pub throttle_signal: Option<f64>,
    pub brake_signal: f64,
    pub turned: f64,
    pub accelerated: bool,
    pub braked: bool,
}

/// Steers the vehicle's pivot toward a target using bang-bang steering
/// and distance-gated throttle and brake.
#[derive(Clone, Copy, Debug, Default)]
pub struct PursuitController;

impl PursuitController {
    pub fn feed(&self, vehicle: &mut VehicleModel, dt: f64, target: Vec2) -> Feedback {
        let to_target = target - vehicle.pivot();
        let bearing = to_target.angle_between(&vehicle.heading());
        let distance = to_target.norm();

        let mut feedback = Feedback {
            bearing,
            distance,
            brake_signal: BRAKE_DISTANCE - distance,
            ..Default::default()
        };

        if bearing > 0.0 {
            vehicle.turn(dt);
            feedback.turned = dt;
        } else if bearing < 0.0 {
            vehicle.turn(-dt);
            feedback.turned = -dt;
        }

        // Throttle before brake: both may fire in the same tick.
        if distance > THROTTLE_DEAD_ZONE {
            let throttle_signal = (distance - THROTTLE_DEAD_ZONE).ln() / 10.0;
            feedback.throttle_signal = Some(throttle_signal);
            if throttle_signal > 0.0 {
                vehicle.accelerate(THROTTLE);
                feedback.accelerated = true;
            }
        }
        if feedback.brake_signal > 0.0 {
            vehicle.brake(feedback.brake_signal);
            feedback.braked = true;
        }

        log::trace!(
            "bearing={:.4} distance={:.1} throttle={:?} brake={:.1}",
            bearing,
            distance,
            feedback.throttle_signal,
            feedback.brake_signal
        );
        feedback
    }
}

/// A direct command from the manual override layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ManualCommand {
    Accelerate(f64),
    Brake(f64),
    Turn(f64),
}

impl ManualCommand {
    pub fn apply(&self, vehicle: &mut VehicleModel) {
        match *self {
            ManualCommand::Accelerate(delta) => vehicle.accelerate(delta),
            ManualCommand::Brake(delta) => vehicle.brake(delta),
            ManualCommand::Turn(delta) => vehicle.turn(delta),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManualInput {
    Forward,
    Reverse,
    Left,
    Right,
}

/// Command magnitudes for manual driving.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualControls {
    pub accelerate: f64,
    pub brake: f64,
    /// Radians per second, before steering sensitivity.
    pub turn_rate: f64,
}

impl Default for ManualControls {
    fn default() -> ManualControls {
        ManualControls {
            accelerate: 10.0,
            brake: 10.0,
            turn_rate: 4.0 * PI,
        }
    }
}

impl ManualControls {
    pub fn command(&self, input: ManualInput, dt: f64) -> ManualCommand {
        match input {
            ManualInput::Forward => ManualCommand::Accelerate(self.accelerate),
            ManualInput::Reverse => ManualCommand::Brake(self.brake),
            ManualInput::Left => ManualCommand::Turn(self.turn_rate * dt),
            ManualInput::Right => ManualCommand::Turn(-self.turn_rate * dt),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{null, vec2};
    use crate::vehicle::VehicleConfig;
    use approx::assert_abs_diff_eq;
    use test_log::test;

    const DT: f64 = 1.0 / 60.0;

    fn car() -> VehicleModel {
        VehicleModel::new(&VehicleConfig::default(), null()).unwrap()
    }

    #[test]
    fn test_turn_direction_follows_bearing() {
        // Give the car some forward speed so it has a heading.
        let mut car = car();
        car.accelerate(1.0);
        car.update(1.0);
        let pivot = car.pivot();

        // Under the rotation convention a positive turn swings the heading
        // toward -y, so a target below the car yields a positive bearing.
        let mut below = car.clone();
        let feedback = PursuitController.feed(&mut below, DT, pivot + vec2(200.0, -50.0));
        assert!(feedback.bearing > 0.0);
        assert_eq!(feedback.turned, DT);
        assert_abs_diff_eq!(below.rotation(), DT * 50.0, epsilon = 1e-12);

        let mut above = car.clone();
        let feedback = PursuitController.feed(&mut above, DT, pivot + vec2(200.0, 50.0));
        assert!(feedback.bearing < 0.0);
        assert_eq!(feedback.turned, -DT);
        assert_abs_diff_eq!(above.rotation(), -DT * 50.0, epsilon = 1e-12);

        // Steering is bang-bang: magnitude does not depend on the bearing.
        let mut sharp = car.clone();
        PursuitController.feed(&mut sharp, DT, pivot + vec2(10.0, -500.0));
        assert_eq!(sharp.rotation(), below.rotation());
    }

    #[test]
    fn test_manual_command() {
        let mut car = car();
        ManualCommand::Accelerate(10.0).apply(&mut car);
        assert_eq!(car.acceleration(), vec2(10.0, 0.0));
        ManualCommand::Turn(0.1).apply(&mut car);
        assert_abs_diff_eq!(car.rotation(), 5.0, epsilon = 1e-12);
        ManualCommand::Brake(10.0).apply(&mut car);
        assert_abs_diff_eq!(
            car.acceleration(),
            vec2(10.0 * 0.9999 / 50.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_manual_controls() {
        let controls = ManualControls::default();
        assert_eq!(
            controls.command(ManualInput::Forward, DT),
            ManualCommand::Accelerate(10.0)
        );
        assert_eq!(
            controls.command(ManualInput::Reverse, DT),
            ManualCommand::Brake(10.0)
        );
        assert_eq!(
            controls.command(ManualInput::Left, 0.5),
            ManualCommand::Turn(2.0 * PI)
        );
        assert_eq!(
            controls.command(ManualInput::Right, 0.5),
            ManualCommand::Turn(-2.0 * PI)
        );
    }
}
