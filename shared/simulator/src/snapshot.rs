use crate::color::Palette;
use crate::debug::Line;
use crate::geometry::{null, Vec2, Vec2Ext};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub tick: u64,
    pub time: f64,
    pub seed: u32,
    pub lap: u64,
    pub progress: f64,
    pub manual_override: bool,
    pub vehicle: VehicleSnapshot,
    /// Loop vertices with the first vertex repeated at the end.
    pub target_path: Vec<Vec2>,
    pub target: Vec2,
    pub trail: Vec<Vec2>,
    pub debug_lines: Vec<Line>,
    pub palette: Palette,
    pub timing: Timing,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VehicleSnapshot {
    pub position: Vec2,
    /// Heading frame.
    pub velocity: Vec2,
    /// Heading frame.
    pub acceleration: Vec2,
    pub rotation: f64,
    /// Local frame.
    pub turn_center: Vec2,
    /// World-space body outline, closed.
    pub outline: Vec<Vec2>,
}

/// Seconds spent in each phase of the last step.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Timing {
    pub path: f64,
    pub control: f64,
    pub physics: f64,
}

impl Timing {
    pub fn total(&self) -> f64 {
        self.path + self.control + self.physics
    }
}

impl std::ops::Add for Timing {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            path: self.path + other.path,
            control: self.control + other.control,
            physics: self.physics + other.physics,
        }
    }
}

impl std::ops::AddAssign for Timing {
    fn add_assign(&mut self, other: Self) {
        *self = self.clone() + other;
    }
}

impl std::ops::Mul<f64> for Timing {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            path: self.path * other,
            control: self.control * other,
            physics: self.physics * other,
        }
    }
}

/// Extrapolates the vehicle forward by `dt` at its current velocity, for
/// rendering between simulation steps.
pub fn interpolate(snapshot: &mut Snapshot, dt: f64) {
    snapshot.time += dt;

    let vehicle = &mut snapshot.vehicle;
    let displacement = vehicle
        .velocity
        .scale(dt)
        .rotate_around(&null(), vehicle.rotation);
    vehicle.position += displacement;
    for point in vehicle.outline.iter_mut() {
        *point += displacement;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_log::test;

    #[test]
    fn test_timing_average() {
        let mut sum = Timing::default();
        sum += Timing {
            path: 1.0,
            control: 2.0,
            physics: 3.0,
        };
        sum += Timing {
            path: 3.0,
            control: 0.0,
            physics: 1.0,
        };
        let mean = sum * 0.5;
        assert_abs_diff_eq!(mean.path, 2.0);
        assert_abs_diff_eq!(mean.control, 1.0);
        assert_abs_diff_eq!(mean.physics, 2.0);
        assert_abs_diff_eq!(mean.total(), 5.0);
    }
}
