use crate::color;
use crate::geometry::{null, unit_x, Vec2, Vec2Ext};
use crate::vehicle::VehicleModel;
use nalgebra::{vector, Vector4};
use serde::{Deserialize, Serialize};

const HEADING_LENGTH: f64 = 50.0;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Line {
    pub a: Vec2,
    pub b: Vec2,
    pub color: Vector4<f32>,
}

/// Lines visualizing the vehicle state and what the controller is chasing.
pub fn vehicle_lines(vehicle: &VehicleModel, target: Vec2) -> Vec<Line> {
    let mut lines = Vec::with_capacity(3);
    let p = vehicle.pivot();
    lines.push(Line {
        a: p,
        b: target,
        color: color::from_u24(color::TARGET),
    });
    lines.push(Line {
        a: p,
        b: p + unit_x()
            .scale(HEADING_LENGTH)
            .rotate_around(&null(), vehicle.rotation()),
        color: vector![1.0, 0.2, 0.0, 1.0],
    });
    lines.push(Line {
        a: p,
        b: p + vehicle.velocity().rotate_around(&null(), vehicle.rotation()),
        color: vector![0.0, 0.81, 1.0, 1.0],
    });
    lines
}
