use crate::error::Error;
use crate::geometry::{null, unit_x, vec2, Polygon, Vec2, Vec2Ext};
use serde::{Deserialize, Serialize};

/// Fraction of the vehicle length the turn center sits behind the centroid.
pub const TURN_CENTER_OFFSET: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub mass: f64,
    /// Width (along the local x axis) and height of the body rectangle.
    pub size: Vec2,
    /// Per-tick decay applied to acceleration, and to velocity when braking.
    pub friction_factor: f64,
    pub steering_sensitivity: f64,
}

impl Default for VehicleConfig {
    fn default() -> VehicleConfig {
        VehicleConfig {
            mass: 1.0,
            size: vec2(100.0, 50.0),
            friction_factor: 0.9999,
            steering_sensitivity: 50.0,
        }
    }
}

impl VehicleConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(Error::InvalidMass(self.mass));
        }
        if !(self.friction_factor > 0.0 && self.friction_factor <= 1.0) {
            return Err(Error::InvalidFrictionFactor(self.friction_factor));
        }
        if !(self.steering_sensitivity.is_finite() && self.steering_sensitivity > 0.0) {
            return Err(Error::InvalidSteeringSensitivity(
                self.steering_sensitivity,
            ));
        }
        Ok(())
    }
}

/// Kinematic car.
///
/// `velocity` and `acceleration` live in the heading frame. Only the
/// displacement of each tick is rotated into world space, so the car always
/// travels along its own forward axis.
#[derive(Clone, Debug)]
pub struct VehicleModel {
    size: Vec2,
    bounds_local: Polygon,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    rotation: f64,
    mass: f64,
    friction_factor: f64,
    steering_sensitivity: f64,
}

impl VehicleModel {
    pub fn new(config: &VehicleConfig, position: Vec2) -> Result<VehicleModel, Error> {
        config.validate()?;
        Ok(VehicleModel {
            size: config.size,
            bounds_local: Polygon::rectangle(config.size),
            position,
            velocity: null(),
            acceleration: null(),
            rotation: 0.0,
            mass: config.mass,
            friction_factor: config.friction_factor,
            steering_sensitivity: config.steering_sensitivity,
        })
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force.scale(1.0 / self.mass);
    }

    pub fn accelerate(&mut self, delta: f64) {
        self.apply_force(unit_x().scale(delta));
    }

    /// Bleeds off motion through friction. The magnitude is ignored: the
    /// slowdown per call is fixed by the friction factor and sensitivity.
    pub fn brake(&mut self, _delta: f64) {
        self.acceleration = self
            .acceleration
            .scale(self.friction_factor / self.steering_sensitivity);
        self.velocity = self.velocity.scale(self.friction_factor);
    }

    pub fn turn(&mut self, delta: f64) {
        self.rotation += delta * self.steering_sensitivity;
    }

    /// Pivot in the local frame: the body centroid shifted toward the rear.
    pub fn turn_center(&self) -> Vec2 {
        self.bounds_local
            .translate(&null().add_x(&self.size.scale(-TURN_CENTER_OFFSET)))
            .center()
    }

    /// The turn center in world coordinates.
    pub fn pivot(&self) -> Vec2 {
        self.position + self.turn_center()
    }

    /// Unit direction of travel in world coordinates, or zero when stopped.
    pub fn heading(&self) -> Vec2 {
        self.velocity
            .normalize_or_zero()
            .rotate_around(&null(), self.rotation)
    }

    /// Body outline in world coordinates.
    pub fn bounds_world(&self) -> Polygon {
        self.bounds_local
            .rotate_around(&self.turn_center(), self.rotation)
            .translate(&self.position)
    }

    pub fn update(&mut self, dt: f64) {
        // Friction is applied per tick, not per second.
        self.acceleration = self.acceleration.scale(self.friction_factor);
        self.velocity += self.acceleration.scale(dt);
        self.position += self
            .velocity
            .scale(dt)
            .rotate_around(&null(), self.rotation);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds_local(&self) -> &Polygon {
        &self.bounds_local
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn friction_factor(&self) -> f64 {
        self.friction_factor
    }

    pub fn steering_sensitivity(&self) -> f64 {
        self.steering_sensitivity
    }
}
