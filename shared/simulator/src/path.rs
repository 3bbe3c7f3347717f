use crate::error::Error;
use crate::geometry::{vec2, Polygon, Vec2};
use crate::rng::{new_rng, SeededRng};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub vertex_count: usize,
    /// Lower-left corner of the region vertices are drawn from.
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
    /// Simulated seconds the target takes to go once around the loop.
    pub lap_seconds: f64,
}

impl Default for PathConfig {
    fn default() -> PathConfig {
        PathConfig {
            vertex_count: 8,
            origin: vec2(100.0, 100.0),
            width: 1000.0,
            height: 600.0,
            lap_seconds: 60.0,
        }
    }
}

impl PathConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.vertex_count == 0 {
            return Err(Error::InvalidPathConfig(
                "vertex_count must be at least 1".to_string(),
            ));
        }
        if !(self.origin.x.is_finite() && self.origin.y.is_finite()) {
            return Err(Error::InvalidPathConfig(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("lap_seconds", self.lap_seconds),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidPathConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        // The sampling range must stay finite and non-empty once added to the
        // origin.
        for (axis, low, extent) in [
            ("x", self.origin.x, self.width),
            ("y", self.origin.y, self.height),
        ] {
            let high = low + extent;
            if !(high.is_finite() && high > low) {
                return Err(Error::InvalidPathConfig(format!(
                    "region along {axis} from {low} by {extent} is empty or unbounded"
                )));
            }
        }
        Ok(())
    }
}

/// Returns `count` vertices drawn uniformly from
/// `[x, x + width) x [y, y + height)`.
///
/// Panics if `width` or `height` is not positive.
pub fn generate_random_path(
    count: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rng: &mut impl Rng,
) -> Polygon {
    (0..count)
        .map(|_| vec2(rng.gen_range(x..x + width), rng.gen_range(y..y + height)))
        .collect::<Vec<_>>()
        .into()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Continue,
    /// Progress passed the end of the loop and a new loop was generated.
    Wrapped,
}

pub struct PathGenerator {
    config: PathConfig,
    rng: SeededRng,
    target_path: Polygon,
    progress: f64,
    lap: u64,
}

impl PathGenerator {
    pub fn new(config: PathConfig, seed: u32) -> Result<PathGenerator, Error> {
        config.validate()?;
        let mut rng = new_rng(seed);
        let target_path = generate(&config, &mut rng);
        Ok(PathGenerator {
            config,
            rng,
            target_path,
            progress: 0.0,
            lap: 0,
        })
    }

    /// Moves the target along the loop. Once progress passes 1 the loop is
    /// replaced and progress restarts at 0.
    pub fn advance(&mut self, dt: f64) -> Advance {
        self.progress += dt / self.config.lap_seconds;
        if self.progress > 1.0 {
            self.regenerate();
            Advance::Wrapped
        } else {
            Advance::Continue
        }
    }

    pub fn regenerate(&mut self) {
        self.target_path = generate(&self.config, &mut self.rng);
        self.progress = 0.0;
        self.lap += 1;
        log::debug!(
            "Generated loop {} with perimeter {:.1}",
            self.lap,
            self.target_path.perimeter()
        );
    }

    pub fn current_target(&self) -> Vec2 {
        self.target_path.interpolate(self.progress)
    }

    pub fn start(&self) -> Vec2 {
        self.target_path.interpolate(0.0)
    }

    pub fn target_path(&self) -> &Polygon {
        &self.target_path
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn lap(&self) -> u64 {
        self.lap
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }
}

fn generate(config: &PathConfig, rng: &mut SeededRng) -> Polygon {
    generate_random_path(
        config.vertex_count,
        config.origin.x,
        config.origin.y,
        config.width,
        config.height,
        rng,
    )
}
