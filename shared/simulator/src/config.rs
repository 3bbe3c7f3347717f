use crate::controller::ManualControls;
use crate::error::Error;
use crate::path::PathConfig;
use crate::vehicle::VehicleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TRAIL_INTERVAL: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub vehicle: VehicleConfig,
    pub path: PathConfig,
    pub manual: ManualControls,
    /// Simulated seconds between trail samples.
    pub trail_interval: f64,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            vehicle: VehicleConfig::default(),
            path: PathConfig::default(),
            manual: ManualControls::default(),
            trail_interval: DEFAULT_TRAIL_INTERVAL,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(s: &str) -> Result<SimulationConfig, Error> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<SimulationConfig, Error> {
        let s = std::fs::read_to_string(path)?;
        let config = Self::from_json(&s)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.vehicle.validate()?;
        self.path.validate()?;
        if !(self.trail_interval.is_finite() && self.trail_interval > 0.0) {
            return Err(Error::InvalidTrailInterval(self.trail_interval));
        }
        Ok(())
    }
}
