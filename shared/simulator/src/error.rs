#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vehicle mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("friction factor must be in (0, 1], got {0}")]
    InvalidFrictionFactor(f64),

    #[error("steering sensitivity must be positive and finite, got {0}")]
    InvalidSteeringSensitivity(f64),

    #[error("invalid path config: {0}")]
    InvalidPathConfig(String),

    #[error("trail interval must be positive and finite, got {0}")]
    InvalidTrailInterval(f64),

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),

    #[error("config error")]
    Config(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
