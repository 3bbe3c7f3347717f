pub mod color;
pub mod config;
pub mod controller;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod path;
pub mod rng;
pub mod simulation;
pub mod snapshot;
pub mod vehicle;

pub use error::Error;
