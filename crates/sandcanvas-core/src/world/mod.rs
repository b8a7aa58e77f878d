//! World state - the grid and the automaton that moves it

mod ca_update;
mod config;
mod flow;
mod grid;
pub mod rng_trait;
pub mod stats;

pub use ca_update::SandUpdater;
pub use config::{SimConfig, WIND_DRIFT_CHANCE};
pub use flow::FlowMonitor;
pub use grid::Grid;
pub use rng_trait::GrainRng;
pub use stats::{CountingStats, NoopStats, SimStats};
