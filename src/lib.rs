pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod physics;
pub mod render;
pub mod sim;
pub mod vehicle;
pub mod world;

pub use config::SimConfig;
pub use error::ConfigError;
pub use sim::Simulation;
