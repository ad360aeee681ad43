//! Terminal Game of Life
//!
//! A square, hard-edged Conway's Game of Life board with JSON persistence,
//! a two-phase rule engine and a small terminal driver.

pub mod config;
pub mod game_of_life;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Board, RuleEngine};
pub use session::Simulation;

use anyhow::Result;

/// Main entry point: run the board named in the settings until a stop condition
pub fn run_simulation(settings: Settings) -> Result<session::RunSummary> {
    let mut simulation = Simulation::new(settings)?;
    simulation.run(&mut std::io::stdout().lock())
}
