//! Driver-side glue: interactive creation and the render loop

pub mod interactive;
pub mod simulation;

pub use interactive::{create_board_interactively, parse_address, AddressError, CreatedBoard};
pub use simulation::{RunSummary, Simulation, StopReason};
