//! Terminal output helpers

pub mod display;

pub use display::{BoardFormatter, Color, ColorOutput, CLEAR_SCREEN};
