//! Calculator engine of the desk scene.
//!
//! The engine turns labeled key presses into display text and status
//! flags. Everything visual reads a [`Readout`] after each press.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod readout;
pub mod ui;

pub use calculator::{Button, CalculatorEngine, DisplayPolicy, EngineError, Operator};
pub use readout::Readout;
