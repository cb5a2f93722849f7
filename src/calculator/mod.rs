//! The calculator core.
//!
//! This module provides:
//! - The closed button vocabulary and its labels
//! - The engine turning button presses into display state
//! - Display formatting for results
//! - A tokenizer for typed key sequences
//! - Copying the display to the clipboard

mod button;
mod clipboard;
mod engine;
mod format;
mod keys;

pub use button::{Button, ButtonError, Digit, Operator};
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{CalculatorEngine, ERROR_MARKER, EngineError};
pub use format::{DisplayPolicy, parse_display, render_plain, render_scientific};
pub use keys::tokenize;
