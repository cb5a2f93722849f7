//! Snapshot of what the calculator shows.
//!
//! The presentation layer only ever sees a [`Readout`]; it never reaches
//! into the engine or reformats the display text.

use crate::calculator::CalculatorEngine;
use serde::Serialize;

/// Display text and status indicators after a press.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readout {
    /// The full display text as produced by the engine.
    pub display: String,
    /// The part of the display that fits on the panel.
    pub visible: String,
    /// Whether the `M` indicator is lit.
    pub memory_set: bool,
    /// Whether the `E` indicator is lit.
    pub error: bool,
}

impl Readout {
    /// Take a snapshot of the engine's current output.
    pub fn from_engine(engine: &CalculatorEngine) -> Self {
        let display = engine.display();
        Self {
            display: display.to_string(),
            visible: engine.policy().visible(display).to_string(),
            memory_set: engine.has_memory(),
            error: engine.is_error(),
        }
    }

    /// The text to copy to the clipboard.
    pub fn text_for_clipboard(&self) -> &str {
        &self.display
    }
}
