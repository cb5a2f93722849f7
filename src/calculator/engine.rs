//! The calculator state machine.
//!
//! Turns a stream of button presses into a display string, an
//! accumulator/operator pair, a memory register and a latched error flag.

use super::button::{Button, ButtonError, Digit, Operator};
use super::format::{DisplayPolicy, digit_count, parse_display};
use thiserror::Error;

/// Text shown while the error flag is latched.
pub const ERROR_MARKER: &str = "Error";

/// Failures of the `press` contract. Arithmetic errors are not among
/// them: those are display state, see [`CalculatorEngine::is_error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ButtonError),
}

/// Four-function calculator with memory, percent and sign keys.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    awaiting_operand: bool,
    memory: Option<f64>,
    error: bool,
    policy: DisplayPolicy,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::with_policy(DisplayPolicy::default())
    }

    pub fn with_policy(policy: DisplayPolicy) -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            awaiting_operand: false,
            memory: None,
            error: false,
            policy,
        }
    }

    /// Press the key with the given label.
    ///
    /// Unknown labels are rejected without touching any state.
    pub fn press(&mut self, label: &str) -> Result<(), EngineError> {
        let button = label.parse::<Button>().map_err(|e| {
            tracing::warn!("Rejected button press: {}", e);
            e
        })?;
        self.press_button(button);
        Ok(())
    }

    /// Apply a single key press.
    pub fn press_button(&mut self, button: Button) {
        tracing::debug!(%button, display = %self.display, "press");

        if self.error && !button.clears_error() {
            // Any key acknowledges the error and is otherwise swallowed
            self.clear_error();
            self.awaiting_operand = false;
            return;
        }

        match button {
            Button::AllClear => self.all_clear(),
            Button::Delete => self.delete(),
            Button::MemoryRecall => {
                if let Some(memory) = self.memory {
                    self.display = self.policy.render_result(memory);
                    self.awaiting_operand = false;
                }
            }
            Button::MemoryAdd => self.update_memory(Operator::Add),
            Button::MemorySubtract => self.update_memory(Operator::Subtract),
            Button::MemoryClear => self.memory = None,
            Button::ToggleSign => self.toggle_sign(),
            Button::Percent => {
                self.display = self.policy.render_result(self.current_value() / 100.0);
            }
            Button::Equals => self.evaluate(),
            Button::Operator(op) => {
                // Re-pressing an operator replaces it, no intermediate evaluation
                self.accumulator = Some(self.current_value());
                self.pending = Some(op);
                self.awaiting_operand = true;
            }
            Button::Decimal => self.push_decimal(),
            Button::Digit(d) => self.push_digit(d),
        }
    }

    /// The current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Whether the memory register holds a value.
    pub fn has_memory(&self) -> bool {
        self.memory.is_some()
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Whether the next digit starts a new operand.
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn policy(&self) -> &DisplayPolicy {
        &self.policy
    }

    fn current_value(&self) -> f64 {
        parse_display(&self.display)
    }

    fn clear_error(&mut self) {
        self.display = "0".to_string();
        self.error = false;
    }

    fn all_clear(&mut self) {
        self.display = "0".to_string();
        self.accumulator = None;
        self.pending = None;
        self.awaiting_operand = false;
        self.error = false;
    }

    fn delete(&mut self) {
        if self.error {
            self.clear_error();
            return;
        }

        if self.display.chars().count() > 1 {
            self.display.pop();
            if self.display.is_empty() || self.display == "-" {
                self.display = "0".to_string();
            }
        } else {
            self.display = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        match self.display.strip_prefix('-') {
            Some(rest) => self.display = rest.to_string(),
            None => self.display.insert(0, '-'),
        }
    }

    fn evaluate(&mut self) {
        let (Some(lhs), Some(op)) = (self.accumulator, self.pending) else {
            return;
        };
        let rhs = self.current_value();

        let result = if op == Operator::Divide && rhs == 0.0 {
            None
        } else {
            Some(op.apply(lhs, rhs)).filter(|value| value.is_finite())
        };

        match result {
            Some(value) => {
                self.display = self.policy.render_result(value);
                self.accumulator = None;
                self.pending = None;
                self.awaiting_operand = true;
            }
            None => {
                tracing::warn!("Arithmetic error evaluating {} {} {}", lhs, op, rhs);
                self.enter_error();
            }
        }
    }

    /// Fold the display into memory. A result outside the floating range
    /// latches the error and leaves memory as it was.
    fn update_memory(&mut self, op: Operator) {
        let current = self.memory.unwrap_or(0.0);
        let updated = op.apply(current, self.current_value());

        if updated.is_finite() {
            self.memory = Some(updated);
            self.awaiting_operand = true;
        } else {
            tracing::warn!("Memory overflow: {} {} {}", current, op, self.display);
            self.enter_error();
        }
    }

    fn enter_error(&mut self) {
        self.display = ERROR_MARKER.to_string();
        self.error = true;
        self.accumulator = None;
        self.pending = None;
        self.awaiting_operand = true;
    }

    fn push_decimal(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn push_digit(&mut self, digit: Digit) {
        let ch = digit.as_char();

        if self.awaiting_operand {
            self.display = ch.to_string();
            self.awaiting_operand = false;
        } else if digit_count(&self.display) >= self.policy.digit_cap {
            tracing::trace!("Digit cap reached, ignoring {}", ch);
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }
}
