//! The closed keypad vocabulary.
//!
//! Every press reaching the engine is one of these buttons. Labels coming
//! from the outside world are validated here, so an unknown label is an
//! explicit error instead of stray display text.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning labels into buttons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ButtonError {
    #[error("unknown button label: {0:?}")]
    UnknownLabel(String),
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol printed on the key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator with plain IEEE arithmetic.
    ///
    /// Division by zero is not special-cased here; the engine checks the
    /// right-hand operand before calling this.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A digit key's value, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// `None` outside `0..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        DIGITS[usize::from(self.0)]
    }
}

/// One key on the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    ToggleSign,
    Percent,
    AllClear,
    Delete,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    MemoryClear,
}

impl Button {
    /// The physical keypad, top row first.
    pub const KEYPAD: [Button; 24] = [
        Button::MemoryRecall,
        Button::MemoryAdd,
        Button::MemorySubtract,
        Button::MemoryClear,
        Button::Percent,
        Button::Digit(Digit(1)),
        Button::Digit(Digit(2)),
        Button::Digit(Digit(3)),
        Button::Delete,
        Button::AllClear,
        Button::Digit(Digit(4)),
        Button::Digit(Digit(5)),
        Button::Digit(Digit(6)),
        Button::Operator(Operator::Add),
        Button::Operator(Operator::Subtract),
        Button::Digit(Digit(7)),
        Button::Digit(Digit(8)),
        Button::Digit(Digit(9)),
        Button::Operator(Operator::Multiply),
        Button::Operator(Operator::Divide),
        Button::Digit(Digit(0)),
        Button::Decimal,
        Button::ToggleSign,
        Button::Equals,
    ];

    /// Build a digit button, `None` outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// The canonical label printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => d.label(),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::ToggleSign => "±",
            Self::Percent => "%",
            Self::AllClear => "AC",
            Self::Delete => "DEL",
            Self::MemoryRecall => "MR",
            Self::MemoryAdd => "M+",
            Self::MemorySubtract => "M-",
            Self::MemoryClear => "MC",
        }
    }

    /// Whether this key clears an error instead of being swallowed by it.
    pub fn clears_error(self) -> bool {
        matches!(self, Self::AllClear | Self::Delete)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Button {
    type Err = ButtonError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let button = match label {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            // Hyphen-minus for keyboards, U+2212 as printed on the key
            "−" | "-" => Self::Operator(Operator::Subtract),
            "×" | "*" | "x" => Self::Operator(Operator::Multiply),
            "÷" | "/" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "±" => Self::ToggleSign,
            "%" => Self::Percent,
            "AC" => Self::AllClear,
            "DEL" => Self::Delete,
            "MR" => Self::MemoryRecall,
            "M+" => Self::MemoryAdd,
            "M-" | "M−" => Self::MemorySubtract,
            "MC" => Self::MemoryClear,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(Digit(c as u8 - b'0')),
                    _ => return Err(ButtonError::UnknownLabel(label.to_string())),
                }
            }
        };
        Ok(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_labels_parse_back() {
        for button in Button::KEYPAD {
            assert_eq!(button.label().parse::<Button>(), Ok(button));
        }
    }

    #[test]
    fn test_keyboard_aliases() {
        assert_eq!("-".parse(), Ok(Button::Operator(Operator::Subtract)));
        assert_eq!("*".parse(), Ok(Button::Operator(Operator::Multiply)));
        assert_eq!("x".parse(), Ok(Button::Operator(Operator::Multiply)));
        assert_eq!("/".parse(), Ok(Button::Operator(Operator::Divide)));
    }

    #[test]
    fn test_unknown_labels_rejected() {
        for label in ["", "10", "a", "sqrt", "ac", "M", "=="] {
            assert_eq!(
                label.parse::<Button>(),
                Err(ButtonError::UnknownLabel(label.to_string()))
            );
        }
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Button::digit(7), Some(Button::Digit(Digit(7))));
        assert_eq!(Button::digit(10), None);
        assert_eq!(Digit::new(42), None);
        assert_eq!(Button::digit(9).map(Button::label), Some("9"));
        assert_eq!(Digit::new(3).map(Digit::as_char), Some('3'));
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(12.0, 8.0), 20.0);
        assert_eq!(Operator::Subtract.apply(2.0, 8.0), -6.0);
        assert_eq!(Operator::Multiply.apply(6.0, 2.0), 12.0);
        assert_eq!(Operator::Divide.apply(1.0, 4.0), 0.25);
    }
}
