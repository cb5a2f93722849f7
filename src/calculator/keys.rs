//! Key-sequence tokenizer.
//!
//! Splits typed input such as `12+8=` or `7 M+ AC MR` into buttons so a
//! whole session can be replayed from one line of text.

use super::button::{Button, ButtonError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One key label per match. Multi-character labels come first so that
    /// `M-` is not read as `M` followed by a minus.
    static ref KEY_LABEL: Regex = Regex::new(
        r"^(?:AC|DEL|MR|MC|M\+|M-|M−|[0-9]|[.+\-−*/×÷x=±%])"
    ).unwrap();
}

/// Tokenize a key sequence. Whitespace separates nothing and is skipped.
pub fn tokenize(input: &str) -> Result<Vec<Button>, ButtonError> {
    let mut buttons = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let Some(found) = KEY_LABEL.find(rest) else {
            let bad: String = rest.chars().take_while(|c| !c.is_whitespace()).collect();
            return Err(ButtonError::UnknownLabel(bad));
        };
        buttons.push(found.as_str().parse()?);
        rest = rest[found.end()..].trim_start();
    }

    Ok(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    fn digit(value: u8) -> Button {
        Button::digit(value).unwrap()
    }

    #[test]
    fn test_compact_sequence() {
        let buttons = tokenize("12+8=").unwrap();
        assert_eq!(
            buttons,
            vec![
                digit(1),
                digit(2),
                Button::Operator(Operator::Add),
                digit(8),
                Button::Equals,
            ]
        );
    }

    #[test]
    fn test_memory_labels_are_not_split() {
        let buttons = tokenize("7 M+ AC MR M- MC").unwrap();
        assert_eq!(
            buttons,
            vec![
                digit(7),
                Button::MemoryAdd,
                Button::AllClear,
                Button::MemoryRecall,
                Button::MemorySubtract,
                Button::MemoryClear,
            ]
        );
    }

    #[test]
    fn test_unicode_keys() {
        let buttons = tokenize("6×2÷3−1±%").unwrap();
        assert_eq!(buttons.len(), 9);
        assert_eq!(buttons[7], Button::ToggleSign);
        assert_eq!(buttons[8], Button::Percent);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_text_rejected() {
        assert_eq!(
            tokenize("2 + sqrt 4"),
            Err(ButtonError::UnknownLabel("sqrt".to_string()))
        );
        assert_eq!(
            tokenize("DELETE"),
            Err(ButtonError::UnknownLabel("ETE".to_string()))
        );
    }
}
