//! Display formatting policy.
//!
//! Numbers written into the display are rendered in plain decimal, and
//! switch to normalized scientific notation once the plain text would not
//! fit within the digit cap.

use serde::Deserialize;

/// How numbers are written into the display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayPolicy {
    /// Maximum number of digits an operand may be typed with. Rendered
    /// results longer than this many characters use scientific notation.
    pub digit_cap: usize,
    /// Fractional digits of the mantissa in scientific notation.
    pub exponent_precision: usize,
    /// Characters the LCD panel can show at once.
    pub panel_width: usize,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            digit_cap: 10,
            exponent_precision: 4,
            panel_width: 10,
        }
    }
}

impl DisplayPolicy {
    /// Render an arithmetic result, falling back to scientific notation
    /// when the plain form is too long.
    pub fn render_result(&self, value: f64) -> String {
        let plain = render_plain(value);
        if plain.chars().count() > self.digit_cap {
            render_scientific(value, self.exponent_precision)
        } else {
            plain
        }
    }

    /// Clip display text to what the panel can show.
    pub fn visible<'a>(&self, display: &'a str) -> &'a str {
        match display.char_indices().nth(self.panel_width) {
            Some((end, _)) => &display[..end],
            None => display,
        }
    }
}

/// Shortest decimal text that reads back as the same value.
pub fn render_plain(value: f64) -> String {
    if value == 0.0 {
        // Covers negative zero as well
        return "0".to_string();
    }
    format!("{}", value)
}

/// Normalized scientific notation with an explicit exponent sign,
/// e.g. `1.2346e+10`.
pub fn render_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Read the numeric value currently shown.
///
/// A trailing decimal point is accepted (`"5."` is five). Text that is not
/// a number reads as NaN, which the arithmetic path turns into an error.
pub fn parse_display(display: &str) -> f64 {
    display.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Number of digit characters, ignoring sign and decimal point.
pub fn digit_count(display: &str) -> usize {
    display.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering() {
        assert_eq!(render_plain(20.0), "20");
        assert_eq!(render_plain(0.5), "0.5");
        assert_eq!(render_plain(-9.0), "-9");
        assert_eq!(render_plain(-0.0), "0");
        assert_eq!(render_plain(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_result_switches_to_scientific() {
        let policy = DisplayPolicy::default();
        assert_eq!(policy.render_result(9_999_800_001.0), "9999800001");
        assert_eq!(policy.render_result(12_345_600_000.0), "1.2346e+10");
        assert_eq!(policy.render_result(2.0 / 3.0), "6.6667e-1");
        assert_eq!(policy.render_result(-12_345_600_000.0), "-1.2346e+10");
    }

    #[test]
    fn test_custom_precision() {
        let policy = DisplayPolicy {
            exponent_precision: 2,
            ..DisplayPolicy::default()
        };
        assert_eq!(policy.render_result(12_345_600_000.0), "1.23e+10");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("5."), 5.0);
        assert_eq!(parse_display("-0.25"), -0.25);
        assert_eq!(parse_display("1.2346e+10"), 12_346_000_000.0);
        assert!(parse_display("Error").is_nan());
    }

    #[test]
    fn test_visible_clips_to_panel() {
        let policy = DisplayPolicy::default();
        assert_eq!(policy.visible("-1.2346e+10"), "-1.2346e+1");
        assert_eq!(policy.visible("42"), "42");
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("-12.5"), 3);
        assert_eq!(digit_count("0."), 1);
    }
}
