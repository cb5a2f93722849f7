//! Text rendering of the calculator's LCD panel.
//!
//! Renders the visible digits right-aligned, with the `M` (memory) and
//! `E` (error) indicators on the left like the panel on the desk model.

use crate::readout::Readout;

/// Render the panel as a framed, three-line block.
pub fn render_lcd(readout: &Readout, panel_width: usize) -> String {
    let memory = if readout.memory_set { 'M' } else { ' ' };
    let error = if readout.error { 'E' } else { ' ' };

    let row = format!(
        " {} {} {:>width$} ",
        memory,
        error,
        readout.visible,
        width = panel_width
    );
    let border = "─".repeat(row.chars().count());

    format!("┌{border}┐\n│{row}│\n└{border}┘")
}

/// Render the panel on a single line, for per-press traces.
pub fn render_inline(readout: &Readout, panel_width: usize) -> String {
    let memory = if readout.memory_set { 'M' } else { '.' };
    let error = if readout.error { 'E' } else { '.' };
    format!(
        "[{}{}] {:>width$}",
        memory,
        error,
        readout.visible,
        width = panel_width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readout(visible: &str, memory_set: bool, error: bool) -> Readout {
        Readout {
            display: visible.to_string(),
            visible: visible.to_string(),
            memory_set,
            error,
        }
    }

    #[test]
    fn test_lcd_layout() {
        let lcd = render_lcd(&readout("20", false, false), 10);
        let lines: Vec<&str> = lcd.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "│             20 │");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[2].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_lcd_indicators() {
        let lcd = render_lcd(&readout("Error", true, true), 10);
        assert!(lcd.contains("│ M E      Error │"));
    }

    #[test]
    fn test_inline() {
        assert_eq!(render_inline(&readout("7", true, false), 4), "[M.]    7");
    }
}
