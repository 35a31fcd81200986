//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: enabled option
//! - Yellow: warning (no character class enabled)
//! - Cyan: interactive elements (slider fill, keybinding hints)
//! - Dim: de-emphasized (range bounds, disabled options)
//! - Bold: important (current length)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Warning / attention needed: yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Focused row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Checkbox: checked.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Checkbox: unchecked.
pub const STYLE_UNCHECKED: Style = Style::new().fg(Color::DarkGray);

/// Slider fill.
pub const STYLE_SLIDER: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_WARNING.fg, Some(Color::Yellow));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
        assert_eq!(STYLE_CHECKED.fg, Some(Color::Green));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}
