//! State report formatting.
//!
//! Pure functions: (PasswordState, OutputFormat) → String.

use crate::model::{PasswordOption, PasswordState};

/// Output format for the state report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Human,
    /// Pretty-printed JSON of the full state.
    Json,
}

/// Format the state for printing.
pub fn format_state(state: &PasswordState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(state),
        OutputFormat::Json => format_json(state),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(state: &PasswordState) -> String {
    let range = state.length_range;
    let mut out = String::new();

    out.push_str("=== Password Settings ===\n");
    out.push_str(&format!(
        "Length:   {} (range {}..={})\n",
        state.password_length, range.min, range.max
    ));
    out.push_str("Options:\n");
    for option in PasswordOption::ALL {
        let mark = if state.options.get(option) { "x" } else { " " };
        out.push_str(&format!("  [{}] {}\n", mark, option.name()));
    }

    if state.options.enabled().is_empty() {
        out.push_str("\nNote: no character classes enabled\n");
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(state: &PasswordState) -> String {
    // Plain structs of integers and bools; serialization cannot fail.
    let mut json = serde_json::to_string_pretty(state).unwrap_or_default();
    json.push('\n');
    json
}

// ============================================================================
// TESTS
// ============================================================================
