//! Pure rendering: map the form screen to ratatui widgets.
//!
//! State in, widgets out; the only effect is Frame::render_widget().

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::{LengthRange, PasswordOption};

use super::state::{Focus, FormScreen};
use super::theme;

/// Width of the slider track in cells.
const SLIDER_WIDTH: usize = 32;

/// Render the form to the terminal frame.
pub fn render(screen: &FormScreen, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // form
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    frame.render_widget(render_title(), chunks[0]);
    render_form(screen, frame, chunks[1]);
    frame.render_widget(render_help(screen.focus), chunks[2]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Password Generator",
        theme::STYLE_TITLE,
    )))
}

/// Help line for the focused row.
fn render_help(focus: Focus) -> Paragraph<'static> {
    let help_text = match focus {
        Focus::Length => "[←/→] length  [PgUp/PgDn] ±5  [Home/End] min/max  [↑/↓] move  [q] quit",
        Focus::Checkbox(_) => "[Space] toggle  [1-4] toggle option  [↑/↓] move  [q] quit",
    };
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// FORM
// ============================================================================

fn render_form(screen: &FormScreen, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];

    let slider_line = Line::from(vec![
        Span::raw("  Length  "),
        Span::styled(slider_bar(screen.length, screen.range), theme::STYLE_SLIDER),
        Span::raw("  "),
        Span::styled(screen.length.to_string(), theme::STYLE_IMPORTANT),
    ]);
    lines.push(if screen.focus == Focus::Length {
        slider_line.style(theme::STYLE_CURSOR)
    } else {
        slider_line
    });
    lines.push(Line::from(Span::styled(
        format!("          {} … {}", screen.range.min, screen.range.max),
        theme::STYLE_DIM,
    )));
    lines.push(Line::from(""));

    for option in PasswordOption::ALL {
        lines.push(checkbox_line(screen, option));
    }

    if screen.checked.enabled().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  ⚠  Select at least one character type",
            theme::STYLE_WARNING,
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn checkbox_line(screen: &FormScreen, option: PasswordOption) -> Line<'static> {
    let checkbox = if screen.checked.get(option) {
        Span::styled("[x] ", theme::STYLE_CHECKED)
    } else {
        Span::styled("[ ] ", theme::STYLE_UNCHECKED)
    };

    let line = Line::from(vec![
        Span::styled(format!("  {} ", option.position()), theme::STYLE_INTERACTIVE),
        checkbox,
        Span::raw(option.label()),
    ]);

    if screen.focus == Focus::Checkbox(option) {
        line.style(theme::STYLE_CURSOR)
    } else {
        line
    }
}

/// Text slider: "[██████░░░░░░]", filled in proportion to the position of
/// `value` within the range.
fn slider_bar(value: u32, range: LengthRange) -> String {
    let span = range.max.saturating_sub(range.min) as usize;
    let offset = range.clamp(value).saturating_sub(range.min) as usize;
    let filled = if span == 0 {
        SLIDER_WIDTH
    } else {
        offset * SLIDER_WIDTH / span
    };
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(SLIDER_WIDTH - filled)
    )
}

// ============================================================================
// TESTS
// ============================================================================
