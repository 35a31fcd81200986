//! Terminal form state: what the screen shows, independent of the model.
//!
//! Like DOM inputs, the widgets hold their own displayed values. They only
//! change through the [`FormView`] rendering hooks, which the controller
//! drives. Focus is purely local and never reaches the controller.

use crate::model::{LengthRange, OptionFlags, PasswordOption, PasswordState};
use crate::view::{FormView, Handlers, LengthHandler, OptionsHandler};

// ============================================================================
// FOCUS
// ============================================================================

/// The focused row. Rows run top to bottom: slider, then each option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Length,
    Checkbox(PasswordOption),
}

impl Focus {
    /// All rows in display order.
    pub fn rows() -> impl Iterator<Item = Focus> {
        std::iter::once(Focus::Length).chain(PasswordOption::ALL.into_iter().map(Focus::Checkbox))
    }

    fn index(self) -> usize {
        Self::rows().position(|f| f == self).unwrap_or(0)
    }

    /// Row below, staying on the last row.
    pub fn next(self) -> Focus {
        Self::rows().nth(self.index() + 1).unwrap_or(self)
    }

    /// Row above, staying on the first row.
    pub fn prev(self) -> Focus {
        match self.index() {
            0 => self,
            i => Self::rows().nth(i - 1).unwrap_or(self),
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Focus the row above.
    MoveUp,
    /// Focus the row below.
    MoveDown,
    /// Nudge the slider up by the given step.
    Increase(u32),
    /// Nudge the slider down by the given step.
    Decrease(u32),
    /// Jump the slider to its minimum.
    Minimum,
    /// Jump the slider to its maximum.
    Maximum,
    /// Toggle the focused checkbox.
    Toggle,
    /// Toggle an option by its 1-based position (number keys).
    NumberKey(u8),
    /// Leave the form.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// What an action means for the current screen.
///
/// Produced by the pure [`update`](super::update::update) function and
/// carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to do.
    Stay,
    /// Move focus locally.
    Focus(Focus),
    /// The slider input fired with a new value.
    Slide(u32),
    /// A checkbox input fired.
    Toggle(PasswordOption),
    /// Leave the form.
    Quit,
}

// ============================================================================
// SCREEN
// ============================================================================

/// The terminal form: displayed values plus registered handlers.
#[derive(Debug)]
pub struct FormScreen {
    pub focus: Focus,
    /// Value shown on the slider.
    pub length: u32,
    /// Slider bounds.
    pub range: LengthRange,
    /// Checkbox states as displayed.
    pub checked: OptionFlags,
    /// Set when the loop should exit after the next draw.
    pub should_quit: bool,
    handlers: Handlers,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new(LengthRange::default())
    }
}

impl FormScreen {
    /// A blank form with the slider at the range default. Populated for real
    /// by [`FormView::add_handler_page_load`].
    pub fn new(range: LengthRange) -> Self {
        Self {
            focus: Focus::default(),
            length: range.clamp(range.default),
            range,
            checked: OptionFlags::default(),
            should_quit: false,
            handlers: Handlers::default(),
        }
    }

    /// Number of event kinds with a handler attached.
    pub fn handlers_registered(&self) -> usize {
        self.handlers.registered()
    }
}

impl AsMut<Handlers> for FormScreen {
    fn as_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }
}

impl FormView for FormScreen {
    fn add_handler_page_load(&mut self, state: &PasswordState) {
        self.range = state.length_range;
        self.length = state.password_length;
        self.checked = state.options;
    }

    fn add_handler_password_length_slider(&mut self, handler: LengthHandler) {
        self.handlers.set_length(handler);
    }

    fn add_handler_password_options(&mut self, handler: OptionsHandler) {
        self.handlers.set_options(handler);
    }

    fn render_password_length(&mut self, value: u32) {
        self.length = value;
    }

    fn render_password_options(&mut self, option: PasswordOption) {
        let checked = !self.checked.get(option);
        self.checked.set(option, checked);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_walks_all_rows_down_and_stops() {
        let mut focus = Focus::Length;
        let mut seen = vec![focus];
        for _ in 0..10 {
            focus = focus.next();
            if seen.last() != Some(&focus) {
                seen.push(focus);
            }
        }
        assert_eq!(seen, Focus::rows().collect::<Vec<_>>());
        assert_eq!(focus, Focus::Checkbox(PasswordOption::Symbols));
    }

    #[test]
    fn focus_up_at_top_stays() {
        assert_eq!(Focus::Length.prev(), Focus::Length);
        assert_eq!(
            Focus::Checkbox(PasswordOption::Uppercase).prev(),
            Focus::Length
        );
    }

    #[test]
    fn new_screen_starts_on_slider_with_no_handlers() {
        let screen = FormScreen::new(LengthRange { min: 8, max: 20, default: 10 });
        assert_eq!(screen.focus, Focus::Length);
        assert_eq!(screen.length, 10);
        assert_eq!(screen.handlers_registered(), 0);
        assert!(!screen.should_quit);
    }

    #[test]
    fn page_load_populates_widgets_from_state() {
        let mut screen = FormScreen::default();
        let mut state = PasswordState::new(
            LengthRange { min: 6, max: 30, default: 9 },
            OptionFlags {
                uppercase: false,
                lowercase: true,
                numbers: false,
                symbols: true,
            },
        );
        state.update_password_length(25);

        screen.add_handler_page_load(&state);
        assert_eq!(screen.length, 25);
        assert_eq!(screen.range.max, 30);
        assert!(screen.checked.symbols);
        assert!(!screen.checked.uppercase);
    }

    #[test]
    fn render_hooks_update_displayed_values() {
        let mut screen = FormScreen::default();
        screen.render_password_length(33);
        screen.render_password_options(PasswordOption::Symbols);
        assert_eq!(screen.length, 33);
        assert!(screen.checked.symbols);
    }
}
