//! Controller: translates form events into state updates and re-renders.
//!
//! Holds no state of its own beyond settings. [`Controller::initialize`]
//! hands the view two handlers and is consumed, so wiring happens once.

use crate::model::{self, PasswordOption, PasswordState};
use crate::view::FormView;

/// Mediator between a [`FormView`] and the [`PasswordState`] it edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controller {
    /// Dump the full state at debug level after every length change.
    log_state: bool,
}

impl Controller {
    pub fn new(log_state: bool) -> Self {
        Self { log_state }
    }

    /// Slider moved: store the new length, then show it.
    ///
    /// The view is told the value the state actually holds, which equals
    /// `value` whenever `value` is inside the length range.
    pub fn on_length_change(state: &mut PasswordState, view: &mut dyn FormView, value: u32) {
        let stored = state.update_password_length(value);
        tracing::debug!(value, stored, "password length changed");
        view.render_password_length(stored);
    }

    /// Checkbox toggled: reflect it in the view.
    ///
    /// The flag is not written into the state here.
    pub fn on_options_change(view: &mut dyn FormView, option: PasswordOption) {
        tracing::debug!(%option, "password option toggled");
        view.render_password_options(option);
    }

    /// Render the initial form and attach the event handlers.
    pub fn initialize(self, state: &PasswordState, view: &mut dyn FormView) {
        view.add_handler_page_load(state);

        let log_state = self.log_state;
        view.add_handler_password_length_slider(Box::new(
            move |state: &mut PasswordState, view: &mut dyn FormView, value: u32| {
                Self::on_length_change(state, view, value);
                if log_state {
                    model::log_state(state);
                }
            },
        ));
        view.add_handler_password_options(Box::new(
            |_: &mut PasswordState, view: &mut dyn FormView, option: PasswordOption| {
                Self::on_options_change(view, option);
            },
        ));

        tracing::info!(
            length = state.password_length,
            min = state.length_range.min,
            max = state.length_range.max,
            "form initialized"
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
