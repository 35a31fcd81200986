//! The view contract: rendering hooks plus one registration method per
//! event kind.
//!
//! Handlers get the state and the view as explicit arguments at dispatch
//! time instead of capturing shared mutable references. A view stores the
//! handlers it is given in a [`Handlers`] table and calls them through
//! [`fire_length`] / [`fire_option`] when its input fires.

use crate::model::{OptionFlags, PasswordOption, PasswordState};

/// Called when the length slider moves, with the new slider value.
pub type LengthHandler = Box<dyn FnMut(&mut PasswordState, &mut dyn FormView, u32)>;

/// Called when an option checkbox is toggled, with the option's identifier.
pub type OptionsHandler = Box<dyn FnMut(&mut PasswordState, &mut dyn FormView, PasswordOption)>;

/// A form that can render password parameters and report edits to them.
pub trait FormView {
    /// Render the whole form from a state snapshot.
    fn add_handler_page_load(&mut self, state: &PasswordState);

    /// Register the handler for slider movement. Replaces any previous one.
    fn add_handler_password_length_slider(&mut self, handler: LengthHandler);

    /// Register the handler for checkbox toggles. Replaces any previous one.
    fn add_handler_password_options(&mut self, handler: OptionsHandler);

    /// Reflect a new length value in the slider.
    fn render_password_length(&mut self, value: u32);

    /// Reflect a toggled option's checked state.
    fn render_password_options(&mut self, option: PasswordOption);
}

// ============================================================================
// HANDLER TABLE
// ============================================================================

/// Registered event handlers, one slot per event kind.
#[derive(Default)]
pub struct Handlers {
    length: Option<LengthHandler>,
    options: Option<OptionsHandler>,
}

impl Handlers {
    pub fn set_length(&mut self, handler: LengthHandler) {
        self.length = Some(handler);
    }

    pub fn set_options(&mut self, handler: OptionsHandler) {
        self.options = Some(handler);
    }

    /// Number of event kinds with a handler attached.
    pub fn registered(&self) -> usize {
        usize::from(self.length.is_some()) + usize::from(self.options.is_some())
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("length", &self.length.is_some())
            .field("options", &self.options.is_some())
            .finish()
    }
}

/// Invoke the view's slider handler. Returns false if none is registered.
///
/// The handler is taken out of its slot for the duration of the call so it
/// can receive the view mutably. A replacement registered during the call
/// wins over the one being restored.
pub fn fire_length<V>(view: &mut V, state: &mut PasswordState, value: u32) -> bool
where
    V: FormView + AsMut<Handlers>,
{
    let Some(mut handler) = view.as_mut().length.take() else {
        tracing::trace!(value, "slider moved with no handler registered");
        return false;
    };
    let form: &mut dyn FormView = &mut *view;
    handler(state, form, value);
    view.as_mut().length.get_or_insert(handler);
    true
}

/// Invoke the view's options handler. Returns false if none is registered.
pub fn fire_option<V>(view: &mut V, state: &mut PasswordState, option: PasswordOption) -> bool
where
    V: FormView + AsMut<Handlers>,
{
    let Some(mut handler) = view.as_mut().options.take() else {
        tracing::trace!(%option, "option toggled with no handler registered");
        return false;
    };
    let form: &mut dyn FormView = &mut *view;
    handler(state, form, option);
    view.as_mut().options.get_or_insert(handler);
    true
}

// ============================================================================
// HEADLESS VIEW
// ============================================================================

/// A view with no output device.
///
/// Keeps what a real form would display, so scripted edits can be driven
/// through the controller without a terminal.
#[derive(Debug, Default)]
pub struct HeadlessView {
    /// Value shown on the slider.
    pub length: u32,
    /// Checkbox states as displayed.
    pub checked: OptionFlags,
    handlers: Handlers,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user moving the slider to `value`.
    pub fn slide_to(&mut self, state: &mut PasswordState, value: u32) -> bool {
        fire_length(self, state, value)
    }

    /// Simulate the user clicking an option's checkbox.
    pub fn click(&mut self, state: &mut PasswordState, option: PasswordOption) -> bool {
        fire_option(self, state, option)
    }
}

impl AsMut<Handlers> for HeadlessView {
    fn as_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }
}

impl FormView for HeadlessView {
    fn add_handler_page_load(&mut self, state: &PasswordState) {
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
        let now = !self.checked.get(option);
        self.checked.set(option, now);
    }
}

// ============================================================================
// TESTS
// ============================================================================
