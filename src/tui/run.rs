//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! The only module here with side effects. Wires the pure layers (state,
//! update, view) to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: the loop blocks on the next key, and every handler the
//! controller registered runs to completion before the next draw.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Config;
use crate::controller::Controller;
use crate::model::PasswordState;
use crate::view::{fire_length, fire_option};

use super::state::{Action, FormScreen, Transition};
use super::update::update;
use super::view::render;

/// Slider step for PageUp/PageDown and `[`/`]`.
const COARSE_STEP: u32 = 5;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Focus
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Action::MoveDown),

        // Slider
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Some(Action::Increase(1)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(Action::Decrease(1)),
        KeyCode::PageUp | KeyCode::Char(']') => Some(Action::Increase(COARSE_STEP)),
        KeyCode::PageDown | KeyCode::Char('[') => Some(Action::Decrease(COARSE_STEP)),
        KeyCode::Home => Some(Action::Minimum),
        KeyCode::End => Some(Action::Maximum),

        // Checkboxes
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char(c @ '1'..='4') => Some(Action::NumberKey(c as u8 - b'0')),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// WIRING
// ============================================================================

/// Build the state and screen, and let the controller wire them.
///
/// A starting length, if given, is applied as a slider edit so it flows
/// through the same handler as a keypress.
pub fn wire(config: &Config, start_length: Option<u32>) -> (PasswordState, FormScreen) {
    let mut state = config.initial_state();
    let mut screen = FormScreen::new(config.length);

    Controller::new(config.debug.log_state).initialize(&state, &mut screen);

    if let Some(length) = start_length {
        fire_length(&mut screen, &mut state, length);
    }
    (state, screen)
}

/// Carry out a transition against the screen and state.
pub fn apply(transition: Transition, screen: &mut FormScreen, state: &mut PasswordState) {
    match transition {
        Transition::Stay => {}
        Transition::Focus(focus) => screen.focus = focus,
        Transition::Slide(value) => {
            fire_length(screen, state, value);
        }
        Transition::Toggle(option) => {
            fire_option(screen, state, option);
        }
        Transition::Quit => screen.should_quit = true,
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive form until the user quits.
///
/// Returns the final state so the caller can report it.
pub fn run(config: &Config, start_length: Option<u32>) -> io::Result<PasswordState> {
    let (mut state, mut screen) = wire(config, start_length);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut screen, &mut state);
    restore_terminal()?;
    tracing::info!(length = state.password_length, "form closed");

    result.map(|()| state)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut FormScreen,
    state: &mut PasswordState,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(screen, frame))?;

        if screen.should_quit {
            return Ok(());
        }

        let Event::Key(key) = event::read()? else {
            continue; // redraw on resize, ignore mouse
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key) {
            Some(action) => {
                let transition = update(screen, &action);
                tracing::trace!(?action, ?transition, "key handled");
                apply(transition, screen, state);
            }
            None => tracing::trace!(code = ?key.code, "unmapped key"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PasswordOption;
    use crate::tui::state::Focus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed keys through map_key → update → apply, as the loop does.
    fn press(screen: &mut FormScreen, state: &mut PasswordState, codes: &[KeyCode]) {
        for code in codes {
            if let Some(action) = map_key(key(*code)) {
                let transition = update(screen, &action);
                apply(transition, screen, state);
            }
        }
    }

    // -- Key mapping --

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::Decrease(1)));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::Increase(1)));
    }

    #[test]
    fn page_keys_use_coarse_step() {
        assert_eq!(map_key(key(KeyCode::PageUp)), Some(Action::Increase(COARSE_STEP)));
        assert_eq!(map_key(key(KeyCode::PageDown)), Some(Action::Decrease(COARSE_STEP)));
    }

    #[test]
    fn space_and_enter_toggle() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::Toggle));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Toggle));
    }

    #[test]
    fn number_keys_map_to_number_actions() {
        for n in 1..=4u8 {
            let key = key(KeyCode::Char((b'0' + n) as char));
            assert_eq!(map_key(key), Some(Action::NumberKey(n)));
        }
        assert_eq!(map_key(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
    }

    // -- Wiring --

    #[test]
    fn wire_registers_handlers_and_loads_state() {
        let config = Config::default();
        let (state, screen) = wire(&config, None);
        assert_eq!(screen.handlers_registered(), 2);
        assert_eq!(screen.length, state.password_length);
        assert_eq!(screen.checked, state.options);
    }

    #[test]
    fn wire_applies_start_length_through_controller() {
        let (state, screen) = wire(&Config::default(), Some(12));
        assert_eq!(state.password_length, 12);
        assert_eq!(screen.length, 12);
    }

    // -- End to end through the controller --

    #[test]
    fn right_arrow_updates_state_and_slider() {
        let (mut state, mut screen) = wire(&Config::default(), None);
        press(&mut screen, &mut state, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(state.password_length, 18);
        assert_eq!(screen.length, 18);
    }

    #[test]
    fn end_then_home_walks_the_range() {
        let (mut state, mut screen) = wire(&Config::default(), None);
        press(&mut screen, &mut state, &[KeyCode::End]);
        assert_eq!(state.password_length, 64);
        press(&mut screen, &mut state, &[KeyCode::Home]);
        assert_eq!(state.password_length, 4);
        assert_eq!(screen.length, 4);
    }

    #[test]
    fn toggling_symbols_changes_view_but_not_state() {
        let (mut state, mut screen) = wire(&Config::default(), None);
        let before = state.options;
        press(&mut screen, &mut state, &[KeyCode::Char('4')]);

        assert!(screen.checked.symbols);
        assert_eq!(state.options, before);
    }

    #[test]
    fn space_toggles_focused_checkbox() {
        let (mut state, mut screen) = wire(&Config::default(), None);
        press(&mut screen, &mut state, &[KeyCode::Down, KeyCode::Char(' ')]);
        assert_eq!(screen.focus, Focus::Checkbox(PasswordOption::Uppercase));
        assert!(!screen.checked.uppercase);
    }

    #[test]
    fn arrows_on_checkbox_row_leave_length_alone() {
        let (mut state, mut screen) = wire(&Config::default(), None);
        press(&mut screen, &mut state, &[KeyCode::Down, KeyCode::Right]);
        assert_eq!(state.password_length, 16);
    }

    #[test]
    fn quit_sets_flag() {
        let (mut state, mut screen) = wire(&Config::default(), None);
        press(&mut screen, &mut state, &[KeyCode::Char('q')]);
        assert!(screen.should_quit);
    }
}
