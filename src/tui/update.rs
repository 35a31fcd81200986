//! Pure transitions: (FormScreen, Action) → Transition.
//!
//! Decides what a key means for the focused row. Fully testable without a
//! terminal. Slider moves that would not change the value produce `Stay`,
//! so the controller only hears about real edits.

use crate::model::PasswordOption;

use super::state::{Action, Focus, FormScreen, Transition};

/// Pure transition function. The event loop interprets the result.
pub fn update(screen: &FormScreen, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::MoveUp => Transition::Focus(screen.focus.prev()),
        Action::MoveDown => Transition::Focus(screen.focus.next()),
        Action::Increase(step) => slide(screen, screen.length.saturating_add(*step)),
        Action::Decrease(step) => slide(screen, screen.length.saturating_sub(*step)),
        Action::Minimum => slide(screen, screen.range.min),
        Action::Maximum => slide(screen, screen.range.max),
        Action::Toggle => match screen.focus {
            Focus::Checkbox(option) => Transition::Toggle(option),
            Focus::Length => Transition::Stay,
        },
        Action::NumberKey(n) => match PasswordOption::from_position(*n) {
            Some(option) => Transition::Toggle(option),
            None => Transition::Stay,
        },
    }
}

/// Slider edits only apply while the slider has focus, and never leave
/// the range.
fn slide(screen: &FormScreen, target: u32) -> Transition {
    if screen.focus != Focus::Length {
        return Transition::Stay;
    }
    let value = screen.range.clamp(target);
    if value == screen.length {
        Transition::Stay
    } else {
        Transition::Slide(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LengthRange;

    fn screen_at(length: u32) -> FormScreen {
        let mut screen = FormScreen::new(LengthRange { min: 4, max: 64, default: 16 });
        screen.length = length;
        screen
    }

    fn focused(focus: Focus) -> FormScreen {
        let mut screen = screen_at(16);
        screen.focus = focus;
        screen
    }

    // -- Quit / focus --

    #[test]
    fn quit_from_any_row() {
        for focus in Focus::rows() {
            assert_eq!(update(&focused(focus), &Action::Quit), Transition::Quit);
        }
    }

    #[test]
    fn move_down_from_slider_focuses_first_checkbox() {
        let result = update(&screen_at(16), &Action::MoveDown);
        assert_eq!(
            result,
            Transition::Focus(Focus::Checkbox(PasswordOption::Uppercase))
        );
    }

    #[test]
    fn move_up_from_slider_stays_on_slider() {
        assert_eq!(
            update(&screen_at(16), &Action::MoveUp),
            Transition::Focus(Focus::Length)
        );
    }

    // -- Slider --

    #[test]
    fn increase_slides_by_step() {
        assert_eq!(update(&screen_at(16), &Action::Increase(1)), Transition::Slide(17));
        assert_eq!(update(&screen_at(16), &Action::Increase(5)), Transition::Slide(21));
    }

    #[test]
    fn decrease_slides_by_step() {
        assert_eq!(update(&screen_at(16), &Action::Decrease(1)), Transition::Slide(15));
    }

    #[test]
    fn increase_clamps_at_max() {
        assert_eq!(update(&screen_at(62), &Action::Increase(5)), Transition::Slide(64));
        assert_eq!(update(&screen_at(64), &Action::Increase(1)), Transition::Stay);
    }

    #[test]
    fn decrease_clamps_at_min() {
        assert_eq!(update(&screen_at(6), &Action::Decrease(5)), Transition::Slide(4));
        assert_eq!(update(&screen_at(4), &Action::Decrease(1)), Transition::Stay);
    }

    #[test]
    fn decrease_near_zero_does_not_underflow() {
        let mut screen = FormScreen::new(LengthRange { min: 1, max: 8, default: 2 });
        screen.length = 2;
        assert_eq!(update(&screen, &Action::Decrease(5)), Transition::Slide(1));
    }

    #[test]
    fn minimum_and_maximum_jump_to_bounds() {
        assert_eq!(update(&screen_at(16), &Action::Minimum), Transition::Slide(4));
        assert_eq!(update(&screen_at(16), &Action::Maximum), Transition::Slide(64));
        assert_eq!(update(&screen_at(64), &Action::Maximum), Transition::Stay);
    }

    #[test]
    fn slider_keys_ignored_on_checkbox_rows() {
        let screen = focused(Focus::Checkbox(PasswordOption::Numbers));
        assert_eq!(update(&screen, &Action::Increase(1)), Transition::Stay);
        assert_eq!(update(&screen, &Action::Minimum), Transition::Stay);
    }

    // -- Checkboxes --

    #[test]
    fn toggle_on_checkbox_fires_its_option() {
        let screen = focused(Focus::Checkbox(PasswordOption::Symbols));
        assert_eq!(
            update(&screen, &Action::Toggle),
            Transition::Toggle(PasswordOption::Symbols)
        );
    }

    #[test]
    fn toggle_on_slider_is_noop() {
        assert_eq!(update(&screen_at(16), &Action::Toggle), Transition::Stay);
    }

    #[test]
    fn number_keys_toggle_regardless_of_focus() {
        for option in PasswordOption::ALL {
            assert_eq!(
                update(&screen_at(16), &Action::NumberKey(option.position())),
                Transition::Toggle(option)
            );
        }
        assert_eq!(update(&screen_at(16), &Action::NumberKey(9)), Transition::Stay);
    }
}
