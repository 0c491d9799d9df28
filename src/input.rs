//! Input bindings: key names and pointer positions to [`Command`]s.
//!
//! Bindings take the SDL key *name* (`"1"`, `"Keypad 1"`, `"Return"`...)
//! rather than a keycode value, so they stay independent of the windowing
//! backend and can be tested without a window.
//!
//! | Key | Command | Screens |
//! |-----|---------|---------|
//! | `1`-`5`, keypad `1`-`5` | select page | all but BOOT |
//! | `L` | cycle locale | all but BOOT |
//! | `Escape` | quit | all but BOOT |
//! | `Return`, keypad `Enter` | confirm | BOOT |
//! | `F1`-`F6` | simulation mode | CONFIG |
//! | click on a mode button | simulation mode | CONFIG |
//!
//! Screen filtering for the first four rows happens in the
//! [`PageController`](crate::pages::PageController); the mode bindings are
//! only produced on CONFIG.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use crate::config::{MODE_BUTTON_HEIGHT, MODE_BUTTON_PITCH, MODE_BUTTON_WIDTH, MODE_BUTTONS_X, MODE_BUTTONS_Y};
use crate::fault::SimulationMode;
use crate::pages::Screen;

/// A user intent, decoupled from the device that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Switch the fault injector to a mode.
    SelectMode(SimulationMode),
    /// Jump to page `k` (1-5).
    SelectPage(u8),
    /// Advance to the next locale.
    CycleLocale,
    /// Leave the boot screen.
    Confirm,
    /// Exit the dashboard.
    Quit,
}

/// Command bound to the key called `name` while `screen` is shown.
pub fn command_for_key(
    name: &str,
    screen: Screen,
) -> Option<Command> {
    let name = name.trim();
    let digit = name.strip_prefix("Keypad ").unwrap_or(name);
    if let Ok(k @ 1..=5) = digit.parse::<u8>() {
        return Some(Command::SelectPage(k));
    }

    match name {
        "L" | "l" => Some(Command::CycleLocale),
        "Escape" => Some(Command::Quit),
        "Return" | "Keypad Enter" => Some(Command::Confirm),
        _ if screen == Screen::Config => function_key_mode(name).map(Command::SelectMode),
        _ => None,
    }
}

/// `F1`-`F6` in [`SimulationMode::ALL`] order.
fn function_key_mode(name: &str) -> Option<SimulationMode> {
    let n: usize = name.strip_prefix('F')?.parse().ok()?;
    SimulationMode::ALL.get(n.checked_sub(1)?).copied()
}

/// Screen rectangle of the `i`-th simulation mode button on CONFIG.
pub fn mode_button_rect(i: usize) -> Rectangle {
    Rectangle::new(
        Point::new(MODE_BUTTONS_X + MODE_BUTTON_PITCH * i as i32, MODE_BUTTONS_Y),
        Size::new(MODE_BUTTON_WIDTH, MODE_BUTTON_HEIGHT),
    )
}

/// Command for a pointer release at `point` while `screen` is shown.
pub fn command_for_pointer(
    point: Point,
    screen: Screen,
) -> Option<Command> {
    if screen != Screen::Config {
        return None;
    }
    SimulationMode::ALL
        .iter()
        .enumerate()
        .find(|(i, _)| mode_button_rect(*i).contains(point))
        .map(|(_, mode)| Command::SelectMode(*mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_select_pages() {
        for k in 1..=5u8 {
            let main = k.to_string();
            let keypad = format!("Keypad {k}");
            assert_eq!(command_for_key(&main, Screen::Listen), Some(Command::SelectPage(k)));
            assert_eq!(command_for_key(&keypad, Screen::Listen), Some(Command::SelectPage(k)));
        }
        assert_eq!(command_for_key("6", Screen::Listen), None);
        assert_eq!(command_for_key("0", Screen::Listen), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key("L", Screen::Details), Some(Command::CycleLocale));
        assert_eq!(command_for_key("Escape", Screen::Details), Some(Command::Quit));
        assert_eq!(command_for_key("Return", Screen::Boot), Some(Command::Confirm));
        assert_eq!(command_for_key("Keypad Enter", Screen::Boot), Some(Command::Confirm));
        assert_eq!(command_for_key("Space", Screen::Boot), None);
    }

    #[test]
    fn test_function_keys_only_on_config() {
        assert_eq!(
            command_for_key("F1", Screen::Config),
            Some(Command::SelectMode(SimulationMode::Normal))
        );
        assert_eq!(
            command_for_key("F6", Screen::Config),
            Some(Command::SelectMode(SimulationMode::HighV))
        );
        assert_eq!(command_for_key("F7", Screen::Config), None);
        assert_eq!(command_for_key("F0", Screen::Config), None);
        assert_eq!(command_for_key("F2", Screen::Listen), None);
    }

    #[test]
    fn test_mode_button_layout() {
        let first = mode_button_rect(0);
        assert_eq!(first.top_left, Point::new(50, 350));
        assert_eq!(first.size, Size::new(100, 40));
        assert_eq!(mode_button_rect(5).top_left, Point::new(650, 350));
    }

    #[test]
    fn test_pointer_hits_mode_buttons() {
        assert_eq!(
            command_for_pointer(Point::new(60, 360), Screen::Config),
            Some(Command::SelectMode(SimulationMode::Normal))
        );
        assert_eq!(
            command_for_pointer(Point::new(420, 389), Screen::Config),
            Some(Command::SelectMode(SimulationMode::Load))
        );
        assert_eq!(command_for_pointer(Point::new(160, 360), Screen::Config), None, "gap between buttons");
        assert_eq!(command_for_pointer(Point::new(60, 360), Screen::Listen), None, "buttons only on CONFIG");
    }
}
