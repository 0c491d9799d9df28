//! BOOT splash: product name, subtitle, animated initialisation line and the
//! ENTER prompt.
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                                          │
//! │               LPS DUO PRO                │  amber, ProFont 24
//! │      Audiophile Linear Power Supply      │  light gray
//! │           Simulator v0.1.0               │  mid gray
//! │                                          │
//! │            Initializing...               │  green, 0-3 dots
//! │                                          │
//! │          Press ENTER to start            │  amber
//! └──────────────────────────────────────────┘
//! ```

use core::fmt::Write;
use core::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use heapless::String;

use crate::{
    config::{BOOT_DOTS_PER_SECOND, CENTER_X},
    i18n::{Locale, Text},
    styles::{BUTTON_STYLE, DIM_STYLE, LABEL_STYLE, READOUT_STYLE_AMBER, STATUS_OK_STYLE},
    widgets::draw_centered,
};

// =============================================================================
// Layout Constants
// =============================================================================

const BOOT_TITLE: &str = "LPS DUO PRO";
const BOOT_TITLE_Y: i32 = 150;
const BOOT_SUBTITLE_Y: i32 = 230;
const BOOT_VERSION_Y: i32 = 280;
const BOOT_LOADING_Y: i32 = 350;
const BOOT_PROMPT_Y: i32 = 420;

/// Number of dots after the initialisation text, cycling 0 to 3.
pub fn boot_dots(elapsed: Duration) -> usize {
    (elapsed.as_secs_f32() * BOOT_DOTS_PER_SECOND) as usize % 4
}

/// Draw the boot splash `elapsed` after startup.
pub fn draw_boot_screen<D>(
    display: &mut D,
    locale: Locale,
    elapsed: Duration,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_centered(display, BOOT_TITLE, Point::new(CENTER_X, BOOT_TITLE_Y), READOUT_STYLE_AMBER);
    draw_centered(
        display,
        Text::BootSubtitle.get(locale),
        Point::new(CENTER_X, BOOT_SUBTITLE_Y),
        LABEL_STYLE,
    );

    let mut version: String<32> = String::new();
    write!(version, "Simulator v{}", env!("CARGO_PKG_VERSION")).ok();
    draw_centered(display, &version, Point::new(CENTER_X, BOOT_VERSION_Y), DIM_STYLE);

    let mut loading: String<32> = String::new();
    loading.push_str(Text::BootLoading.get(locale)).ok();
    for _ in 0..boot_dots(elapsed) {
        loading.push('.').ok();
    }
    draw_centered(display, &loading, Point::new(CENTER_X, BOOT_LOADING_Y), STATUS_OK_STYLE);

    draw_centered(display, Text::BootPrompt.get(locale), Point::new(CENTER_X, BOOT_PROMPT_Y), BUTTON_STYLE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_cycle_twice_per_second() {
        let dots: Vec<usize> = [0, 499, 500, 1000, 1500, 2000, 2600]
            .into_iter()
            .map(|ms| boot_dots(Duration::from_millis(ms)))
            .collect();
        assert_eq!(dots, [0, 0, 1, 2, 3, 0, 1]);
    }
}
