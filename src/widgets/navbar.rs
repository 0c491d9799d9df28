//! Bottom navigation bar: `[k] NAME` for each page plus the measured FPS.
//!
//! The labels come pre-built from the [`RenderState`](crate::render::RenderState)
//! cache, so this only lays them out. Entries are packed left to right with a
//! 20 px gap; the active page is amber, the others light gray.

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use super::primitives::{draw_text, fill_rect};
use crate::{
    colors::{DARK_GRAY, MID_GRAY},
    config::{NAV_HEIGHT, NAV_Y, SCREEN_WIDTH},
    pages::Screen,
    render::NAV_LABEL_LEN,
    styles::{NAV_ACTIVE_STYLE, NAV_STYLE, RIGHT_ALIGNED, SMALL_FONT},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Background rectangle (full width, bottom of the screen).
const NAV_RECT: Rectangle = Rectangle::new(Point::new(0, NAV_Y), Size::new(SCREEN_WIDTH, NAV_HEIGHT));

/// 1 px separator line along the top edge.
const NAV_LINE: Rectangle = Rectangle::new(Point::new(0, NAV_Y), Size::new(SCREEN_WIDTH, 1));

/// Left margin of the first entry.
const NAV_FIRST_X: i32 = 20;

/// Gap between entries.
const NAV_GAP: i32 = 20;

/// Text baseline inside the bar.
const NAV_BASELINE: i32 = NAV_Y + 22;

/// FPS counter position (right-aligned, 10 px from the edge).
const NAV_FPS_POS: Point = Point::new(SCREEN_WIDTH as i32 - 10, NAV_BASELINE);

/// Width in pixels of `text` in the nav font.
fn text_width(text: &str) -> i32 {
    let advance = SMALL_FONT.character_size.width + SMALL_FONT.character_spacing;
    text.chars().count() as i32 * advance as i32
}

/// X positions of each label, left to right.
pub fn nav_positions(labels: &[String<NAV_LABEL_LEN>]) -> impl Iterator<Item = i32> + '_ {
    labels.iter().scan(NAV_FIRST_X, |x, label| {
        let current = *x;
        *x += text_width(label) + NAV_GAP;
        Some(current)
    })
}

/// Draw the navigation bar with `active` highlighted.
pub fn draw_nav_bar<D>(
    display: &mut D,
    labels: &[String<NAV_LABEL_LEN>],
    active: Screen,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, NAV_RECT, DARK_GRAY);
    fill_rect(display, NAV_LINE, MID_GRAY);

    let active_key = active.key();
    for ((label, x), key) in labels.iter().zip(nav_positions(labels)).zip(1u8..) {
        let style = if active_key == Some(key) { NAV_ACTIVE_STYLE } else { NAV_STYLE };
        draw_text(display, label, Point::new(x, NAV_BASELINE), style);
    }

    let mut fps_str: String<16> = String::new();
    write!(fps_str, "{fps:.0} FPS").ok();
    Text::with_text_style(&fps_str, NAV_FPS_POS, NAV_STYLE, RIGHT_ALIGNED).draw(display).ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::render::build_nav_labels;

    #[test]
    fn test_positions_pack_left_to_right() {
        let labels = build_nav_labels(Locale::En);
        let xs: Vec<i32> = nav_positions(&labels).collect();
        // "[1] LISTEN" is 10 chars at 6 px
        assert_eq!(xs[0], 20);
        assert_eq!(xs[1], 20 + 60 + 20);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels_fit_before_fps() {
        for locale in Locale::ALL {
            let labels = build_nav_labels(locale);
            let last_x = nav_positions(&labels).last().unwrap();
            let end = last_x + text_width(labels.last().unwrap());
            assert!(end < NAV_FPS_POS.x - 50, "{locale}: labels end at {end}");
        }
    }
}
