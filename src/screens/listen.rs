//! LISTEN page: per-rail VU meters, dual oscilloscope and the status line.
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                 LISTEN                   │
//! │ RAIL A: 12.00V          RAIL B: 5.00V    │
//! │ ┌──────────────┐        ┌──────────────┐ │
//! │ │▮▮▮▮▮▮▮▮▮▮▮▯▯▯│        │▮▮▮▮▮▮▮▮▮▮▮▯▯▯│ │  20-segment VU meters
//! │ └──────────────┘        └──────────────┘ │
//! │ ┌──────────────────────────────────────┐ │
//! │ │ ~~~~~~~~~~~~~~     ~~~~~~~~~~~~~~    │ │  LCD panel, two traces
//! │ └──────────────────────────────────────┘ │
//! │               OK - ACTIVE                │  or "OVP Rail A | ..." in red
//! └──────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use heapless::String;

use super::rail_text;
use crate::{
    colors::{LCD_BG, LCD_BORDER, RED, rail_color},
    config::{
        CENTER_X,
        GAUGE_A_X,
        GAUGE_B_X,
        GAUGE_HEIGHT,
        GAUGE_WIDTH,
        GAUGE_Y,
        LCD_HEIGHT,
        LCD_WIDTH,
        LCD_X,
        LCD_Y,
        SCOPE_A_X,
        SCOPE_B_X,
        SCOPE_HEIGHT,
        SCOPE_WIDTH,
        SCOPE_Y,
        STATUS_Y,
    },
    fault::NoiseSource,
    i18n::{Locale, Text},
    meters::VuMeter,
    problems::Problem,
    simulator::Simulator,
    styles::{MEDIUM_FONT, SMALL_FONT, STATUS_FAULT_STYLE, STATUS_OK_STYLE},
    telemetry::{Rail, SystemState},
    widgets::{draw_centered, draw_panel, draw_text, draw_vu_meter, draw_waveform},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Baseline of the rail label above each gauge.
const RAIL_LABEL_Y: i32 = GAUGE_Y - 8;

/// Status text capacity (eight problems joined with separators).
pub const STATUS_LEN: usize = 192;

/// Longest status line drawn in the medium font before falling back to small.
const STATUS_MEDIUM_MAX_CHARS: usize = 80;

const fn gauge_x(rail: Rail) -> i32 {
    match rail {
        Rail::A => GAUGE_A_X,
        Rail::B => GAUGE_B_X,
    }
}

const fn scope_x(rail: Rail) -> i32 {
    match rail {
        Rail::A => SCOPE_A_X,
        Rail::B => SCOPE_B_X,
    }
}

/// Status line text and whether it reports a fault.
///
/// Active problems joined with `" | "`, or `"OK - ACTIVE"` (localized) when
/// there are none.
pub fn status_line(
    problems: &[Problem],
    locale: Locale,
) -> (String<STATUS_LEN>, bool) {
    let mut line: String<STATUS_LEN> = String::new();
    if problems.is_empty() {
        write!(line, "{} - {}", Text::Ok.get(locale), Text::Active.get(locale)).ok();
        return (line, false);
    }
    for (i, problem) in problems.iter().enumerate() {
        if i > 0 {
            line.push_str(" | ").ok();
        }
        write!(line, "{problem}").ok();
    }
    (line, true)
}

/// Draw the LISTEN page content.
pub fn draw_listen_page<D, N>(
    display: &mut D,
    simulator: &Simulator<N>,
    meters: [&VuMeter; 2],
    problems: &[Problem],
    locale: Locale,
) where
    D: DrawTarget<Color = Rgb565>,
    N: NoiseSource,
{
    let state: &SystemState = simulator.state();

    for (rail, meter) in Rail::ALL.into_iter().zip(meters) {
        let x = gauge_x(rail);
        let mut label: String<32> = String::new();
        write!(label, "{}: {:.2}V", rail_text(rail).get(locale), state.rail(rail).voltage_actual).ok();
        draw_text(
            display,
            &label,
            Point::new(x, RAIL_LABEL_Y),
            MonoTextStyle::new(MEDIUM_FONT, rail_color(rail)),
        );
        let bounds = Rectangle::new(Point::new(x, GAUGE_Y), Size::new(GAUGE_WIDTH, GAUGE_HEIGHT));
        draw_vu_meter(display, bounds, meter);
    }

    let lcd = Rectangle::new(Point::new(LCD_X, LCD_Y), Size::new(LCD_WIDTH, LCD_HEIGHT));
    draw_panel(display, lcd, LCD_BG, LCD_BORDER, 2);
    for rail in Rail::ALL {
        let points = simulator.query(rail, SCOPE_WIDTH, SCOPE_HEIGHT, scope_x(rail), SCOPE_Y);
        draw_waveform(display, points, rail_color(rail));
    }

    let (line, fault) = status_line(problems, locale);
    let style = match (fault, line.chars().count() > STATUS_MEDIUM_MAX_CHARS) {
        (false, _) => STATUS_OK_STYLE,
        (true, false) => STATUS_FAULT_STYLE,
        (true, true) => MonoTextStyle::new(SMALL_FONT, RED),
    };
    draw_centered(display, &line, Point::new(CENTER_X, STATUS_Y), style);
}
