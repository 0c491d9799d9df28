//! HEALTH page: overall status, active problems, protection summary, rail
//! temperatures and the adaptive OCP limit of each rail.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*};
use heapless::String;

use super::rail_text;
use crate::{
    colors::{RED, status_color},
    config::{HEALTH_PROTECTION_Y, HEALTH_STATUS_Y, HEALTH_TEMP_Y, LIST_LINE_HEIGHT},
    i18n::{Locale, Text},
    problems::Problem,
    regulator::adaptive_current_limit_ma,
    styles::{HEADER_STYLE, LARGE_FONT, LABEL_STYLE, MEDIUM_FONT, SMALL_FONT},
    telemetry::{Rail, SystemState},
    thresholds::TEMP_WARNING_C,
    widgets::draw_text,
};

// =============================================================================
// Layout Constants
// =============================================================================

const LEFT_X: i32 = 50;
const INDENT_X: i32 = 70;
const RIGHT_X: i32 = 420;

/// Problems are listed in two columns of four below the status line.
const PROBLEM_ROWS: usize = 4;
const PROBLEM_COLUMN_DX: i32 = 260;
const PROBLEM_LIST_Y: i32 = HEALTH_STATUS_Y + 28;
const PROBLEM_LINE_HEIGHT: i32 = 16;

/// Status word for the system line.
pub const fn system_status(problems: &[Problem]) -> Text {
    if problems.is_empty() { Text::Ok } else { Text::Warning }
}

/// Whether `temperature_c` is drawn in the warning color.
pub fn is_temperature_warning(temperature_c: f64) -> bool {
    temperature_c > TEMP_WARNING_C
}

/// Draw the HEALTH page content.
pub fn draw_health_page<D>(
    display: &mut D,
    state: &SystemState,
    problems: &[Problem],
    locale: Locale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fault = !problems.is_empty();

    let mut status: String<48> = String::new();
    write!(status, "{}: {}", Text::System.get(locale), system_status(problems).get(locale)).ok();
    draw_text(
        display,
        &status,
        Point::new(LEFT_X, HEALTH_STATUS_Y),
        MonoTextStyle::new(LARGE_FONT, status_color(fault)),
    );

    let problem_style = MonoTextStyle::new(SMALL_FONT, RED);
    for (i, problem) in problems.iter().enumerate() {
        let column = (i / PROBLEM_ROWS) as i32;
        let row = (i % PROBLEM_ROWS) as i32;
        let mut line: String<32> = String::new();
        write!(line, "! {problem}").ok();
        draw_text(
            display,
            &line,
            Point::new(INDENT_X + column * PROBLEM_COLUMN_DX, PROBLEM_LIST_Y + row * PROBLEM_LINE_HEIGHT),
            problem_style,
        );
    }

    // Protections
    let mut header: String<32> = String::new();
    write!(header, "{}:", Text::Protections.get(locale)).ok();
    draw_text(display, &header, Point::new(LEFT_X, HEALTH_PROTECTION_Y), HEADER_STYLE);

    let names = [Text::Ovp, Text::Ocp, Text::Otp];
    for (i, (name, active)) in names.into_iter().zip(state.protection_summary()).enumerate() {
        let state_text = if active { Text::Active } else { Text::Ok };
        let mut line: String<48> = String::new();
        write!(line, "{}: {}", name.get(locale), state_text.get(locale)).ok();
        draw_text(
            display,
            &line,
            Point::new(INDENT_X, HEALTH_PROTECTION_Y + (i as i32 + 1) * LIST_LINE_HEIGHT),
            MonoTextStyle::new(MEDIUM_FONT, status_color(active)),
        );
    }

    // Temperatures and OCP limits
    let mut header: String<32> = String::new();
    write!(header, "{}:", Text::Temperature.get(locale)).ok();
    draw_text(display, &header, Point::new(LEFT_X, HEALTH_TEMP_Y), HEADER_STYLE);

    let mut header: String<32> = String::new();
    write!(header, "{}:", Text::OcpLimit.get(locale)).ok();
    draw_text(display, &header, Point::new(RIGHT_X, HEALTH_TEMP_Y), HEADER_STYLE);

    for (i, rail) in Rail::ALL.into_iter().enumerate() {
        let y = HEALTH_TEMP_Y + (i as i32 + 1) * LIST_LINE_HEIGHT;
        let rail_state = state.rail(rail);

        let hot = is_temperature_warning(rail_state.temperature_c);
        let mut line: String<32> = String::new();
        write!(line, "{}: {:.1} °C", rail_text(rail).get(locale), rail_state.temperature_c).ok();
        draw_text(display, &line, Point::new(INDENT_X, y), MonoTextStyle::new(MEDIUM_FONT, status_color(hot)));

        let limit = adaptive_current_limit_ma(rail_state.voltage_target as f32);
        let mut line: String<32> = String::new();
        write!(line, "{}: {limit:.0} mA", rail_text(rail).get(locale)).ok();
        draw_text(display, &line, Point::new(RIGHT_X + 20, y), LABEL_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_status() {
        assert_eq!(system_status(&[]), Text::Ok);
        assert_eq!(system_status(&[Problem::Otp(Rail::B)]), Text::Warning);
    }

    #[test]
    fn test_temperature_warning_is_strict() {
        assert!(!is_temperature_warning(70.0), "70 °C is still normal");
        assert!(is_temperature_warning(70.1));
    }
}
