//! SESSION page: uptime timer, delivered energy, session statistics and the
//! most recent operator events.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*};
use heapless::String;

use super::rail_text;
use crate::{
    config::{CENTER_X, LIST_LINE_HEIGHT, SESSION_ENERGY_Y, SESSION_LOG_LINES, SESSION_STATS_Y, SESSION_TIMER_Y},
    i18n::{Locale, Text},
    log_buffer::DebugLog,
    styles::{HEADER_STYLE, LABEL_STYLE, READOUT_STYLE_CYAN, READOUT_STYLE_GREEN, SMALL_FONT, VALUE_STYLE},
    telemetry::{Rail, SystemState},
    widgets::{draw_centered, draw_text},
};

const STATS_X: i32 = 50;
const EVENTS_X: i32 = 420;
const EVENT_LINE_HEIGHT: i32 = 20;

/// Gap between a readout and its caption.
const CAPTION_DY: i32 = 30;

/// `HH:MM:SS` for a whole number of seconds. Hours are not wrapped at 24.
pub fn format_hms(seconds: u64) -> String<16> {
    let mut out = String::new();
    write!(out, "{:02}:{:02}:{:02}", seconds / 3600, seconds / 60 % 60, seconds % 60).ok();
    out
}

/// Draw the SESSION page content.
pub fn draw_session_page<D>(
    display: &mut D,
    state: &SystemState,
    log: &DebugLog,
    locale: Locale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_centered(display, &format_hms(state.uptime_seconds), Point::new(CENTER_X, SESSION_TIMER_Y), READOUT_STYLE_GREEN);
    draw_centered(display, Text::Uptime.get(locale), Point::new(CENTER_X, SESSION_TIMER_Y + CAPTION_DY), LABEL_STYLE);

    let mut energy: String<24> = String::new();
    write!(energy, "{:.2} Wh", state.energy_wh).ok();
    draw_centered(display, &energy, Point::new(CENTER_X, SESSION_ENERGY_Y), READOUT_STYLE_CYAN);
    draw_centered(display, Text::Energy.get(locale), Point::new(CENTER_X, SESSION_ENERGY_Y + CAPTION_DY), LABEL_STYLE);

    let mut line: String<48> = String::new();
    write!(line, "{}: {}", Text::SessionStart.get(locale), state.session_start.format("%H:%M:%S")).ok();
    draw_text(display, &line, Point::new(STATS_X, SESSION_STATS_Y), VALUE_STYLE);

    for (i, rail) in Rail::ALL.into_iter().enumerate() {
        let mut line: String<48> = String::new();
        write!(
            line,
            "{} {}: {:.2} W",
            Text::Power.get(locale),
            rail_text(rail).get(locale),
            state.rail(rail).power_w
        )
        .ok();
        let y = SESSION_STATS_Y + (i as i32 + 1) * LIST_LINE_HEIGHT;
        draw_text(display, &line, Point::new(STATS_X, y), VALUE_STYLE);
    }

    let mut header: String<32> = String::new();
    write!(header, "{}:", Text::Events.get(locale)).ok();
    draw_text(display, &header, Point::new(EVENTS_X, SESSION_STATS_Y), HEADER_STYLE);

    for (i, entry) in log.tail(SESSION_LOG_LINES).enumerate() {
        let mut line: String<72> = String::new();
        write!(line, "[{}] {} {}", entry.timestamp.format("%H:%M:%S"), entry.level.prefix(), entry.message).ok();
        let y = SESSION_STATS_Y + 25 + i as i32 * EVENT_LINE_HEIGHT;
        draw_text(display, &line, Point::new(EVENTS_X, y), MonoTextStyle::new(SMALL_FONT, entry.level.color()));
    }
}
