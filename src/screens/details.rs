//! DETAILS page: eight labelled metrics per rail, each with a Nixie bar.
//!
//! Rail A occupies the left column and rail B the right. Each row is
//! `LABEL:   value unit   [||||||||     ]`.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use heapless::String;

use super::rail_text;
use crate::{
    colors::rail_color,
    config::{
        DETAILS_A_X,
        DETAILS_B_X,
        DETAILS_BAR_DX,
        DETAILS_SPACING,
        DETAILS_VALUE_DX,
        DETAILS_Y,
        NIXIE_HEIGHT,
        NIXIE_WIDTH,
    },
    i18n::{Locale, Text},
    styles::{HEADER_STYLE, LARGE_FONT, LABEL_STYLE, VALUE_STYLE},
    telemetry::{Rail, RailState, SystemState},
    thresholds::{
        BAR_MAX_CURRENT_MA,
        BAR_MAX_EFFICIENCY_PCT,
        BAR_MAX_HEADROOM_V,
        BAR_MAX_NOISE_UV,
        BAR_MAX_POWER_W,
        BAR_MAX_RIPPLE_UV,
        BAR_MAX_TEMP_C,
        BAR_MAX_VOLTAGE_V,
    },
    widgets::{draw_nixie_bar, draw_text},
};

/// Rows shown per rail.
pub const METRIC_ROWS: usize = 8;

/// First row baseline, below the rail heading.
const FIRST_ROW_Y: i32 = DETAILS_Y + 30;

/// One metric row.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRow {
    /// Localized label.
    pub label: Text,
    /// Formatted value with unit.
    pub value: String<16>,
    /// Raw value driving the bar.
    pub raw: f64,
    /// Bar full-scale value.
    pub max: f64,
}

fn row(
    label: Text,
    raw: f64,
    max: f64,
    args: core::fmt::Arguments<'_>,
) -> MetricRow {
    let mut value = String::new();
    value.write_fmt(args).ok();
    MetricRow { label, value, raw, max }
}

/// The eight rows for `rail`, top to bottom.
pub fn metric_rows(rail: &RailState) -> [MetricRow; METRIC_ROWS] {
    [
        row(Text::Voltage, rail.voltage_actual, BAR_MAX_VOLTAGE_V, format_args!("{:.2} V", rail.voltage_actual)),
        row(Text::Current, rail.current_ma, BAR_MAX_CURRENT_MA, format_args!("{:.0} mA", rail.current_ma)),
        row(Text::Power, rail.power_w, BAR_MAX_POWER_W, format_args!("{:.2} W", rail.power_w)),
        row(Text::Temperature, rail.temperature_c, BAR_MAX_TEMP_C, format_args!("{:.1} °C", rail.temperature_c)),
        row(Text::Ripple, rail.ripple_uv, BAR_MAX_RIPPLE_UV, format_args!("{:.1} µV", rail.ripple_uv)),
        row(Text::Headroom, rail.headroom_v, BAR_MAX_HEADROOM_V, format_args!("{:.2} V", rail.headroom_v)),
        row(Text::Noise, rail.noise_uv, BAR_MAX_NOISE_UV, format_args!("{:.1} µV", rail.noise_uv)),
        row(Text::Efficiency, rail.efficiency, BAR_MAX_EFFICIENCY_PCT, format_args!("{:.1} %", rail.efficiency)),
    ]
}

const fn column_x(rail: Rail) -> i32 {
    match rail {
        Rail::A => DETAILS_A_X,
        Rail::B => DETAILS_B_X,
    }
}

fn draw_rail_column<D>(
    display: &mut D,
    rail: Rail,
    state: &RailState,
    locale: Locale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x = column_x(rail);
    let color = rail_color(rail);
    draw_text(display, rail_text(rail).get(locale), Point::new(x, DETAILS_Y), MonoTextStyle::new(LARGE_FONT, color));

    for (i, metric) in metric_rows(state).iter().enumerate() {
        let y = FIRST_ROW_Y + i as i32 * DETAILS_SPACING;
        let mut label: String<24> = String::new();
        write!(label, "{}:", metric.label.get(locale)).ok();
        draw_text(display, &label, Point::new(x, y), LABEL_STYLE);
        draw_text(display, &metric.value, Point::new(x + DETAILS_VALUE_DX, y), VALUE_STYLE);

        // Bar vertically centered on the text line.
        let bar = Rectangle::new(
            Point::new(x + DETAILS_BAR_DX, y - NIXIE_HEIGHT as i32 + 4),
            Size::new(NIXIE_WIDTH, NIXIE_HEIGHT),
        );
        draw_nixie_bar(display, bar, metric.raw, metric.max, color);
    }
}

/// Draw the DETAILS page content.
pub fn draw_details_page<D>(
    display: &mut D,
    state: &SystemState,
    locale: Locale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for rail in Rail::ALL {
        draw_rail_column(display, rail, state.rail(rail), locale);
    }

    let mut input: String<32> = String::new();
    write!(input, "IN {:.1} V  {:.1} °C", state.input_voltage, state.ambient_temp).ok();
    draw_text(
        display,
        &input,
        Point::new(DETAILS_A_X, FIRST_ROW_Y + METRIC_ROWS as i32 * DETAILS_SPACING),
        HEADER_STYLE,
    );
}
