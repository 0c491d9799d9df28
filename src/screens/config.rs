//! CONFIG page: language, brightness, active simulation mode, regulator
//! set-points and the six simulation mode buttons.

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use heapless::String;

use super::rail_text;
use crate::{
    config::{BRIGHTNESS_PERCENT, CONFIG_OPTION_HEIGHT, CONFIG_OPTIONS_Y, LIST_LINE_HEIGHT, MODE_BUTTONS_X, MODE_BUTTONS_Y},
    fault::SimulationMode,
    i18n::{Locale, Text},
    input::mode_button_rect,
    regulator::{adaptive_current_limit_ma, digipot_to_voltage, voltage_to_digipot},
    styles::{HEADER_STYLE, LABEL_STYLE, VALUE_STYLE},
    telemetry::{Rail, SystemState},
    widgets::{draw_button, draw_text},
};

const OPTIONS_X: i32 = 50;
const REGULATOR_X: i32 = 420;

/// Set-point summary of one rail: digipot position and the voltage it yields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Setpoint {
    /// Digipot wiper position for the rail's target.
    pub position: u8,
    /// Output voltage at that position.
    pub voltage: f32,
    /// Adaptive OCP limit at the target (mA).
    pub ocp_limit_ma: f32,
}

impl Setpoint {
    /// Set-point needed to reach `target_v`.
    pub fn for_target(target_v: f64) -> Self {
        let target = target_v as f32;
        let position = voltage_to_digipot(target);
        Self {
            position,
            voltage: digipot_to_voltage(position),
            ocp_limit_ma: adaptive_current_limit_ma(target),
        }
    }
}

/// Draw the CONFIG page content.
pub fn draw_config_page<D>(
    display: &mut D,
    state: &SystemState,
    locale: Locale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Options
    let mut line: String<48> = String::new();
    write!(line, "{}: {}", Text::Language.get(locale), locale.native_name()).ok();
    draw_text(display, &line, Point::new(OPTIONS_X, CONFIG_OPTIONS_Y), VALUE_STYLE);

    line.clear();
    write!(line, "{}: {BRIGHTNESS_PERCENT}%", Text::Brightness.get(locale)).ok();
    draw_text(display, &line, Point::new(OPTIONS_X, CONFIG_OPTIONS_Y + CONFIG_OPTION_HEIGHT), VALUE_STYLE);

    line.clear();
    write!(line, "{}: {}", Text::Simulation.get(locale), state.simulation_mode.name()).ok();
    draw_text(display, &line, Point::new(OPTIONS_X, CONFIG_OPTIONS_Y + 2 * CONFIG_OPTION_HEIGHT), VALUE_STYLE);

    // Regulator
    line.clear();
    write!(line, "{}:", Text::Setpoint.get(locale)).ok();
    draw_text(display, &line, Point::new(REGULATOR_X, CONFIG_OPTIONS_Y), HEADER_STYLE);

    for (i, rail) in Rail::ALL.into_iter().enumerate() {
        let setpoint = Setpoint::for_target(state.rail(rail).voltage_target);
        let y = CONFIG_OPTIONS_Y + (2 * i as i32 + 1) * LIST_LINE_HEIGHT;

        line.clear();
        write!(line, "{}: {:.2} V  #{}", rail_text(rail).get(locale), setpoint.voltage, setpoint.position).ok();
        draw_text(display, &line, Point::new(REGULATOR_X + 20, y), VALUE_STYLE);

        line.clear();
        write!(line, "{}: {:.0} mA", Text::OcpLimit.get(locale), setpoint.ocp_limit_ma).ok();
        draw_text(display, &line, Point::new(REGULATOR_X + 20, y + LIST_LINE_HEIGHT), LABEL_STYLE);
    }

    // Mode buttons
    line.clear();
    write!(line, "{}:", Text::Simulation.get(locale)).ok();
    draw_text(display, &line, Point::new(MODE_BUTTONS_X, MODE_BUTTONS_Y - 35), HEADER_STYLE);

    for (i, mode) in SimulationMode::ALL.into_iter().enumerate() {
        let active = mode == state.simulation_mode;
        draw_button(display, mode_button_rect(i), mode.button_label().get(locale), active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setpoint_for_rail_targets() {
        let a = Setpoint::for_target(12.0);
        assert!((a.voltage - 12.0).abs() < 0.15, "rail A set-point lands near 12 V, got {}", a.voltage);
        assert_eq!(a.ocp_limit_ma, 500.0);

        let b = Setpoint::for_target(5.0);
        assert_eq!(b.position, 0, "5 V is the bottom of the range");
        assert_eq!(b.ocp_limit_ma, 350.0);
    }
}
