//! Telemetry data model for both output rails and the supply as a whole.
//!
//! [`SystemState`] is owned exclusively by the [`Simulator`](crate::simulator::Simulator)
//! and mutated only inside `update` and `set_simulation_mode`. Everything else
//! (pages, widgets, the problem detector) reads it through shared references.
//!
//! # Derived Fields
//!
//! `power_w` is never set independently. [`RailState::recompute_power`] is the
//! only writer and the simulator calls it for both rails at the end of every
//! tick, so `power_w == voltage_actual * current_ma / 1000` holds after each
//! update.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Local};

use crate::config::{RAIL_A_TARGET_V, RAIL_B_TARGET_V};
use crate::error::DashboardError;
use crate::fault::SimulationMode;

// =============================================================================
// Ratio Helper
// =============================================================================

/// Divide `value` by `denom`, yielding `0.0` for a non-positive denominator.
///
/// Every normalization against a target or a full-scale value goes through
/// this function, so a zero or negative target never produces `inf`/`NaN`.
#[inline]
pub fn ratio(
    value: f64,
    denom: f64,
) -> f64 {
    if denom > 0.0 { value / denom } else { 0.0 }
}

// =============================================================================
// Rail Identifier
// =============================================================================

/// One of the two independently regulated outputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rail {
    /// Main rail, 12 V set-point. The only rail affected by fault injection.
    A,
    /// Auxiliary rail, 5 V set-point.
    B,
}

impl Rail {
    /// Both rails in display order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Single-letter identifier.
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

impl fmt::Display for Rail {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Rail {
    type Error = DashboardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' | 'a' => Ok(Self::A),
            'B' | 'b' => Ok(Self::B),
            other => Err(DashboardError::UnknownRail(other.to_string())),
        }
    }
}

impl FromStr for Rail {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(DashboardError::UnknownRail(s.to_string())),
        }
    }
}

// =============================================================================
// Rail State
// =============================================================================

/// Live measurements and protection state of one rail.
#[derive(Clone, Debug, PartialEq)]
pub struct RailState {
    /// Regulated set-point (V).
    pub voltage_target: f64,
    /// Measured output voltage (V).
    pub voltage_actual: f64,
    /// Load current (mA).
    pub current_ma: f64,
    /// Output power (W), derived from voltage and current.
    pub power_w: f64,
    /// Regulator temperature (°C).
    pub temperature_c: f64,
    /// Pre-regulator headroom (V).
    pub headroom_v: f64,
    /// Output ripple (µV).
    pub ripple_uv: f64,
    /// Output noise floor (µV).
    pub noise_uv: f64,
    /// Conversion efficiency (%).
    pub efficiency: f64,
    /// Output switched on.
    pub enabled: bool,
    /// Over-voltage protection tripped.
    pub ovp_active: bool,
    /// Over-current protection tripped.
    pub ocp_active: bool,
    /// Over-temperature protection tripped.
    pub otp_active: bool,
}

impl RailState {
    /// Default headroom between pre-regulator and output.
    pub const DEFAULT_HEADROOM_V: f64 = 2.0;

    /// Create a rail settled at `voltage_target` with the given load and temperature.
    pub fn new(
        voltage_target: f64,
        current_ma: f64,
        temperature_c: f64,
    ) -> Self {
        let mut rail = Self {
            voltage_target,
            voltage_actual: voltage_target,
            current_ma,
            power_w: 0.0,
            temperature_c,
            headroom_v: Self::DEFAULT_HEADROOM_V,
            ripple_uv: 5.0,
            noise_uv: 3.0,
            efficiency: 92.0,
            enabled: true,
            ovp_active: false,
            ocp_active: false,
            otp_active: false,
        };
        rail.recompute_power();
        rail
    }

    /// Recompute the derived `power_w` field.
    #[inline]
    pub fn recompute_power(&mut self) {
        self.power_w = self.voltage_actual * self.current_ma / 1000.0;
    }

    /// Clear all three protection flags.
    #[inline]
    pub const fn clear_protections(&mut self) {
        self.ovp_active = false;
        self.ocp_active = false;
        self.otp_active = false;
    }

    /// Whether any hard protection is tripped.
    #[inline]
    pub const fn any_protection(&self) -> bool {
        self.ovp_active || self.ocp_active || self.otp_active
    }

    /// Output voltage as a fraction of the set-point (0 for a non-positive target).
    #[inline]
    pub fn regulation_ratio(&self) -> f64 {
        ratio(self.voltage_actual, self.voltage_target)
    }
}

// =============================================================================
// System State
// =============================================================================

/// Whole-supply state: both rails plus session accounting.
#[derive(Clone, Debug)]
pub struct SystemState {
    /// Main rail.
    pub rail_a: RailState,
    /// Auxiliary rail.
    pub rail_b: RailState,
    /// Transformer secondary voltage after rectification (V).
    pub input_voltage: f64,
    /// Enclosure ambient temperature (°C).
    pub ambient_temp: f64,
    /// Whole seconds accumulated from tick durations.
    pub uptime_seconds: u64,
    /// Energy delivered by both rails since start (Wh).
    pub energy_wh: f64,
    /// Wall-clock time the session started.
    pub session_start: DateTime<Local>,
    /// Active fault injection mode.
    pub simulation_mode: SimulationMode,
}

impl SystemState {
    /// Construct the power-on state: rail A at 12 V, rail B at 5 V.
    pub fn new() -> Self {
        Self {
            rail_a: RailState::new(RAIL_A_TARGET_V, 150.0, 35.0),
            rail_b: RailState::new(RAIL_B_TARGET_V, 100.0, 32.0),
            input_voltage: 24.0,
            ambient_temp: 25.0,
            uptime_seconds: 0,
            energy_wh: 0.0,
            session_start: Local::now(),
            simulation_mode: SimulationMode::Normal,
        }
    }

    /// Borrow a rail by identifier.
    #[inline]
    pub const fn rail(
        &self,
        rail: Rail,
    ) -> &RailState {
        match rail {
            Rail::A => &self.rail_a,
            Rail::B => &self.rail_b,
        }
    }

    /// Mutably borrow a rail by identifier.
    #[inline]
    pub const fn rail_mut(
        &mut self,
        rail: Rail,
    ) -> &mut RailState {
        match rail {
            Rail::A => &mut self.rail_a,
            Rail::B => &mut self.rail_b,
        }
    }

    /// Combined output power of both rails (W).
    #[inline]
    pub fn total_power_w(&self) -> f64 {
        self.rail_a.power_w + self.rail_b.power_w
    }

    /// OR of a protection flag across both rails, as summarized on HEALTH.
    pub const fn protection_summary(&self) -> [bool; 3] {
        [
            self.rail_a.ovp_active || self.rail_b.ovp_active,
            self.rail_a.ocp_active || self.rail_b.ocp_active,
            self.rail_a.otp_active || self.rail_b.otp_active,
        ]
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_positive_denominator() {
        assert!((ratio(6.0, 12.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_zero_and_negative_denominator() {
        assert_eq!(ratio(5.0, 0.0), 0.0, "zero denominator yields zero");
        assert_eq!(ratio(5.0, -3.0), 0.0, "negative denominator yields zero");
    }

    #[test]
    fn test_rail_parse() {
        assert_eq!(Rail::try_from('A').ok(), Some(Rail::A));
        assert_eq!(Rail::try_from('b').ok(), Some(Rail::B));
        assert_eq!("B".parse::<Rail>().ok(), Some(Rail::B));
    }

    #[test]
    fn test_rail_parse_rejects_unknown() {
        assert!(matches!(Rail::try_from('C'), Err(DashboardError::UnknownRail(_))));
        assert!("AB".parse::<Rail>().is_err(), "multi-letter id rejected");
        assert!("".parse::<Rail>().is_err(), "empty id rejected");
    }

    #[test]
    fn test_system_defaults() {
        let state = SystemState::new();
        assert_eq!(state.rail_a.voltage_target, 12.0);
        assert_eq!(state.rail_b.voltage_target, 5.0);
        assert_eq!(state.input_voltage, 24.0);
        assert_eq!(state.ambient_temp, 25.0);
        assert_eq!(state.uptime_seconds, 0);
        assert_eq!(state.energy_wh, 0.0);
        assert_eq!(state.simulation_mode, SimulationMode::Normal);
        assert!(!state.rail_a.any_protection());
        assert!(!state.rail_b.any_protection());
    }

    #[test]
    fn test_power_consistent_at_construction() {
        let state = SystemState::new();
        for rail in Rail::ALL {
            let r = state.rail(rail);
            assert!((r.power_w - r.voltage_actual * r.current_ma / 1000.0).abs() < 1e-12);
        }
        assert!((state.rail_a.power_w - 1.8).abs() < 1e-9, "12 V * 150 mA = 1.8 W");
    }

    #[test]
    fn test_regulation_ratio_zero_target() {
        let mut rail = RailState::new(12.0, 150.0, 35.0);
        rail.voltage_target = 0.0;
        assert_eq!(rail.regulation_ratio(), 0.0);
    }

    #[test]
    fn test_protection_summary_ors_rails() {
        let mut state = SystemState::new();
        state.rail_b.ocp_active = true;
        state.rail_a.otp_active = true;
        assert_eq!(state.protection_summary(), [false, true, true]);
        state.rail_a.clear_protections();
        state.rail_b.clear_protections();
        assert_eq!(state.protection_summary(), [false, false, false]);
    }
}
