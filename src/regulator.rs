//! Output set-point model of the linear regulator stage.
//!
//! Each rail is an LM317 whose lower feedback leg is a fixed resistor in
//! series with a 100 kΩ digital potentiometer shunted by 2 kΩ:
//!
//! ```text
//!   r_wiper = pos * R_DIGIPOT / 255
//!   r_eff   = r_wiper || R_SHUNT
//!   r2      = R_FIXED + r_eff
//!   v_pre   = V_REF * (1 + r2 / R1)
//!   v_out   = v_pre - HEADROOM        (clamped to 5..15 V)
//! ```
//!
//! The shunt makes the curve strongly non-linear: the output saturates at
//! 15 V around position 129, so only the lower half of the wiper travel is
//! useful. The CONFIG page shows the position for each rail's target.

use crate::thresholds::{
    OCP_LIMIT_HIGH_MA,
    OCP_LIMIT_LOW_MA,
    OCP_LIMIT_MID_MA,
    OCP_LOW_VOLTAGE_V,
    OCP_MID_VOLTAGE_V,
};

// =============================================================================
// Feedback Network
// =============================================================================

/// Fixed part of the lower feedback leg (Ω).
pub const R_FIXED: f32 = 1100.0;

/// Upper feedback resistor, ADJ to output (Ω).
pub const R1: f32 = 240.0;

/// Resistor in parallel with the digipot (Ω).
pub const R_SHUNT: f32 = 2000.0;

/// Full-scale digipot resistance (Ω).
pub const R_DIGIPOT: f32 = 100_000.0;

/// Number of wiper steps.
pub const DIGIPOT_STEPS: f32 = 255.0;

/// LM317 reference voltage (V).
pub const V_REF: f32 = 1.25;

/// Pre-regulator to output drop held constant by the tracking stage (V).
pub const V_HEADROOM: f32 = 2.0;

/// Lowest settable output (V).
pub const V_OUT_MIN: f32 = 5.0;

/// Highest settable output (V).
pub const V_OUT_MAX: f32 = 15.0;

const OHMS_PER_STEP: f32 = R_DIGIPOT / DIGIPOT_STEPS;

const _: () = assert!(V_OUT_MIN < V_OUT_MAX);

// =============================================================================
// Conversions
// =============================================================================

/// Output voltage for wiper position `pos`, before range clamping.
pub fn raw_output_voltage(pos: u8) -> f32 {
    let r_wiper = f32::from(pos) * OHMS_PER_STEP;
    let r_eff = (r_wiper * R_SHUNT) / (r_wiper + R_SHUNT);
    let r2 = R_FIXED + r_eff;
    let v_pre = V_REF * (1.0 + r2 / R1);
    v_pre - V_HEADROOM
}

/// Output voltage for wiper position `pos`, clamped to the settable range.
#[inline]
pub fn digipot_to_voltage(pos: u8) -> f32 {
    raw_output_voltage(pos).clamp(V_OUT_MIN, V_OUT_MAX)
}

/// Wiper position giving the output closest to `v_out`.
///
/// `v_out` is clamped to the settable range first. Targets in the saturated
/// region map to the first position that reaches them, not to 255.
pub fn voltage_to_digipot(v_out: f32) -> u8 {
    let v_out = v_out.clamp(V_OUT_MIN, V_OUT_MAX);
    let v_pre = v_out + V_HEADROOM;
    let r2 = (v_pre / V_REF - 1.0) * R1;
    let r_eff = r2 - R_FIXED;
    if r_eff <= 0.0 {
        return 0;
    }

    let r_wiper = (r_eff * R_SHUNT) / (R_SHUNT - r_eff);
    if r_wiper < 0.0 {
        return 0;
    }
    if r_wiper > R_DIGIPOT {
        return u8::MAX;
    }
    (r_wiper / OHMS_PER_STEP).round().clamp(0.0, DIGIPOT_STEPS) as u8
}

/// Whether the network covers the settable range at both wiper ends.
///
/// Position 0 must land within 0.5 V of the minimum and position 255 must
/// reach at least 14.5 V without exceeding 16 V.
pub fn validate_digipot_range() -> bool {
    let low = raw_output_voltage(0);
    let high = raw_output_voltage(u8::MAX);
    (4.5..=5.5).contains(&low) && (14.5..=16.0).contains(&high)
}

/// Over-current trip point for an output voltage (mA).
///
/// Lower outputs dissipate more in the pass transistor, so the limit drops
/// in two steps below 10 V and 7 V.
pub fn adaptive_current_limit_ma(v_out: f32) -> f32 {
    if v_out < OCP_LOW_VOLTAGE_V {
        OCP_LIMIT_LOW_MA
    } else if v_out < OCP_MID_VOLTAGE_V {
        OCP_LIMIT_MID_MA
    } else {
        OCP_LIMIT_HIGH_MA
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_boundary_positions() {
        assert_abs_diff_eq!(digipot_to_voltage(0), 5.0, epsilon = 0.1);
        assert_abs_diff_eq!(digipot_to_voltage(255), 15.0, epsilon = 0.1);
        assert_abs_diff_eq!(digipot_to_voltage(128), 15.0, epsilon = 0.1);
        assert_abs_diff_eq!(digipot_to_voltage(64), 14.6, epsilon = 0.3);
    }

    #[test]
    fn test_voltage_to_position_boundaries() {
        assert_eq!(voltage_to_digipot(5.0), 0);
        assert_eq!(voltage_to_digipot(4.0), 0, "below range clamps to 5 V");
        let p15 = voltage_to_digipot(15.0);
        assert!((120..=140).contains(&p15), "15 V saturates near 129, got {p15}");
        assert_eq!(voltage_to_digipot(20.0), p15, "above range clamps to 15 V");
        assert_eq!(voltage_to_digipot(12.0), 11);
    }

    #[test]
    fn test_round_trip_in_useful_range() {
        for pos in (0..=125u8).step_by(25) {
            let back = voltage_to_digipot(digipot_to_voltage(pos));
            let diff = (i16::from(pos) - i16::from(back)).abs();
            assert!(diff <= 3, "pos {pos} -> {back} (diff {diff})");
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0f32;
        for pos in 0..=u8::MAX {
            let v = digipot_to_voltage(pos);
            assert!(v >= prev - 0.001, "non-monotonic at {pos}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_average_resolution() {
        let mv_per_step = (digipot_to_voltage(255) - digipot_to_voltage(0)) / DIGIPOT_STEPS * 1000.0;
        assert!((30.0..=50.0).contains(&mv_per_step), "{mv_per_step} mV/step");
    }

    #[test]
    fn test_range_validation() {
        assert!(validate_digipot_range());
        assert!(raw_output_voltage(255) > V_OUT_MAX, "unclamped output overshoots");
    }

    #[test]
    fn test_adaptive_current_limit() {
        assert_eq!(adaptive_current_limit_ma(5.0), 350.0);
        assert_eq!(adaptive_current_limit_ma(8.0), 450.0);
        assert_eq!(adaptive_current_limit_ma(12.0), 500.0);
        assert_eq!(adaptive_current_limit_ma(7.0), 450.0, "7 V is in the middle band");
        assert_eq!(adaptive_current_limit_ma(10.0), 500.0);
    }
}
