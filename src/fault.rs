//! Fault injection: simulation modes and per-tick rail perturbation.
//!
//! Rail A follows the active [`SimulationMode`]; rail B always receives the
//! NORMAL perturbation of its own profile and never has a protection flag
//! asserted. That asymmetry is how the bench simulator behaves and is kept.
//!
//! | Mode | Rail A field | Distribution | Flag |
//! |------|--------------|--------------|------|
//! | NORMAL | V, I, T, ripple | target+N(0,0.01), N(150,5), N(35,1), N(5,1) | - |
//! | HOT | T | N(90,2) | OTP |
//! | RIPPLE | ripple | N(100,20) | - |
//! | LOAD | I | N(600,20) | OCP |
//! | LOW_V | V | target x 0.8 | - |
//! | HIGH_V | V | N(17,0.2) | OVP |
//!
//! RIPPLE asserts no hard flag; high ripple is reported by the problem
//! detector from the raw value instead.

use core::fmt;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::i18n::Text;
use crate::telemetry::RailState;

// =============================================================================
// Noise Source
// =============================================================================

/// Source of Gaussian noise for the fault injector.
pub trait NoiseSource {
    /// Draw one sample from `N(mean, std_dev)`.
    fn gaussian(
        &mut self,
        mean: f64,
        std_dev: f64,
    ) -> f64;
}

/// Gaussian noise backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct GaussianNoise<R> {
    rng: R,
}

impl<R: Rng> GaussianNoise<R> {
    /// Wrap a random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn gaussian(
        &mut self,
        mean: f64,
        std_dev: f64,
    ) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        std_dev.mul_add(z, mean)
    }
}

// =============================================================================
// Simulation Modes
// =============================================================================

/// Fault scenario applied to rail A on every tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum SimulationMode {
    /// Nominal regulation with small Gaussian noise.
    #[default]
    Normal,
    /// Regulator overheating; trips OTP.
    Hot,
    /// Excessive output ripple; no hard flag.
    Ripple,
    /// Overload; trips OCP.
    Load,
    /// Output sagging to 80% of target.
    LowV,
    /// Output runaway to ~17 V; trips OVP.
    HighV,
}

impl SimulationMode {
    /// All modes in button order.
    pub const ALL: [Self; 6] = [Self::Normal, Self::Hot, Self::Ripple, Self::Load, Self::LowV, Self::HighV];

    /// Upper-case mode name as shown on the CONFIG page.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Hot => "HOT",
            Self::Ripple => "RIPPLE",
            Self::Load => "LOAD",
            Self::LowV => "LOW_V",
            Self::HighV => "HIGH_V",
        }
    }

    /// Short localized label for the mode button.
    pub const fn button_label(self) -> Text {
        match self {
            Self::Normal => Text::SimNormal,
            Self::Hot => Text::SimHot,
            Self::Ripple => Text::SimRipple,
            Self::Load => Text::SimLoad,
            Self::LowV => Text::SimLowV,
            Self::HighV => Text::SimHighV,
        }
    }

    /// Position in [`SimulationMode::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Rail Profiles
// =============================================================================

/// Nominal operating point of a rail: `(mean, std_dev)` per perturbed field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RailProfile {
    /// Output voltage noise standard deviation around the target (V).
    pub voltage_noise: f64,
    /// Load current distribution (mA).
    pub current_ma: (f64, f64),
    /// Temperature distribution (°C).
    pub temperature_c: (f64, f64),
    /// Ripple distribution (µV), `None` when the rail's ripple is not simulated.
    pub ripple_uv: Option<(f64, f64)>,
}

/// Rail A nominal profile.
pub const RAIL_A_NORMAL: RailProfile = RailProfile {
    voltage_noise: 0.01,
    current_ma: (150.0, 5.0),
    temperature_c: (35.0, 1.0),
    ripple_uv: Some((5.0, 1.0)),
};

/// Rail B nominal profile (ripple stays at its initial value).
pub const RAIL_B_NORMAL: RailProfile = RailProfile {
    voltage_noise: 0.01,
    current_ma: (100.0, 3.0),
    temperature_c: (32.0, 1.0),
    ripple_uv: None,
};

/// HOT mode temperature distribution (°C).
pub const HOT_TEMPERATURE_C: (f64, f64) = (90.0, 2.0);
/// RIPPLE mode ripple distribution (µV).
pub const RIPPLE_UV: (f64, f64) = (100.0, 20.0);
/// LOAD mode current distribution (mA).
pub const LOAD_CURRENT_MA: (f64, f64) = (600.0, 20.0);
/// LOW_V mode output as a fraction of target.
pub const LOW_V_FACTOR: f64 = 0.8;
/// HIGH_V mode voltage distribution (V).
pub const HIGH_V_VOLTAGE: (f64, f64) = (17.0, 0.2);

// =============================================================================
// Perturbation
// =============================================================================

/// Apply the nominal perturbation of `profile` to `rail`.
///
/// Touches voltage, current, temperature and (if the profile has one) ripple.
/// Never touches protection flags.
pub fn apply_normal<N: NoiseSource + ?Sized>(
    rail: &mut RailState,
    profile: &RailProfile,
    noise: &mut N,
) {
    rail.voltage_actual = rail.voltage_target + noise.gaussian(0.0, profile.voltage_noise);
    rail.current_ma = noise.gaussian(profile.current_ma.0, profile.current_ma.1);
    rail.temperature_c = noise.gaussian(profile.temperature_c.0, profile.temperature_c.1);
    if let Some((mean, std_dev)) = profile.ripple_uv {
        rail.ripple_uv = noise.gaussian(mean, std_dev);
    }
}

/// Apply one tick of `mode` to the fault-injected rail.
///
/// Fields not listed for a mode keep their previous values, so e.g. HOT leaves
/// the voltage wherever the last NORMAL tick put it.
pub fn apply_mode<N: NoiseSource + ?Sized>(
    mode: SimulationMode,
    rail: &mut RailState,
    noise: &mut N,
) {
    match mode {
        SimulationMode::Normal => apply_normal(rail, &RAIL_A_NORMAL, noise),
        SimulationMode::Hot => {
            rail.temperature_c = noise.gaussian(HOT_TEMPERATURE_C.0, HOT_TEMPERATURE_C.1);
            rail.otp_active = true;
        }
        SimulationMode::Ripple => {
            rail.ripple_uv = noise.gaussian(RIPPLE_UV.0, RIPPLE_UV.1);
        }
        SimulationMode::Load => {
            rail.current_ma = noise.gaussian(LOAD_CURRENT_MA.0, LOAD_CURRENT_MA.1);
            rail.ocp_active = true;
        }
        SimulationMode::LowV => {
            rail.voltage_actual = rail.voltage_target * LOW_V_FACTOR;
        }
        SimulationMode::HighV => {
            rail.voltage_actual = noise.gaussian(HIGH_V_VOLTAGE.0, HIGH_V_VOLTAGE.1);
            rail.ovp_active = true;
        }
    }
}
