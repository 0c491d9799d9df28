//! Centralized telemetry threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions, so
//! the problem detector, the colour choices on HEALTH and the bar scales on
//! DETAILS agree with each other.
//!
//! # Compile-Time Validation
//!
//! Each group includes `const` assertions on ordering. Misconfigured values
//! (e.g. a yellow VU zone that starts after the red zone) fail the build.

// =============================================================================
// Soft Warnings
// =============================================================================

/// Ripple above this level (microvolts) is reported as a problem.
/// Independent of the hard protection flags: RIPPLE mode raises ripple but
/// asserts no flag, and the detector reports it from the raw value.
pub const RIPPLE_WARNING_UV: f64 = 50.0;

/// Rail temperature above this level is drawn in red on the HEALTH page.
pub const TEMP_WARNING_C: f64 = 70.0;

// =============================================================================
// Adaptive Current Limit (OCP set-point by output voltage)
// =============================================================================

/// Below this output voltage the current limit is [`OCP_LIMIT_LOW_MA`].
pub const OCP_LOW_VOLTAGE_V: f32 = 7.0;

/// Below this output voltage the current limit is [`OCP_LIMIT_MID_MA`].
pub const OCP_MID_VOLTAGE_V: f32 = 10.0;

/// Current limit for outputs under 7 V.
pub const OCP_LIMIT_LOW_MA: f32 = 350.0;

/// Current limit for outputs between 7 V and 10 V.
pub const OCP_LIMIT_MID_MA: f32 = 450.0;

/// Current limit for outputs of 10 V and above.
pub const OCP_LIMIT_HIGH_MA: f32 = 500.0;

const _: () = assert!(OCP_LOW_VOLTAGE_V < OCP_MID_VOLTAGE_V);
const _: () = assert!(OCP_LIMIT_LOW_MA < OCP_LIMIT_MID_MA);
const _: () = assert!(OCP_LIMIT_MID_MA < OCP_LIMIT_HIGH_MA);

// =============================================================================
// VU Meter Zones
// =============================================================================

/// Number of segments in a VU meter.
pub const VU_SEGMENTS: usize = 20;

/// Segments below this fraction of full scale are green.
pub const VU_YELLOW_FROM: f32 = 0.6;

/// Segments at or above this fraction of full scale are red.
pub const VU_RED_FROM: f32 = 0.8;

/// Peak marker multiplier applied each tick the peak is not exceeded.
pub const VU_PEAK_DECAY: f32 = 0.95;

const _: () = assert!(VU_YELLOW_FROM < VU_RED_FROM);
const _: () = assert!(VU_RED_FROM < 1.0);
const _: () = assert!(VU_PEAK_DECAY < 1.0);

// =============================================================================
// DETAILS Bar Full Scale
// =============================================================================

/// Voltage bar full scale (V).
pub const BAR_MAX_VOLTAGE_V: f64 = 15.0;
/// Current bar full scale (mA).
pub const BAR_MAX_CURRENT_MA: f64 = 500.0;
/// Power bar full scale (W).
pub const BAR_MAX_POWER_W: f64 = 5.0;
/// Temperature bar full scale (°C).
pub const BAR_MAX_TEMP_C: f64 = 100.0;
/// Ripple bar full scale (µV). Equal to the warning level, so a full bar means "warning".
pub const BAR_MAX_RIPPLE_UV: f64 = RIPPLE_WARNING_UV;
/// Headroom bar full scale (V).
pub const BAR_MAX_HEADROOM_V: f64 = 5.0;
/// Noise bar full scale (µV).
pub const BAR_MAX_NOISE_UV: f64 = 50.0;
/// Efficiency bar full scale (%).
pub const BAR_MAX_EFFICIENCY_PCT: f64 = 100.0;

const _: () = assert!(TEMP_WARNING_C < BAR_MAX_TEMP_C);
