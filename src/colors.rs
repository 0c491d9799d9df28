//! Color constants for the audiophile front panel theme.
//!
//! Warm amber for titles and highlights, green for rail A and healthy states,
//! cyan for rail B, red for faults, on near-black grays.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The custom colors below are the theme's 8-bit values shifted down
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::telemetry::Rail;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Values and peak markers.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure cyan. Rail B traces and energy readout.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Grays
// =============================================================================

/// Panel and bar backgrounds. (30, 30, 35)
pub const DARK_GRAY: Rgb565 = Rgb565::new(3, 7, 4);

/// Bar borders and inactive nav entries. (60, 60, 70)
pub const MID_GRAY: Rgb565 = Rgb565::new(7, 15, 8);

/// Secondary labels. (120, 120, 130)
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(15, 30, 16);

// =============================================================================
// Theme Colors
// =============================================================================

/// Titles, highlights and button borders. (255, 176, 0)
pub const AMBER: Rgb565 = Rgb565::new(31, 44, 0);

/// Unlit yellow VU segment. (100, 70, 0)
pub const AMBER_DARK: Rgb565 = Rgb565::new(12, 17, 0);

/// Rail A and healthy states. (0, 255, 100)
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 12);

/// Unlit green VU segment. (0, 100, 40)
pub const GREEN_DARK: Rgb565 = Rgb565::new(0, 25, 5);

/// Faults and over-temperature. (255, 50, 50)
pub const RED: Rgb565 = Rgb565::new(31, 12, 6);

/// Unlit red VU segment. (100, 20, 20)
pub const RED_DARK: Rgb565 = Rgb565::new(12, 5, 2);

// =============================================================================
// VU Meter Segments
// =============================================================================

/// Lit segment below 60 % of full scale. (0, 200, 0)
pub const VU_GREEN: Rgb565 = Rgb565::new(0, 50, 0);

/// Lit segment from 60 % to 80 %. (255, 200, 0)
pub const VU_YELLOW: Rgb565 = Rgb565::new(31, 50, 0);

/// Lit segment from 80 %.
pub const VU_RED: Rgb565 = Rgb565::RED;

// =============================================================================
// LCD Panel
// =============================================================================

/// Oscilloscope panel background. (10, 15, 20)
pub const LCD_BG: Rgb565 = Rgb565::new(1, 3, 2);

/// Oscilloscope and VU frame. (40, 50, 60)
pub const LCD_BORDER: Rgb565 = Rgb565::new(5, 12, 7);

/// Trace color of a rail: green for A, cyan for B.
pub const fn rail_color(rail: Rail) -> Rgb565 {
    match rail {
        Rail::A => GREEN,
        Rail::B => CYAN,
    }
}

/// Healthy/faulty status color.
#[inline]
pub const fn status_color(fault: bool) -> Rgb565 {
    if fault { RED } else { GREEN }
}
