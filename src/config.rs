//! Application configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Every screen position is a compile-time `const`, so the drawing code never
//! recomputes `SCREEN_WIDTH / 2` or panel offsets inside the frame loop.
//! Layout values mirror the 5" 800x480 front panel of the supply.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (5" front panel: 800x480).
pub const SCREEN_WIDTH: u32 = 800;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// Screen center X coordinate, pre-cast for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target refresh rate of the front panel.
pub const TARGET_FPS: u32 = 30;

/// Target frame time (~30 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

/// Boot screen loading dots advance this many times per second.
pub const BOOT_DOTS_PER_SECOND: f32 = 2.0;

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Samples kept per rail for the oscilloscope trace.
pub const OSCILLOSCOPE_CAPACITY: usize = 200;

/// Vertical amplification applied to the deviation from target (pixels per volt).
pub const OSCILLOSCOPE_GAIN: f64 = 50.0;

/// Regulated set-point of rail A in volts.
pub const RAIL_A_TARGET_V: f64 = 12.0;

/// Regulated set-point of rail B in volts.
pub const RAIL_B_TARGET_V: f64 = 5.0;

/// Entries kept by the in-app event log.
pub const EVENT_LOG_CAPACITY: usize = 1000;

// =============================================================================
// Navigation Bar
// =============================================================================

/// Navigation bar height at the bottom of every page.
pub const NAV_HEIGHT: u32 = 35;

/// Top edge of the navigation bar.
pub const NAV_Y: i32 = (SCREEN_HEIGHT - NAV_HEIGHT) as i32;

/// Height of the page content area (everything above the navigation bar).
pub const CONTENT_HEIGHT: u32 = SCREEN_HEIGHT - NAV_HEIGHT;

/// Baseline of page titles.
pub const TITLE_Y: i32 = 28;

// =============================================================================
// LISTEN Page Layout
// =============================================================================

/// Rail A VU meter origin.
pub const GAUGE_A_X: i32 = 50;
/// Rail B VU meter origin.
pub const GAUGE_B_X: i32 = 450;
/// Top edge of both VU meters.
pub const GAUGE_Y: i32 = 60;
/// VU meter width.
pub const GAUGE_WIDTH: u32 = 300;
/// VU meter height.
pub const GAUGE_HEIGHT: u32 = 180;

/// Top edge of the LCD oscilloscope panel.
pub const LCD_Y: i32 = 260;
/// Left edge of the LCD panel.
pub const LCD_X: i32 = 50;
/// LCD panel width.
pub const LCD_WIDTH: u32 = 700;
/// LCD panel height.
pub const LCD_HEIGHT: u32 = 95;

/// Requested waveform width per rail. The buffer holds fewer samples, so the
/// trace covers the most recent [`OSCILLOSCOPE_CAPACITY`] pixels.
pub const SCOPE_WIDTH: usize = 300;
/// Waveform plot height.
pub const SCOPE_HEIGHT: i32 = 80;
/// Rail A trace origin.
pub const SCOPE_A_X: i32 = 70;
/// Rail B trace origin.
pub const SCOPE_B_X: i32 = 430;
/// Top edge of both traces.
pub const SCOPE_Y: i32 = LCD_Y + 8;

/// Baseline of the problem status line.
pub const STATUS_Y: i32 = 392;

// =============================================================================
// DETAILS Page Layout
// =============================================================================

/// Left edge of the rail A column.
pub const DETAILS_A_X: i32 = 20;
/// Left edge of the rail B column.
pub const DETAILS_B_X: i32 = 410;
/// Baseline of the column headings.
pub const DETAILS_Y: i32 = 62;
/// Vertical distance between metric rows.
pub const DETAILS_SPACING: i32 = 35;
/// Nixie bar height.
pub const NIXIE_HEIGHT: u32 = 16;
/// Nixie bar width.
pub const NIXIE_WIDTH: u32 = 150;
/// Horizontal offset of the value text from the column edge.
pub const DETAILS_VALUE_DX: i32 = 120;
/// Horizontal offset of the Nixie bar from the column edge.
pub const DETAILS_BAR_DX: i32 = 220;

// =============================================================================
// HEALTH / SESSION / CONFIG Page Layout
// =============================================================================

/// Baseline of the HEALTH system status line.
pub const HEALTH_STATUS_Y: i32 = 70;
/// Top of the HEALTH protection block.
pub const HEALTH_PROTECTION_Y: i32 = 170;
/// Top of the HEALTH temperature block.
pub const HEALTH_TEMP_Y: i32 = 300;
/// Line height of small text lists.
pub const LIST_LINE_HEIGHT: i32 = 25;

/// Baseline of the SESSION timer.
pub const SESSION_TIMER_Y: i32 = 110;
/// Baseline of the SESSION energy counter.
pub const SESSION_ENERGY_Y: i32 = 200;
/// Top of the SESSION statistics list.
pub const SESSION_STATS_Y: i32 = 280;
/// Number of event log lines shown on the SESSION page.
pub const SESSION_LOG_LINES: usize = 3;

/// Top of the CONFIG option list.
pub const CONFIG_OPTIONS_Y: i32 = 70;
/// Distance between CONFIG option lines.
pub const CONFIG_OPTION_HEIGHT: i32 = 45;
/// Top edge of the simulation mode buttons.
pub const MODE_BUTTONS_Y: i32 = 350;
/// Left edge of the first mode button.
pub const MODE_BUTTONS_X: i32 = 50;
/// Horizontal pitch between mode buttons.
pub const MODE_BUTTON_PITCH: i32 = 120;
/// Mode button width.
pub const MODE_BUTTON_WIDTH: u32 = 100;
/// Mode button height.
pub const MODE_BUTTON_HEIGHT: u32 = 40;

/// Front panel brightness shown on the CONFIG page (fixed on this hardware revision).
pub const BRIGHTNESS_PERCENT: u8 = 80;
