//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Static Style Constants
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible, so every fixed
//! style lives in read-only data and draw functions reference it directly.
//!
//! # Fonts
//!
//! Labels use the `iso_8859_1` mono fonts so translated strings (É, Ö, ñ) and
//! units (µV, °C) render correctly. Large numeric readouts use `ProFont`.
//!
//! # Dynamic Color Styles
//!
//! Status text changes color with the problem state. For these, callers build
//! `MonoTextStyle::new(SMALL_FONT, color)`; only the color varies.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{AMBER, BLACK, CYAN, GREEN, LIGHT_GRAY, MID_GRAY, RED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Titles, boot screen, button labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Metric rows and lists.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. FPS counter in the nav bar.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small font (6x10). Nav bar, event log, button labels.
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (9x15). Metric rows, status lines, options.
pub const MEDIUM_FONT: &MonoFont = &FONT_9X15;

/// Large font (10x20). Page titles and section headers.
pub const LARGE_FONT: &MonoFont = &FONT_10X20;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Amber page title.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, AMBER);

/// Amber section header.
pub const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, AMBER);

/// Secondary label text.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, LIGHT_GRAY);

/// White value text next to labels.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, WHITE);

/// Green status text (no problems, boot progress).
pub const STATUS_OK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, GREEN);

/// Red status text (active problems).
pub const STATUS_FAULT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, RED);

/// Inactive nav bar entry.
pub const NAV_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// Active nav bar entry.
pub const NAV_ACTIVE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, AMBER);

/// Dimmed small text (boot version line).
pub const DIM_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, MID_GRAY);

/// Amber button label.
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, AMBER);

/// Black button label on an amber (active) button.
pub const BUTTON_ACTIVE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Large green readout (`ProFont` 24pt). Session timer.
pub const READOUT_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, GREEN);

/// Large cyan readout (`ProFont` 24pt). Session energy.
pub const READOUT_STYLE_CYAN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, CYAN);

/// Large amber readout (`ProFont` 24pt). Boot title.
pub const READOUT_STYLE_AMBER: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, AMBER);
