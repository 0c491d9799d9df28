//! Bar-style gauges: segmented VU meter and Nixie-tube style bar.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use super::primitives::{draw_panel, fill_rect};
use crate::{
    colors::{AMBER_DARK, DARK_GRAY, GREEN_DARK, LCD_BORDER, MID_GRAY, RED_DARK, VU_GREEN, VU_RED, VU_YELLOW, WHITE},
    meters::{SegmentZone, VuMeter, nixie_fill_width, segment_zone},
    thresholds::VU_SEGMENTS,
};

// =============================================================================
// VU Meter
// =============================================================================

/// Inner padding between the VU frame and its segments.
const VU_PAD_X: i32 = 5;
const VU_PAD_Y: i32 = 10;

/// Gap between adjacent segments.
const VU_SEGMENT_GAP: u32 = 2;

/// Lit and dim color of a segment zone.
const fn zone_colors(zone: SegmentZone) -> (Rgb565, Rgb565) {
    match zone {
        SegmentZone::Green => (VU_GREEN, GREEN_DARK),
        SegmentZone::Yellow => (VU_YELLOW, AMBER_DARK),
        SegmentZone::Red => (VU_RED, RED_DARK),
    }
}

/// Draw a 20-segment VU meter with a white peak-hold marker.
pub fn draw_vu_meter<D>(
    display: &mut D,
    bounds: Rectangle,
    meter: &VuMeter,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, bounds, DARK_GRAY, LCD_BORDER, 2);

    let inner_w = bounds.size.width as i32 - 2 * VU_PAD_X;
    let seg_pitch = inner_w / VU_SEGMENTS as i32;
    let seg_size = Size::new(
        (seg_pitch as u32).saturating_sub(VU_SEGMENT_GAP),
        (bounds.size.height as i32 - 2 * VU_PAD_Y).max(0) as u32,
    );
    let origin = bounds.top_left + Point::new(VU_PAD_X, VU_PAD_Y);

    for i in 0..VU_SEGMENTS {
        let (lit, dim) = zone_colors(segment_zone(i));
        let color = if meter.is_lit(i) { lit } else { dim };
        let top_left = origin + Point::new(i as i32 * seg_pitch, 0);
        fill_rect(display, Rectangle::new(top_left, seg_size), color);
    }

    if meter.peak() > 0.0 {
        let x = origin.x + (meter.peak() * inner_w as f32) as i32;
        Line::new(Point::new(x, origin.y), Point::new(x, origin.y + seg_size.height as i32))
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 2))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Nixie Bar
// =============================================================================

/// Pitch of the glowing segments inside a Nixie bar.
const NIXIE_SEGMENT_PITCH: u32 = 3;

/// Scale each channel of `color` by `factor` in `[0, 1]`.
fn dim(
    color: Rgb565,
    factor: f32,
) -> Rgb565 {
    let scale = |c: u8| (f32::from(c) * factor) as u8;
    Rgb565::new(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// Draw a horizontal Nixie bar filled to `value / max`.
///
/// The fill is made of 2 px segments on a 3 px pitch whose brightness ramps
/// from 70 % at the left to full at the right edge of the fill.
pub fn draw_nixie_bar<D>(
    display: &mut D,
    bounds: Rectangle,
    value: f64,
    max: f64,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, bounds, DARK_GRAY, MID_GRAY, 1);

    let fill = nixie_fill_width(value, max, bounds.size.width);
    let segments = fill / NIXIE_SEGMENT_PITCH;
    if segments == 0 {
        return;
    }

    let seg_size = Size::new(NIXIE_SEGMENT_PITCH - 1, bounds.size.height.saturating_sub(4));
    let last = (segments - 1).max(1) as f32;
    for i in 0..segments {
        let intensity = 0.3f32.mul_add(i as f32 / last, 0.7);
        let top_left = bounds.top_left + Point::new(2 + (i * NIXIE_SEGMENT_PITCH) as i32, 2);
        fill_rect(display, Rectangle::new(top_left, seg_size), dim(color, intensity));
    }
}
