//! Oscilloscope trace drawn as a 1 px polyline.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Polyline},
};
use heapless::Vec;

use crate::config::OSCILLOSCOPE_CAPACITY;

/// Draw the points of one waveform, oldest first.
///
/// Fewer than two points draw nothing.
pub fn draw_waveform<D, I>(
    display: &mut D,
    points: I,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
    I: IntoIterator<Item = (i32, i32)>,
{
    let vertices: Vec<Point, OSCILLOSCOPE_CAPACITY> =
        points.into_iter().take(OSCILLOSCOPE_CAPACITY).map(|(x, y)| Point::new(x, y)).collect();
    if vertices.len() < 2 {
        return;
    }
    Polyline::new(&vertices)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}
