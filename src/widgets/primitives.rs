//! Low-level drawing primitives shared across widgets and screens.
//!
//! All functions draw into any `DrawTarget<Color = Rgb565>`, so the same code
//! renders into the simulator window and into in-memory buffers under test.
//! Draw errors are discarded with `.ok()`: a frame that fails to draw is
//! simply overwritten by the next one.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
    text::Text,
};

use crate::{
    colors::{AMBER, DARK_GRAY},
    config::{CENTER_X, TITLE_Y},
    styles::{BUTTON_ACTIVE_STYLE, BUTTON_STYLE, CENTERED, LEFT_ALIGNED, TITLE_STYLE},
};

/// Fill `rect` with a solid color.
pub fn fill_rect<D>(
    display: &mut D,
    rect: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// Filled rectangle with an inside border.
pub fn draw_panel<D>(
    display: &mut D,
    rect: Rectangle,
    fill: Rgb565,
    border: Rgb565,
    border_width: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(border)
        .stroke_width(border_width)
        .build();
    rect.into_styled(style).draw(display).ok();
}

/// Left-aligned text with its baseline at `position`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, style, LEFT_ALIGNED).draw(display).ok();
}

/// Horizontally centered text with its baseline at `position`.
pub fn draw_centered<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, style, CENTERED).draw(display).ok();
}

/// Amber page title centered at the top of the content area.
pub fn draw_title<D>(
    display: &mut D,
    title: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_centered(display, title, Point::new(CENTER_X, TITLE_Y), TITLE_STYLE);
}

/// Touch button: amber border, filled amber with black text when `active`.
pub fn draw_button<D>(
    display: &mut D,
    rect: Rectangle,
    label: &str,
    active: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (fill, text_style) = if active {
        (AMBER, BUTTON_ACTIVE_STYLE)
    } else {
        (DARK_GRAY, BUTTON_STYLE)
    };
    draw_panel(display, rect, fill, AMBER, 2);
    // Baseline a few pixels below the center for the 6x10 font.
    let center = rect.center() + Point::new(0, 4);
    draw_centered(display, label, center, text_style);
}
