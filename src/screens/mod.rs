//! Full-screen pages and the per-frame composition.
//!
//! # Screens
//!
//! - **Boot** ([`boot`]): splash with animated initialisation dots, no nav bar
//! - **Listen** ([`listen`]): VU meters, oscilloscope, status line
//! - **Details** ([`details`]): eight metrics per rail with Nixie bars
//! - **Health** ([`health`]): problems, protections, temperatures
//! - **Session** ([`session`]): uptime, energy, recent events
//! - **Config** ([`config`]): options, set-points, simulation mode buttons
//!
//! # Frame Composition
//!
//! [`render_frame`] asks the [`RenderState`] whether the whole display must
//! be cleared (screen or locale change). Otherwise only the content area above
//! the nav bar is cleared and redrawn, and the nav bar is redrawn only when
//! the displayed FPS changes.

mod boot;
mod config;
mod details;
mod health;
mod listen;
mod session;

use core::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

pub use boot::{boot_dots, draw_boot_screen};
pub use config::{Setpoint, draw_config_page};
pub use details::{METRIC_ROWS, MetricRow, draw_details_page, metric_rows};
pub use health::{draw_health_page, is_temperature_warning, system_status};
pub use listen::{draw_listen_page, status_line};
pub use session::{draw_session_page, format_hms};

use crate::{
    app::Dashboard,
    colors::BLACK,
    config::{CONTENT_HEIGHT, SCREEN_WIDTH},
    fault::NoiseSource,
    i18n::Text,
    pages::Screen,
    render::RenderState,
    telemetry::Rail,
    widgets::{draw_nav_bar, draw_title, fill_rect},
};

/// Everything above the navigation bar.
const CONTENT_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, CONTENT_HEIGHT));

/// Localized rail name.
pub(crate) const fn rail_text(rail: Rail) -> Text {
    match rail {
        Rail::A => Text::RailA,
        Rail::B => Text::RailB,
    }
}

/// What [`render_frame`] had to redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The whole display was cleared.
    pub full_clear: bool,
    /// The navigation bar was redrawn.
    pub nav_redrawn: bool,
}

/// Draw the content of the active screen (title included, nav bar excluded).
pub fn draw_screen<D, N>(
    display: &mut D,
    dashboard: &mut Dashboard<N>,
    boot_elapsed: Duration,
) where
    D: DrawTarget<Color = Rgb565>,
    N: NoiseSource,
{
    let screen = dashboard.screen();
    let locale = dashboard.locale();

    if let Some(title) = screen.title() {
        draw_title(display, title.get(locale));
    }

    match screen {
        Screen::Boot => draw_boot_screen(display, locale, boot_elapsed),
        Screen::Listen => {
            let problems = dashboard.problems();
            let meters = [dashboard.vu(Rail::A), dashboard.vu(Rail::B)];
            draw_listen_page(display, dashboard.simulator(), meters, &problems, locale);
        }
        Screen::Details => draw_details_page(display, dashboard.state(), locale),
        Screen::Health => {
            let problems = dashboard.problems();
            draw_health_page(display, dashboard.state(), &problems, locale);
        }
        Screen::Session => draw_session_page(display, dashboard.state(), dashboard.log(), locale),
        Screen::Config => draw_config_page(display, dashboard.state(), locale),
    }
}

/// Compose one frame: clear, page content, then the nav bar if it is dirty.
pub fn render_frame<D, N>(
    display: &mut D,
    dashboard: &mut Dashboard<N>,
    render: &mut RenderState,
    fps: f32,
    boot_elapsed: Duration,
) -> FrameReport
where
    D: DrawTarget<Color = Rgb565>,
    N: NoiseSource,
{
    let screen = dashboard.screen();
    render.begin_frame(screen, dashboard.locale());

    let mut report = FrameReport {
        full_clear: render.needs_full_clear(),
        nav_redrawn: false,
    };
    if report.full_clear {
        display.clear(BLACK).ok();
    } else {
        fill_rect(display, CONTENT_AREA, BLACK);
    }

    draw_screen(display, dashboard, boot_elapsed);

    if !screen.is_boot() && render.check_nav_dirty(fps) {
        draw_nav_bar(display, render.nav_labels(), screen, fps);
        report.nav_redrawn = true;
    }

    render.end_frame();
    report
}
