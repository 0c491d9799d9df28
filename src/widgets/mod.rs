//! Widget components for the front panel display.
//!
//! - [`primitives`]: panels, buttons and text helpers shared by everything else
//! - [`navbar`]: bottom navigation bar with the FPS counter
//! - [`gauges`]: segmented VU meter and Nixie bar
//! - [`scope`]: oscilloscope polyline
//!
//! Every widget is generic over `DrawTarget<Color = Rgb565>` and reads its
//! styles from [`styles`](crate::styles); none of them keep state between
//! frames.

mod gauges;
mod navbar;
mod primitives;
mod scope;

pub use gauges::{draw_nixie_bar, draw_vu_meter};
pub use navbar::{draw_nav_bar, nav_positions};
pub use primitives::{draw_button, draw_centered, draw_panel, draw_text, draw_title, fill_rect};
pub use scope::draw_waveform;
