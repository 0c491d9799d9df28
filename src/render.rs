//! Render state tracking for optimized display updates.
//!
//! [`RenderState`] is the renderer's explicit cache. It is owned by the main
//! loop and passed by reference, so nothing about rendering lives in a global.
//!
//! This module tracks display state for:
//! - Full clears (first frame, screen switch, locale switch)
//! - Navigation bar conditional redraw (on FPS change or after a full clear)
//! - Localized navigation labels, rebuilt only when the locale changes
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Whole screen | Screen or locale change | Full clear |
//! | Nav bar | FPS change / after full clear | Conditional redraw |
//! | Nav labels | Locale change | Cached strings |
//! | Page content | Every frame | Content area cleared and redrawn |

use core::fmt::Write;

use heapless::{String, Vec};

use crate::i18n::Locale;
use crate::pages::Screen;

/// Maximum length of one `[k] NAME` label in bytes.
pub const NAV_LABEL_LEN: usize = 32;

/// Cached navigation labels, one per page in key order.
pub type NavLabels = Vec<String<NAV_LABEL_LEN>, 5>;

/// Build the `[k] NAME` labels for `locale`.
pub fn build_nav_labels(locale: Locale) -> NavLabels {
    let mut labels = NavLabels::new();
    for page in Screen::PAGES {
        let (Some(key), Some(title)) = (page.key(), page.title()) else {
            continue;
        };
        let mut label: String<NAV_LABEL_LEN> = String::new();
        write!(label, "[{key}] {}", title.get(locale)).ok();
        // Capacity matches Screen::PAGES.
        labels.push(label).ok();
    }
    labels
}

/// Tracks render state for optimized display updates.
#[derive(Clone, Debug)]
pub struct RenderState {
    /// Screen drawn last frame (`None` before the first frame).
    prev_screen: Option<Screen>,

    /// Locale the cached labels were built for.
    labels_locale: Locale,

    /// Cached navigation labels.
    nav_labels: NavLabels,

    /// Previous FPS value (rounded to avoid unnecessary redraws).
    prev_fps_rounded: u32,

    /// Whether this frame starts from a cleared display.
    full_clear: bool,

    /// Number of times the labels were rebuilt.
    label_builds: u32,
}

impl RenderState {
    /// Create a new render state for the first frame.
    pub fn new(locale: Locale) -> Self {
        Self {
            prev_screen: None,
            labels_locale: locale,
            nav_labels: build_nav_labels(locale),
            prev_fps_rounded: 0,
            full_clear: true,
            label_builds: 1,
        }
    }

    /// Start a frame showing `screen` in `locale`.
    ///
    /// Flags a full clear on the first frame and whenever the screen or locale
    /// changed since the previous frame, and rebuilds the label cache on a
    /// locale change.
    pub fn begin_frame(
        &mut self,
        screen: Screen,
        locale: Locale,
    ) {
        if self.prev_screen != Some(screen) {
            self.full_clear = true;
        }
        if locale != self.labels_locale {
            self.nav_labels = build_nav_labels(locale);
            self.labels_locale = locale;
            self.label_builds += 1;
            self.full_clear = true;
        }
        self.prev_screen = Some(screen);
    }

    /// Whether the whole display must be cleared before drawing this frame.
    #[inline]
    pub const fn needs_full_clear(&self) -> bool {
        self.full_clear
    }

    /// Check if the navigation bar needs redrawing.
    ///
    /// Uses `fps.round()` to match the display formatting (`{:.0}`) which also
    /// rounds, so the dirty check sees the same value that gets displayed.
    pub fn check_nav_dirty(
        &mut self,
        fps: f32,
    ) -> bool {
        let fps_rounded = fps.round() as u32;
        let dirty = self.full_clear || fps_rounded != self.prev_fps_rounded;
        self.prev_fps_rounded = fps_rounded;
        dirty
    }

    /// Localized `[k] NAME` labels for the current locale.
    #[inline]
    pub fn nav_labels(&self) -> &[String<NAV_LABEL_LEN>] {
        &self.nav_labels
    }

    /// Number of label cache rebuilds (including the initial build).
    #[inline]
    pub const fn label_builds(&self) -> u32 {
        self.label_builds
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.full_clear = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
