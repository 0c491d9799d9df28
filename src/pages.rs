//! Page navigation for the multi-screen front panel.
//!
//! [`PageController`] is a small finite-state machine over [`Screen`]:
//!
//! ```text
//!   BOOT --confirm--> LISTEN <--select(k)--> DETAILS / HEALTH / SESSION / CONFIG
//! ```
//!
//! - BOOT only accepts `confirm`. Page selection, locale cycling and quit are
//!   ignored there.
//! - From any page, `select(k)` with `k` in `1..=5` jumps straight to page `k`.
//! - `quit` is honored from any page, never from BOOT.
//! - `cycle_locale` is orthogonal to the page and is a no-op in BOOT.
//!
//! There is no terminal state other than process exit.

use core::ops::ControlFlow;

use log::info;

use crate::i18n::{Locale, Text};

/// Front panel states.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Screen {
    /// Splash screen waiting for confirmation.
    #[default]
    Boot,
    /// VU meters and waveforms (key 1).
    Listen,
    /// Per-rail metric bars (key 2).
    Details,
    /// Protections and temperatures (key 3).
    Health,
    /// Uptime and energy (key 4).
    Session,
    /// Language, set-points and fault simulation (key 5).
    Config,
}

impl Screen {
    /// Navigable pages in key order (BOOT is not selectable).
    pub const PAGES: [Self; 5] = [Self::Listen, Self::Details, Self::Health, Self::Session, Self::Config];

    /// Page bound to numeric key `k` (1-5).
    #[inline]
    pub const fn from_key(k: u8) -> Option<Self> {
        match k {
            1 => Some(Self::Listen),
            2 => Some(Self::Details),
            3 => Some(Self::Health),
            4 => Some(Self::Session),
            5 => Some(Self::Config),
            _ => None,
        }
    }

    /// Numeric key of this page (`None` for BOOT).
    #[inline]
    pub const fn key(self) -> Option<u8> {
        match self {
            Self::Boot => None,
            Self::Listen => Some(1),
            Self::Details => Some(2),
            Self::Health => Some(3),
            Self::Session => Some(4),
            Self::Config => Some(5),
        }
    }

    /// Localized page title.
    pub const fn title(self) -> Option<Text> {
        match self {
            Self::Boot => None,
            Self::Listen => Some(Text::PageListen),
            Self::Details => Some(Text::PageDetails),
            Self::Health => Some(Text::PageHealth),
            Self::Session => Some(Text::PageSession),
            Self::Config => Some(Text::PageConfig),
        }
    }

    /// Whether this is the boot splash.
    #[inline]
    pub const fn is_boot(self) -> bool {
        matches!(self, Self::Boot)
    }
}

/// Navigation state machine plus the active locale.
#[derive(Clone, Debug, Default)]
pub struct PageController {
    screen: Screen,
    locale: Locale,
}

impl PageController {
    /// Start at BOOT with the given locale.
    pub const fn new(locale: Locale) -> Self {
        Self {
            screen: Screen::Boot,
            locale,
        }
    }

    /// Current state.
    #[inline]
    pub const fn current(&self) -> Screen {
        self.screen
    }

    /// Active locale.
    #[inline]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Leave BOOT for LISTEN. Returns `true` if the state changed.
    pub fn confirm(&mut self) -> bool {
        if self.screen.is_boot() {
            self.screen = Screen::Listen;
            info!("boot confirmed");
            true
        } else {
            false
        }
    }

    /// Jump to page `k` (1-5). Ignored in BOOT or for other values.
    /// Returns `true` if the state changed.
    pub fn select(
        &mut self,
        k: u8,
    ) -> bool {
        if self.screen.is_boot() {
            return false;
        }
        match Screen::from_key(k) {
            Some(page) if page != self.screen => {
                info!("page {:?} -> {page:?}", self.screen);
                self.screen = page;
                true
            }
            _ => false,
        }
    }

    /// Advance to the next locale. No-op in BOOT. Returns `true` if it changed.
    pub fn cycle_locale(&mut self) -> bool {
        if self.screen.is_boot() {
            return false;
        }
        self.locale = self.locale.next();
        info!("locale -> {}", self.locale);
        true
    }

    /// Request process exit. Honored only outside BOOT.
    pub fn quit(&self) -> ControlFlow<()> {
        if self.screen.is_boot() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}
