//! Problem detection with a per-frame memo.
//!
//! The detector turns eight conditions into an ordered list:
//! rail A OVP, OCP, OTP, rail B OVP, OCP, OTP, rail A high ripple, rail B
//! high ripple. The first six are the hard protection flags; the last two are
//! soft threshold warnings derived from the raw ripple value.
//!
//! # Memoization
//!
//! Several pages ask for the list more than once per frame (status line,
//! HEALTH list, nav badge). [`ProblemDetector`] keeps a `{last_token,
//! last_result}` pair keyed by the simulator's frame counter: repeated calls
//! with the same token return the cached list without re-evaluating, and a new
//! token always re-evaluates, even if nothing changed.

use core::fmt;

use heapless::Vec;

use crate::telemetry::{Rail, SystemState};
use crate::thresholds::RIPPLE_WARNING_UV;

/// Maximum number of simultaneous problems (3 flags x 2 rails + 2 ripple warnings).
pub const MAX_PROBLEMS: usize = 8;

/// One active fault condition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Problem {
    /// Over-voltage protection tripped.
    Ovp(Rail),
    /// Over-current protection tripped.
    Ocp(Rail),
    /// Over-temperature protection tripped.
    Otp(Rail),
    /// Ripple above the warning threshold.
    HighRipple(Rail),
}

impl Problem {
    /// Rail the problem belongs to.
    pub const fn rail(self) -> Rail {
        match self {
            Self::Ovp(rail) | Self::Ocp(rail) | Self::Otp(rail) | Self::HighRipple(rail) => rail,
        }
    }

    /// Whether this is a hard protection (as opposed to a soft warning).
    pub const fn is_protection(self) -> bool {
        !matches!(self, Self::HighRipple(_))
    }
}

impl fmt::Display for Problem {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Ovp(rail) => write!(f, "OVP Rail {rail}"),
            Self::Ocp(rail) => write!(f, "OCP Rail {rail}"),
            Self::Otp(rail) => write!(f, "OTP Rail {rail}"),
            Self::HighRipple(rail) => write!(f, "High ripple {rail}"),
        }
    }
}

/// Ordered, fixed-capacity list of active problems.
pub type ProblemList = Vec<Problem, MAX_PROBLEMS>;

/// Evaluate all eight conditions in their fixed order. Pure function of `state`.
pub fn detect(state: &SystemState) -> ProblemList {
    let mut list = ProblemList::new();
    for rail in Rail::ALL {
        let r = state.rail(rail);
        let flags = [
            (r.ovp_active, Problem::Ovp(rail)),
            (r.ocp_active, Problem::Ocp(rail)),
            (r.otp_active, Problem::Otp(rail)),
        ];
        for (active, problem) in flags {
            if active {
                // Capacity covers every condition at once.
                list.push(problem).ok();
            }
        }
    }
    for rail in Rail::ALL {
        if state.rail(rail).ripple_uv > RIPPLE_WARNING_UV {
            list.push(Problem::HighRipple(rail)).ok();
        }
    }
    list
}

/// Memoizing front-end of [`detect`], keyed by an explicit frame token.
#[derive(Clone, Debug, Default)]
pub struct ProblemDetector {
    last_token: Option<u64>,
    last_result: ProblemList,
    evaluations: u64,
}

impl ProblemDetector {
    /// Create a detector with an empty cache.
    pub const fn new() -> Self {
        Self {
            last_token: None,
            last_result: ProblemList::new(),
            evaluations: 0,
        }
    }

    /// Problems for frame `token`, re-evaluated only when the token changes.
    pub fn problems(
        &mut self,
        token: u64,
        state: &SystemState,
    ) -> &ProblemList {
        if self.last_token != Some(token) {
            self.last_result = detect(state);
            self.last_token = Some(token);
            self.evaluations += 1;
        }
        &self.last_result
    }

    /// Number of times the conditions have actually been evaluated.
    #[inline]
    pub const fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
