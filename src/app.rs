//! The dashboard application: commands in, ticks forward, state out.
//!
//! [`Dashboard`] owns everything that outlives a frame: the simulator, the
//! page controller, the LISTEN page VU meters and the operator event log. The
//! binary feeds it [`Command`]s from the window and calls
//! [`tick`](Dashboard::tick) once per frame; the renderer only reads it.
//!
//! Until BOOT is confirmed nothing advances: `tick` is a no-op and only
//! [`Command::Confirm`] is accepted.

use core::fmt::Write;
use core::ops::ControlFlow;

use heapless::String;
use log::{info, warn};

use crate::fault::{NoiseSource, SimulationMode};
use crate::i18n::Locale;
use crate::input::Command;
use crate::log_buffer::{DebugLog, LogLevel};
use crate::meters::VuMeter;
use crate::pages::{PageController, Screen};
use crate::problems::ProblemList;
use crate::simulator::{DefaultNoise, Simulator};
use crate::telemetry::{Rail, SystemState};

/// Top-level application state.
#[derive(Debug)]
pub struct Dashboard<N = DefaultNoise> {
    simulator: Simulator<N>,
    pages: PageController,
    vu_a: VuMeter,
    vu_b: VuMeter,
    log: DebugLog,
    last_problems: ProblemList,
}

impl Dashboard<DefaultNoise> {
    /// Dashboard with an entropy-seeded simulator.
    pub fn new(locale: Locale) -> Self {
        Self::with_simulator(Simulator::new(), locale)
    }

    /// Dashboard with a reproducible simulator.
    pub fn with_seed(
        seed: u64,
        locale: Locale,
    ) -> Self {
        Self::with_simulator(Simulator::with_seed(seed), locale)
    }
}

impl<N: NoiseSource> Dashboard<N> {
    /// Dashboard around an existing simulator, starting at BOOT.
    pub fn with_simulator(
        simulator: Simulator<N>,
        locale: Locale,
    ) -> Self {
        let mut log = DebugLog::new();
        let mut line: String<48> = String::new();
        write!(line, "Started, locale {locale}").ok();
        log.info(&line);
        Self {
            simulator,
            pages: PageController::new(locale),
            vu_a: VuMeter::new(),
            vu_b: VuMeter::new(),
            log,
            last_problems: ProblemList::new(),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply one user command.
    ///
    /// Returns [`ControlFlow::Break`] when the dashboard should exit.
    pub fn apply(
        &mut self,
        command: Command,
    ) -> ControlFlow<()> {
        let mut line: String<48> = String::new();
        match command {
            Command::Confirm => {
                if self.pages.confirm() {
                    self.log.info("Boot confirmed");
                }
            }
            Command::SelectPage(k) => {
                if self.pages.select(k) {
                    write!(line, "Page {:?}", self.pages.current()).ok();
                    self.log.info(&line);
                }
            }
            Command::CycleLocale => {
                if self.pages.cycle_locale() {
                    write!(line, "Locale {}", self.pages.locale()).ok();
                    self.log.info(&line);
                }
            }
            Command::SelectMode(mode) => self.select_mode(mode),
            Command::Quit => {
                let flow = self.pages.quit();
                if flow.is_break() {
                    self.log.info("Quit");
                }
                return flow;
            }
        }
        ControlFlow::Continue(())
    }

    fn select_mode(
        &mut self,
        mode: SimulationMode,
    ) {
        if self.pages.current().is_boot() {
            return;
        }
        self.simulator.set_simulation_mode(mode);
        let mut line: String<48> = String::new();
        write!(line, "Mode {mode}").ok();
        self.log.info(&line);
    }

    // =========================================================================
    // Per-Frame Update
    // =========================================================================

    /// Advance one frame of `dt` seconds.
    ///
    /// Steps the simulator, feeds the VU meters while LISTEN is shown, and
    /// records a log entry whenever the set of active problems changes.
    pub fn tick(
        &mut self,
        dt: f64,
    ) {
        if self.pages.current().is_boot() {
            return;
        }
        self.simulator.update(dt);

        if self.pages.current() == Screen::Listen {
            let state = self.simulator.state();
            self.vu_a.update(state.rail_a.voltage_actual, state.rail_a.voltage_target);
            self.vu_b.update(state.rail_b.voltage_actual, state.rail_b.voltage_target);
        }

        let problems = self.simulator.get_all_problems().clone();
        if problems != self.last_problems {
            if problems.is_empty() {
                info!("all problems cleared");
                self.log.info("Problems cleared");
            } else {
                for problem in problems.iter().filter(|p| !self.last_problems.contains(*p)) {
                    warn!("problem raised: {problem}");
                    let mut line: String<48> = String::new();
                    write!(line, "{problem}").ok();
                    self.log.push(LogLevel::Warn, &line);
                }
            }
            self.last_problems = problems;
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current screen.
    #[inline]
    pub const fn screen(&self) -> Screen {
        self.pages.current()
    }

    /// Active locale.
    #[inline]
    pub const fn locale(&self) -> Locale {
        self.pages.locale()
    }

    /// Telemetry snapshot.
    #[inline]
    pub const fn state(&self) -> &SystemState {
        self.simulator.state()
    }

    /// The simulator.
    #[inline]
    pub const fn simulator(&self) -> &Simulator<N> {
        &self.simulator
    }

    /// Active problems for the current frame (memoized by the simulator).
    pub fn problems(&mut self) -> ProblemList {
        self.simulator.get_all_problems().clone()
    }

    /// VU meter of `rail`.
    #[inline]
    pub const fn vu(
        &self,
        rail: Rail,
    ) -> &VuMeter {
        match rail {
            Rail::A => &self.vu_a,
            Rail::B => &self.vu_b,
        }
    }

    /// Operator event log.
    #[inline]
    pub const fn log(&self) -> &DebugLog {
        &self.log
    }
}
