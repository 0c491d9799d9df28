//! Telemetry simulator: the single writer of [`SystemState`].
//!
//! Each call to [`Simulator::update`] is one frame tick:
//!
//! 1. advance the frame counter and add the whole seconds of `dt` to uptime
//! 2. perturb rail A according to the active [`SimulationMode`]
//! 3. perturb rail B with its NORMAL profile, whatever the mode
//! 4. recompute both rails' power
//! 5. integrate energy over `dt`
//! 6. push both output voltages into the oscilloscope buffers
//!
//! `dt` is the unclamped wall-clock delta. A stalled frame produces one large
//! step in uptime and energy; clamping would change the reported totals.

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::fault::{self, GaussianNoise, NoiseSource, RAIL_B_NORMAL, SimulationMode};
use crate::oscilloscope::OscilloscopeBuffer;
use crate::problems::{ProblemDetector, ProblemList};
use crate::telemetry::{Rail, SystemState};

/// Default noise source: ChaCha8 driven Gaussian draws.
pub type DefaultNoise = GaussianNoise<ChaCha8Rng>;

/// Owns the telemetry model, both waveform buffers and the problem memo.
#[derive(Clone, Debug)]
pub struct Simulator<N = DefaultNoise> {
    state: SystemState,
    frame_count: u64,
    scope_a: OscilloscopeBuffer,
    scope_b: OscilloscopeBuffer,
    detector: ProblemDetector,
    noise: N,
}

impl Simulator<DefaultNoise> {
    /// Create a simulator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_noise(GaussianNoise::new(ChaCha8Rng::from_entropy()))
    }

    /// Create a reproducible simulator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_noise(GaussianNoise::new(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl Default for Simulator<DefaultNoise> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSource> Simulator<N> {
    /// Create a simulator drawing noise from `noise`.
    pub fn with_noise(noise: N) -> Self {
        Self {
            state: SystemState::new(),
            frame_count: 0,
            scope_a: OscilloscopeBuffer::new(),
            scope_b: OscilloscopeBuffer::new(),
            detector: ProblemDetector::new(),
            noise,
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Advance the simulation by `dt` seconds.
    pub fn update(
        &mut self,
        dt: f64,
    ) {
        self.frame_count += 1;
        // Whole seconds only; sub-second ticks never move uptime.
        self.state.uptime_seconds = self.state.uptime_seconds.saturating_add(dt as u64);

        let mode = self.state.simulation_mode;
        fault::apply_mode(mode, &mut self.state.rail_a, &mut self.noise);
        fault::apply_normal(&mut self.state.rail_b, &RAIL_B_NORMAL, &mut self.noise);

        self.state.rail_a.recompute_power();
        self.state.rail_b.recompute_power();
        self.state.energy_wh += self.state.total_power_w() * dt / 3600.0;

        self.scope_a.push(self.state.rail_a.voltage_actual);
        self.scope_b.push(self.state.rail_b.voltage_actual);

        debug!(
            "frame {}: A {:.3} V {:.0} mA, B {:.3} V {:.0} mA, {:.6} Wh",
            self.frame_count,
            self.state.rail_a.voltage_actual,
            self.state.rail_a.current_ma,
            self.state.rail_b.voltage_actual,
            self.state.rail_b.current_ma,
            self.state.energy_wh
        );
    }

    /// Switch fault mode.
    ///
    /// Clears all six protection flags immediately. Flags for the new mode are
    /// asserted by the next [`update`](Self::update), not here. The problem
    /// list stays keyed by frame, so a list already taken this frame is
    /// returned unchanged until the next tick.
    pub fn set_simulation_mode(
        &mut self,
        mode: SimulationMode,
    ) {
        self.state.rail_a.clear_protections();
        self.state.rail_b.clear_protections();
        let previous = self.state.simulation_mode;
        self.state.simulation_mode = mode;
        info!("simulation mode {previous} -> {mode}");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Read-only view of the telemetry model.
    #[inline]
    pub const fn state(&self) -> &SystemState {
        &self.state
    }

    /// Number of completed ticks.
    #[inline]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Active fault mode.
    #[inline]
    pub const fn mode(&self) -> SimulationMode {
        self.state.simulation_mode
    }

    /// Waveform history of `rail`.
    #[inline]
    pub const fn oscilloscope(
        &self,
        rail: Rail,
    ) -> &OscilloscopeBuffer {
        match rail {
            Rail::A => &self.scope_a,
            Rail::B => &self.scope_b,
        }
    }

    /// Screen points of `rail`'s most recent `width` samples, centered on its target.
    ///
    /// See [`OscilloscopeBuffer::query`] for the mapping.
    pub fn query(
        &self,
        rail: Rail,
        width: usize,
        height: i32,
        x_offset: i32,
        y_offset: i32,
    ) -> impl Iterator<Item = (i32, i32)> + '_ {
        let target = self.state.rail(rail).voltage_target;
        self.oscilloscope(rail).query(target, width, height, x_offset, y_offset)
    }

    /// Active problems for the current frame, memoized by frame counter.
    pub fn get_all_problems(&mut self) -> &ProblemList {
        self.detector.problems(self.frame_count, &self.state)
    }

    /// Problem memo statistics.
    #[inline]
    pub const fn detector(&self) -> &ProblemDetector {
        &self.detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OSCILLOSCOPE_CAPACITY;
    use crate::problems::Problem;

    #[test]
    fn test_update_advances_counters() {
        let mut sim = Simulator::with_seed(1);
        sim.update(2.7);
        assert_eq!(sim.frame_count(), 1);
        assert_eq!(sim.state().uptime_seconds, 2, "uptime adds truncated dt");
        sim.update(0.033);
        assert_eq!(sim.frame_count(), 2);
        assert_eq!(sim.state().uptime_seconds, 2, "sub-second dt adds nothing");
    }

    #[test]
    fn test_power_invariant_after_update() {
        let mut sim = Simulator::with_seed(2);
        for mode in SimulationMode::ALL {
            sim.set_simulation_mode(mode);
            sim.update(0.5);
            for rail in Rail::ALL {
                let r = sim.state().rail(rail);
                let expected = r.voltage_actual * r.current_ma / 1000.0;
                assert!((r.power_w - expected).abs() < 1e-12, "{mode} rail {rail}");
            }
        }
    }

    #[test]
    fn test_energy_accumulates() {
        let mut sim = Simulator::with_seed(3);
        sim.update(3600.0);
        let e = sim.state().energy_wh;
        let p = sim.state().total_power_w();
        assert!((e - p).abs() < 1e-9, "one hour at P watts is P Wh");
        sim.update(0.0);
        assert!(sim.state().energy_wh >= e, "zero dt never reduces energy");
    }

    #[test]
    fn test_set_mode_clears_flags_without_asserting() {
        let mut sim = Simulator::with_seed(4);
        sim.set_simulation_mode(SimulationMode::HighV);
        sim.update(1.0);
        assert!(sim.state().rail_a.ovp_active);

        sim.set_simulation_mode(SimulationMode::Hot);
        assert!(!sim.state().rail_a.any_protection(), "flags cleared on mode switch");
        assert!(!sim.state().rail_b.any_protection());
        assert!(sim.get_all_problems().is_empty(), "new mode not reflected before update");

        sim.update(1.0);
        assert!(sim.state().rail_a.otp_active);
    }

    #[test]
    fn test_rail_b_immune_to_faults() {
        let mut sim = Simulator::with_seed(5);
        for mode in [SimulationMode::Hot, SimulationMode::Load, SimulationMode::HighV] {
            sim.set_simulation_mode(mode);
            for _ in 0..20 {
                sim.update(0.1);
            }
            let b = &sim.state().rail_b;
            assert!(!b.any_protection(), "rail B flags stay clear in {mode}");
            assert!((b.voltage_actual - 5.0).abs() < 0.1);
        }
    }

    #[test]
    fn test_oscilloscope_tracks_last_voltage() {
        let mut sim = Simulator::with_seed(6);
        for _ in 0..300 {
            sim.update(1.0);
        }
        for rail in Rail::ALL {
            let scope = sim.oscilloscope(rail);
            assert_eq!(scope.len(), OSCILLOSCOPE_CAPACITY);
            assert_eq!(scope.latest(), Some(sim.state().rail(rail).voltage_actual));
        }
    }

    #[test]
    fn test_query_uses_rail_target() {
        let mut sim = Simulator::with_seed(7);
        sim.set_simulation_mode(SimulationMode::LowV);
        sim.update(1.0);
        // 9.6 V against a 12 V target: -2.4 V -> +120 px, clamped to the bottom edge.
        let last = sim.query(Rail::A, 1, 80, 0, 0).last();
        assert_eq!(last, Some((0, 80)));
    }

    #[test]
    fn test_problems_memoized_per_frame() {
        let mut sim = Simulator::with_seed(8);
        sim.set_simulation_mode(SimulationMode::HighV);
        sim.update(1.0);
        let first = sim.get_all_problems().clone();
        let second = sim.get_all_problems().clone();
        assert_eq!(first.as_slice(), [Problem::Ovp(Rail::A)]);
        assert_eq!(first, second);
        let evaluations = sim.detector().evaluations();
        sim.update(1.0);
        sim.get_all_problems();
        assert_eq!(sim.detector().evaluations(), evaluations + 1);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = Simulator::with_seed(42);
        let mut b = Simulator::with_seed(42);
        for _ in 0..10 {
            a.update(0.033);
            b.update(0.033);
        }
        assert_eq!(a.state().rail_a, b.state().rail_a);
        assert_eq!(a.state().rail_b, b.state().rail_b);
    }
}
