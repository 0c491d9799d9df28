//! Property tests for the simulation core.

use lps_duo_pro::fault::{RAIL_B_NORMAL, SimulationMode};
use lps_duo_pro::simulator::Simulator;
use lps_duo_pro::telemetry::Rail;
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = SimulationMode> {
    prop::sample::select(SimulationMode::ALL.to_vec())
}

fn fault_mode() -> impl Strategy<Value = SimulationMode> {
    prop::sample::select(SimulationMode::ALL[1..].to_vec())
}

/// One step of a random session: optionally switch mode, then tick.
fn steps() -> impl Strategy<Value = Vec<(Option<SimulationMode>, f64)>> {
    prop::collection::vec((prop::option::of(any_mode()), 0.0f64..2.0), 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_power_invariant(seed in any::<u64>(), steps in steps()) {
        let mut sim = Simulator::with_seed(seed);
        for (mode, dt) in steps {
            if let Some(mode) = mode {
                sim.set_simulation_mode(mode);
            }
            sim.update(dt);
            for rail in Rail::ALL {
                let r = sim.state().rail(rail);
                prop_assert_eq!(r.power_w, r.voltage_actual * r.current_ma / 1000.0);
            }
        }
    }

    #[test]
    fn test_energy_never_decreases(seed in any::<u64>(), steps in steps()) {
        let mut sim = Simulator::with_seed(seed);
        for (mode, dt) in steps {
            if let Some(mode) = mode {
                sim.set_simulation_mode(mode);
            }
            let before = sim.state().energy_wh;
            sim.update(dt);
            prop_assert!(sim.state().energy_wh >= before, "energy dropped after dt={}", dt);
        }
    }

    #[test]
    fn test_scope_holds_most_recent_samples(seed in any::<u64>(), ticks in 0usize..450) {
        let mut sim = Simulator::with_seed(seed);
        let mut pushed = vec![0.0f64; 200];
        for _ in 0..ticks {
            sim.update(1.0 / 30.0);
            pushed.push(sim.state().rail_a.voltage_actual);
        }
        let scope = sim.oscilloscope(Rail::A);
        prop_assert_eq!(scope.len(), 200);
        let expected = &pushed[pushed.len() - 200..];
        let actual: Vec<f64> = scope.iter().collect();
        prop_assert_eq!(actual.as_slice(), expected);
    }

    #[test]
    fn test_mode_switch_clears_all_flags(seed in any::<u64>(), before in any_mode(), after in any_mode(), ticks in 0usize..5) {
        let mut sim = Simulator::with_seed(seed);
        sim.set_simulation_mode(before);
        for _ in 0..ticks {
            sim.update(0.1);
        }
        sim.set_simulation_mode(after);
        for rail in Rail::ALL {
            prop_assert!(!sim.state().rail(rail).any_protection(), "rail {} keeps a flag", rail);
        }
    }

    #[test]
    fn test_problem_memo_follows_updates(seed in any::<u64>(), mode in any_mode()) {
        let mut sim = Simulator::with_seed(seed);
        sim.set_simulation_mode(mode);
        sim.update(1.0);
        let first = sim.get_all_problems().clone();
        prop_assert_eq!(&first, sim.get_all_problems());

        // Same mode, flags unchanged: fresh evaluation, same hard faults.
        let evaluations = sim.detector().evaluations();
        sim.update(1.0);
        let second = sim.get_all_problems().clone();
        prop_assert_eq!(sim.detector().evaluations(), evaluations + 1);
        let hard = |list: &[lps_duo_pro::problems::Problem]| {
            list.iter().copied().filter(|p| p.is_protection()).collect::<Vec<_>>()
        };
        prop_assert_eq!(hard(&first), hard(&second));

        // Flags changed by a mode switch: the next frame reflects it.
        sim.set_simulation_mode(SimulationMode::HighV);
        sim.update(1.0);
        let third = sim.get_all_problems().clone();
        prop_assert!(third.contains(&lps_duo_pro::problems::Problem::Ovp(Rail::A)));
        prop_assert_eq!(hard(&third).len(), 1, "only OVP after the switch");
    }

    #[test]
    fn test_rail_b_is_never_faulted(seed in any::<u64>(), mode in fault_mode(), ticks in 1usize..200) {
        let mut sim = Simulator::with_seed(seed);
        sim.set_simulation_mode(mode);
        let ripple = sim.state().rail_b.ripple_uv;
        let mut current_sum = 0.0;
        for _ in 0..ticks {
            sim.update(1.0 / 30.0);
            let b = &sim.state().rail_b;
            prop_assert!(!b.any_protection(), "rail B flagged in {}", mode);
            prop_assert!((b.voltage_actual - b.voltage_target).abs() < 0.1);
            prop_assert_eq!(b.ripple_uv, ripple, "rail B ripple untouched");
            current_sum += b.current_ma;
        }
        let mean = current_sum / ticks as f64;
        prop_assert!((mean - RAIL_B_NORMAL.current_ma.0).abs() < 6.0 * RAIL_B_NORMAL.current_ma.1, "mean {}", mean);
    }
}
