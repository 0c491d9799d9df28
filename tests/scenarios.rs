//! End-to-end scenarios through the public API.

use core::ops::ControlFlow;

use lps_duo_pro::Dashboard;
use lps_duo_pro::fault::SimulationMode;
use lps_duo_pro::i18n::Locale;
use lps_duo_pro::input::{Command, command_for_key};
use lps_duo_pro::pages::{PageController, Screen};
use lps_duo_pro::problems::Problem;
use lps_duo_pro::simulator::Simulator;
use lps_duo_pro::telemetry::Rail;

const SEED: u64 = 0x4c50_5344;

#[test]
fn test_normal_tick_tracks_target() {
    let mut sim = Simulator::with_seed(SEED);
    sim.update(1.0);
    let a = &sim.state().rail_a;

    assert!((a.voltage_actual - 12.0).abs() < 0.05, "rail A at {} V", a.voltage_actual);
    let expected = a.voltage_actual * a.current_ma / 1000.0;
    assert!((a.power_w - expected).abs() < 1e-12, "power follows V*I");
    assert!((a.current_ma - 150.0).abs() < 25.0, "current near 150 mA, got {}", a.current_ma);
    assert!(sim.state().energy_wh > 0.0, "energy accumulated");
}

#[test]
fn test_hot_mode_trips_otp() {
    let mut sim = Simulator::with_seed(SEED);
    sim.set_simulation_mode(SimulationMode::Hot);
    sim.update(1.0);
    let a = &sim.state().rail_a;

    assert!(a.otp_active, "OTP asserted");
    assert!((a.temperature_c - 90.0).abs() < 10.0, "temperature {} °C", a.temperature_c);
}

#[test]
fn test_load_mode_trips_ocp() {
    let mut sim = Simulator::with_seed(SEED);
    sim.set_simulation_mode(SimulationMode::Load);
    sim.update(1.0);
    let a = &sim.state().rail_a;

    assert!(a.ocp_active, "OCP asserted");
    assert!((a.current_ma - 600.0).abs() < 100.0, "current {} mA", a.current_ma);
}

#[test]
fn test_high_v_problem_list_is_stable() {
    let mut sim = Simulator::with_seed(SEED);
    sim.set_simulation_mode(SimulationMode::HighV);
    sim.update(1.0);

    let first = sim.get_all_problems().clone();
    let second = sim.get_all_problems().clone();
    assert_eq!(first.as_slice(), [Problem::Ovp(Rail::A)]);
    assert_eq!(first[0].to_string(), "OVP Rail A");
    assert_eq!(first, second, "no update in between");
    assert_eq!(sim.detector().evaluations(), 1, "second call served from the memo");
}

#[test]
fn test_scope_keeps_last_200_samples() {
    let mut sim = Simulator::with_seed(SEED);
    for _ in 0..300 {
        sim.update(1.0);
    }
    for rail in Rail::ALL {
        let scope = sim.oscilloscope(rail);
        assert_eq!(scope.len(), 200, "rail {rail} buffer length");
        assert_eq!(scope.latest(), Some(sim.state().rail(rail).voltage_actual));
    }
}

#[test]
fn test_boot_gate_then_navigation() {
    let mut pages = PageController::new(Locale::Fr);
    assert!(!pages.select(3), "select is ignored in BOOT");
    assert_eq!(pages.current(), Screen::Boot);

    assert!(pages.confirm());
    assert_eq!(pages.current(), Screen::Listen);

    assert!(pages.select(3));
    assert_eq!(pages.current(), Screen::Health);
}

#[test]
fn test_dashboard_session_from_keys() {
    let mut dash = Dashboard::with_seed(SEED, Locale::Fr);
    let press = |dash: &mut Dashboard, key: &str| match command_for_key(key, dash.screen()) {
        Some(command) => dash.apply(command),
        None => ControlFlow::Continue(()),
    };

    assert_eq!(press(&mut dash, "3"), ControlFlow::Continue(()));
    assert_eq!(dash.screen(), Screen::Boot, "pages locked until ENTER");
    dash.tick(1.0);
    assert_eq!(dash.simulator().frame_count(), 0, "simulation paused in BOOT");

    press(&mut dash, "Return");
    press(&mut dash, "5");
    assert_eq!(dash.screen(), Screen::Config);
    press(&mut dash, "F4");
    assert_eq!(dash.state().simulation_mode, SimulationMode::Load);

    dash.tick(1.0);
    assert_eq!(dash.problems().as_slice(), [Problem::Ocp(Rail::A)]);
    assert!(dash.log().iter().any(|e| e.message.as_str() == "OCP Rail A"), "fault recorded in the event log");

    press(&mut dash, "L");
    assert_eq!(dash.locale(), Locale::En);
    assert_eq!(press(&mut dash, "Escape"), ControlFlow::Break(()));
}
