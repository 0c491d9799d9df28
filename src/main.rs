//! LPS DUO PRO front panel simulator.
//!
//! Runs the telemetry dashboard of the dual-rail linear supply in an
//! 800x480 `embedded-graphics-simulator` window at 30 FPS, with simulated
//! rails and injectable faults.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Enter` | Leave the boot screen |
//! | `1`-`5` | LISTEN, DETAILS, HEALTH, SESSION, CONFIG |
//! | `L` | Cycle the language (FR, EN, ES, DE) |
//! | `F1`-`F6` | Simulation mode (CONFIG page only) |
//! | Click | Simulation mode buttons (CONFIG page only) |
//! | `Esc` | Quit |
//!
//! Key repeat is ignored so holding a key does not spam page or locale
//! changes.
//!
//! # Frame Loop
//!
//! Each iteration drains window events into [`Command`]s, advances the
//! [`Dashboard`] by the wall-clock time since the previous frame, redraws
//! through [`render_frame`] and sleeps out the rest of the 33 ms frame.
//!
//! # Performance Characteristics
//!
//! | Component | Update Frequency | Optimization Applied |
//! |-----------|-----------------|---------------------|
//! | Whole screen | Screen / locale change | Full clear |
//! | Nav bar | On FPS change / after full clear | Conditional redraw |
//! | Nav labels | Locale change | Cached `heapless` strings |
//! | Page content | Every frame | Content area clear + redraw |

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, error, info};
use lps_duo_pro::Dashboard;
use lps_duo_pro::colors::BLACK;
use lps_duo_pro::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use lps_duo_pro::i18n::Locale;
use lps_duo_pro::input::{Command, command_for_key, command_for_pointer};
use lps_duo_pro::profiling::ProfilingMetrics;
use lps_duo_pro::render::RenderState;
use lps_duo_pro::screens::render_frame;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(version, about = "LPS DUO PRO front panel simulator")]
struct Args {
    /// Window pixel scale.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Seed for reproducible telemetry noise.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial language (fr, en, es, de).
    #[arg(long, default_value = "fr")]
    locale: Locale,

    /// Write the event log as JSON to this path on exit.
    #[arg(long, value_name = "PATH")]
    export_log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut dashboard = match args.seed {
        Some(seed) => Dashboard::with_seed(seed, args.locale),
        None => Dashboard::new(args.locale),
    };
    info!("LPS DUO PRO simulator starting (locale {}, seed {:?})", args.locale, args.seed);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new("LPS DUO PRO", &output_settings);

    // Window must be shown once before events can be polled
    display.clear(BLACK).ok();
    window.update(&display);

    let mut render_state = RenderState::new(args.locale);
    let mut metrics = ProfilingMetrics::new();
    let started = Instant::now();
    let mut last_tick = started;

    'frames: loop {
        let frame_start = Instant::now();

        // ======================================================================
        // Input
        // ======================================================================

        let screen = dashboard.screen();
        let mut commands: Vec<Command> = Vec::new();
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'frames,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    commands.extend(command_for_key(&keycode.name(), screen));
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    commands.extend(command_for_pointer(point, screen));
                }
                _ => {}
            }
        }
        for command in commands {
            if dashboard.apply(command).is_break() {
                break 'frames;
            }
        }

        // ======================================================================
        // Update
        // ======================================================================

        let dt = frame_start.duration_since(last_tick).as_secs_f64();
        last_tick = frame_start;
        dashboard.tick(dt);

        // ======================================================================
        // Render
        // ======================================================================

        let report = render_frame(&mut display, &mut dashboard, &mut render_state, metrics.fps(), started.elapsed());
        if report.full_clear {
            metrics.inc_full_clears();
        }
        if report.nav_redrawn {
            metrics.inc_nav_redraws();
        }
        let render_time = frame_start.elapsed();

        window.update(&display);

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().checked_sub(pre_sleep).unwrap_or(Duration::ZERO);
        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);

        if metrics.total_frames % 300 == 0 {
            debug!(
                "frame {} avg {} us, min {} us, max {} us, {} full clears, {} nav redraws",
                metrics.total_frames,
                metrics.frame_time_avg_us(),
                metrics.frame_time_min_us,
                metrics.frame_time_max_us,
                metrics.full_clears,
                metrics.nav_redraws,
            );
        }
    }

    info!("Shutting down after {} frames", metrics.total_frames);

    if let Some(path) = args.export_log {
        match dashboard.log().export_json(&path) {
            Ok(()) => info!("Event log written to {}", path.display()),
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
