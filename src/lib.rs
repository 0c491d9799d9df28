// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f64->f32, f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/u64/usize->f32 in graphics and timing calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where we know sign is positive
#![allow(clippy::module_name_repetitions)] // SimulationMode in fault, RenderState in render

//! Telemetry dashboard for the LPS DUO PRO dual-rail linear power supply.
//!
//! The library holds everything that can be exercised without a window:
//!
//! - **Simulation core**: [`telemetry`] state, [`fault`] injection modes,
//!   [`simulator`] tick loop, [`oscilloscope`] history, [`problems`] detection
//! - **Front panel model**: [`pages`] state machine, [`input`] bindings,
//!   [`i18n`] strings, [`meters`] VU/Nixie state, [`app::Dashboard`]
//! - **Regulator model**: [`regulator`] digipot set-point maths
//! - **Rendering**: [`widgets`] and [`screens`] draw into any
//!   `DrawTarget<Color = Rgb565>`, [`render::RenderState`] caches what can be
//!   skipped between frames
//! - **Ambient**: [`config`], [`thresholds`], [`colors`], [`styles`],
//!   [`error`], [`log_buffer`], [`profiling`]
//!
//! The `lps-duo-pro` binary wires these to an `embedded-graphics-simulator`
//! window.

pub mod app;
pub mod colors;
pub mod config;
pub mod error;
pub mod fault;
pub mod i18n;
pub mod input;
pub mod log_buffer;
pub mod meters;
pub mod oscilloscope;
pub mod pages;
pub mod problems;
pub mod profiling;
pub mod regulator;
pub mod render;
pub mod screens;
pub mod simulator;
pub mod styles;
pub mod telemetry;
pub mod thresholds;
pub mod widgets;

pub use app::Dashboard;
pub use error::{DashboardError, Result};
