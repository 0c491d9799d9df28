//! Frame timing metrics and FPS measurement.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! let fps = metrics.fps();
//! ```

use std::time::{Duration, Instant};

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and render statistics.
///
/// Tracks per-frame timing, min/max/average statistics, render counters and
/// a once-per-second FPS figure for the navigation bar.
#[derive(Clone, Debug)]
pub struct ProfilingMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent rendering (drawing to display buffer)
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    // Statistics (computed over time)
    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    /// Rolling average frame time (simple exponential moving average)
    frame_time_avg_us: f32,

    // Counters
    /// Total frames rendered since startup
    pub total_frames: u64,
    /// Navigation bar redraw count (low if the render cache works)
    pub nav_redraws: u32,
    /// Full-screen clears (screen or locale changes)
    pub full_clears: u32,

    // FPS window
    fps: f32,
    fps_frames: u32,
    fps_window_start: Instant,
}

impl ProfilingMetrics {
    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Create new profiling metrics, starting the FPS window.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            nav_redraws: 0,
            full_clears: 0,
            fps: 0.0,
            fps_frames: 0,
            fps_window_start: now,
        }
    }

    /// Record frame timing for this frame.
    ///
    /// Updates current frame stats, min/max, and rolling average.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;
        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
        self.tick_fps(Instant::now());
    }

    /// Count one frame in the FPS window, closing it after a second.
    fn tick_fps(
        &mut self,
        now: Instant,
    ) {
        self.fps_frames += 1;
        let window = now.duration_since(self.fps_window_start);
        if window.as_secs() >= 1 {
            self.fps = self.fps_frames as f32 / window.as_secs_f32();
            self.fps_frames = 0;
            self.fps_window_start = now;
        }
    }

    /// Frames per second over the last completed one-second window.
    #[inline]
    pub const fn fps(&self) -> f32 {
        self.fps
    }

    /// Get average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Increment navigation bar redraw counter.
    #[inline]
    pub const fn inc_nav_redraws(&mut self) {
        self.nav_redraws += 1;
    }

    /// Increment full clear counter.
    #[inline]
    pub const fn inc_full_clears(&mut self) {
        self.full_clears += 1;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}
