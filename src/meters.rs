//! Display-side meter state: VU level with decaying peak, and Nixie bar fill.
//!
//! These hold no telemetry of their own; the LISTEN page feeds the VU meters
//! with each rail's output relative to its target once per tick.

use crate::telemetry::ratio;
use crate::thresholds::{VU_PEAK_DECAY, VU_RED_FROM, VU_SEGMENTS, VU_YELLOW_FROM};

// =============================================================================
// VU Meter
// =============================================================================

/// Colour band of one VU segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SegmentZone {
    Green,
    Yellow,
    Red,
}

/// Normalized level plus peak-hold marker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VuMeter {
    value: f32,
    peak: f32,
}

impl VuMeter {
    /// Create a meter at rest.
    pub const fn new() -> Self {
        Self { value: 0.0, peak: 0.0 }
    }

    /// Feed one reading.
    ///
    /// The level is `value / target` clamped to `[0, 1]` (0 for a non-positive
    /// target). A new maximum moves the peak up; otherwise the peak decays.
    pub fn update(
        &mut self,
        value: f64,
        target: f64,
    ) {
        self.value = ratio(value, target).clamp(0.0, 1.0) as f32;
        if self.value > self.peak {
            self.peak = self.value;
        } else {
            self.peak *= VU_PEAK_DECAY;
        }
    }

    /// Current level in `[0, 1]`.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Peak-hold level in `[0, 1]`.
    #[inline]
    pub const fn peak(&self) -> f32 {
        self.peak
    }

    /// Whether segment `i` is lit at the current level.
    #[inline]
    pub fn is_lit(
        &self,
        i: usize,
    ) -> bool {
        self.value > i as f32 / VU_SEGMENTS as f32
    }
}

/// Colour band of segment `i` (0 = leftmost).
pub fn segment_zone(i: usize) -> SegmentZone {
    let position = i as f32;
    let segments = VU_SEGMENTS as f32;
    if position < segments * VU_YELLOW_FROM {
        SegmentZone::Green
    } else if position < segments * VU_RED_FROM {
        SegmentZone::Yellow
    } else {
        SegmentZone::Red
    }
}

// =============================================================================
// Nixie Bar
// =============================================================================

/// Inner fill width of a Nixie bar `width` pixels wide (2 px border each side).
///
/// `value / max` of the inner width, truncated and clamped to
/// `[0, width - 4]`. A non-positive `max` yields an empty bar.
pub fn nixie_fill_width(
    value: f64,
    max: f64,
    width: u32,
) -> u32 {
    let inner = width.saturating_sub(4);
    if max <= 0.0 {
        return 0;
    }
    let fill = (value / max * f64::from(inner)) as i64;
    fill.clamp(0, i64::from(inner)) as u32
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_vu_tracks_ratio() {
        let mut vu = VuMeter::new();
        vu.update(6.0, 12.0);
        assert_relative_eq!(vu.value(), 0.5);
        assert_relative_eq!(vu.peak(), 0.5);
    }

    #[test]
    fn test_vu_clamps() {
        let mut vu = VuMeter::new();
        vu.update(17.0, 12.0);
        assert_eq!(vu.value(), 1.0, "over-voltage pins the meter");
        vu.update(-1.0, 12.0);
        assert_eq!(vu.value(), 0.0);
        vu.update(5.0, 0.0);
        assert_eq!(vu.value(), 0.0, "zero target reads empty");
    }

    #[test]
    fn test_vu_peak_decay() {
        let mut vu = VuMeter::new();
        vu.update(12.0, 12.0);
        vu.update(6.0, 12.0);
        assert_relative_eq!(vu.peak(), 0.95);
        vu.update(6.0, 12.0);
        assert_relative_eq!(vu.peak(), 0.95 * 0.95);
        vu.update(12.0, 12.0);
        assert!((vu.peak() - 1.0).abs() < f32::EPSILON, "new maximum resets the peak");
    }

    #[test]
    fn test_segment_zones() {
        assert_eq!(segment_zone(0), SegmentZone::Green);
        assert_eq!(segment_zone(11), SegmentZone::Green);
        assert_eq!(segment_zone(12), SegmentZone::Yellow);
        assert_eq!(segment_zone(15), SegmentZone::Yellow);
        assert_eq!(segment_zone(16), SegmentZone::Red);
        assert_eq!(segment_zone(19), SegmentZone::Red);
    }

    #[test]
    fn test_segments_lit() {
        let mut vu = VuMeter::new();
        vu.update(12.0, 12.0);
        assert!((0..VU_SEGMENTS).all(|i| vu.is_lit(i)), "full scale lights all");
        vu.update(0.0, 12.0);
        assert!(!vu.is_lit(0), "segment 0 needs a strictly positive level");
    }

    #[test]
    fn test_nixie_fill() {
        assert_eq!(nixie_fill_width(7.5, 15.0, 154), 75);
        assert_eq!(nixie_fill_width(30.0, 15.0, 154), 150, "clamped to inner width");
        assert_eq!(nixie_fill_width(-3.0, 15.0, 154), 0);
        assert_eq!(nixie_fill_width(3.0, 0.0, 154), 0, "zero max is empty");
        assert_eq!(nixie_fill_width(1.0, 1.0, 2), 0, "bar narrower than its border");
    }
}
