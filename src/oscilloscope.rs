//! Fixed-capacity sample history feeding the LISTEN page waveforms.
//!
//! One buffer per rail, holding the last [`OSCILLOSCOPE_CAPACITY`] values of
//! `voltage_actual` in insertion order.
//!
//! # Optimizations
//!
//! - **Fixed storage**: `heapless::Deque` with a const capacity, so the buffer
//!   never allocates and never grows or shrinks.
//! - **Always full**: the buffer is pre-seeded with zeros, so its length is
//!   the capacity from construction on and `push` is a single
//!   `pop_front` + `push_back`.
//! - **Lazy query**: [`OscilloscopeBuffer::query`] returns an iterator of
//!   screen points; the renderer collects it into a stack buffer.

use heapless::Deque;

use crate::config::{OSCILLOSCOPE_CAPACITY, OSCILLOSCOPE_GAIN};

/// FIFO history of one rail's output voltage.
#[derive(Clone, Debug)]
pub struct OscilloscopeBuffer {
    samples: Deque<f64, OSCILLOSCOPE_CAPACITY>,
}

impl OscilloscopeBuffer {
    /// Create a buffer pre-seeded with zeros.
    pub fn new() -> Self {
        let mut samples: Deque<f64, OSCILLOSCOPE_CAPACITY> = Deque::new();
        while !samples.is_full() {
            samples.push_back(0.0).ok();
        }
        Self { samples }
    }

    /// Append a sample, evicting the oldest one.
    pub fn push(
        &mut self,
        sample: f64,
    ) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was freed above.
        self.samples.push_back(sample).ok();
    }

    /// Number of stored samples (always the capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true: the buffer is pre-seeded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recently pushed sample.
    #[inline]
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Map the most recent `width` samples to screen points.
    ///
    /// Sample `i` (oldest first) lands at `x = x_offset + i`. Its value `v` lands
    /// at `y = y_offset + height / 2 - round((v - target) * 50)`, clamped to
    /// `[y_offset, y_offset + height]` so the trace stays inside the plot
    /// rectangle whatever the fault. A negative `height` flips the band
    /// instead of panicking. Pure read; the buffer is not modified.
    pub fn query(
        &self,
        target: f64,
        width: usize,
        height: i32,
        x_offset: i32,
        y_offset: i32,
    ) -> impl Iterator<Item = (i32, i32)> + '_ {
        let skip = self.samples.len().saturating_sub(width);
        let center = f64::from(y_offset.saturating_add(height / 2));
        let edge_a = f64::from(y_offset);
        let edge_b = f64::from(y_offset.saturating_add(height));
        let (top, bottom) = (edge_a.min(edge_b), edge_a.max(edge_b));

        self.samples.iter().skip(skip).enumerate().map(move |(i, &v)| {
            let deviation = ((v - target) * OSCILLOSCOPE_GAIN).round();
            let y = (center - deviation).clamp(top, bottom);
            (x_offset + i as i32, y as i32)
        })
    }
}

impl Default for OscilloscopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_full_of_zeros() {
        let buf = OscilloscopeBuffer::new();
        assert_eq!(buf.len(), OSCILLOSCOPE_CAPACITY);
        assert!(!buf.is_empty());
        assert!(buf.iter().all(|v| v == 0.0));
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buf = OscilloscopeBuffer::new();
        for i in 0..(OSCILLOSCOPE_CAPACITY + 10) {
            buf.push(i as f64);
        }
        assert_eq!(buf.len(), OSCILLOSCOPE_CAPACITY, "length stays at capacity");
        assert_eq!(buf.iter().next(), Some(10.0), "oldest 10 samples evicted");
        assert_eq!(buf.latest(), Some((OSCILLOSCOPE_CAPACITY + 9) as f64));
    }

    #[test]
    fn test_push_preserves_order() {
        let mut buf = OscilloscopeBuffer::new();
        for v in [1.0, 2.0, 3.0] {
            buf.push(v);
        }
        let tail: Vec<f64> = buf.iter().rev().take(3).collect();
        assert_eq!(tail, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_query_takes_most_recent_width() {
        let mut buf = OscilloscopeBuffer::new();
        for _ in 0..OSCILLOSCOPE_CAPACITY {
            buf.push(12.0);
        }
        let points: Vec<(i32, i32)> = buf.query(12.0, 50, 80, 70, 268).collect();
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], (70, 308), "on-target sample sits at the vertical center");
        assert_eq!(points[49].0, 119);
    }

    #[test]
    fn test_query_width_larger_than_history() {
        let buf = OscilloscopeBuffer::new();
        let points: Vec<(i32, i32)> = buf.query(12.0, 300, 80, 0, 0).collect();
        assert_eq!(points.len(), OSCILLOSCOPE_CAPACITY, "only stored samples are mapped");
        assert_eq!(points.last().map(|p| p.0), Some(OSCILLOSCOPE_CAPACITY as i32 - 1));
    }

    #[test]
    fn test_query_rounds_deviation() {
        let mut buf = OscilloscopeBuffer::new();
        // +0.05 V -> 2.5 px -> rounds away from zero to 3
        buf.push(12.05);
        // -0.02 V -> -1 px
        buf.push(11.98);
        let points: Vec<(i32, i32)> = buf.query(12.0, 2, 80, 0, 0).collect();
        assert_eq!(points, [(0, 37), (1, 41)]);
    }

    #[test]
    fn test_query_clamps_to_plot() {
        let mut buf = OscilloscopeBuffer::new();
        buf.push(17.0); // HIGH_V: +250 px
        buf.push(0.0); // zero seed: -600 px
        let points: Vec<(i32, i32)> = buf.query(12.0, 2, 80, 10, 100).collect();
        assert_eq!(points[0].1, 100, "clamped to top");
        assert_eq!(points[1].1, 180, "clamped to bottom");
    }

    #[test]
    fn test_query_degenerate_heights() {
        let mut buf = OscilloscopeBuffer::new();
        buf.push(12.5);

        let flat: Vec<(i32, i32)> = buf.query(12.0, 5, 0, 0, 40).collect();
        assert_eq!(flat.len(), 5);
        assert!(flat.iter().all(|&(_, y)| y == 40), "zero height collapses onto y_offset");

        let flipped: Vec<(i32, i32)> = buf.query(12.0, 5, -10, 0, 0).collect();
        assert_eq!(flipped.len(), 5, "negative height still yields every point");
        assert!(flipped.iter().all(|&(_, y)| (-10..=0).contains(&y)), "points stay in the flipped band");

        let extreme: Vec<(i32, i32)> = buf.query(12.0, 1, i32::MAX, 0, i32::MAX).collect();
        assert_eq!(extreme.len(), 1);
    }

    #[test]
    fn test_query_is_pure() {
        let mut buf = OscilloscopeBuffer::new();
        buf.push(5.0);
        let before: Vec<f64> = buf.iter().collect();
        let _ = buf.query(5.0, 10, 80, 0, 0).count();
        let after: Vec<f64> = buf.iter().collect();
        assert_eq!(before, after);
    }
}
