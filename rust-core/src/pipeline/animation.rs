//! Scroll offset for the time-domain views
//!
//! Purely visual: advancing the offset never touches the computed buffers.

use crate::signal::SAMPLE_COUNT;

/// Samples advanced per tick at full scroll speed
pub const SCROLL_STEP: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollAnimator {
    offset: f64,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in samples, always in [0, N)
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advance by `speed * SCROLL_STEP` samples, wrapping at N
    pub fn advance(&mut self, speed: f64) -> f64 {
        self.offset = (self.offset + speed * SCROLL_STEP).rem_euclid(SAMPLE_COUNT as f64);
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut scroll = ScrollAnimator::new();
        assert_eq!(scroll.offset(), 0.0);

        scroll.advance(0.5);
        scroll.advance(0.5);
        assert!((scroll.offset() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_wraps_at_sample_count() {
        let mut scroll = ScrollAnimator::new();

        // 1.0 * 0.4 per tick, 640 ticks = 256 samples
        for _ in 0..645 {
            scroll.advance(1.0);
        }

        assert!(scroll.offset() >= 0.0 && scroll.offset() < SAMPLE_COUNT as f64);
        assert!((scroll.offset() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_speed_holds() {
        let mut scroll = ScrollAnimator::new();
        scroll.advance(1.0);
        let held = scroll.offset();

        scroll.advance(0.0);
        assert_eq!(scroll.offset(), held);
    }

    #[test]
    fn test_reset() {
        let mut scroll = ScrollAnimator::new();
        scroll.advance(0.35);
        scroll.reset();
        assert_eq!(scroll.offset(), 0.0);
    }
}
