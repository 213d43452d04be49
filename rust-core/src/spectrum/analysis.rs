//! Frequency-axis and display helpers
//!
//! Consumers only show bins 0..=N/2; the upper half mirrors the lower half
//! for real input and is always masked by the filter.

use crate::signal::{SAMPLE_COUNT, SAMPLE_RATE};

/// Number of bins shown in the frequency views (DC through Nyquist)
pub const DISPLAY_BINS: usize = SAMPLE_COUNT / 2 + 1;

/// Frequency of bin k in Hz: k * sample_rate / N
#[inline]
pub fn bin_frequency(bin: usize) -> f64 {
    bin as f64 * SAMPLE_RATE / SAMPLE_COUNT as f64
}

/// Frequency of every bin in Hz
pub fn frequency_axis() -> Vec<f64> {
    (0..SAMPLE_COUNT).map(bin_frequency).collect()
}

/// Displayed part of a magnitude spectrum (bins 0..=N/2)
pub fn display_magnitude(magnitude: &[f64]) -> &[f64] {
    &magnitude[..DISPLAY_BINS.min(magnitude.len())]
}

/// Index of the largest displayed magnitude, first one on ties
pub fn peak_bin(magnitude: &[f64]) -> Option<usize> {
    display_magnitude(magnitude)
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (k, &m)| match best {
            Some((_, best_m)) if best_m >= m => best,
            _ => Some((k, m)),
        })
        .map(|(k, _)| k)
}

/// Largest displayed magnitude, 0 for an empty slice
pub fn peak_magnitude(magnitude: &[f64]) -> f64 {
    display_magnitude(magnitude).iter().fold(0.0, |acc, &m| acc.max(m))
}
