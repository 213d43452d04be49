//! Spectral analysis with the direct DFT

pub mod dft;
pub mod analysis;

pub use dft::{forward, inverse, Spectrum};
pub use analysis::{bin_frequency, frequency_axis, peak_bin, DISPLAY_BINS};
