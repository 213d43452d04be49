//! Synthetic test-signal generation

pub mod buffer;
pub mod generator;

pub use buffer::{SampleBuffer, NYQUIST, SAMPLE_COUNT, SAMPLE_RATE};
pub use generator::{generate, generate_with_rng, sample_times, GeneratorParams, Waveform};
