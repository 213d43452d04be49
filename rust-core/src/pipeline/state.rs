//! One full pass of the numerical pipeline
//!
//! generate -> forward DFT -> mask -> inverse DFT

use crate::error::Result;
use crate::filters::{self, FilterSpec};
use crate::signal::{generate_with_rng, sample_times, GeneratorParams, SampleBuffer, Waveform, SAMPLE_RATE};
use crate::spectrum::{forward, inverse, Spectrum};
use rand::Rng;

/// The four datasets consumed by rendering, always from the same run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    /// Generated time-domain signal
    pub signal: SampleBuffer,

    /// Spectrum of `signal`
    pub spectrum: Spectrum,

    /// `spectrum` after the keep mask
    pub filtered_spectrum: Spectrum,

    /// Real-part inverse of `filtered_spectrum`
    pub filtered_signal: SampleBuffer,
}

/// Stateless pipeline runner holding the precomputed time axis
#[derive(Debug, Clone)]
pub struct Pipeline {
    times: Vec<f64>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            times: sample_times(),
        }
    }

    /// Sample timestamps t[n] = n / sample_rate
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Run the full pipeline with the thread-local RNG
    pub fn recompute(
        &self,
        waveform: Waveform,
        params: &GeneratorParams,
        filter: &FilterSpec,
    ) -> Result<PipelineState> {
        self.recompute_with_rng(waveform, params, filter, &mut rand::thread_rng())
    }

    /// Run the full pipeline, drawing noise from `rng`
    ///
    /// Either every buffer of the returned state is fresh or an error is
    /// returned; nothing is computed incrementally.
    pub fn recompute_with_rng<R: Rng + ?Sized>(
        &self,
        waveform: Waveform,
        params: &GeneratorParams,
        filter: &FilterSpec,
        rng: &mut R,
    ) -> Result<PipelineState> {
        filter.validate()?;

        let signal = generate_with_rng(waveform, params, &self.times, rng)?;
        let spectrum = forward(signal.as_slice())?;
        let filtered_spectrum = filters::apply(&spectrum, filter, SAMPLE_RATE)?;
        let filtered_signal = inverse(&filtered_spectrum)?;

        tracing::debug!(
            %waveform,
            base_freq = params.base_freq,
            second_freq = params.second_freq,
            add_noise = params.add_noise,
            ?filter,
            "recomputed pipeline"
        );

        Ok(PipelineState {
            signal,
            spectrum,
            filtered_spectrum,
            filtered_signal,
        })
    }
}

/// Run the full pipeline once with a fresh time axis
pub fn recompute(waveform: Waveform, params: &GeneratorParams, filter: &FilterSpec) -> Result<PipelineState> {
    Pipeline::new().recompute(waveform, params, filter)
}
