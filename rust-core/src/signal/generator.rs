//! Waveform synthesis
//!
//! Produces one buffer of N samples at the fixed sample rate from the
//! control-panel waveform selection.

use super::buffer::{SampleBuffer, SAMPLE_COUNT, SAMPLE_RATE};
use crate::error::{check_finite, check_length, Result, VisualizerError};
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Amplitude of the noise built into [`Waveform::SinePlusNoise`]
pub const INTRINSIC_NOISE_AMPLITUDE: f64 = 0.4;

/// Amplitude of the optional noise layer enabled by `add_noise`
pub const ADDED_NOISE_AMPLITUDE: f64 = 0.2;

/// Gain of the second tone in [`Waveform::TwoTone`]
pub const SECOND_TONE_GAIN: f64 = 0.7;

/// Waveform selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// sin(2π·f0·t)
    #[default]
    Sine,

    /// sign(sin(2π·f0·t)), with sign(0) = 0
    Square,

    /// 2·(frac(f0·t) − 0.5), ramps from -1 towards 1
    Sawtooth,

    /// Sine plus 0.4·U(-1, 1) per sample
    SinePlusNoise,

    /// sin(2π·f0·t) + 0.7·sin(2π·f1·t)
    TwoTone,
}

impl Waveform {
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::SinePlusNoise,
        Waveform::TwoTone,
    ];

    /// Name used by the UI selector
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::SinePlusNoise => "sinePlusNoise",
            Waveform::TwoTone => "twoTone",
        }
    }

    /// Whether this waveform draws random numbers on its own
    pub fn is_noisy(&self) -> bool {
        matches!(self, Waveform::SinePlusNoise)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self> {
        Waveform::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| VisualizerError::UnknownVariant {
                kind: "waveform",
                name: s.to_string(),
            })
    }
}

/// Generator parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Base frequency f0 in Hz
    pub base_freq: f64,

    /// Second frequency f1 in Hz (two-tone only)
    pub second_freq: f64,

    /// Add 0.2·U(-1, 1) per sample on top of the waveform
    pub add_noise: bool,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            base_freq: 5.0,
            second_freq: 20.0,
            add_noise: false,
        }
    }
}

impl GeneratorParams {
    fn validate(&self) -> Result<()> {
        check_finite("base_freq", self.base_freq)?;
        check_finite("second_freq", self.second_freq)?;
        Ok(())
    }
}

/// Sample timestamps t[n] = n / sample_rate for n = 0..N
pub fn sample_times() -> Vec<f64> {
    let dt = 1.0 / SAMPLE_RATE;
    (0..SAMPLE_COUNT).map(|n| n as f64 * dt).collect()
}

/// Generate a buffer using the thread-local RNG
///
/// Output is non-deterministic whenever noise is involved.
pub fn generate(waveform: Waveform, params: &GeneratorParams, times: &[f64]) -> Result<SampleBuffer> {
    generate_with_rng(waveform, params, times, &mut rand::thread_rng())
}

/// Generate a buffer drawing noise from `rng`
///
/// # Arguments
/// * `waveform` - Waveform selection
/// * `params` - Frequencies and noise toggle
/// * `times` - N sample timestamps, see [`sample_times`]
/// * `rng` - Noise source; intrinsic noise is drawn before added noise
pub fn generate_with_rng<R: Rng + ?Sized>(
    waveform: Waveform,
    params: &GeneratorParams,
    times: &[f64],
    rng: &mut R,
) -> Result<SampleBuffer> {
    check_length(times.len(), SAMPLE_COUNT)?;
    params.validate()?;

    let f0 = params.base_freq;
    let f1 = params.second_freq;

    let samples = times
        .iter()
        .map(|&t| {
            let mut s = match waveform {
                Waveform::Sine => tone(f0, t),
                Waveform::Square => sign(tone(f0, t)),
                Waveform::Sawtooth => {
                    // Truncated remainder, in [0, 1) for non-negative f0·t
                    let frac = (f0 * t) % 1.0;
                    2.0 * (frac - 0.5)
                }
                Waveform::SinePlusNoise => {
                    tone(f0, t) + INTRINSIC_NOISE_AMPLITUDE * uniform(rng)
                }
                Waveform::TwoTone => tone(f0, t) + SECOND_TONE_GAIN * tone(f1, t),
            };

            if params.add_noise {
                s += ADDED_NOISE_AMPLITUDE * uniform(rng);
            }

            s
        })
        .collect();

    SampleBuffer::new(samples)
}

#[inline]
fn tone(freq: f64, t: f64) -> f64 {
    (2.0 * PI * freq * t).sin()
}

/// Sign with sign(±0) = ±0, unlike `f64::signum`
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-1.0..1.0)
}
