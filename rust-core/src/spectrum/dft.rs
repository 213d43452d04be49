//! Direct-summation discrete Fourier transform
//!
//! O(N²) on purpose: N is small and the summation mirrors the textbook
//! definition the visualizer is teaching.

use crate::error::{check_length, Result};
use crate::signal::{SampleBuffer, SAMPLE_COUNT};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex spectrum of N bins with its magnitude
///
/// Bin k corresponds to `k * sample_rate / N` Hz. The magnitude is computed
/// at construction, so it always matches the real and imaginary parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    real: Vec<f64>,
    imag: Vec<f64>,
    magnitude: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from its real and imaginary parts
    ///
    /// Fails with `InvalidLength` unless both parts have exactly N bins.
    pub fn from_parts(real: Vec<f64>, imag: Vec<f64>) -> Result<Self> {
        check_length(real.len(), SAMPLE_COUNT)?;
        check_length(imag.len(), SAMPLE_COUNT)?;

        let magnitude = real
            .iter()
            .zip(imag.iter())
            .map(|(&re, &im)| (re * re + im * im).sqrt())
            .collect();

        Ok(Self {
            real,
            imag,
            magnitude,
        })
    }

    /// Build a spectrum from complex bins
    pub fn from_bins(bins: &[Complex64]) -> Result<Self> {
        let real = bins.iter().map(|c| c.re).collect();
        let imag = bins.iter().map(|c| c.im).collect();
        Self::from_parts(real, imag)
    }

    pub fn real(&self) -> &[f64] {
        &self.real
    }

    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// |X[k]| for every bin, always non-negative
    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    /// Bins as complex numbers
    pub fn bins(&self) -> Vec<Complex64> {
        self.real
            .iter()
            .zip(self.imag.iter())
            .map(|(&re, &im)| Complex64::new(re, im))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
}

/// Forward transform: X[k] = Σ x[n]·e^(−j·2πkn/N)
///
/// # Arguments
/// * `samples` - Exactly N time-domain samples
///
/// # Returns
/// Full N-bin spectrum (upper half mirrors the lower half for real input)
pub fn forward(samples: &[f64]) -> Result<Spectrum> {
    check_length(samples.len(), SAMPLE_COUNT)?;

    let two_pi_over_n = 2.0 * PI / SAMPLE_COUNT as f64;
    let mut bins = Vec::with_capacity(SAMPLE_COUNT);

    for k in 0..SAMPLE_COUNT {
        let mut sum = Complex64::new(0.0, 0.0);

        for (n, &x) in samples.iter().enumerate() {
            let angle = two_pi_over_n * k as f64 * n as f64;
            sum += x * Complex64::new((-angle).cos(), (-angle).sin());
        }

        bins.push(sum);
    }

    Spectrum::from_bins(&bins)
}

/// Inverse transform keeping only the real part
///
/// x[n] = (1/N)·Σ (Re X[k]·cos(2πkn/N) − Im X[k]·sin(2πkn/N))
///
/// The imaginary part of the result is never computed. For spectra that are
/// not conjugate-symmetric (any filtered spectrum, since bins above Nyquist
/// are always zeroed) this yields the real part of the complex inverse.
pub fn inverse(spectrum: &Spectrum) -> Result<SampleBuffer> {
    check_length(spectrum.len(), SAMPLE_COUNT)?;

    let two_pi_over_n = 2.0 * PI / SAMPLE_COUNT as f64;
    let mut output = Vec::with_capacity(SAMPLE_COUNT);

    for n in 0..SAMPLE_COUNT {
        let mut real = 0.0;

        for (k, (&re, &im)) in spectrum.real.iter().zip(spectrum.imag.iter()).enumerate() {
            let angle = two_pi_over_n * k as f64 * n as f64;
            real += re * angle.cos() - im * angle.sin();
        }

        output.push(real / SAMPLE_COUNT as f64);
    }

    SampleBuffer::new(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisualizerError;
    use crate::signal::{generate, sample_times, GeneratorParams, Waveform};
    use crate::spectrum::analysis::peak_bin;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use realfft::RealFftPlanner;

    fn random_signal(seed: u64) -> Vec<f64> {
        let mut rng = Pcg32::seed_from_u64(seed);
        (0..SAMPLE_COUNT).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }

    #[test]
    fn test_dc_signal() {
        let spectrum = forward(&vec![1.0; SAMPLE_COUNT]).unwrap();

        // All energy in bin 0
        assert!((spectrum.magnitude()[0] - SAMPLE_COUNT as f64).abs() < 1e-9);
        for k in 1..SAMPLE_COUNT {
            assert!(spectrum.magnitude()[k] < 1e-9, "bin {} = {}", k, spectrum.magnitude()[k]);
        }
    }

    #[test]
    fn test_sine_peak_at_bin_8() {
        let params = GeneratorParams {
            base_freq: 8.0,
            ..GeneratorParams::default()
        };
        let signal = generate(Waveform::Sine, &params, &sample_times()).unwrap();
        let spectrum = forward(signal.as_slice()).unwrap();
        let magnitude = spectrum.magnitude();

        assert_eq!(peak_bin(magnitude), Some(8));

        // Amplitude 1 sine -> N/2 at its bin and its mirror
        assert!((magnitude[8] - 128.0).abs() < 1e-9);
        assert!((magnitude[SAMPLE_COUNT - 8] - 128.0).abs() < 1e-9);

        for (k, &m) in magnitude.iter().enumerate() {
            if k != 8 && k != SAMPLE_COUNT - 8 {
                assert!(m < 1e-9, "leakage at bin {}: {}", k, m);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for seed in 0..4 {
            let signal = random_signal(seed);
            let restored = inverse(&forward(&signal).unwrap()).unwrap();

            for (a, b) in signal.iter().zip(restored.iter()) {
                assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_matches_realfft() {
        let signal = random_signal(7);
        let spectrum = forward(&signal).unwrap();

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(SAMPLE_COUNT);
        let mut input = signal.clone();
        let mut output = r2c.make_output_vec();
        r2c.process(&mut input, &mut output).unwrap();

        for (k, expected) in output.iter().enumerate() {
            assert!((spectrum.real()[k] - expected.re).abs() < 1e-9, "re at bin {}", k);
            assert!((spectrum.imag()[k] - expected.im).abs() < 1e-9, "im at bin {}", k);
        }
    }

    #[test]
    fn test_magnitude_consistent_and_non_negative() {
        let spectrum = forward(&random_signal(3)).unwrap();

        for k in 0..SAMPLE_COUNT {
            let (re, im) = (spectrum.real()[k], spectrum.imag()[k]);
            assert!(spectrum.magnitude()[k] >= 0.0);
            assert!((spectrum.magnitude()[k] - (re * re + im * im).sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverse_single_bin() {
        // X[4] = N alone -> x[n] = cos(2π·4n/N)
        let mut real = vec![0.0; SAMPLE_COUNT];
        real[4] = SAMPLE_COUNT as f64;
        let spectrum = Spectrum::from_parts(real, vec![0.0; SAMPLE_COUNT]).unwrap();
        let signal = inverse(&spectrum).unwrap();

        for (n, &x) in signal.iter().enumerate() {
            let expected = (2.0 * PI * 4.0 * n as f64 / SAMPLE_COUNT as f64).cos();
            assert!((x - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            forward(&[1.0, 2.0, 3.0]).unwrap_err(),
            VisualizerError::InvalidLength {
                expected: SAMPLE_COUNT,
                actual: 3
            }
        );
        assert!(Spectrum::from_parts(vec![0.0; SAMPLE_COUNT], vec![0.0; 10]).is_err());
    }

    #[test]
    fn test_bins_round_trip() {
        let spectrum = forward(&random_signal(11)).unwrap();
        let rebuilt = Spectrum::from_bins(&spectrum.bins()).unwrap();
        assert_eq!(rebuilt, spectrum);
    }
}
