//! Fixed-length sample buffer shared by every pipeline stage

use crate::error::{check_length, Result};

/// Number of samples per buffer (N)
pub const SAMPLE_COUNT: usize = 256;

/// Sample rate in Hz, so one buffer spans exactly one second
pub const SAMPLE_RATE: f64 = 256.0;

/// Highest representable frequency (sample_rate / 2)
pub const NYQUIST: f64 = SAMPLE_RATE / 2.0;

/// Time-domain signal of exactly [`SAMPLE_COUNT`] samples
///
/// Buffers are never mutated after construction; every regenerate produces
/// a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    /// Wrap samples, failing with `InvalidLength` unless there are exactly N
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        check_length(samples.len(), SAMPLE_COUNT)?;
        Ok(Self { samples })
    }

    /// Buffer of N zeros
    pub fn silence() -> Self {
        Self {
            samples: vec![0.0; SAMPLE_COUNT],
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }
}

impl AsRef<[f64]> for SampleBuffer {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisualizerError;

    #[test]
    fn test_buffer_length_check() {
        assert!(SampleBuffer::new(vec![0.0; SAMPLE_COUNT]).is_ok());

        let err = SampleBuffer::new(vec![0.0; 100]).unwrap_err();
        assert_eq!(
            err,
            VisualizerError::InvalidLength {
                expected: SAMPLE_COUNT,
                actual: 100
            }
        );
    }

    #[test]
    fn test_silence() {
        let buffer = SampleBuffer::silence();
        assert_eq!(buffer.len(), SAMPLE_COUNT);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_nyquist() {
        assert_eq!(NYQUIST, 128.0);
    }
}
