//! Brick-wall filtering in the frequency domain
//!
//! Each bin is either kept unchanged or zeroed. Bins above Nyquist are
//! always zeroed so the filtered views never show the mirrored half.

use crate::error::{check_finite, Result, VisualizerError};
use crate::spectrum::Spectrum;
use std::fmt;
use std::str::FromStr;

/// Filter type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    #[default]
    Lowpass,
    Highpass,
    Bandpass,
}

impl FilterType {
    pub const ALL: [FilterType; 3] = [FilterType::Lowpass, FilterType::Highpass, FilterType::Bandpass];

    pub fn name(&self) -> &'static str {
        match self {
            FilterType::Lowpass => "lowpass",
            FilterType::Highpass => "highpass",
            FilterType::Bandpass => "bandpass",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterType {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self> {
        FilterType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| VisualizerError::UnknownVariant {
                kind: "filter type",
                name: s.to_string(),
            })
    }
}

/// Filter specification, all frequencies in Hz
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterSpec {
    /// Keep bins with freq <= cutoff
    Lowpass { cutoff: f64 },

    /// Keep bins with freq >= cutoff
    Highpass { cutoff: f64 },

    /// Keep bins between the two edges (inclusive), in either order
    Bandpass { low: f64, high: f64 },
}

impl FilterSpec {
    pub fn lowpass(cutoff: f64) -> Self {
        FilterSpec::Lowpass { cutoff }
    }

    pub fn highpass(cutoff: f64) -> Self {
        FilterSpec::Highpass { cutoff }
    }

    pub fn bandpass(low: f64, high: f64) -> Self {
        FilterSpec::Bandpass { low, high }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            FilterSpec::Lowpass { .. } => FilterType::Lowpass,
            FilterSpec::Highpass { .. } => FilterType::Highpass,
            FilterSpec::Bandpass { .. } => FilterType::Bandpass,
        }
    }

    /// Reject NaN or infinite edges
    pub fn validate(&self) -> Result<()> {
        match *self {
            FilterSpec::Lowpass { cutoff } | FilterSpec::Highpass { cutoff } => {
                check_finite("cutoff", cutoff)?;
            }
            FilterSpec::Bandpass { low, high } => {
                check_finite("low_cutoff", low)?;
                check_finite("high_cutoff", high)?;
            }
        }
        Ok(())
    }

    /// Passband test, without the Nyquist override
    pub fn passes(&self, freq: f64) -> bool {
        match *self {
            FilterSpec::Lowpass { cutoff } => freq <= cutoff,
            FilterSpec::Highpass { cutoff } => freq >= cutoff,
            FilterSpec::Bandpass { low, high } => {
                let (lo, hi) = (low.min(high), low.max(high));
                freq >= lo && freq <= hi
            }
        }
    }

    /// Final keep decision for a bin at `freq`
    pub fn keeps(&self, freq: f64, nyquist: f64) -> bool {
        freq <= nyquist && self.passes(freq)
    }
}

/// Keep/reject decision for each of `bins` bins
///
/// # Arguments
/// * `spec` - Filter specification
/// * `sample_rate` - Sample rate in Hz (bin k is `k * sample_rate / bins` Hz)
/// * `bins` - Number of bins
pub fn keep_mask(spec: &FilterSpec, sample_rate: f64, bins: usize) -> Result<Vec<bool>> {
    spec.validate()?;
    check_finite("sample_rate", sample_rate)?;

    let nyquist = sample_rate / 2.0;

    Ok((0..bins)
        .map(|k| {
            let freq = (k as f64 * sample_rate) / bins as f64;
            spec.keeps(freq, nyquist)
        })
        .collect())
}

/// Zero every rejected bin and recompute the magnitude
pub fn apply(spectrum: &Spectrum, spec: &FilterSpec, sample_rate: f64) -> Result<Spectrum> {
    let mask = keep_mask(spec, sample_rate, spectrum.len())?;

    let mut real = Vec::with_capacity(mask.len());
    let mut imag = Vec::with_capacity(mask.len());

    for ((&keep, &re), &im) in mask.iter().zip(spectrum.real()).zip(spectrum.imag()) {
        if keep {
            real.push(re);
            imag.push(im);
        } else {
            real.push(0.0);
            imag.push(0.0);
        }
    }

    let kept = mask.iter().filter(|&&keep| keep).count();
    tracing::trace!(filter = %spec.filter_type(), kept, "applied spectral mask");

    Spectrum::from_parts(real, imag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{SAMPLE_COUNT, SAMPLE_RATE};
    use crate::spectrum::forward;

    fn ramp_spectrum() -> Spectrum {
        // Non-zero everywhere so zeroed bins are unambiguous
        let real = (0..SAMPLE_COUNT).map(|k| k as f64 + 1.0).collect();
        let imag = (0..SAMPLE_COUNT).map(|k| -(k as f64) - 0.5).collect();
        Spectrum::from_parts(real, imag).unwrap()
    }

    #[test]
    fn test_lowpass_mask() {
        let mask = keep_mask(&FilterSpec::lowpass(20.0), SAMPLE_RATE, SAMPLE_COUNT).unwrap();

        for (k, &keep) in mask.iter().enumerate() {
            assert_eq!(keep, k <= 20, "bin {}", k);
        }
    }

    #[test]
    fn test_highpass_mask_stops_at_nyquist() {
        let mask = keep_mask(&FilterSpec::highpass(0.0), SAMPLE_RATE, SAMPLE_COUNT).unwrap();

        for (k, &keep) in mask.iter().enumerate() {
            assert_eq!(keep, k <= 128, "bin {}", k);
        }
    }

    #[test]
    fn test_bandpass_order_independent() {
        let forward_order = keep_mask(&FilterSpec::bandpass(10.0, 40.0), SAMPLE_RATE, SAMPLE_COUNT).unwrap();
        let reversed = keep_mask(&FilterSpec::bandpass(40.0, 10.0), SAMPLE_RATE, SAMPLE_COUNT).unwrap();

        assert_eq!(forward_order, reversed);

        // Edges are inclusive
        assert!(forward_order[10] && forward_order[40]);
        assert!(!forward_order[9] && !forward_order[41]);
        assert_eq!(forward_order.iter().filter(|&&k| k).count(), 31);
    }

    #[test]
    fn test_apply_lowpass() {
        let spectrum = ramp_spectrum();
        let filtered = apply(&spectrum, &FilterSpec::lowpass(20.0), SAMPLE_RATE).unwrap();

        for k in 0..SAMPLE_COUNT {
            if k <= 20 {
                assert_eq!(filtered.real()[k], spectrum.real()[k]);
                assert_eq!(filtered.imag()[k], spectrum.imag()[k]);
                assert_eq!(filtered.magnitude()[k], spectrum.magnitude()[k]);
            } else {
                assert_eq!(filtered.real()[k], 0.0);
                assert_eq!(filtered.imag()[k], 0.0);
                assert_eq!(filtered.magnitude()[k], 0.0);
            }
        }
    }

    #[test]
    fn test_apply_never_keeps_upper_half() {
        let spectrum = ramp_spectrum();

        for spec in [
            FilterSpec::lowpass(1000.0),
            FilterSpec::highpass(50.0),
            FilterSpec::bandpass(0.0, 256.0),
        ] {
            let filtered = apply(&spectrum, &spec, SAMPLE_RATE).unwrap();
            assert!(filtered.magnitude()[129..].iter().all(|&m| m == 0.0), "{:?}", spec);
        }
    }

    #[test]
    fn test_apply_is_deterministic() {
        let signal: Vec<f64> = (0..SAMPLE_COUNT).map(|n| (n as f64 * 0.3).sin()).collect();
        let spectrum = forward(&signal).unwrap();
        let spec = FilterSpec::bandpass(40.0, 10.0);

        assert_eq!(
            apply(&spectrum, &spec, SAMPLE_RATE).unwrap(),
            apply(&spectrum, &spec, SAMPLE_RATE).unwrap()
        );
    }

    #[test]
    fn test_rejects_non_finite_cutoff() {
        let err = keep_mask(&FilterSpec::lowpass(f64::NAN), SAMPLE_RATE, SAMPLE_COUNT).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidParameter { name: "cutoff", .. }));

        let err = apply(&ramp_spectrum(), &FilterSpec::bandpass(10.0, f64::INFINITY), SAMPLE_RATE).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidParameter { name: "high_cutoff", .. }));
    }

    #[test]
    fn test_filter_type_names() {
        for filter_type in FilterType::ALL {
            assert_eq!(filter_type.name().parse::<FilterType>().unwrap(), filter_type);
        }
        assert!("notch".parse::<FilterType>().is_err());
        assert_eq!(FilterSpec::bandpass(1.0, 2.0).filter_type(), FilterType::Bandpass);
    }
}
