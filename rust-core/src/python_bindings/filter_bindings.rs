//! Python bindings for the spectral mask

use pyo3::prelude::*;
use crate::error::Result;
use crate::filters::{self, FilterSpec, FilterType};
use crate::signal::{SAMPLE_COUNT, SAMPLE_RATE};

/// Build a filter spec from the UI selector name and its cutoffs
pub(super) fn filter_spec(filter_type: &str, cutoff: f64, low: f64, high: f64) -> Result<FilterSpec> {
    Ok(match filter_type.parse::<FilterType>()? {
        FilterType::Lowpass => FilterSpec::lowpass(cutoff),
        FilterType::Highpass => FilterSpec::highpass(cutoff),
        FilterType::Bandpass => FilterSpec::bandpass(low, high),
    })
}

/// Keep/reject decision for every bin
///
/// Args:
///     filter_type: "lowpass", "highpass" or "bandpass"
///     cutoff: Lowpass/highpass cutoff in Hz
///     low: Bandpass edge in Hz
///     high: Bandpass edge in Hz
#[pyfunction]
#[pyo3(signature = (filter_type, cutoff=20.0, low=10.0, high=40.0))]
pub fn keep_mask(filter_type: &str, cutoff: f64, low: f64, high: f64) -> PyResult<Vec<bool>> {
    let spec = filter_spec(filter_type, cutoff, low, high)?;
    Ok(filters::keep_mask(&spec, SAMPLE_RATE, SAMPLE_COUNT)?)
}
