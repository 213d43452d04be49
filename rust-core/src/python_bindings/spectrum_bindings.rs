//! Python bindings for the direct DFT

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::spectrum::{self, Spectrum};

pub(super) fn read_slice<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Forward DFT of exactly SAMPLE_COUNT samples
///
/// Returns:
///     Tuple of (real, imag, magnitude) numpy arrays
#[pyfunction]
pub fn forward_dft<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let spectrum = spectrum::forward(read_slice(&signal)?)?;

    Ok((
        PyArray1::from_slice(py, spectrum.real()),
        PyArray1::from_slice(py, spectrum.imag()),
        PyArray1::from_slice(py, spectrum.magnitude()),
    ))
}

/// Real-part inverse DFT
///
/// Args:
///     real: Real parts of the SAMPLE_COUNT bins
///     imag: Imaginary parts of the SAMPLE_COUNT bins
#[pyfunction]
pub fn inverse_dft<'py>(
    py: Python<'py>,
    real: PyReadonlyArray1<f64>,
    imag: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let spectrum = Spectrum::from_parts(read_slice(&real)?.to_vec(), read_slice(&imag)?.to_vec())?;
    let signal = spectrum::inverse(&spectrum)?;

    Ok(PyArray1::from_vec(py, signal.into_vec()))
}

/// Frequency of every bin in Hz
#[pyfunction]
pub fn frequency_axis<'py>(py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
    Ok(PyArray1::from_vec(py, spectrum::frequency_axis()))
}
