//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use crate::error::VisualizerError;

mod filter_bindings;
mod spectrum_bindings;
mod visualizer_bindings;

impl From<VisualizerError> for PyErr {
    fn from(err: VisualizerError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn spectrum_visualizer(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<visualizer_bindings::PyVisualizer>()?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::forward_dft, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::inverse_dft, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::frequency_axis, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::keep_mask, m)?)?;

    m.add("SAMPLE_COUNT", crate::signal::SAMPLE_COUNT)?;
    m.add("SAMPLE_RATE", crate::signal::SAMPLE_RATE)?;

    Ok(())
}
