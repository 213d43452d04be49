//! Python bindings for the stateful visualizer
//!
//! The Python UI owns the canvases: it forwards control changes, calls
//! `tick()` from its animation timer and pulls buffers to draw.

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::filters::FilterType;
use crate::pipeline::Visualizer;
use crate::render::geometry;
use crate::signal::Waveform;

/// Visualizer exposed to Python
#[pyclass(name = "Visualizer", unsendable)]
pub struct PyVisualizer {
    visualizer: Visualizer,
}

#[pymethods]
impl PyVisualizer {
    /// Create a visualizer with the default controls and run the first recompute
    #[new]
    fn new() -> PyResult<Self> {
        Ok(Self {
            visualizer: Visualizer::new()?,
        })
    }

    /// Select the waveform ("sine", "square", "sawtooth", "sinePlusNoise", "twoTone")
    fn set_waveform(&mut self, name: &str) -> PyResult<()> {
        let waveform: Waveform = name.parse()?;
        self.visualizer.update(|s| s.waveform = waveform)?;
        Ok(())
    }

    fn set_base_freq(&mut self, hz: f64) -> PyResult<()> {
        self.visualizer.update(|s| s.base_freq = hz)?;
        Ok(())
    }

    fn set_second_freq(&mut self, hz: f64) -> PyResult<()> {
        self.visualizer.update(|s| s.second_freq = hz)?;
        Ok(())
    }

    fn set_add_noise(&mut self, enabled: bool) -> PyResult<()> {
        self.visualizer.update(|s| s.add_noise = enabled)?;
        Ok(())
    }

    /// Select the filter ("lowpass", "highpass", "bandpass")
    fn set_filter_type(&mut self, name: &str) -> PyResult<()> {
        let filter_type: FilterType = name.parse()?;
        self.visualizer.update(|s| s.filter_type = filter_type)?;
        Ok(())
    }

    fn set_cutoff(&mut self, hz: f64) -> PyResult<()> {
        self.visualizer.update(|s| s.cutoff = hz)?;
        Ok(())
    }

    /// Set both bandpass edges (either order)
    fn set_band(&mut self, low: f64, high: f64) -> PyResult<()> {
        self.visualizer.update(|s| {
            s.low_cutoff = low;
            s.high_cutoff = high;
        })?;
        Ok(())
    }

    /// Set the scroll-speed slider position (0 to 100)
    fn set_scroll_speed(&mut self, slider: f64) -> PyResult<()> {
        self.visualizer.update(|s| s.scroll_slider = slider)?;
        Ok(())
    }

    /// Recompute with fresh noise
    fn regenerate(&mut self) -> PyResult<()> {
        self.visualizer.regenerate()?;
        Ok(())
    }

    /// Restore defaults and rewind the scroll offset
    fn reset(&mut self) -> PyResult<()> {
        self.visualizer.reset()?;
        Ok(())
    }

    /// Advance the scroll offset by one animation tick
    ///
    /// Returns:
    ///     New scroll offset in samples
    fn tick(&mut self) -> f64 {
        self.visualizer.tick()
    }

    #[getter]
    fn scroll_offset(&self) -> f64 {
        self.visualizer.scroll_offset()
    }

    #[getter]
    fn waveform(&self) -> &'static str {
        self.visualizer.settings().waveform.name()
    }

    #[getter]
    fn filter_type(&self) -> &'static str {
        self.visualizer.settings().filter_type.name()
    }

    fn get_signal<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.visualizer.state().signal.as_slice())
    }

    fn get_filtered_signal<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.visualizer.state().filtered_signal.as_slice())
    }

    fn get_magnitude<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.visualizer.state().spectrum.magnitude())
    }

    fn get_filtered_magnitude<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.visualizer.state().filtered_spectrum.magnitude())
    }

    /// Canvas coordinates of a time view at the current scroll offset
    ///
    /// Returns:
    ///     Tuple of (x, y) numpy arrays
    #[pyo3(signature = (filtered, width, height))]
    fn time_series_points<'py>(
        &self,
        py: Python<'py>,
        filtered: bool,
        width: f64,
        height: f64,
    ) -> (&'py PyArray1<f64>, &'py PyArray1<f64>) {
        let state = self.visualizer.state();
        let data = if filtered { &state.filtered_signal } else { &state.signal };
        let points = geometry::time_series_points(data.as_slice(), self.visualizer.scroll_offset(), width, height);

        (
            PyArray1::from_iter(py, points.iter().map(|p| p.x)),
            PyArray1::from_iter(py, points.iter().map(|p| p.y)),
        )
    }

    /// Bars (x, y, width, height) of a frequency view, bins 0..=N/2
    #[pyo3(signature = (filtered, width, height))]
    fn magnitude_bars(&self, filtered: bool, width: f64, height: f64) -> Vec<(f64, f64, f64, f64)> {
        let state = self.visualizer.state();
        let spectrum = if filtered { &state.filtered_spectrum } else { &state.spectrum };

        geometry::magnitude_bars(spectrum.magnitude(), width, height)
            .into_iter()
            .map(|b| (b.x, b.y, b.width, b.height))
            .collect()
    }
}
