//! Spectrum Visualizer - signal, spectrum and filter pipeline
//!
//! Generates a synthetic signal, transforms it with a direct DFT, applies a
//! brick-wall frequency mask and transforms back, producing the four
//! datasets drawn by the live views. Optional Python bindings expose the
//! pipeline to a Python UI.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod filters;
pub mod pipeline;
pub mod render;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, VisualizerError};
pub use filters::{FilterSpec, FilterType};
pub use pipeline::{ControlSettings, PipelineState, Visualizer};
pub use render::Renderer;
pub use signal::{SampleBuffer, Waveform, NYQUIST, SAMPLE_COUNT, SAMPLE_RATE};
pub use spectrum::Spectrum;
