//! Frequency-domain filter masks

pub mod mask;

pub use mask::{apply, keep_mask, FilterSpec, FilterType};
