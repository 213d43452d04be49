//! Error types for the visualizer pipeline

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, VisualizerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisualizerError {
    #[error("Buffer has {actual} samples, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid parameter '{name}': {value} is not a finite number")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Unknown {kind} '{name}'")]
    UnknownVariant { kind: &'static str, name: String },
}

/// Check that a buffer has exactly `expected` elements
pub(crate) fn check_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(VisualizerError::InvalidLength { expected, actual });
    }
    Ok(())
}

/// Reject NaN and infinite control values instead of letting them reach the plots
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        tracing::warn!(name, value, "rejecting non-finite parameter");
        return Err(VisualizerError::InvalidParameter { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length() {
        assert!(check_length(256, 256).is_ok());
        assert_eq!(
            check_length(10, 256),
            Err(VisualizerError::InvalidLength { expected: 256, actual: 10 })
        );
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite("cutoff", 20.0), Ok(20.0));
        assert!(matches!(
            check_finite("cutoff", f64::NAN),
            Err(VisualizerError::InvalidParameter { name: "cutoff", .. })
        ));
        assert!(check_finite("cutoff", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = VisualizerError::InvalidLength { expected: 256, actual: 3 };
        assert_eq!(err.to_string(), "Buffer has 3 samples, expected 256");

        let err = VisualizerError::UnknownVariant {
            kind: "waveform",
            name: "triangle".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown waveform 'triangle'");
    }
}
