//! Error types for the Monte Carlo simulation engine.
//!
//! Configuration errors are raised while building a [`SimulationConfig`]
//! (before any allocation) and convert into the shared
//! [`PricingError::InvalidArgument`] at the public API boundary.
//!
//! [`SimulationConfig`]: super::SimulationConfig

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_BINS, MAX_MATRIX_CELLS};

/// Configuration error for the path simulator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count of zero.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count of zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Histogram bin count outside valid range [1, MAX_BINS].
    #[error("Invalid histogram bin count {0}: must be in range [1, {max}]", max = MAX_BINS)]
    InvalidBinCount(usize),

    /// Path matrix would exceed the allocation limit.
    #[error(
        "Path matrix of {n_paths} paths x {n_steps} steps exceeds {max} cells",
        max = MAX_MATRIX_CELLS
    )]
    MatrixTooLarge {
        /// Requested path count.
        n_paths: usize,
        /// Requested step count.
        n_steps: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(0);
        assert_eq!(err.to_string(), "Invalid step count 0: must be at least 1");

        let err = ConfigError::InvalidBinCount(0);
        assert!(err.to_string().contains("bin count 0"));

        let err = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter 'n_paths': must be specified");
    }

    #[test]
    fn test_matrix_too_large_display() {
        let err = ConfigError::MatrixTooLarge {
            n_paths: 1_000_000,
            n_steps: 1_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("1000000 paths"));
        assert!(msg.contains("1000 steps"));
    }

    #[test]
    fn test_converts_to_invalid_argument() {
        let err: PricingError = ConfigError::InvalidStepCount(0).into();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("Invalid argument: Invalid step count 0"));
    }
}
