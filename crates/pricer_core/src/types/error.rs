//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from simulation and analytical pricing operations
//!
//! Numeric degeneracies (flat histogram range, zero volatility, expired
//! options) are resolved inside the engines and are never reported here.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for engine calls with descriptive
/// context for each failure mode. Every variant is raised before any
/// simulation or formula work begins, so no partial result ever escapes.
///
/// # Variants
/// - `InvalidArgument`: Caller contract violation (zero counts, non-positive
///   prices, non-finite scalars)
/// - `NumericalInstability`: Inputs are finite but the model overflowed
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("num_steps must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: num_steps must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Builds an `InvalidArgument` error naming the offending parameter.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::invalid_argument("s0", "must be positive, got -1");
    /// assert_eq!(err.to_string(), "Invalid argument: s0 must be positive, got -1");
    /// ```
    pub fn invalid_argument(name: &str, reason: impl std::fmt::Display) -> Self {
        PricingError::InvalidArgument(format!("{} {}", name, reason))
    }

    /// Returns `true` for caller contract violations.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }
}
