//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised by [`BlackScholes::new`](super::BlackScholes::new) when the model
/// is constructed outside its domain. The flat [`greeks`](super::greeks)
/// entry point routes non-positive inputs through its expiry branch instead,
/// so only non-finite values surface from there.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// NaN or infinite input.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending parameter
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_non_finite_display() {
        let err = AnalyticalError::NonFiniteInput {
            name: "rate",
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite input: rate = NaN");
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err: PricingError = AnalyticalError::InvalidSpot { spot: 0.0 }.into();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("S = 0"));
    }
}
