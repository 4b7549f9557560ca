//! Fail-fast argument validation.
//!
//! Each helper returns the validated value so checks compose with `?`:
//!
//! ```
//! use pricer_core::types::{ensure_finite, ensure_positive, PricingError};
//!
//! fn check(spot: f64, rate: f64) -> Result<(f64, f64), PricingError> {
//!     Ok((ensure_positive("spot", spot)?, ensure_finite("rate", rate)?))
//! }
//!
//! assert!(check(100.0, 0.05).is_ok());
//! assert!(check(0.0, 0.05).is_err());
//! assert!(check(100.0, f64::NAN).is_err());
//! ```

use super::error::PricingError;

/// Rejects NaN and infinite values.
#[inline]
pub fn ensure_finite(name: &str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_argument(
            name,
            format_args!("must be finite, got {}", value),
        ))
    }
}

/// Rejects non-finite values and values `<= 0`.
#[inline]
pub fn ensure_positive(name: &str, value: f64) -> Result<f64, PricingError> {
    let value = ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid_argument(
            name,
            format_args!("must be positive, got {}", value),
        ))
    }
}

/// Rejects a zero count.
#[inline]
pub fn ensure_non_zero(name: &str, count: usize) -> Result<usize, PricingError> {
    if count > 0 {
        Ok(count)
    } else {
        Err(PricingError::invalid_argument(name, "must be positive, got 0"))
    }
}
