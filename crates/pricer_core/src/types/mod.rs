//! Error and validation types.
//!
//! This module provides:
//! - `error`: The [`PricingError`] taxonomy shared by every engine
//! - `validation`: Fail-fast argument checks used before any computation starts
//!
//! # Re-exports
//!
//! For convenience, commonly used items are re-exported at this module level.

pub mod error;
pub mod validation;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use validation::{ensure_finite, ensure_non_zero, ensure_positive};
