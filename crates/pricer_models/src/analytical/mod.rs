//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) in market-quoting
//!   units: vega and rho per one percentage point, theta per calendar day
//!
//! ## Design Principles
//!
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails
//! - **Expiry handling**: expired, zero-volatility or non-positive-price
//!   contracts short-circuit to an intrinsic-delta result

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{greeks, BlackScholes, GreeksResult};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
