//! # Pricer Models (L2: Business Logic)
//!
//! Stochastic dynamics and closed-form option analytics.
//!
//! This crate provides:
//! - Geometric Brownian Motion step coefficients (`models::gbm`)
//! - Black-Scholes prices and Greeks for European options (`analytical`)
//! - Standard normal CDF/PDF (`analytical::distributions`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: no I/O, no shared state, no randomness
//! - **Fail fast**: non-finite inputs are rejected before any formula runs
//! - **Degenerate inputs resolve internally**: expired or zero-volatility
//!   options return a finite, well-defined result instead of NaN
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::greeks;
//!
//! let g = greeks(100.0, 1.0, 100.0, 0.05, 0.2, true).unwrap();
//! assert!(g.delta > 0.5 && g.delta < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
