//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for Monte Carlo
//! simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: generators are seeded explicitly; the PCG-64 stream
//!   and its `seed_from_u64` expansion are portable and value-stable, so a seed
//!   reproduces across platforms
//! - **Explicit seed resolution**: the "pick a fresh seed" sentinel is
//!   resolved once per call by [`resolve_seed`], never via shared state
//! - **Static dispatch**: no `Box<dyn RngCore>` in hot paths
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{resolve_seed, PricerRng};
//!
//! let seed = resolve_seed(12345);
//! assert_eq!(seed, 12345);
//!
//! let mut rng = PricerRng::from_seed(seed);
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::{resolve_seed, PricerRng, ENTROPY_SEED};
