//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing runs the Monte Carlo side of the workspace:
//! - Seeded, reproducible random number generation (`rng`)
//! - GBM path generation into a step-major path matrix (`mc::paths`)
//! - Per-step aggregation into mean path, percentile bands, final-price
//!   statistics and a histogram (`mc::aggregate`)
//!
//! It builds on Layer 1 (`pricer_core`) for statistics and errors and on
//! Layer 2 (`pricer_models`) for the GBM step coefficients.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::simulate;
//!
//! let result = simulate(100.0, 0.08, 0.2, 1_000, 50, 1.0 / 252.0, 20, 42).unwrap();
//!
//! assert_eq!(result.mean_path.len(), 51);
//! assert_eq!(result.mean_path[0], 100.0);
//! assert_eq!(result.histogram_edges.len(), result.histogram_data.len() + 1);
//! ```
//!
//! ## Reproducibility
//!
//! A non-zero seed produces bit-identical results across runs. Seed `0`
//! draws a fresh seed from the operating system entropy source; the seed
//! actually used is logged at `debug` level and stored in
//! [`SimulationResult::seed`](mc::SimulationResult::seed).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{simulate, PathSimulator, SimulationConfig, SimulationResult};
