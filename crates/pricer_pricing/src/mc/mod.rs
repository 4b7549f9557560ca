//! Monte Carlo GBM simulation.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator
//! ├── SimulationConfig  (validated dimensions, bins, seed)
//! ├── PathMatrix        (step-major price storage, reused across runs)
//! ├── PricerRng         (PCG-64, one per run)
//! └── Orchestration
//!     ├── generate_gbm_paths()
//!     └── aggregate()   (mean path, percentile bands, histogram)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_pricing::mc::simulate;
//!
//! let result = simulate(100.0, 0.08, 0.0, 10, 4, 0.25, 5, 1).unwrap();
//!
//! // sigma = 0: every path is the deterministic drift
//! assert_eq!(result.final_price_min, result.final_price_max);
//! assert!(result.histogram_edges.windows(2).all(|w| w[0] < w[1]));
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod paths;
pub mod result;
pub mod simulator;
pub mod workspace;

// Re-exports for convenient access
pub use aggregate::aggregate;
pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::ConfigError;
pub use paths::generate_gbm_paths;
pub use result::SimulationResult;
pub use simulator::{simulate, PathSimulator};
pub use workspace::PathMatrix;
