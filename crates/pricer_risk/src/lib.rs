//! # Pricer Risk (L4: Application)
//!
//! Risk views built on top of the simulation and analytical engines.
//!
//! This crate provides:
//! - Value-at-Risk and Conditional VaR of simulated final prices (`tail`)
//! - A serialisable report of one simulation run (`summary`)
//! - Black-Scholes Greeks across an option chain (`chain`)
//! - Rayon batching helpers (`parallel`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  tail      - VaR / CVaR                 │
//! │  summary   - parameters + results       │
//! │  chain     - per-quote Greeks           │
//! │  parallel  - Rayon utilities            │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │  pricer_pricing (L3)  GBM Monte Carlo   │
//! │  pricer_models  (L2)  Black-Scholes     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_risk::summary::SimulationParameters;
//!
//! let summary = SimulationParameters {
//!     num_simulations: 2_000,
//!     num_steps: 63,
//!     seed: 7,
//!     ..SimulationParameters::new(100.0, 0.08, 0.2)
//! }
//! .run()
//! .unwrap();
//!
//! let risk = summary.results.tail_risk;
//! assert!(risk.cvar_95 >= risk.var_95);
//! assert!(risk.var_99 >= risk.var_95);
//! ```

#![warn(missing_docs)]

pub mod chain;
pub mod parallel;
pub mod summary;
pub mod tail;

pub use chain::{ChainGreeksCalculator, OptionQuote, QuoteFilter};
pub use summary::{SimulationParameters, SimulationSummary};
pub use tail::TailRiskMetrics;
