//! mcrisk command line operations
//!
//! # Commands
//!
//! - `mcrisk simulate` - GBM Monte Carlo run with tail-risk summary
//! - `mcrisk greeks` - Black-Scholes price and Greeks for one contract
//! - `mcrisk chain --input <file>` - Greeks for every quote of a CSV chain
//! - `mcrisk check` - Engine health probe
//!
//! # Architecture
//!
//! As the service layer, this crate only wires configuration and I/O to the
//! pricer crates; all numerics live below it.

pub mod commands;
pub mod config;
pub mod error;

pub use config::{build_config, CliArgs, CliConfig, ConfigError, LogLevel};
pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
