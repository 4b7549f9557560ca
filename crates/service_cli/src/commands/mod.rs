//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod chain;
pub mod check;
pub mod greeks;
pub mod simulate;

/// Output format for single-result commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable table
    #[default]
    Table,
}
