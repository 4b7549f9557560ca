//! Check command implementation
//!
//! Runs a small fixed-seed simulation to confirm the engine is usable.

use pricer_core::math::DistributionSummary;
use pricer_pricing::simulate;
use tracing::info;

use crate::Result;

/// Runs the probe simulation and returns its final-price statistics.
pub fn probe() -> Result<DistributionSummary> {
    let result = simulate(100.0, 0.08, 0.20, 100, 10, 1.0 / 252.0, 10, 42)?;
    Ok(result.final_summary())
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking engine...");
    let summary = probe()?;
    println!(
        "Engine OK (mcrisk v{}): final mean {:.4}, std {:.4}",
        crate::VERSION,
        summary.mean,
        summary.std
    );
    Ok(())
}
