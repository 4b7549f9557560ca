//! Simulation result record.

use pricer_core::math::DistributionSummary;

/// Aggregated output of one simulation run.
///
/// Per-step vectors have length `num_steps + 1` (index 0 is the initial
/// spot). The record is created once per run and never mutated afterwards.
///
/// # Invariants
///
/// - `histogram_edges.len() == histogram_data.len() + 1`, strictly increasing
/// - `histogram_data` sums to `final_prices.len()`
/// - every final price lies in `[final_price_min, final_price_max]`
/// - `mean_path[0]`, `percentile_05[0]` and `percentile_95[0]` equal `s0`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Mean price across paths at each step.
    pub mean_path: Vec<f64>,
    /// Nearest-rank 5th percentile at each step.
    pub percentile_05: Vec<f64>,
    /// Nearest-rank 95th percentile at each step.
    pub percentile_95: Vec<f64>,
    /// Final-price histogram counts, one per bin.
    pub histogram_data: Vec<u64>,
    /// Final-price histogram bin edges, `histogram_data.len() + 1` long.
    pub histogram_edges: Vec<f64>,
    /// Mean final price.
    pub final_price_mean: f64,
    /// Population standard deviation of the final price.
    pub final_price_std: f64,
    /// Smallest final price.
    pub final_price_min: f64,
    /// Largest final price.
    pub final_price_max: f64,
    /// Every path's final price, sorted ascending.
    pub final_prices: Vec<f64>,
    /// Nearest-rank 5th percentile of the final price (95% VaR threshold).
    pub final_percentile_05: f64,
    /// Nearest-rank 1st percentile of the final price (99% VaR threshold).
    pub final_percentile_01: f64,
    /// Seed the generator was built from, after entropy resolution.
    pub seed: u64,
}

impl SimulationResult {
    /// Number of simulated paths.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.final_prices.len()
    }

    /// Number of time steps (excluding the initial row).
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.mean_path.len().saturating_sub(1)
    }

    /// Final-price mean, std, min and max as one record.
    #[inline]
    pub fn final_summary(&self) -> DistributionSummary {
        DistributionSummary {
            mean: self.final_price_mean,
            std: self.final_price_std,
            min: self.final_price_min,
            max: self.final_price_max,
        }
    }
}
