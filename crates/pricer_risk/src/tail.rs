//! Tail-risk metrics over a simulated final-price distribution.
//!
//! Value-at-Risk is the loss from the initial price to a low quantile of the
//! final price; Conditional VaR (expected shortfall) is the loss to the mean
//! of every final price at or below that quantile. Losses are positive;
//! a negative value means even the tail ends above `s0`.

use pricer_core::math::mean;
use pricer_pricing::SimulationResult;

/// VaR and CVaR at 95% and 99% confidence.
///
/// # Invariants
///
/// `cvar_95 >= var_95` and `cvar_99 >= var_99`: the tail mean can never
/// exceed its own cutoff.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TailRiskMetrics {
    /// `s0 - p05` of the final price.
    pub var_95: f64,
    /// `s0 - p01` of the final price.
    pub var_99: f64,
    /// `s0 - mean(prices <= p05)`.
    pub cvar_95: f64,
    /// `s0 - mean(prices <= p01)`.
    pub cvar_99: f64,
}

impl TailRiskMetrics {
    /// Computes tail risk from a simulation result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_pricing::simulate;
    /// use pricer_risk::tail::TailRiskMetrics;
    ///
    /// let result = simulate(100.0, 0.08, 0.3, 2_000, 63, 1.0 / 252.0, 50, 42).unwrap();
    /// let tail = TailRiskMetrics::from_result(100.0, &result);
    ///
    /// assert!(tail.var_99 >= tail.var_95);
    /// assert!(tail.cvar_95 >= tail.var_95);
    /// ```
    pub fn from_result(s0: f64, result: &SimulationResult) -> Self {
        Self::from_thresholds(
            s0,
            &result.final_prices,
            result.final_percentile_05,
            result.final_percentile_01,
        )
    }

    /// Computes tail risk from final prices and the two quantile cutoffs.
    ///
    /// `final_prices` need not be sorted.
    pub fn from_thresholds(s0: f64, final_prices: &[f64], cutoff_95: f64, cutoff_99: f64) -> Self {
        Self {
            var_95: s0 - cutoff_95,
            var_99: s0 - cutoff_99,
            cvar_95: s0 - tail_mean(final_prices, cutoff_95),
            cvar_99: s0 - tail_mean(final_prices, cutoff_99),
        }
    }
}

/// Mean of the prices at or below `cutoff`; the cutoff itself if none are.
///
/// Capped at `cutoff` so summation rounding cannot push it above.
fn tail_mean(prices: &[f64], cutoff: f64) -> f64 {
    let tail: Vec<f64> = prices.iter().copied().filter(|&p| p <= cutoff).collect();
    mean(&tail).map_or(cutoff, |m| m.min(cutoff))
}
