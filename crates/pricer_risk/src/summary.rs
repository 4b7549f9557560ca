//! Serialisable simulation report.
//!
//! [`SimulationSummary`] pairs the inputs of a run with its aggregated
//! output and tail-risk figures, in the shape downstream dashboards consume:
//!
//! ```text
//! { parameters: { s0, mu, sigma, num_simulations, num_steps, dt, histogram_bins, seed },
//!   results:    { mean_path, percentile_05, percentile_95,
//!                 histogram: { counts, edges },
//!                 final_price: { mean, std, min, max },
//!                 tail_risk: { var_95, var_99, cvar_95, cvar_99 } } }
//! ```
//!
//! The per-path `final_prices` vector is deliberately not part of the report.

use pricer_core::math::DistributionSummary;
use pricer_core::types::PricingError;
use pricer_pricing::mc::config::DEFAULT_HISTOGRAM_BINS;
use pricer_pricing::{simulate, SimulationResult};

use crate::tail::TailRiskMetrics;

/// Paths per run when not specified.
pub const DEFAULT_NUM_SIMULATIONS: usize = 10_000;

/// Steps per run when not specified (one trading year).
pub const DEFAULT_NUM_STEPS: usize = 252;

/// Step length when not specified (one trading day).
pub const DEFAULT_DT: f64 = 1.0 / 252.0;

/// Inputs of one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Initial price.
    pub s0: f64,
    /// Annualised drift.
    pub mu: f64,
    /// Annualised volatility.
    pub sigma: f64,
    /// Number of paths.
    pub num_simulations: usize,
    /// Steps per path.
    pub num_steps: usize,
    /// Step length in years.
    pub dt: f64,
    /// Final-price histogram bins.
    pub histogram_bins: usize,
    /// Seed; `0` before a run means "fresh entropy", after a run it holds
    /// the seed actually used.
    pub seed: u64,
}

impl SimulationParameters {
    /// Parameters for `(s0, mu, sigma)` with one trading year of daily steps.
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Self {
            s0,
            mu,
            sigma,
            ..Self::default()
        }
    }

    /// Runs the simulation and builds the report.
    ///
    /// # Errors
    ///
    /// Propagates [`simulate`] errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_risk::summary::SimulationParameters;
    ///
    /// let params = SimulationParameters {
    ///     num_simulations: 1_000,
    ///     num_steps: 21,
    ///     seed: 42,
    ///     ..SimulationParameters::new(100.0, 0.08, 0.2)
    /// };
    /// let summary = params.run().unwrap();
    ///
    /// assert_eq!(summary.results.mean_path.len(), 22);
    /// assert_eq!(summary.parameters.seed, 42);
    /// ```
    pub fn run(&self) -> Result<SimulationSummary, PricingError> {
        let result = simulate(
            self.s0,
            self.mu,
            self.sigma,
            self.num_simulations,
            self.num_steps,
            self.dt,
            self.histogram_bins,
            self.seed,
        )?;
        Ok(SimulationSummary::from_result(*self, result))
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            s0: 100.0,
            mu: 0.08,
            sigma: 0.2,
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            num_steps: DEFAULT_NUM_STEPS,
            dt: DEFAULT_DT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            seed: 0,
        }
    }
}

/// Histogram counts and edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramData {
    /// Count per bin.
    pub counts: Vec<u64>,
    /// Bin edges, one more than `counts`.
    pub edges: Vec<f64>,
}

/// Aggregated output of a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResults {
    /// Mean price per step.
    pub mean_path: Vec<f64>,
    /// 5th percentile per step.
    pub percentile_05: Vec<f64>,
    /// 95th percentile per step.
    pub percentile_95: Vec<f64>,
    /// Final-price histogram.
    pub histogram: HistogramData,
    /// Final-price mean, std, min and max.
    pub final_price: DistributionSummary,
    /// VaR / CVaR at 95% and 99%.
    pub tail_risk: TailRiskMetrics,
}

/// Parameters plus results of one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    /// Inputs, with the resolved seed.
    pub parameters: SimulationParameters,
    /// Outputs.
    pub results: SimulationResults,
}

impl SimulationSummary {
    /// Builds the report from a finished run.
    ///
    /// `parameters.seed` is replaced with the seed the run actually used.
    pub fn from_result(mut parameters: SimulationParameters, result: SimulationResult) -> Self {
        parameters.seed = result.seed;
        let tail_risk = TailRiskMetrics::from_result(parameters.s0, &result);
        let final_price = result.final_summary();

        Self {
            parameters,
            results: SimulationResults {
                mean_path: result.mean_path,
                percentile_05: result.percentile_05,
                percentile_95: result.percentile_95,
                histogram: HistogramData {
                    counts: result.histogram_data,
                    edges: result.histogram_edges,
                },
                final_price,
                tail_risk,
            },
        }
    }

    /// Pretty-printed JSON.
    ///
    /// Non-finite floats are written as `null` rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json::Error` from the serializer. The report holds
    /// only numbers, strings and sequences, so this does not happen in
    /// practice.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_run(seed: u64) -> SimulationSummary {
        SimulationParameters {
            num_simulations: 500,
            num_steps: 12,
            dt: 1.0 / 12.0,
            histogram_bins: 20,
            seed,
            ..SimulationParameters::new(50.0, 0.04, 0.3)
        }
        .run()
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let params = SimulationParameters::default();
        assert_eq!(params.num_simulations, 10_000);
        assert_eq!(params.num_steps, 252);
        assert_eq!(params.histogram_bins, 50);
        assert_eq!(params.seed, 0);
        assert_eq!(params.dt, 1.0 / 252.0);
    }

    #[test]
    fn test_summary_mirrors_result() {
        let params = SimulationParameters {
            num_simulations: 500,
            num_steps: 12,
            dt: 1.0 / 12.0,
            histogram_bins: 20,
            seed: 9,
            ..SimulationParameters::new(50.0, 0.04, 0.3)
        };
        let result = simulate(50.0, 0.04, 0.3, 500, 12, 1.0 / 12.0, 20, 9).unwrap();
        let summary = params.run().unwrap();

        assert_eq!(summary.results.mean_path, result.mean_path);
        assert_eq!(summary.results.histogram.counts, result.histogram_data);
        assert_eq!(summary.results.histogram.edges, result.histogram_edges);
        assert_eq!(summary.results.final_price.mean, result.final_price_mean);
        assert_eq!(summary.results.final_price.max, result.final_price_max);
        assert_eq!(
            summary.results.tail_risk,
            TailRiskMetrics::from_result(50.0, &result)
        );
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let summary = small_run(0);
        assert_ne!(summary.parameters.seed, 0);

        let replay = small_run(summary.parameters.seed);
        assert_eq!(summary, replay);
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        let params = SimulationParameters {
            num_simulations: 0,
            ..SimulationParameters::default()
        };
        assert!(params.run().unwrap_err().is_invalid_argument());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let json = small_run(3).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["parameters"]["seed"], 3);
        assert_eq!(value["results"]["histogram"]["counts"].as_array().unwrap().len(), 20);
        assert_eq!(value["results"]["histogram"]["edges"].as_array().unwrap().len(), 21);
        assert!(value["results"]["final_price"]["std"].is_number());
        assert!(value["results"]["tail_risk"]["cvar_99"].is_number());
        assert!(value["results"].get("final_prices").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_writes_non_finite_as_null() {
        let mut summary = small_run(4);
        summary.results.mean_path[1] = f64::NAN;
        summary.results.tail_risk.var_99 = f64::INFINITY;

        let json = summary.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["results"]["mean_path"][1].is_null());
        assert!(value["results"]["tail_risk"]["var_99"].is_null());
        assert!(value["results"]["mean_path"][0].is_number());
    }
}
