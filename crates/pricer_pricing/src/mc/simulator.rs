//! Monte Carlo path simulator orchestration.
//!
//! [`PathSimulator`] owns a validated configuration and a reusable
//! [`PathMatrix`]; each [`run`](PathSimulator::run) resolves its seed,
//! generates paths and aggregates them. [`simulate`] is the flat,
//! single-call entry point.

use pricer_core::types::PricingError;
use pricer_models::models::GbmParams;
use tracing::debug;

use super::aggregate::aggregate;
use super::config::SimulationConfig;
use super::paths::generate_gbm_paths;
use super::result::SimulationResult;
use super::workspace::PathMatrix;
use crate::rng::{resolve_seed, PricerRng};

/// Monte Carlo GBM path simulator.
///
/// The path matrix is allocated on the first run and reused afterwards.
/// Runs share no random state: every call to [`run`](Self::run) builds its
/// own generator from the (resolved) seed.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::{PathSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(2_000)
///     .n_steps(52)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut simulator = PathSimulator::new(config);
/// let first = simulator.run(GbmParams::new(100.0, 0.05, 0.25, 1.0 / 52.0)).unwrap();
/// let second = simulator.run(GbmParams::new(100.0, 0.05, 0.25, 1.0 / 52.0)).unwrap();
///
/// assert_eq!(first, second);
/// ```
#[derive(Debug)]
pub struct PathSimulator {
    config: SimulationConfig,
    matrix: PathMatrix,
}

impl PathSimulator {
    /// Creates a simulator for a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            matrix: PathMatrix::default(),
        }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one simulation.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidArgument` if `params` fail
    ///   [`GbmParams::validate`]
    /// - `PricingError::NumericalInstability` if prices overflow
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(
            n_paths = self.config.n_paths(),
            n_steps = self.config.n_steps(),
        )
    )]
    pub fn run(&mut self, params: GbmParams) -> Result<SimulationResult, PricingError> {
        params.validate()?;

        let seed = resolve_seed(self.config.seed());
        debug!(
            seed,
            entropy = self.config.is_entropy_seeded(),
            "resolved simulation seed"
        );
        let mut rng = PricerRng::from_seed(seed);

        self.matrix
            .resize(self.config.n_paths(), self.config.n_steps());
        generate_gbm_paths(&mut self.matrix, &params, &mut rng);

        let result = aggregate(
            &mut self.matrix,
            params.s0,
            self.config.histogram_bins(),
            seed,
        )?;

        debug!(
            final_mean = result.final_price_mean,
            final_std = result.final_price_std,
            "simulation complete"
        );
        Ok(result)
    }
}

/// Simulates GBM paths and returns their aggregated statistics.
///
/// # Arguments
///
/// * `s0` - Initial price (must be positive)
/// * `mu` - Annualised drift
/// * `sigma` - Annualised volatility (zero gives deterministic paths)
/// * `num_simulations` - Number of paths
/// * `num_steps` - Steps per path
/// * `dt` - Step length in years
/// * `histogram_bins` - Bins over the final prices (conventionally 50)
/// * `seed` - `0` for a fresh entropy seed, anything else reproduces exactly
///
/// # Errors
///
/// `PricingError::InvalidArgument` for zero counts, non-positive `s0` or
/// non-finite scalars; raised before any allocation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::simulate;
///
/// let a = simulate(100.0, 0.08, 0.2, 500, 20, 1.0 / 252.0, 50, 7).unwrap();
/// let b = simulate(100.0, 0.08, 0.2, 500, 20, 1.0 / 252.0, 50, 7).unwrap();
/// assert_eq!(a.final_price_mean.to_bits(), b.final_price_mean.to_bits());
///
/// assert!(simulate(100.0, 0.08, 0.2, 0, 20, 1.0 / 252.0, 50, 7).is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn simulate(
    s0: f64,
    mu: f64,
    sigma: f64,
    num_simulations: usize,
    num_steps: usize,
    dt: f64,
    histogram_bins: usize,
    seed: u64,
) -> Result<SimulationResult, PricingError> {
    let config = SimulationConfig::builder()
        .n_paths(num_simulations)
        .n_steps(num_steps)
        .histogram_bins(histogram_bins)
        .seed(seed)
        .build()?;

    let params = GbmParams::new(s0, mu, sigma, dt);
    params.validate()?;

    PathSimulator::new(config).run(params)
}
