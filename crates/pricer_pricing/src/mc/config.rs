//! Monte Carlo simulation configuration.
//!
//! This module provides the validated configuration for the path simulator
//! and its builder.

use super::error::ConfigError;
use crate::rng::ENTROPY_SEED;

/// Maximum number of histogram bins allowed.
pub const MAX_BINS: usize = 100_000;

/// Maximum number of cells, `n_paths * (n_steps + 1)`, in the path matrix.
///
/// This is the only bound on the simulation dimensions: any shape that fits,
/// however long or wide, is accepted. 100M cells is 800 MB of `f64`.
pub const MAX_MATRIX_CELLS: usize = 100_000_000;

/// Histogram bin count used when none is specified.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation dimensions.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.histogram_bins(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Number of histogram bins over the final prices.
    histogram_bins: usize,
    /// Requested seed; `ENTROPY_SEED` asks for a fresh one per run.
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of histogram bins.
    #[inline]
    pub fn histogram_bins(&self) -> usize {
        self.histogram_bins
    }

    /// Returns the requested seed (before entropy resolution).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns `true` if each run draws a fresh seed.
    #[inline]
    pub fn is_entropy_seeded(&self) -> bool {
        self.seed == ENTROPY_SEED
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0
    /// - `n_steps` is 0
    /// - `histogram_bins` is 0 or greater than [`MAX_BINS`]
    /// - the path matrix would exceed [`MAX_MATRIX_CELLS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if self.histogram_bins == 0 || self.histogram_bins > MAX_BINS {
            return Err(ConfigError::InvalidBinCount(self.histogram_bins));
        }
        let cells = self
            .n_steps
            .checked_add(1)
            .and_then(|rows| rows.checked_mul(self.n_paths));
        if !matches!(cells, Some(c) if c <= MAX_MATRIX_CELLS) {
            return Err(ConfigError::MatrixTooLarge {
                n_paths: self.n_paths,
                n_steps: self.n_steps,
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// `n_paths` and `n_steps` are required. `histogram_bins` defaults to
/// [`DEFAULT_HISTOGRAM_BINS`] and `seed` to [`ENTROPY_SEED`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)  // Daily steps for 1 year
///     .histogram_bins(100)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// assert!(!config.is_entropy_seeded());
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    histogram_bins: usize,
    seed: u64,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            n_steps: None,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            seed: ENTROPY_SEED,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of histogram bins.
    #[inline]
    pub fn histogram_bins(mut self, histogram_bins: usize) -> Self {
        self.histogram_bins = histogram_bins;
        self
    }

    /// Sets the seed. `0` requests a fresh seed on every run.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required dimension is missing or any
    /// value fails [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            n_steps,
            histogram_bins: self.histogram_bins,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
