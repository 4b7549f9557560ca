//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, `MCRISK_*` environment
//! variables and command line flags.
//!
//! Priority (highest to lowest):
//! 1. Command line flags
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every environment variable the CLI reads.
pub const ENV_PREFIX: &str = "MCRISK_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Engine and logging settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Monte Carlo paths per run
    pub num_simulations: usize,
    /// Steps per path
    pub num_steps: usize,
    /// Step length in years
    pub dt: f64,
    /// Final-price histogram bins
    pub histogram_bins: usize,
    /// RNG seed, 0 for fresh entropy
    pub seed: u64,
    /// Risk-free rate for Greeks
    pub risk_free_rate: f64,
    /// Floor on option time to expiry, in years
    pub min_time_to_expiry: f64,
    /// Drop expired quotes and implausible volatilities from chains
    pub filter_quotes: bool,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            num_simulations: pricer_risk::summary::DEFAULT_NUM_SIMULATIONS,
            num_steps: pricer_risk::summary::DEFAULT_NUM_STEPS,
            dt: pricer_risk::summary::DEFAULT_DT,
            histogram_bins: pricer_pricing::mc::config::DEFAULT_HISTOGRAM_BINS,
            seed: 0,
            risk_free_rate: pricer_risk::chain::DEFAULT_RISK_FREE_RATE,
            min_time_to_expiry: pricer_risk::chain::DEFAULT_MIN_TIME_TO_EXPIRY,
            filter_quotes: false,
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Overrides fields from `MCRISK_*` variables found through `lookup`.
    ///
    /// `lookup` receives the full variable name, e.g. `MCRISK_NUM_STEPS`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(raw) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&raw)?;
        }
        if let Some(raw) = var("NUM_SIMULATIONS") {
            self.num_simulations = parse_var("num_simulations", &raw)?;
        }
        if let Some(raw) = var("NUM_STEPS") {
            self.num_steps = parse_var("num_steps", &raw)?;
        }
        if let Some(raw) = var("DT") {
            self.dt = parse_var("dt", &raw)?;
        }
        if let Some(raw) = var("HISTOGRAM_BINS") {
            self.histogram_bins = parse_var("histogram_bins", &raw)?;
        }
        if let Some(raw) = var("SEED") {
            self.seed = parse_var("seed", &raw)?;
        }
        if let Some(raw) = var("RISK_FREE_RATE") {
            self.risk_free_rate = parse_var("risk_free_rate", &raw)?;
        }
        if let Some(raw) = var("MIN_TIME_TO_EXPIRY") {
            self.min_time_to_expiry = parse_var("min_time_to_expiry", &raw)?;
        }
        if let Some(raw) = var("FILTER_QUOTES") {
            self.filter_quotes = parse_var("filter_quotes", &raw)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(n) = cli.num_simulations {
            self.num_simulations = n;
        }
        if let Some(n) = cli.num_steps {
            self.num_steps = n;
        }
        if let Some(dt) = cli.dt {
            self.dt = dt;
        }
        if let Some(bins) = cli.histogram_bins {
            self.histogram_bins = bins;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(rate) = cli.risk_free_rate {
            self.risk_free_rate = rate;
        }
        if let Some(floor) = cli.min_time_to_expiry {
            self.min_time_to_expiry = floor;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Only checks that keep a bad file from surfacing later as an engine
    /// error; range limits are enforced by the engines themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "dt",
                value: self.dt.to_string(),
            });
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "risk_free_rate",
                value: self.risk_free_rate.to_string(),
            });
        }
        if !(self.min_time_to_expiry.is_finite() && self.min_time_to_expiry > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "min_time_to_expiry",
                value: self.min_time_to_expiry.to_string(),
            });
        }
        Ok(())
    }
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Path count override
    pub num_simulations: Option<usize>,
    /// Step count override
    pub num_steps: Option<usize>,
    /// Step length override
    pub dt: Option<f64>,
    /// Histogram bin override
    pub histogram_bins: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Rate override
    pub risk_free_rate: Option<f64>,
    /// Expiry floor override
    pub min_time_to_expiry: Option<f64>,
}

/// Build configuration from all sources, reading the process environment
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |name| std::env::var(name).ok())
}

/// Build configuration with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
