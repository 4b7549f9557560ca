//! Greeks across an option chain.
//!
//! [`ChainGreeksCalculator`] evaluates Black-Scholes prices and Greeks for
//! every quote of a chain against one spot and rate. Quotes are independent,
//! so large chains are split into batches and run on the Rayon pool.
//!
//! A quote that cannot be evaluated (NaN strike or volatility, say) does not
//! abort the chain: its row carries zeroed Greeks plus the error message, and
//! it is counted in [`ChainStats::failed`].
//!
//! An optional [`QuoteFilter`] drops stale or implausible quotes (expired,
//! or with an implied volatility outside a plausible band) before any
//! evaluation. Dropped quotes produce no row and are counted in
//! [`ChainStats::filtered`].

use crate::parallel::{process_in_batches, ParallelConfig};
use chrono::NaiveDate;
use pricer_core::types::{ensure_finite, ensure_positive, PricingError};
use pricer_models::analytical::black_scholes::{price, DAYS_PER_YEAR};
use pricer_models::analytical::{greeks, GreeksResult};
use std::time::Instant;
use tracing::{debug, warn};

/// Risk-free rate applied when none is configured.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.045;

/// Floor on time to expiry, in years.
pub const DEFAULT_MIN_TIME_TO_EXPIRY: f64 = 0.001;

/// Lower implied-volatility bound (exclusive) of the default quote filter.
pub const DEFAULT_MIN_IMPLIED_VOLATILITY: f64 = 0.01;

/// Upper implied-volatility bound (exclusive) of the default quote filter.
pub const DEFAULT_MAX_IMPLIED_VOLATILITY: f64 = 3.0;

/// Error types for chain evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// No quotes supplied.
    #[error("Empty chain: no quotes to process")]
    EmptyChain,

    /// Spot, rate or expiry floor outside its domain.
    #[error("Invalid market input: {0}")]
    InvalidMarket(#[from] PricingError),
}

/// One quote of an option chain.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Strike price.
    pub strike: f64,
    /// Calendar days until expiry.
    pub days_to_expiry: f64,
    /// Annualised implied volatility.
    pub implied_volatility: f64,
}

impl OptionQuote {
    /// Creates a quote.
    #[inline]
    pub fn new(strike: f64, days_to_expiry: f64, implied_volatility: f64) -> Self {
        Self {
            strike,
            days_to_expiry,
            implied_volatility,
        }
    }

    /// Creates a quote from an expiry date seen from `as_of`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use pricer_risk::chain::OptionQuote;
    ///
    /// let as_of = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// let expiry = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let quote = OptionQuote::from_expiry(150.0, expiry, as_of, 0.25);
    /// assert_eq!(quote.days_to_expiry, 73.0);
    /// ```
    pub fn from_expiry(
        strike: f64,
        expiry: NaiveDate,
        as_of: NaiveDate,
        implied_volatility: f64,
    ) -> Self {
        let days = expiry.signed_duration_since(as_of).num_days();
        Self::new(strike, days as f64, implied_volatility)
    }

    /// Year fraction on an actual/365 basis, floored at `min_time_to_expiry`.
    #[inline]
    pub fn time_to_expiry(&self, min_time_to_expiry: f64) -> f64 {
        (self.days_to_expiry / DAYS_PER_YEAR).max(min_time_to_expiry)
    }
}

/// Pre-evaluation filter on chain quotes.
///
/// A quote is kept when its `days_to_expiry` is positive and its implied
/// volatility lies strictly inside `(min_implied_volatility,
/// max_implied_volatility)`. A NaN volatility or expiry is dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteFilter {
    /// Exclusive lower volatility bound.
    pub min_implied_volatility: f64,
    /// Exclusive upper volatility bound.
    pub max_implied_volatility: f64,
}

impl Default for QuoteFilter {
    fn default() -> Self {
        Self {
            min_implied_volatility: DEFAULT_MIN_IMPLIED_VOLATILITY,
            max_implied_volatility: DEFAULT_MAX_IMPLIED_VOLATILITY,
        }
    }
}

impl QuoteFilter {
    /// Creates a filter with explicit volatility bounds.
    pub fn new(min_implied_volatility: f64, max_implied_volatility: f64) -> Self {
        Self {
            min_implied_volatility,
            max_implied_volatility,
        }
    }

    /// `true` if `quote` should be evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_risk::chain::{OptionQuote, QuoteFilter};
    ///
    /// let filter = QuoteFilter::default();
    /// assert!(filter.accepts(&OptionQuote::new(100.0, 30.0, 0.2)));
    /// assert!(!filter.accepts(&OptionQuote::new(100.0, 0.0, 0.2)));
    /// assert!(!filter.accepts(&OptionQuote::new(100.0, 30.0, 3.0)));
    /// ```
    #[inline]
    pub fn accepts(&self, quote: &OptionQuote) -> bool {
        let vol = quote.implied_volatility;
        quote.days_to_expiry > 0.0
            && vol > self.min_implied_volatility
            && vol < self.max_implied_volatility
    }

    fn validate(&self) -> Result<(), PricingError> {
        ensure_finite("min_implied_volatility", self.min_implied_volatility)?;
        ensure_finite("max_implied_volatility", self.max_implied_volatility)?;
        if self.min_implied_volatility >= self.max_implied_volatility {
            return Err(PricingError::invalid_argument(
                "max_implied_volatility",
                format!(
                    "must exceed min_implied_volatility {}, got {}",
                    self.min_implied_volatility, self.max_implied_volatility
                ),
            ));
        }
        Ok(())
    }
}

/// Evaluated quote.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainRow {
    /// The input quote.
    pub quote: OptionQuote,
    /// Year fraction used for pricing.
    pub time_to_expiry: f64,
    /// Theoretical price, zero on failure.
    pub price: f64,
    /// Greeks, zeroed on failure.
    pub greeks: GreeksResult,
    /// Failure message, if the quote could not be evaluated.
    pub error: Option<String>,
}

impl ChainRow {
    /// `true` when the quote was evaluated.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Statistics for one chain evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainStats {
    /// Number of quotes evaluated, excluding filtered ones.
    pub quotes_processed: usize,
    /// Number of quotes dropped by the [`QuoteFilter`].
    pub filtered: usize,
    /// Number of successful evaluations.
    pub successful: usize,
    /// Number of failed evaluations.
    pub failed: usize,
    /// Wall-clock time in nanoseconds.
    pub total_time_ns: u64,
    /// Number of batches processed.
    pub batches_processed: usize,
    /// Whether the Rayon pool was used.
    pub used_parallel: bool,
}

impl ChainStats {
    /// Returns total computation time in milliseconds.
    #[inline]
    pub fn total_time_ms(&self) -> f64 {
        self.total_time_ns as f64 / 1_000_000.0
    }

    /// Returns the success rate as a percentage.
    #[inline]
    pub fn success_rate(&self) -> f64 {
        if self.quotes_processed == 0 {
            0.0
        } else {
            (self.successful as f64 / self.quotes_processed as f64) * 100.0
        }
    }
}

/// Configuration for chain evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainConfig {
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Floor on time to expiry, in years.
    pub min_time_to_expiry: f64,
    /// Evaluate calls (`true`) or puts.
    pub is_call: bool,
    /// Batching.
    pub parallel: ParallelConfig,
    /// Quote filter, `None` to evaluate every quote.
    pub filter: Option<QuoteFilter>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            min_time_to_expiry: DEFAULT_MIN_TIME_TO_EXPIRY,
            is_call: true,
            parallel: ParallelConfig::default(),
            filter: None,
        }
    }
}

impl ChainConfig {
    /// Creates a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the risk-free rate.
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the expiry floor.
    pub fn with_min_time_to_expiry(mut self, min_time_to_expiry: f64) -> Self {
        self.min_time_to_expiry = min_time_to_expiry;
        self
    }

    /// Evaluates puts instead of calls.
    pub fn with_puts(mut self) -> Self {
        self.is_call = false;
        self
    }

    /// Sets the batching configuration.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Drops quotes rejected by `filter` before evaluation.
    pub fn with_quote_filter(mut self, filter: QuoteFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    fn validate(&self) -> Result<(), PricingError> {
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_positive("min_time_to_expiry", self.min_time_to_expiry)?;
        if let Some(filter) = &self.filter {
            filter.validate()?;
        }
        Ok(())
    }
}

/// Result of a chain evaluation.
#[derive(Debug, Clone)]
pub struct ChainResult {
    /// One row per evaluated quote, in input order.
    pub rows: Vec<ChainRow>,
    /// Computation statistics.
    pub stats: ChainStats,
}

/// Chain Greeks calculator.
///
/// # Examples
///
/// ```
/// use pricer_risk::chain::{ChainGreeksCalculator, OptionQuote};
///
/// let quotes = [
///     OptionQuote::new(95.0, 30.0, 0.22),
///     OptionQuote::new(100.0, 30.0, 0.20),
///     OptionQuote::new(105.0, 30.0, f64::NAN),
/// ];
/// let result = ChainGreeksCalculator::default().compute(100.0, &quotes).unwrap();
///
/// assert_eq!(result.rows.len(), 3);
/// assert_eq!(result.stats.failed, 1);
/// assert_eq!(result.rows[2].greeks.delta, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainGreeksCalculator {
    config: ChainConfig,
}

impl ChainGreeksCalculator {
    /// Creates a calculator.
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Evaluates every quote against `spot`.
    ///
    /// # Errors
    ///
    /// - [`ChainError::EmptyChain`] if `quotes` is empty
    /// - [`ChainError::InvalidMarket`] if `spot` is not positive and finite,
    ///   or the configured rate, expiry floor or filter bounds are invalid
    ///
    /// A chain whose quotes are all filtered out is not an error: the result
    /// has no rows.
    pub fn compute(&self, spot: f64, quotes: &[OptionQuote]) -> Result<ChainResult, ChainError> {
        if quotes.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        ensure_positive("spot", spot)?;
        self.config.validate()?;
        let total = quotes.len();

        let start = Instant::now();
        let kept: Vec<OptionQuote>;
        let quotes = match &self.config.filter {
            Some(filter) => {
                kept = quotes.iter().filter(|q| filter.accepts(q)).copied().collect();
                &kept[..]
            }
            None => quotes,
        };
        let filtered = total - quotes.len();

        let parallel = self.config.parallel;
        let batches = process_in_batches(quotes, &parallel, |batch| {
            batch
                .iter()
                .map(|quote| self.evaluate(spot, quote))
                .collect::<Vec<_>>()
        });

        let batches_processed = batches.len();
        let rows: Vec<ChainRow> = batches.into_iter().flatten().collect();
        let failed = rows.iter().filter(|row| !row.is_ok()).count();

        let stats = ChainStats {
            quotes_processed: rows.len(),
            filtered,
            successful: rows.len() - failed,
            failed,
            total_time_ns: u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX),
            batches_processed,
            used_parallel: parallel.should_parallelize(quotes.len()),
        };
        debug!(
            quotes = stats.quotes_processed,
            filtered = stats.filtered,
            failed = stats.failed,
            parallel = stats.used_parallel,
            elapsed_ms = stats.total_time_ms(),
            "chain greeks complete"
        );

        Ok(ChainResult { rows, stats })
    }

    fn evaluate(&self, spot: f64, quote: &OptionQuote) -> ChainRow {
        let ChainConfig {
            risk_free_rate,
            min_time_to_expiry,
            is_call,
            ..
        } = self.config;
        let time_to_expiry = quote.time_to_expiry(min_time_to_expiry);
        let vol = quote.implied_volatility;

        let evaluated = price(quote.strike, time_to_expiry, spot, risk_free_rate, vol, is_call)
            .and_then(|p| {
                greeks(quote.strike, time_to_expiry, spot, risk_free_rate, vol, is_call)
                    .map(|g| (p, g))
            });

        match evaluated {
            Ok((price, greeks)) => ChainRow {
                quote: *quote,
                time_to_expiry,
                price,
                greeks,
                error: None,
            },
            Err(err) => {
                warn!(strike = quote.strike, error = %err, "quote skipped");
                ChainRow {
                    quote: *quote,
                    time_to_expiry,
                    price: 0.0,
                    greeks: GreeksResult::default(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
