//! Chain command implementation
//!
//! Reads option quotes from CSV, evaluates Greeks for each one and writes
//! the rows back out as CSV.
//!
//! Input columns: `strike`, `implied_volatility`, and either
//! `days_to_expiry` or an ISO `expiry` date (resolved against `--as-of`).

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use pricer_risk::chain::{
    ChainConfig, ChainGreeksCalculator, ChainResult, ChainRow, OptionQuote, QuoteFilter,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// One input row.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    strike: f64,
    #[serde(default)]
    days_to_expiry: Option<f64>,
    #[serde(default)]
    expiry: Option<NaiveDate>,
    implied_volatility: f64,
}

impl QuoteRecord {
    fn into_quote(self, line: usize, as_of: NaiveDate) -> Result<OptionQuote> {
        match (self.days_to_expiry, self.expiry) {
            (Some(days), _) => Ok(OptionQuote::new(self.strike, days, self.implied_volatility)),
            (None, Some(expiry)) => Ok(OptionQuote::from_expiry(
                self.strike,
                expiry,
                as_of,
                self.implied_volatility,
            )),
            (None, None) => Err(CliError::InvalidArgument(format!(
                "row {}: needs days_to_expiry or expiry",
                line
            ))),
        }
    }
}

/// One output row.
#[derive(Debug, Serialize)]
struct GreeksRecord<'a> {
    strike: f64,
    days_to_expiry: f64,
    implied_volatility: f64,
    time_to_expiry: f64,
    price: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    rho: f64,
    error: &'a str,
}

impl<'a> From<&'a ChainRow> for GreeksRecord<'a> {
    fn from(row: &'a ChainRow) -> Self {
        Self {
            strike: row.quote.strike,
            days_to_expiry: row.quote.days_to_expiry,
            implied_volatility: row.quote.implied_volatility,
            time_to_expiry: row.time_to_expiry,
            price: row.price,
            delta: row.greeks.delta,
            gamma: row.greeks.gamma,
            vega: row.greeks.vega,
            theta: row.greeks.theta,
            rho: row.greeks.rho,
            error: row.error.as_deref().unwrap_or(""),
        }
    }
}

/// Parses quotes from CSV with a header row.
pub fn read_quotes<R: io::Read>(reader: R, as_of: NaiveDate) -> Result<Vec<OptionQuote>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<QuoteRecord>()
        .enumerate()
        .map(|(i, record)| record?.into_quote(i + 2, as_of))
        .collect()
}

/// Writes evaluated rows as CSV with a header row.
pub fn write_rows<W: io::Write>(writer: W, rows: &[ChainRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(GreeksRecord::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Evaluates `quotes` with the configured rate and expiry floor.
///
/// With `filter_quotes` set, expired quotes and volatilities outside the
/// default band are dropped and produce no output row.
pub fn evaluate(
    config: &CliConfig,
    spot: f64,
    quotes: &[OptionQuote],
    is_call: bool,
) -> Result<ChainResult> {
    let mut chain_config = ChainConfig::new()
        .with_risk_free_rate(config.risk_free_rate)
        .with_min_time_to_expiry(config.min_time_to_expiry);
    if !is_call {
        chain_config = chain_config.with_puts();
    }
    if config.filter_quotes {
        chain_config = chain_config.with_quote_filter(QuoteFilter::default());
    }

    Ok(ChainGreeksCalculator::new(chain_config).compute(spot, quotes)?)
}

/// Run the chain command
pub fn run(
    config: &CliConfig,
    input: &Path,
    spot: f64,
    as_of: Option<NaiveDate>,
    is_call: bool,
    output: Option<&Path>,
) -> Result<()> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }
    let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());

    let quotes = read_quotes(std::fs::File::open(input)?, as_of)?;
    info!(quotes = quotes.len(), spot, %as_of, "Evaluating chain");

    let result = evaluate(config, spot, &quotes, is_call)?;
    if result.stats.filtered > 0 {
        info!(filtered = result.stats.filtered, "Dropped quotes outside the filter");
    }
    if result.stats.failed > 0 {
        warn!(failed = result.stats.failed, "Some quotes could not be evaluated");
    }
    info!(
        successful = result.stats.successful,
        elapsed_ms = result.stats.total_time_ms(),
        "Chain complete"
    );

    match output {
        Some(path) => write_rows(std::fs::File::create(path)?, &result.rows),
        None => write_rows(io::stdout().lock(), &result.rows),
    }
}
