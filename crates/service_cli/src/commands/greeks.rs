//! Greeks command implementation
//!
//! Prices one European option and prints its Black-Scholes Greeks.

use pricer_models::analytical::black_scholes::price;
use pricer_models::analytical::{greeks, GreeksResult};
use serde::Serialize;
use tracing::info;

use super::OutputFormat;
use crate::config::CliConfig;
use crate::Result;

/// One contract to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contract {
    pub strike: f64,
    pub time_to_expiry: f64,
    pub spot: f64,
    pub volatility: f64,
    pub is_call: bool,
}

/// Price and Greeks of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    pub price: f64,
    #[serde(flatten)]
    pub greeks: GreeksResult,
}

/// Evaluates `contract` at the configured risk-free rate.
pub fn evaluate(config: &CliConfig, contract: &Contract) -> Result<Valuation> {
    let Contract {
        strike,
        time_to_expiry,
        spot,
        volatility,
        is_call,
    } = *contract;
    let rate = config.risk_free_rate;

    Ok(Valuation {
        price: price(strike, time_to_expiry, spot, rate, volatility, is_call)?,
        greeks: greeks(strike, time_to_expiry, spot, rate, volatility, is_call)?,
    })
}

/// Run the greeks command
pub fn run(config: &CliConfig, contract: &Contract, format: OutputFormat) -> Result<()> {
    info!(?contract, rate = config.risk_free_rate, "Evaluating contract");
    let valuation = evaluate(config, contract)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&valuation)?),
        OutputFormat::Table => {
            let kind = if contract.is_call { "Call" } else { "Put" };
            println!("{} K={} T={} S={}", kind, contract.strike, contract.time_to_expiry, contract.spot);
            println!("  price  {:>12.6}", valuation.price);
            println!("  delta  {:>12.6}", valuation.greeks.delta);
            println!("  gamma  {:>12.6}", valuation.greeks.gamma);
            println!("  vega   {:>12.6}", valuation.greeks.vega);
            println!("  theta  {:>12.6}", valuation.greeks.theta);
            println!("  rho    {:>12.6}", valuation.greeks.rho);
        }
    }
    Ok(())
}
