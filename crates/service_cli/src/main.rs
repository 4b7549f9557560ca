//! mcrisk - Monte Carlo price paths and option Greeks from the command line

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use service_cli::commands::{self, greeks::Contract, OutputFormat};
use service_cli::{build_config, CliArgs, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// mcrisk - GBM Monte Carlo and Black-Scholes Greeks
#[derive(Parser, Debug)]
#[command(name = "mcrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "MCRISK_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, global = true)]
    num_simulations: Option<usize>,

    /// Steps per path
    #[arg(long, global = true)]
    num_steps: Option<usize>,

    /// Step length in years
    #[arg(long, global = true, allow_hyphen_values = true)]
    dt: Option<f64>,

    /// Final-price histogram bins
    #[arg(long, global = true)]
    bins: Option<usize>,

    /// RNG seed (0 draws a fresh one)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Risk-free rate for Greeks (may be negative)
    #[arg(long, global = true, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Floor on time to expiry, in years
    #[arg(long, global = true)]
    min_expiry: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate GBM price paths and report distribution and tail risk
    Simulate {
        /// Initial price
        #[arg(long, default_value_t = 100.0)]
        s0: f64,

        /// Annualised drift
        #[arg(long, default_value_t = 0.08, allow_hyphen_values = true)]
        mu: f64,

        /// Annualised volatility
        #[arg(long, default_value_t = 0.2)]
        sigma: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Black-Scholes price and Greeks for one European option
    Greeks {
        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Spot price
        #[arg(short, long)]
        spot: f64,

        /// Annualised volatility
        #[arg(short, long)]
        volatility: f64,

        /// Price a put instead of a call
        #[arg(long)]
        put: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Greeks for every quote of an option chain (CSV in, CSV out)
    Chain {
        /// Quote file (CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Spot price
        #[arg(short, long)]
        spot: f64,

        /// Valuation date for `expiry` columns (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Evaluate puts instead of calls
        #[arg(long)]
        put: bool,

        /// Drop expired quotes and implied volatilities outside (0.01, 3.0)
        #[arg(long)]
        filter: bool,

        /// Output file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the engine with a small fixed-seed run
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            num_simulations: cli.num_simulations,
            num_steps: cli.num_steps,
            dt: cli.dt,
            histogram_bins: cli.bins,
            seed: cli.seed,
            risk_free_rate: cli.rate,
            min_time_to_expiry: cli.min_expiry,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Simulate {
            s0,
            mu,
            sigma,
            format,
        } => commands::simulate::run(&config, s0, mu, sigma, format),
        Commands::Greeks {
            strike,
            expiry,
            spot,
            volatility,
            put,
            format,
        } => {
            let contract = Contract {
                strike,
                time_to_expiry: expiry,
                spot,
                volatility,
                is_call: !put,
            };
            commands::greeks::run(&config, &contract, format)
        }
        Commands::Chain {
            input,
            spot,
            as_of,
            put,
            filter,
            output,
        } => {
            config.filter_quotes |= filter;
            commands::chain::run(&config, &input, spot, as_of, !put, output.as_deref())
        }
        Commands::Check => commands::check::run(),
    }
}
