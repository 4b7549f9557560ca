//! Simulate command implementation
//!
//! Runs the GBM path simulator and prints the summary report.

use std::fmt::Write as _;

use pricer_risk::summary::{SimulationParameters, SimulationSummary};
use tracing::info;

use super::OutputFormat;
use crate::config::CliConfig;
use crate::Result;

/// Parameters for the configured engine settings and the given dynamics.
pub fn parameters(config: &CliConfig, s0: f64, mu: f64, sigma: f64) -> SimulationParameters {
    SimulationParameters {
        s0,
        mu,
        sigma,
        num_simulations: config.num_simulations,
        num_steps: config.num_steps,
        dt: config.dt,
        histogram_bins: config.histogram_bins,
        seed: config.seed,
    }
}

/// Run the simulate command
pub fn run(config: &CliConfig, s0: f64, mu: f64, sigma: f64, format: OutputFormat) -> Result<()> {
    info!(
        s0,
        mu,
        sigma,
        paths = config.num_simulations,
        steps = config.num_steps,
        "Starting simulation"
    );

    let summary = parameters(config, s0, mu, sigma).run()?;
    info!(seed = summary.parameters.seed, "Simulation complete");

    match format {
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Table => print!("{}", render_table(&summary)),
    }
    Ok(())
}

/// Renders the headline numbers of a summary as a text table.
pub fn render_table(summary: &SimulationSummary) -> String {
    let p = &summary.parameters;
    let r = &summary.results;
    let horizon = p.num_steps as f64 * p.dt;

    let mut out = String::new();
    let rows = [
        ("Initial price", p.s0),
        ("Horizon (years)", horizon),
        ("Final mean", r.final_price.mean),
        ("Final std", r.final_price.std),
        ("Final min", r.final_price.min),
        ("Final max", r.final_price.max),
        ("VaR 95%", r.tail_risk.var_95),
        ("VaR 99%", r.tail_risk.var_99),
        ("CVaR 95%", r.tail_risk.cvar_95),
        ("CVaR 99%", r.tail_risk.cvar_99),
    ];

    let _ = writeln!(
        out,
        "Paths: {}  Steps: {}  Seed: {}",
        p.num_simulations, p.num_steps, p.seed
    );
    let _ = writeln!(out, "┌──────────────────┬──────────────┐");
    let _ = writeln!(out, "│ Metric           │ Value        │");
    let _ = writeln!(out, "├──────────────────┼──────────────┤");
    for (label, value) in rows {
        let _ = writeln!(out, "│ {:<16} │ {:>12.4} │", label, value);
    }
    let _ = writeln!(out, "└──────────────────┴──────────────┘");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> CliConfig {
        CliConfig {
            num_simulations: 200,
            num_steps: 5,
            histogram_bins: 8,
            seed: 42,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_parameters_take_config() {
        let params = parameters(&small_config(), 50.0, 0.1, 0.3);
        assert_eq!(params.num_simulations, 200);
        assert_eq!(params.num_steps, 5);
        assert_eq!(params.seed, 42);
        assert_eq!(params.s0, 50.0);
    }

    #[test]
    fn test_render_table() {
        let summary = parameters(&small_config(), 100.0, 0.08, 0.2).run().unwrap();
        let table = render_table(&summary);

        assert!(table.starts_with("Paths: 200  Steps: 5  Seed: 42"));
        assert!(table.contains("CVaR 99%"));
        assert_eq!(table.lines().count(), 15);
    }

    #[test]
    fn test_run_rejects_bad_price() {
        assert!(run(&small_config(), -1.0, 0.08, 0.2, OutputFormat::Json).is_err());
    }
}
