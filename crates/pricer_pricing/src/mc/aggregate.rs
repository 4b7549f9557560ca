//! Reduction of a path matrix into a [`SimulationResult`].
//!
//! Each step row is averaged and then sorted in place, which makes the
//! nearest-rank percentiles a direct index. The final row additionally
//! yields the distribution summary, the VaR thresholds and the histogram.

use pricer_core::math::{mean, nearest_rank, sort_ascending, DistributionSummary, Histogram};
use pricer_core::types::PricingError;

use super::result::SimulationResult;
use super::workspace::PathMatrix;

/// Lower per-step band.
pub const LOWER_BAND: f64 = 0.05;

/// Upper per-step band.
pub const UPPER_BAND: f64 = 0.95;

/// Final-price quantile for 95% VaR.
pub const VAR_95_QUANTILE: f64 = 0.05;

/// Final-price quantile for 99% VaR.
pub const VAR_99_QUANTILE: f64 = 0.01;

/// Reduces a fully generated path matrix.
///
/// Rows are sorted in place, so path identity across steps is lost once
/// this returns. Row 0 is reported as `s0` directly rather than averaged,
/// which keeps `mean_path[0] == s0` exact.
///
/// # Errors
///
/// - `PricingError::InvalidArgument` if the matrix is empty or
///   `histogram_bins == 0`
/// - `PricingError::NumericalInstability` if any final price is not finite
///   (the drift overflowed `f64`)
pub fn aggregate(
    matrix: &mut PathMatrix,
    s0: f64,
    histogram_bins: usize,
    seed: u64,
) -> Result<SimulationResult, PricingError> {
    if matrix.n_paths() == 0 {
        return Err(PricingError::invalid_argument("n_paths", "must be positive, got 0"));
    }

    let n_rows = matrix.n_rows();
    let mut mean_path = Vec::with_capacity(n_rows);
    let mut percentile_05 = Vec::with_capacity(n_rows);
    let mut percentile_95 = Vec::with_capacity(n_rows);

    for (step, row) in matrix.rows_mut().enumerate() {
        if step == 0 {
            mean_path.push(s0);
            percentile_05.push(s0);
            percentile_95.push(s0);
            continue;
        }
        // Row is non-empty, so every reduction below is Some
        let row_mean = mean(row).unwrap_or(f64::NAN);
        sort_ascending(row);
        mean_path.push(row_mean);
        percentile_05.push(nearest_rank(row, LOWER_BAND).unwrap_or(f64::NAN));
        percentile_95.push(nearest_rank(row, UPPER_BAND).unwrap_or(f64::NAN));
    }

    let final_prices = matrix.final_step().to_vec();
    if let Some(bad) = final_prices.iter().find(|p| !p.is_finite()) {
        return Err(PricingError::NumericalInstability(format!(
            "final price {} is not finite; drift or horizon too large",
            bad
        )));
    }

    let summary = DistributionSummary::from_sorted(&final_prices).ok_or_else(|| {
        PricingError::invalid_argument("n_paths", "must be positive, got 0")
    })?;
    let final_percentile_05 = nearest_rank(&final_prices, VAR_95_QUANTILE).unwrap_or(summary.min);
    let final_percentile_01 = nearest_rank(&final_prices, VAR_99_QUANTILE).unwrap_or(summary.min);
    let (histogram_data, histogram_edges) =
        Histogram::from_values(&final_prices, &summary, histogram_bins)?.into_parts();

    Ok(SimulationResult {
        mean_path,
        percentile_05,
        percentile_95,
        histogram_data,
        histogram_edges,
        final_price_mean: summary.mean,
        final_price_std: summary.std,
        final_price_min: summary.min,
        final_price_max: summary.max,
        final_prices,
        final_percentile_05,
        final_percentile_01,
        seed,
    })
}
