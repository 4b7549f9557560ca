//! Equal-width histograms of simulated distributions.
//!
//! The binning range is the observed `[min, max]` widened by a margin of
//! [`RANGE_MARGIN`] × (max − min) on each side. When the observed range is
//! degenerate (all observations identical, or too narrow to separate
//! neighbouring bin edges in `f64`), the range falls back to
//! `[mean × 0.9, mean × 1.1]`; if that is degenerate too (mean of zero), a
//! unit-wide window centred on the mean is used. Edges are therefore always
//! finite and strictly increasing for finite input.

use super::statistics::DistributionSummary;
use crate::types::{ensure_non_zero, PricingError};

/// Fraction of the observed range added on each side of the histogram.
pub const RANGE_MARGIN: f64 = 0.05;

/// Relative half-width of the fallback range around the mean.
pub const FALLBACK_SPREAD: f64 = 0.1;

/// Equal-width histogram with `counts.len() + 1` edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Observation count per bin.
    counts: Vec<u64>,
    /// Monotonically increasing bin boundaries.
    edges: Vec<f64>,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width buckets.
    ///
    /// `summary` supplies the observed min/max/mean of `values`; it is taken
    /// as an argument because callers have already computed it from a sorted
    /// buffer. Observations outside the range (which only happens through
    /// rounding at the edges) are clamped into the first or last bin, so the
    /// counts always sum to `values.len()`.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidArgument` if `bins == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::math::{DistributionSummary, Histogram};
    ///
    /// let values = [1.0, 2.0, 2.0, 3.0];
    /// let summary = DistributionSummary::from_sorted(&values).unwrap();
    /// let hist = Histogram::from_values(&values, &summary, 4).unwrap();
    ///
    /// assert_eq!(hist.edges().len(), 5);
    /// assert_eq!(hist.total(), 4);
    /// ```
    pub fn from_values(
        values: &[f64],
        summary: &DistributionSummary,
        bins: usize,
    ) -> Result<Self, PricingError> {
        let bins = ensure_non_zero("histogram_bins", bins)?;
        let (lower, bin_width, edges) = binning_range(summary, bins);

        let mut counts = vec![0_u64; bins];
        for &value in values {
            counts[bin_index(value, lower, bin_width, bins)] += 1;
        }

        Ok(Self { counts, edges })
    }

    /// Observation count per bin.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Bin boundaries (`bins + 1` values).
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of binned observations.
    #[inline]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Consumes the histogram, returning `(counts, edges)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<u64>, Vec<f64>) {
        (self.counts, self.edges)
    }
}

/// Lower bound, bin width and edges for `bins` buckets.
fn binning_range(summary: &DistributionSummary, bins: usize) -> (f64, f64, Vec<f64>) {
    let margin = summary.range() * RANGE_MARGIN;
    let candidates = [
        (summary.min - margin, summary.max + margin),
        ordered(
            summary.mean * (1.0 - FALLBACK_SPREAD),
            summary.mean * (1.0 + FALLBACK_SPREAD),
        ),
        (summary.mean - 0.5, summary.mean + 0.5),
    ];

    for (lower, upper) in candidates {
        let width = (upper - lower) / bins as f64;
        if !(width > 0.0) {
            continue;
        }
        let edges = edges_from(lower, width, bins);
        if strictly_increasing(&edges) {
            return (lower, width, edges);
        }
    }

    // Only reachable for non-finite summaries.
    let width = 1.0 / bins as f64;
    (0.0, width, edges_from(0.0, width, bins))
}

#[inline]
fn edges_from(lower: f64, width: f64, bins: usize) -> Vec<f64> {
    (0..=bins).map(|i| lower + i as f64 * width).collect()
}

/// Finite and strictly increasing, so every bin has positive width in `f64`.
#[inline]
fn strictly_increasing(edges: &[f64]) -> bool {
    edges.iter().all(|e| e.is_finite()) && edges.windows(2).all(|pair| pair[1] > pair[0])
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
fn bin_index(value: f64, lower: f64, width: f64, bins: usize) -> usize {
    let raw = ((value - lower) / width).floor();
    if raw > 0.0 {
        (raw as usize).min(bins - 1)
    } else {
        0
    }
}
