//! Descriptive statistics over simulated samples.
//!
//! Quantiles use the **nearest-rank** convention: the value at sorted index
//! `clamp(floor(p * N), 0, N - 1)`. No interpolation between neighbouring
//! ranks is performed, so every quantile is an observed sample value.

/// Sorts a sample in ascending order.
///
/// Uses IEEE 754 total ordering so the result is deterministic even if the
/// sample contains NaN (which sorts last).
#[inline]
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_unstable_by(f64::total_cmp);
}

/// Index of the nearest-rank quantile `probability` in a sorted sample of
/// length `len`.
///
/// # Panics
///
/// Debug builds panic if `len == 0`.
///
/// # Examples
///
/// ```
/// use pricer_core::math::nearest_rank_index;
///
/// assert_eq!(nearest_rank_index(0.05, 10_000), 500);
/// assert_eq!(nearest_rank_index(0.95, 10), 9);
/// assert_eq!(nearest_rank_index(0.01, 50), 0);
/// // Clamped to the last element
/// assert_eq!(nearest_rank_index(1.0, 10), 9);
/// ```
#[inline]
pub fn nearest_rank_index(probability: f64, len: usize) -> usize {
    debug_assert!(len > 0, "nearest-rank index of an empty sample");
    let rank = (probability * len as f64).floor();
    if rank > 0.0 {
        (rank as usize).min(len.saturating_sub(1))
    } else {
        0
    }
}

/// Nearest-rank quantile of an ascending-sorted sample.
///
/// Returns `None` for an empty sample.
#[inline]
pub fn nearest_rank(sorted: &[f64], probability: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    Some(sorted[nearest_rank_index(probability, sorted.len())])
}

/// Arithmetic mean. Returns `None` for an empty sample.
#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divisor `N`) around a precomputed mean.
///
/// Returns `0.0` for an empty sample.
#[inline]
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Summary of a one-dimensional distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
}

impl DistributionSummary {
    /// Summarises an ascending-sorted sample.
    ///
    /// `min` and `max` are read from the ends of the slice, so the input
    /// must already be sorted. Returns `None` for an empty sample.
    ///
    /// The mean always lies in `[min, max]`, and a constant sample has a
    /// mean equal to that constant and a standard deviation of exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::math::DistributionSummary;
    ///
    /// let summary = DistributionSummary::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 4.0);
    /// assert_eq!(summary.mean, 2.5);
    /// assert!((summary.std - 1.25_f64.sqrt()).abs() < 1e-15);
    /// ```
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let sum_mean = mean(sorted)?;
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        if min == max {
            return Some(Self {
                mean: min,
                std: 0.0,
                min,
                max,
            });
        }

        // Summation rounding can land a hair outside the observed range
        let mean = sum_mean.max(min).min(max);
        Some(Self {
            mean,
            std: population_std(sorted, mean),
            min,
            max,
        })
    }

    /// Width of the observed range.
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
