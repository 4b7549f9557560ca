//! Numerical utilities for aggregating simulated distributions.
//!
//! - [`statistics`]: sorting, nearest-rank quantiles, mean and population
//!   standard deviation
//! - [`histogram`]: equal-width histograms with a margin around the sample
//!   range

pub mod histogram;
pub mod statistics;

pub use histogram::Histogram;
pub use statistics::{
    mean, nearest_rank, nearest_rank_index, population_std, sort_ascending, DistributionSummary,
};
