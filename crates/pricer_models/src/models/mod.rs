//! Stochastic models for asset price evolution.

pub mod gbm;

pub use gbm::{GbmParams, GbmStep};
