//! # pricer_core: Shared Foundation for the mcrisk Engines
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError` and input validation helpers (`types`)
//! - Nearest-rank quantiles and distribution summaries (`math::statistics`)
//! - Fixed-bin histograms with degenerate-range fallback (`math::histogram`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::statistics::{nearest_rank, sort_ascending};
//!
//! let mut prices = vec![103.0, 98.0, 101.0, 97.0, 110.0];
//! sort_ascending(&mut prices);
//!
//! // floor(0.5 * 5) = 2 -> third smallest value
//! assert_eq!(nearest_rank(&prices, 0.5), Some(101.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`math::histogram::Histogram`] and
//!   [`math::statistics::DistributionSummary`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
