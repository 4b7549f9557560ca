//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that statistics functions are accessible via absolute path.
#[test]
fn test_statistics_module_exports() {
    use pricer_core::math::statistics::mean;
    use pricer_core::math::statistics::nearest_rank;
    use pricer_core::math::statistics::nearest_rank_index;
    use pricer_core::math::statistics::population_std;
    use pricer_core::math::statistics::sort_ascending;

    let mut values = vec![3.0, 1.0, 2.0];
    sort_ascending(&mut values);
    let m = mean(&values).unwrap();
    let _ = population_std(&values, m);
    let _ = nearest_rank(&values, 0.5);
    let _ = nearest_rank_index(0.5, values.len());
}

/// Test that histogram types are accessible via absolute path.
#[test]
fn test_histogram_module_exports() {
    use pricer_core::math::histogram::{Histogram, FALLBACK_SPREAD, RANGE_MARGIN};
    use pricer_core::math::statistics::DistributionSummary;

    let summary = DistributionSummary::from_sorted(&[1.0, 2.0]).unwrap();
    let hist = Histogram::from_values(&[1.0, 2.0], &summary, 2).unwrap();
    assert_eq!(hist.bins(), 2);
    assert!(RANGE_MARGIN > 0.0);
    assert!(FALLBACK_SPREAD > 0.0);
}

/// Test that error types are accessible via both paths.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::PricingError as DeepPath;
    use pricer_core::types::PricingError as ShortPath;

    let err: DeepPath = ShortPath::InvalidArgument("x".to_string());
    assert!(err.is_invalid_argument());
}

/// Test that validation helpers are re-exported.
#[test]
fn test_validation_module_exports() {
    use pricer_core::types::validation::ensure_positive;
    use pricer_core::types::{ensure_finite, ensure_non_zero};

    assert!(ensure_positive("s0", 1.0).is_ok());
    assert!(ensure_finite("mu", 0.0).is_ok());
    assert!(ensure_non_zero("bins", 1).is_ok());
}
