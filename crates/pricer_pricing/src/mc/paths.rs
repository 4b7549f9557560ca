//! GBM path generation for Monte Carlo simulation.
//!
//! Uses the exact log-space update
//! ```text
//! S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
//! ```
//! with the coefficients precomputed once by
//! [`GbmStep`](pricer_models::models::GbmStep).

use pricer_models::models::GbmParams;

use super::workspace::PathMatrix;
use crate::rng::PricerRng;

/// Fills `matrix` with independent GBM paths.
///
/// Row 0 is set to `s0`. Paths are generated one at a time, each drawing
/// its `n_steps` normals in step order, so the RNG stream is consumed
/// path-by-path regardless of the step-major storage.
///
/// When the diffusion term is zero (`sigma == 0` or `dt <= 0`) no normals
/// are drawn and every path follows the same deterministic drift.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::{generate_gbm_paths, PathMatrix};
/// use pricer_pricing::rng::PricerRng;
///
/// let mut matrix = PathMatrix::new(8, 4);
/// let mut rng = PricerRng::from_seed(1);
/// generate_gbm_paths(&mut matrix, &GbmParams::default(), &mut rng);
///
/// assert!(matrix.step(0).iter().all(|&p| p == 100.0));
/// assert!(matrix.final_step().iter().all(|&p| p > 0.0));
/// ```
pub fn generate_gbm_paths(matrix: &mut PathMatrix, params: &GbmParams, rng: &mut PricerRng) {
    let n_paths = matrix.n_paths();
    let n_steps = matrix.n_steps();
    let step = params.step();

    matrix.step_mut(0).fill(params.s0);

    if step.is_deterministic() {
        let growth = step.deterministic_growth();
        let mut price = params.s0;
        for t in 1..=n_steps {
            price *= growth;
            matrix.step_mut(t).fill(price);
        }
        return;
    }

    for path in 0..n_paths {
        let mut price = params.s0;
        for t in 1..=n_steps {
            price *= step.growth(rng.gen_normal());
            matrix.set(t, path, price);
        }
    }
}
