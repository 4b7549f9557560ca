//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - mu = drift (annualised expected return)
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! For numerical stability, we use the exact solution:
//! ```text
//! S(t+dt) = S(t) * exp((mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```

use pricer_core::types::{ensure_finite, ensure_positive, PricingError};

/// GBM model parameters for a fixed time step.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.08, 0.2, 1.0 / 252.0);
/// assert!(params.validate().is_ok());
///
/// let step = params.step();
/// assert!(!step.is_deterministic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub s0: f64,
    /// Drift (μ) - annualised.
    pub mu: f64,
    /// Volatility (σ) - annualised.
    pub sigma: f64,
    /// Time increment per step, in years.
    pub dt: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(s0: f64, mu: f64, sigma: f64, dt: f64) -> Self {
        Self { s0, mu, sigma, dt }
    }

    /// Validates the parameters.
    ///
    /// `s0` must be positive; `mu`, `sigma` and `dt` must be finite. Zero or
    /// negative `sigma`/`dt` are accepted and handled by [`GbmStep`].
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidArgument` naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("s0", self.s0)?;
        ensure_finite("mu", self.mu)?;
        ensure_finite("sigma", self.sigma)?;
        ensure_finite("dt", self.dt)?;
        Ok(())
    }

    /// Precomputes the per-step drift and diffusion coefficients.
    #[inline]
    pub fn step(&self) -> GbmStep {
        GbmStep::new(self.mu, self.sigma, self.dt)
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            s0: 100.0,
            mu: 0.08,
            sigma: 0.2,
            dt: 1.0 / 252.0,
        }
    }
}

/// Per-step coefficients of the log-space GBM update.
///
/// `drift = (mu - 0.5*sigma^2)*dt` and `diffusion = sigma*sqrt(dt)`.
/// When `sigma == 0` or `dt <= 0` the diffusion is exactly zero and the
/// step is deterministic; callers should then skip drawing a normal variate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    drift: f64,
    diffusion: f64,
}

impl GbmStep {
    /// Computes the step coefficients.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_models::models::GbmStep;
    ///
    /// let step = GbmStep::new(0.05, 0.0, 1.0);
    /// assert!(step.is_deterministic());
    /// assert!((step.deterministic_growth() - 0.05_f64.exp()).abs() < 1e-15);
    ///
    /// // sqrt(dt) is undefined for negative dt; the step stays finite
    /// let backwards = GbmStep::new(0.05, 0.2, -1.0);
    /// assert!(backwards.is_deterministic());
    /// assert!(backwards.drift().is_finite());
    /// ```
    #[inline]
    pub fn new(mu: f64, sigma: f64, dt: f64) -> Self {
        let drift = (mu - 0.5 * sigma * sigma) * dt;
        let diffusion = if sigma == 0.0 || dt <= 0.0 {
            0.0
        } else {
            sigma * dt.sqrt()
        };
        Self { drift, diffusion }
    }

    /// Log-drift per step.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Log-diffusion scale per step.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// `true` when the random term vanishes.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.diffusion == 0.0
    }

    /// Multiplicative growth factor for a standard normal draw `z`.
    #[inline]
    pub fn growth(&self, z: f64) -> f64 {
        (self.drift + self.diffusion * z).exp()
    }

    /// Multiplicative growth factor when the diffusion is zero.
    #[inline]
    pub fn deterministic_growth(&self) -> f64 {
        self.drift.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_coefficients() {
        let step = GbmStep::new(0.08, 0.2, 1.0 / 252.0);
        assert_relative_eq!(step.drift(), (0.08 - 0.02) / 252.0, epsilon = 1e-15);
        assert_relative_eq!(step.diffusion(), 0.2 / 252.0_f64.sqrt(), epsilon = 1e-15);
        assert!(!step.is_deterministic());
    }

    #[test]
    fn test_growth_matches_exact_solution() {
        let step = GbmStep::new(0.05, 0.3, 0.5);
        let z = -1.25;
        let expected = ((0.05 - 0.5 * 0.09) * 0.5 + 0.3 * 0.5_f64.sqrt() * z).exp();
        assert_relative_eq!(step.growth(z), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_sigma_is_deterministic() {
        let step = GbmStep::new(0.1, 0.0, 1.0 / 252.0);
        assert!(step.is_deterministic());
        assert_eq!(step.diffusion(), 0.0);
        assert_eq!(step.growth(3.0), step.deterministic_growth());
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let step = GbmStep::new(0.1, 0.2, 0.0);
        assert!(step.is_deterministic());
        assert_eq!(step.deterministic_growth(), 1.0);
    }

    #[test]
    fn test_negative_sigma_keeps_diffusion() {
        // Symmetric in distribution; only the sign of the shock flips
        let pos = GbmStep::new(0.05, 0.2, 1.0);
        let neg = GbmStep::new(0.05, -0.2, 1.0);
        assert_eq!(pos.drift(), neg.drift());
        assert_eq!(pos.diffusion(), -neg.diffusion());
    }

    #[test]
    fn test_params_validate() {
        assert!(GbmParams::default().validate().is_ok());
        assert!(GbmParams::new(100.0, 0.05, 0.0, 0.0).validate().is_ok());

        let err = GbmParams::new(0.0, 0.05, 0.2, 0.01).validate().unwrap_err();
        assert!(err.to_string().contains("s0"));

        let err = GbmParams::new(100.0, f64::NAN, 0.2, 0.01)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("mu"));

        let err = GbmParams::new(100.0, 0.05, f64::INFINITY, 0.01)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("sigma"));

        let err = GbmParams::new(100.0, 0.05, 0.2, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("dt"));
    }

    #[test]
    fn test_params_step_delegates() {
        let params = GbmParams::new(100.0, 0.08, 0.2, 0.25);
        assert_eq!(params.step(), GbmStep::new(0.08, 0.2, 0.25));
    }
}
