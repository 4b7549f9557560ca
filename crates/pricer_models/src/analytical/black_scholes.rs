//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Quoting conventions
//!
//! Vega and rho are reported per one percentage point move (raw derivative
//! times 0.01); theta is reported per calendar day (raw derivative / 365).

use pricer_core::types::PricingError;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Vega is quoted per 1% volatility move.
pub const VEGA_SCALE: f64 = 0.01;

/// Rho is quoted per 1% rate move.
pub const RHO_SCALE: f64 = 0.01;

/// Theta is quoted per calendar day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// First-order and second-order option sensitivities.
///
/// Each field is computed independently; the record carries no invariants
/// of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per one volatility point.
    pub vega: f64,
    /// ∂V/∂t per calendar day.
    pub theta: f64,
    /// ∂V/∂r per one rate point.
    pub rho: f64,
}

impl GreeksResult {
    /// Greeks of a contract at or past expiry.
    ///
    /// Only delta carries information: a call is fully in the money when
    /// `spot > strike`, a put when `spot < strike`. Every other field is zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::GreeksResult;
    ///
    /// let g = GreeksResult::expired(100.0, 110.0, true);
    /// assert_eq!(g.delta, 1.0);
    /// assert_eq!(g.gamma, 0.0);
    ///
    /// let atm_put = GreeksResult::expired(100.0, 100.0, false);
    /// assert_eq!(atm_put.delta, 0.0);
    /// ```
    pub fn expired(strike: f64, spot: f64, is_call: bool) -> Self {
        let delta = match (is_call, spot > strike, spot < strike) {
            (true, true, _) => 1.0,
            (false, _, true) => -1.0,
            _ => 0.0,
        };
        Self {
            delta,
            ..Self::default()
        }
    }
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, continuously compounded)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any argument is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// assert!(BlackScholes::new(100.0, f64::NAN, 0.2).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        check_finite("spot", spot)?;
        check_finite("rate", rate)?;
        check_finite("volatility", volatility)?;

        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// Requires `strike > 0` and `expiry > 0`; outside that domain the
    /// result is not finite.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// For `expiry <= 0` or `strike <= 0` returns the discounted intrinsic
    /// value `max(S - K·e^(-rT), 0)`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.450583572185565).abs() < 1e-10);
    ///
    /// // At expiry, price = intrinsic value
    /// assert_eq!(bs.price_call(90.0, 0.0), 10.0);
    /// ```
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let discount = (-self.rate * expiry).exp();
        if expiry <= 0.0 || strike <= 0.0 {
            return (self.spot - strike * discount).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// For `expiry <= 0` or `strike <= 0` returns the discounted intrinsic
    /// value `max(K·e^(-rT) - S, 0)`.
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let discount = (-self.rate * expiry).exp();
        if expiry <= 0.0 || strike <= 0.0 {
            return (strike * discount - self.spot).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Computes the option price for either side.
    #[inline]
    pub fn price(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        if is_call {
            self.price_call(strike, expiry)
        } else {
            self.price_put(strike, expiry)
        }
    }

    /// Computes all five Greeks for a single contract.
    ///
    /// Contracts with `expiry <= 0` or `strike <= 0` resolve to
    /// [`GreeksResult::expired`].
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let call = bs.greeks(100.0, 1.0, true);
    /// let put = bs.greeks(100.0, 1.0, false);
    ///
    /// assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
    /// assert_eq!(call.gamma, put.gamma);
    /// ```
    pub fn greeks(&self, strike: f64, expiry: f64, is_call: bool) -> GreeksResult {
        if expiry <= 0.0 || strike <= 0.0 {
            return GreeksResult::expired(strike, self.spot, is_call);
        }

        let sqrt_t = expiry.sqrt();
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * sqrt_t;
        let pdf_d1 = norm_pdf(d1);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        let gamma = pdf_d1 / (self.spot * self.volatility * sqrt_t);
        let vega = self.spot * pdf_d1 * sqrt_t * VEGA_SCALE;
        let time_decay = -(self.spot * pdf_d1 * self.volatility) / (2.0 * sqrt_t);

        let (delta, theta, rho) = if is_call {
            let n_d2 = norm_cdf(d2);
            (
                norm_cdf(d1),
                (time_decay - self.rate * discounted_strike * n_d2) / DAYS_PER_YEAR,
                discounted_strike * expiry * n_d2 * RHO_SCALE,
            )
        } else {
            let n_neg_d2 = norm_cdf(-d2);
            (
                norm_cdf(d1) - 1.0,
                (time_decay + self.rate * discounted_strike * n_neg_d2) / DAYS_PER_YEAR,
                -discounted_strike * expiry * n_neg_d2 * RHO_SCALE,
            )
        };

        GreeksResult {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }
}

#[inline]
fn check_finite(name: &'static str, value: f64) -> Result<(), AnalyticalError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticalError::NonFiniteInput { name, value })
    }
}

fn check_inputs(
    strike: f64,
    time_to_expiry: f64,
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> Result<(), AnalyticalError> {
    check_finite("strike", strike)?;
    check_finite("time_to_expiry", time_to_expiry)?;
    check_finite("spot", spot)?;
    check_finite("risk_free_rate", risk_free_rate)?;
    check_finite("volatility", volatility)
}

#[inline]
fn is_degenerate(strike: f64, time_to_expiry: f64, spot: f64, volatility: f64) -> bool {
    time_to_expiry <= 0.0 || volatility <= 0.0 || strike <= 0.0 || spot <= 0.0
}

/// Black-Scholes Greeks for a single European option.
///
/// # Arguments
/// * `strike` - Strike price (K)
/// * `time_to_expiry` - Time to expiry in years (T)
/// * `spot` - Current underlying price (S)
/// * `risk_free_rate` - Continuously compounded rate (r)
/// * `volatility` - Annualised volatility (σ)
/// * `is_call` - `true` for a call, `false` for a put
///
/// If `time_to_expiry <= 0`, `volatility <= 0`, `strike <= 0` or `spot <= 0`
/// the contract is treated as expired (see [`GreeksResult::expired`]).
///
/// # Errors
/// `PricingError::InvalidArgument` if any input is NaN or infinite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks;
///
/// let g = greeks(100.0, 0.0, 110.0, 0.05, 0.2, true).unwrap();
/// assert_eq!(g.delta, 1.0);
/// assert_eq!(g.vega, 0.0);
///
/// assert!(greeks(100.0, 1.0, f64::NAN, 0.05, 0.2, true).is_err());
/// ```
pub fn greeks(
    strike: f64,
    time_to_expiry: f64,
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
    is_call: bool,
) -> Result<GreeksResult, PricingError> {
    check_inputs(strike, time_to_expiry, spot, risk_free_rate, volatility)?;

    if is_degenerate(strike, time_to_expiry, spot, volatility) {
        return Ok(GreeksResult::expired(strike, spot, is_call));
    }

    let model = BlackScholes::new(spot, risk_free_rate, volatility)?;
    Ok(model.greeks(strike, time_to_expiry, is_call))
}

/// Black-Scholes theoretical price for a single European option.
///
/// Inputs in the expired domain (same conditions as [`greeks`]) price at the
/// discounted intrinsic value, which is the zero-volatility limit.
///
/// # Errors
/// `PricingError::InvalidArgument` if any input is NaN or infinite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::price;
///
/// let p = price(100.0, 1.0, 100.0, 0.05, 0.2, true).unwrap();
/// assert!((p - 10.450583572185565).abs() < 1e-10);
/// ```
pub fn price(
    strike: f64,
    time_to_expiry: f64,
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
    is_call: bool,
) -> Result<f64, PricingError> {
    check_inputs(strike, time_to_expiry, spot, risk_free_rate, volatility)?;

    if is_degenerate(strike, time_to_expiry, spot, volatility) {
        let forward_intrinsic = spot - strike * (-risk_free_rate * time_to_expiry.max(0.0)).exp();
        let intrinsic = if is_call {
            forward_intrinsic
        } else {
            -forward_intrinsic
        };
        return Ok(intrinsic.max(0.0));
    }

    let model = BlackScholes::new(spot, risk_free_rate, volatility)?;
    Ok(model.price(strike, time_to_expiry, is_call))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const S: f64 = 100.0;
    const K: f64 = 100.0;
    const R: f64 = 0.05;
    const VOL: f64 = 0.2;
    const T: f64 = 1.0;

    fn atm() -> BlackScholes {
        BlackScholes::new(S, R, VOL).unwrap()
    }

    // ==========================================================
    // Reference values (S = K = 100, r = 5%, σ = 20%, T = 1y)
    // ==========================================================

    #[test]
    fn test_call_reference_greeks() {
        let g = greeks(K, T, S, R, VOL, true).unwrap();
        assert_relative_eq!(g.delta, 0.6368306511756191, epsilon = 1e-10);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-10);
        assert_relative_eq!(g.vega, 0.3752403469169379, epsilon = 1e-10);
        assert_relative_eq!(g.theta, -0.01757267820941972, epsilon = 1e-10);
        assert_relative_eq!(g.rho, 0.5323248154537634, epsilon = 1e-10);
    }

    #[test]
    fn test_put_reference_greeks() {
        let g = greeks(K, T, S, R, VOL, false).unwrap();
        assert_relative_eq!(g.delta, -0.3631693488243809, epsilon = 1e-10);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-10);
        assert_relative_eq!(g.vega, 0.3752403469169379, epsilon = 1e-10);
        assert_relative_eq!(g.theta, -0.004542138147766099, epsilon = 1e-10);
        assert_relative_eq!(g.rho, -0.4189046090469506, epsilon = 1e-10);
    }

    #[test]
    fn test_call_reference_price() {
        assert_relative_eq!(atm().price_call(K, T), 10.450583572185565, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_fn_matches_model() {
        let flat = greeks(110.0, 0.5, S, R, VOL, false).unwrap();
        let model = atm().greeks(110.0, 0.5, false);
        assert_eq!(flat, model);
    }

    // ==========================================================
    // Parity relations
    // ==========================================================

    #[test]
    fn test_put_call_parity_price() {
        let bs = atm();
        for strike in [80.0, 100.0, 120.0] {
            let lhs = bs.price_call(strike, T) - bs.price_put(strike, T);
            let rhs = S - strike * (-R * T).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_greeks_parity() {
        let discounted_strike = K * (-R * T).exp();
        let call = greeks(K, T, S, R, VOL, true).unwrap();
        let put = greeks(K, T, S, R, VOL, false).unwrap();

        assert_relative_eq!(call.delta - put.delta, 1.0, epsilon = 1e-12);
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert_relative_eq!(
            call.rho - put.rho,
            discounted_strike * T * RHO_SCALE,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            call.theta - put.theta,
            -R * discounted_strike / DAYS_PER_YEAR,
            epsilon = 1e-12
        );
    }

    // ==========================================================
    // Finite-difference cross-checks
    // ==========================================================

    #[test]
    fn test_delta_gamma_match_bumped_spot() {
        let h = 0.01;
        let up = BlackScholes::new(S + h, R, VOL).unwrap();
        let down = BlackScholes::new(S - h, R, VOL).unwrap();
        let g = atm().greeks(K, T, true);

        let fd_delta = (up.price_call(K, T) - down.price_call(K, T)) / (2.0 * h);
        let fd_gamma =
            (up.price_call(K, T) - 2.0 * atm().price_call(K, T) + down.price_call(K, T)) / (h * h);

        assert_relative_eq!(g.delta, fd_delta, epsilon = 1e-6);
        assert_relative_eq!(g.gamma, fd_gamma, epsilon = 1e-5);
    }

    #[test]
    fn test_vega_matches_bumped_volatility() {
        let h = 1e-4;
        let up = BlackScholes::new(S, R, VOL + h).unwrap();
        let down = BlackScholes::new(S, R, VOL - h).unwrap();
        let fd = (up.price_call(K, T) - down.price_call(K, T)) / (2.0 * h);
        assert_relative_eq!(atm().greeks(K, T, true).vega / VEGA_SCALE, fd, epsilon = 1e-6);
    }

    #[test]
    fn test_rho_matches_bumped_rate() {
        let h = 1e-4;
        let up = BlackScholes::new(S, R + h, VOL).unwrap();
        let down = BlackScholes::new(S, R - h, VOL).unwrap();
        for is_call in [true, false] {
            let fd = (up.price(K, T, is_call) - down.price(K, T, is_call)) / (2.0 * h);
            let rho = atm().greeks(K, T, is_call).rho / RHO_SCALE;
            assert_relative_eq!(rho, fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_theta_matches_shortened_expiry() {
        let h = 1e-4;
        let bs = atm();
        for is_call in [true, false] {
            // Theta is the decay as calendar time passes, i.e. -∂V/∂T
            let fd = -(bs.price(K, T + h, is_call) - bs.price(K, T - h, is_call)) / (2.0 * h);
            let theta = bs.greeks(K, T, is_call).theta * DAYS_PER_YEAR;
            assert_relative_eq!(theta, fd, epsilon = 1e-6);
        }
    }

    // ==========================================================
    // Expiry / degenerate branch
    // ==========================================================

    #[test]
    fn test_expired_itm_call() {
        let g = greeks(100.0, 0.0, 110.0, 0.05, 0.2, true).unwrap();
        assert_eq!(
            g,
            GreeksResult {
                delta: 1.0,
                gamma: 0.0,
                vega: 0.0,
                theta: 0.0,
                rho: 0.0,
            }
        );
    }

    #[test]
    fn test_expired_deltas() {
        assert_eq!(greeks(100.0, 0.0, 90.0, R, VOL, true).unwrap().delta, 0.0);
        assert_eq!(greeks(100.0, 0.0, 100.0, R, VOL, true).unwrap().delta, 0.0);
        assert_eq!(greeks(100.0, 0.0, 90.0, R, VOL, false).unwrap().delta, -1.0);
        assert_eq!(greeks(100.0, 0.0, 100.0, R, VOL, false).unwrap().delta, 0.0);
        assert_eq!(greeks(100.0, 0.0, 110.0, R, VOL, false).unwrap().delta, 0.0);
    }

    #[test]
    fn test_each_degenerate_trigger() {
        let cases = [
            (100.0, -1.0, 110.0, 0.2),
            (100.0, 1.0, 110.0, 0.0),
            (100.0, 1.0, 110.0, -0.3),
            (0.0, 1.0, 110.0, 0.2),
            (-5.0, 1.0, 110.0, 0.2),
        ];
        for (strike, expiry, spot, vol) in cases {
            let g = greeks(strike, expiry, spot, R, vol, true).unwrap();
            assert_eq!(g, GreeksResult::expired(strike, spot, true));
            assert_eq!(g.delta, 1.0);
        }

        // Non-positive spot: call never in the money, put always is
        assert_eq!(greeks(100.0, 1.0, 0.0, R, VOL, true).unwrap().delta, 0.0);
        assert_eq!(greeks(100.0, 1.0, -1.0, R, VOL, false).unwrap().delta, -1.0);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let nan = f64::NAN;
        let inf = f64::INFINITY;
        let cases = [
            (nan, T, S, R, VOL, "strike"),
            (K, inf, S, R, VOL, "time_to_expiry"),
            (K, T, -inf, R, VOL, "spot"),
            (K, T, S, nan, VOL, "risk_free_rate"),
            (K, T, S, R, inf, "volatility"),
        ];
        for (k, t, s, r, v, name) in cases {
            let err = greeks(k, t, s, r, v, true).unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.to_string().contains(name), "{} missing from {}", name, err);
        }
    }

    #[test]
    fn test_model_rejects_out_of_domain() {
        assert_eq!(
            BlackScholes::new(0.0, R, VOL).unwrap_err(),
            AnalyticalError::InvalidSpot { spot: 0.0 }
        );
        assert_eq!(
            BlackScholes::new(S, R, -0.1).unwrap_err(),
            AnalyticalError::InvalidVolatility { volatility: -0.1 }
        );
    }

    #[test]
    fn test_degenerate_price_is_intrinsic() {
        assert_eq!(price(100.0, 0.0, 110.0, R, VOL, true).unwrap(), 10.0);
        assert_eq!(price(100.0, 0.0, 110.0, R, VOL, false).unwrap(), 0.0);

        // Zero volatility prices the discounted forward payoff
        let expected = 110.0 - 100.0 * (-R).exp();
        assert_relative_eq!(
            price(100.0, 1.0, 110.0, R, 0.0, true).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deep_itm_call_delta_tends_to_one() {
        let g = greeks(50.0, 0.1, 100.0, R, VOL, true).unwrap();
        assert!(g.delta > 0.999_999);
        assert!(g.gamma >= 0.0 && g.gamma < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_greeks_are_finite_and_consistent(
            strike in 1.0f64..500.0,
            spot in 1.0f64..500.0,
            expiry in 0.01f64..5.0,
            rate in -0.05f64..0.2,
            vol in 0.01f64..1.5,
        ) {
            let call = greeks(strike, expiry, spot, rate, vol, true).unwrap();
            let put = greeks(strike, expiry, spot, rate, vol, false).unwrap();

            for v in [call.delta, call.gamma, call.vega, call.theta, call.rho] {
                prop_assert!(v.is_finite());
            }
            prop_assert!((0.0..=1.0).contains(&call.delta));
            prop_assert!((-1.0..=0.0).contains(&put.delta));
            prop_assert!(call.gamma >= 0.0);
            prop_assert!(call.vega >= 0.0);
            prop_assert!(call.rho >= 0.0);
            prop_assert!(put.rho <= 0.0);
            prop_assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
            prop_assert_eq!(call.gamma, put.gamma);
            prop_assert_eq!(call.vega, put.vega);
        }
    }
}
