//! European vanilla closed forms under Black-Scholes assumptions.
//!
//! These kernels assume inputs already satisfy the positivity preconditions
//! (see [`crate::core::OptionQuote::validate`]); the degenerate boundary
//! `t <= 0 || sigma <= 0` is handled here by pricing at intrinsic value so no
//! path ever evaluates `ln` or divides by a vanishing `sigma * sqrt(t)`.

use crate::core::OptionType;
use crate::math::normal_cdf;

/// Exercise value of one side at a given spot.
#[inline]
pub fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

/// Black-Scholes `d1`/`d2` pair. Callers must ensure `sigma > 0` and `t > 0`.
#[inline]
pub(crate) fn d1_d2(spot: f64, strike: f64, rate: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes spot-option price with zero dividend yield.
///
/// Parameters:
/// - `s`: current spot price, `> 0`.
/// - `k`: strike price, `> 0`.
/// - `r`: continuously compounded risk-free rate.
/// - `sigma`: annualized volatility.
/// - `t`: time to expiry in years.
///
/// Edge cases:
/// - `t <= 0` or `sigma <= 0` returns intrinsic value directly.
/// - The result is floored at zero on the closed-form branch as well, so
///   rounding noise near the boundary never surfaces as a negative premium.
///
/// # Examples
/// ```rust
/// use optchain::core::OptionType;
/// use optchain::pricing::european::black_scholes_price;
///
/// let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
/// let put = black_scholes_price(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0);
/// assert!(call > put);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> f64 {
    if t <= 0.0 || sigma <= 0.0 {
        return intrinsic(option_type, s, k);
    }

    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    let df = (-r * t).exp();
    let value = match option_type {
        OptionType::Call => s * normal_cdf(d1) - k * df * normal_cdf(d2),
        OptionType::Put => k * df * normal_cdf(-d2) - s * normal_cdf(-d1),
    };
    value.max(0.0)
}
