//! Greeks for European vanilla options under Black-Scholes assumptions.
//!
//! Conventions match the quoting style of retail option-chain displays:
//! theta is annualized-to-daily via division by 365 (calendar days, not
//! trading days) and vega is quoted per one percentage point of volatility.
//! Keep both when substituting another engine or downstream consumers will
//! see a 365x/100x jump.

use serde::{Deserialize, Serialize};

use crate::core::{OptionQuote, OptionType, PricingError};
use crate::math::{normal_cdf, normal_pdf};
use crate::pricing::european::d1_d2;

/// Calendar-day convention for theta scaling.
const DAYS_PER_YEAR: f64 = 365.0;

/// First-order sensitivities of a vanilla option.
///
/// Gamma and vega are shared between call and put at the same
/// `(spot, strike, rate, vol, expiry)`; delta and theta are side-specific.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// dV/dS; in [0, 1] for calls, [-1, 0] for puts.
    pub delta: f64,
    /// d²V/dS²; non-negative.
    pub gamma: f64,
    /// dV/dt per calendar day.
    pub theta: f64,
    /// dV/dσ per volatility point; non-negative.
    pub vega: f64,
}

/// Black-Scholes Greeks kernel. Assumes `s > 0` and `k > 0`.
///
/// Degenerate boundary (`t <= 0` or `sigma <= 0`): gamma, theta, and vega are
/// zero, and delta takes the limiting step-function value of intrinsic-value
/// sensitivity — 1 for an ITM call, -1 for an ITM put, 0 otherwise (including
/// exactly at-the-money, where the one-sided limits disagree).
pub fn black_scholes_greeks(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Greeks {
    if t <= 0.0 || sigma <= 0.0 {
        let delta = match option_type {
            OptionType::Call => {
                if s > k {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if s < k {
                    -1.0
                } else {
                    0.0
                }
            }
        };
        return Greeks {
            delta,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
        };
    }

    let sqrt_t = t.sqrt();
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    let pdf_d1 = normal_pdf(d1);
    let df = (-r * t).exp();

    let delta = match option_type {
        OptionType::Call => normal_cdf(d1),
        OptionType::Put => normal_cdf(d1) - 1.0,
    };

    let gamma = pdf_d1 / (s * sigma * sqrt_t);

    let theta_annual = match option_type {
        OptionType::Call => -s * pdf_d1 * sigma / (2.0 * sqrt_t) - r * k * df * normal_cdf(d2),
        OptionType::Put => -s * pdf_d1 * sigma / (2.0 * sqrt_t) + r * k * df * normal_cdf(-d2),
    };

    Greeks {
        delta,
        gamma,
        theta: theta_annual / DAYS_PER_YEAR,
        vega: s * pdf_d1 * sqrt_t / 100.0,
    }
}

/// Greeks for a validated quote.
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] under the same contract as
/// [`crate::pricing::price_option`].
///
/// # Examples
/// ```rust
/// use optchain::core::{OptionQuote, OptionType};
/// use optchain::greeks::compute_greeks;
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.05, 0.20, 1.0);
/// let call = compute_greeks(&quote, OptionType::Call).unwrap();
/// let put = compute_greeks(&quote, OptionType::Put).unwrap();
/// assert_eq!(call.gamma, put.gamma);
/// assert_eq!(call.vega, put.vega);
/// ```
pub fn compute_greeks(
    quote: &OptionQuote,
    option_type: OptionType,
) -> Result<Greeks, PricingError> {
    quote.validate()?;
    Ok(black_scholes_greeks(
        option_type,
        quote.spot,
        quote.strike,
        quote.rate,
        quote.vol,
        quote.expiry,
    ))
}
