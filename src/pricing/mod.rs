//! Option valuation: Black-Scholes closed forms plus the validated surface
//! used by chain analytics.

pub mod european;

use crate::core::{OptionPrice, OptionQuote, OptionType, PricingError};

/// Prices one side of a validated quote.
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] when spot or strike is non-positive
/// or any field is non-finite. Degenerate expiry/vol is not an error; the
/// quote prices at intrinsic value.
///
/// # Examples
/// ```rust
/// use optchain::core::{OptionQuote, OptionType};
/// use optchain::pricing::price_option;
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.05, 0.20, 1.0);
/// let call = price_option(&quote, OptionType::Call).unwrap();
/// assert!((call - 10.4506).abs() < 1e-3);
///
/// assert!(price_option(&OptionQuote::new(-1.0, 100.0, 0.05, 0.2, 1.0), OptionType::Call).is_err());
/// ```
pub fn price_option(quote: &OptionQuote, option_type: OptionType) -> Result<f64, PricingError> {
    quote.validate()?;
    Ok(european::black_scholes_price(
        option_type,
        quote.spot,
        quote.strike,
        quote.rate,
        quote.vol,
        quote.expiry,
    ))
}

/// Prices both sides of a validated quote.
///
/// Put-call parity, `call - put == spot - strike * exp(-rate * expiry)`, holds
/// within floating tolerance on the non-degenerate branch.
///
/// # Errors
/// Same contract as [`price_option`].
pub fn option_price(quote: &OptionQuote) -> Result<OptionPrice, PricingError> {
    quote.validate()?;
    Ok(OptionPrice {
        call: european::black_scholes_price(
            OptionType::Call,
            quote.spot,
            quote.strike,
            quote.rate,
            quote.vol,
            quote.expiry,
        ),
        put: european::black_scholes_price(
            OptionType::Put,
            quote.spot,
            quote.strike,
            quote.rate,
            quote.vol,
            quote.expiry,
        ),
    })
}
