use serde::{Deserialize, Serialize};

use crate::core::PricingError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Moneyness bucket of a strike relative to spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moneyness {
    /// Strike favorable to the holder at current spot.
    InTheMoney,
    /// Strike within the ATM band around spot.
    AtTheMoney,
    /// Strike unfavorable to the holder at current spot.
    OutOfTheMoney,
}

impl Moneyness {
    /// Classifies a strike against spot for the given option side.
    ///
    /// `atm_band` is the relative half-width of the ATM bucket, e.g. `0.005`
    /// treats strikes within 0.5% of spot as at-the-money.
    pub fn classify(option_type: OptionType, spot: f64, strike: f64, atm_band: f64) -> Self {
        if (strike - spot).abs() <= atm_band * spot {
            return Self::AtTheMoney;
        }
        let itm = match option_type {
            OptionType::Call => strike < spot,
            OptionType::Put => strike > spot,
        };
        if itm {
            Self::InTheMoney
        } else {
            Self::OutOfTheMoney
        }
    }
}

/// Single-option market inputs for valuation and Greeks.
///
/// Units follow Black-Scholes convention: `rate` and `vol` are annualized
/// fractions (0.05 = 5%), `expiry` is a year fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Underlying spot price, strictly positive.
    pub spot: f64,
    /// Exercise price, strictly positive.
    pub strike: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Annualized volatility; `vol <= 0` collapses to the intrinsic branch.
    pub vol: f64,
    /// Time to expiry in years; `expiry <= 0` collapses to the intrinsic branch.
    pub expiry: f64,
}

impl OptionQuote {
    /// Creates a quote without validating it; call [`OptionQuote::validate`]
    /// before pricing or use the checked surfaces in `pricing`/`greeks`.
    pub fn new(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            vol,
            expiry,
        }
    }

    /// Checks the quote against the pricing preconditions.
    ///
    /// Spot and strike must be strictly positive and finite; rate, vol, and
    /// expiry must be finite. Non-positive vol or expiry is *not* an error:
    /// both are defined degenerate boundaries that price at intrinsic value.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive and finite, got {}",
                self.spot
            )));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "strike must be positive and finite, got {}",
                self.strike
            )));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        if !self.vol.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "vol must be finite, got {}",
                self.vol
            )));
        }
        if !self.expiry.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "expiry must be finite, got {}",
                self.expiry
            )));
        }
        Ok(())
    }

    /// Strike-over-spot moneyness ratio.
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.strike / self.spot
    }

    /// True when the quote sits on the degenerate intrinsic-value boundary.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.expiry <= 0.0 || self.vol <= 0.0
    }
}

/// Theoretical call and put values at one strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPrice {
    /// Call value, floored at zero.
    pub call: f64,
    /// Put value, floored at zero.
    pub put: f64,
}
