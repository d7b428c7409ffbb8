//! Market snapshot container consumed by the chain analytics.
//!
//! A [`Market`] carries spot, rate, and a volatility source — either a flat
//! vol or the synthetic smile. It is a plain value snapshot: callers who poll
//! a feed rebuild a fresh `Market` per tick and hand it to the pure analytics;
//! there is no internal timer, cache, or subscription machinery here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::PricingError;
use crate::vol::SyntheticSmile;

/// Volatility source for a market snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VolSource {
    /// Constant volatility fraction across strikes and expiries.
    Flat(f64),
    /// Synthetic smile lookup keyed by strike-over-spot moneyness.
    Smile(SyntheticSmile),
}

/// Market snapshot used by the chain analytics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Spot price of the underlying, strictly positive.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Volatility source.
    pub vol: VolSource,
}

impl Market {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }

    /// Volatility fraction for a strike and expiry.
    ///
    /// The smile source generates percentages; this accessor converts back to
    /// a fraction so pricing code sees one unit everywhere.
    pub fn vol(&self, strike: f64, expiry: f64) -> f64 {
        match self.vol {
            VolSource::Flat(v) => v,
            VolSource::Smile(smile) => smile.iv(strike / self.spot, expiry) / 100.0,
        }
    }
}

/// Validating builder for [`Market`].
#[derive(Debug, Clone, Default)]
pub struct MarketBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    vol: Option<VolSource>,
}

impl MarketBuilder {
    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets a flat volatility fraction.
    pub fn flat_vol(mut self, vol: f64) -> Self {
        self.vol = Some(VolSource::Flat(vol));
        self
    }

    /// Sets the synthetic smile as the volatility source.
    pub fn smile(mut self, smile: SyntheticSmile) -> Self {
        self.vol = Some(VolSource::Smile(smile));
        self
    }

    /// Builds the snapshot, rejecting incomplete or out-of-domain inputs.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when spot is missing or
    /// non-positive, rate is missing or non-finite, the vol source is missing,
    /// or a flat vol is non-positive.
    pub fn build(self) -> Result<Market, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidInput("spot is required".into()))?;
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive and finite, got {spot}"
            )));
        }

        let rate = self
            .rate
            .ok_or_else(|| PricingError::InvalidInput("rate is required".into()))?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "rate must be finite, got {rate}"
            )));
        }

        let vol = self
            .vol
            .ok_or_else(|| PricingError::InvalidInput("vol source is required".into()))?;
        if let VolSource::Flat(v) = vol {
            if !v.is_finite() || v <= 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "flat vol must be positive and finite, got {v}"
                )));
            }
        }

        Ok(Market { spot, rate, vol })
    }
}

/// Act/365-fixed year fraction between two dates.
///
/// Matches the calendar-day theta convention used in [`crate::greeks`]:
/// 365 days per year, no leap adjustment. Negative when `end` precedes
/// `start`, which the pricing layer treats as expired.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use optchain::market::year_fraction;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert!((year_fraction(start, end) - 1.0).abs() < 1e-12);
/// ```
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / 365.0
}
