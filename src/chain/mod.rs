//! Option-chain snapshots and chain-level aggregate risk metrics.
//!
//! A [`ChainSnapshot`] is an immutable, validated view of one underlying and
//! expiry: strictly ascending strikes, each carrying open interest, volume,
//! and per-side implied vol. The aggregates derived from it — max pain,
//! put-call ratio, ATM implied vol — are the sentiment numbers chain displays
//! put in their header strip.
//!
//! Numerical considerations: the max-pain scan enumerates candidate strikes
//! directly, O(n²) over the chain. Fine for the chains this crate targets
//! (≤ ~200 strikes); switch to a prefix-sum pass if chains grow past that.

use serde::{Deserialize, Serialize};

use crate::core::{OptionPrice, OptionQuote, OptionType, PricingError};
use crate::greeks::{black_scholes_greeks, Greeks};
use crate::market::Market;
use crate::pricing::european::black_scholes_price;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// ATM implied vol reported for a chain with no strikes, in percent.
///
/// Chain displays historically fell back to 12% when the rounded ATM strike
/// was absent from the data; this keeps that behavior as a named constant
/// instead of a magic number.
pub const DEFAULT_ATM_IV_PCT: f64 = 12.0;

/// One strike of an option chain. IVs are percentages (20.0 = 20%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeRow {
    /// Exercise price.
    pub strike: f64,
    /// Call open interest in contracts.
    pub call_oi: f64,
    /// Put open interest in contracts.
    pub put_oi: f64,
    /// Call volume in contracts.
    pub call_volume: f64,
    /// Put volume in contracts.
    pub put_volume: f64,
    /// Call implied vol in percent.
    pub call_iv: f64,
    /// Put implied vol in percent.
    pub put_iv: f64,
}

impl StrikeRow {
    /// Creates a strike row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        strike: f64,
        call_oi: f64,
        put_oi: f64,
        call_volume: f64,
        put_volume: f64,
        call_iv: f64,
        put_iv: f64,
    ) -> Self {
        Self {
            strike,
            call_oi,
            put_oi,
            call_volume,
            put_volume,
            call_iv,
            put_iv,
        }
    }
}

/// Validated option chain for one underlying/expiry pair.
///
/// Strikes are unique and strictly ascending; quantities are finite and
/// non-negative. The snapshot is immutable once built and holds no reference
/// to any market feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    rows: Vec<StrikeRow>,
}

impl ChainSnapshot {
    /// Builds a snapshot from rows, validating ordering and domains.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] on non-positive or non-finite
    /// strikes, negative or non-finite quantities, or strikes that are not
    /// strictly increasing.
    pub fn new(rows: Vec<StrikeRow>) -> Result<Self, PricingError> {
        for row in &rows {
            if !row.strike.is_finite() || row.strike <= 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "strike must be positive and finite, got {}",
                    row.strike
                )));
            }
            for (name, value) in [
                ("call_oi", row.call_oi),
                ("put_oi", row.put_oi),
                ("call_volume", row.call_volume),
                ("put_volume", row.put_volume),
                ("call_iv", row.call_iv),
                ("put_iv", row.put_iv),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(PricingError::InvalidInput(format!(
                        "{name} must be non-negative and finite at strike {}, got {value}",
                        row.strike
                    )));
                }
            }
        }
        if rows.windows(2).any(|w| w[1].strike <= w[0].strike) {
            return Err(PricingError::InvalidInput(
                "strikes must be strictly increasing".into(),
            ));
        }
        Ok(Self { rows })
    }

    /// Rows in ascending strike order.
    pub fn rows(&self) -> &[StrikeRow] {
        &self.rows
    }

    /// Total call open interest across the chain.
    pub fn total_call_oi(&self) -> f64 {
        self.rows.iter().map(|r| r.call_oi).sum()
    }

    /// Total put open interest across the chain.
    pub fn total_put_oi(&self) -> f64 {
        self.rows.iter().map(|r| r.put_oi).sum()
    }

    /// Total traded volume, both sides.
    pub fn total_volume(&self) -> f64 {
        self.rows.iter().map(|r| r.call_volume + r.put_volume).sum()
    }

    /// Aggregate option-writer payout if the underlying settles at `settle`.
    ///
    /// Calls above the settlement and puts below it expire in the money
    /// against the writers: `Σ_{s>k} callOI(s)·(s−k) + Σ_{s<k} putOI(s)·(k−s)`.
    pub fn writer_payout(&self, settle: f64) -> f64 {
        let mut payout = 0.0;
        for row in &self.rows {
            if row.strike > settle {
                payout += row.call_oi * (row.strike - settle);
            }
            if row.strike < settle {
                payout += row.put_oi * (settle - row.strike);
            }
        }
        payout
    }

    /// Strike at which aggregate writer payout is minimized.
    ///
    /// Candidates are the chain's own strikes; ties resolve to the smallest
    /// strike (the ascending scan keeps the first minimum it sees).
    ///
    /// # Errors
    /// Returns [`PricingError::AggregateUndefined`] for an empty chain.
    pub fn max_pain(&self) -> Result<f64, PricingError> {
        let mut best: Option<(f64, f64)> = None;
        for row in &self.rows {
            let pain = self.writer_payout(row.strike);
            match best {
                Some((_, min_pain)) if pain >= min_pain => {}
                _ => best = Some((row.strike, pain)),
            }
        }
        best.map(|(strike, _)| strike).ok_or_else(|| {
            PricingError::AggregateUndefined("max pain on an empty chain".into())
        })
    }

    /// Put-call ratio: total put OI over total call OI.
    ///
    /// # Errors
    /// Returns [`PricingError::AggregateUndefined`] when total call open
    /// interest is zero. The ratio is never reported as NaN or infinity.
    pub fn put_call_ratio(&self) -> Result<f64, PricingError> {
        let call_oi = self.total_call_oi();
        if call_oi == 0.0 {
            return Err(PricingError::AggregateUndefined(
                "put-call ratio with zero total call open interest".into(),
            ));
        }
        Ok(self.total_put_oi() / call_oi)
    }

    /// ATM implied vol in percent: mean of call and put IV at the strike
    /// nearest to `spot`. Falls back to [`DEFAULT_ATM_IV_PCT`] when the chain
    /// has no strikes at all.
    pub fn atm_iv(&self, spot: f64) -> f64 {
        let nearest = self
            .rows
            .iter()
            .min_by(|a, b| (a.strike - spot).abs().total_cmp(&(b.strike - spot).abs()));
        match nearest {
            Some(row) => (row.call_iv + row.put_iv) / 2.0,
            None => DEFAULT_ATM_IV_PCT,
        }
    }

    /// All three header aggregates in one pass.
    ///
    /// # Errors
    /// Propagates the max-pain and put-call-ratio error contracts.
    pub fn metrics(&self, spot: f64) -> Result<ChainMetrics, PricingError> {
        Ok(ChainMetrics {
            max_pain_strike: self.max_pain()?,
            put_call_ratio: self.put_call_ratio()?,
            atm_iv_pct: self.atm_iv(spot),
        })
    }
}

/// Chain-level sentiment metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainMetrics {
    /// Strike minimizing aggregate writer payout at settlement.
    pub max_pain_strike: f64,
    /// Total put OI over total call OI.
    pub put_call_ratio: f64,
    /// ATM implied vol in percent.
    pub atm_iv_pct: f64,
}

/// ATM-centred strike ladder: `2 * depth + 1` strikes spaced by `interval`,
/// with the middle strike at spot rounded to the nearest interval.
///
/// # Examples
/// ```rust
/// use optchain::chain::strike_ladder;
///
/// let ladder = strike_ladder(24_413.5, 50.0, 2);
/// assert_eq!(ladder, vec![24_300.0, 24_350.0, 24_400.0, 24_450.0, 24_500.0]);
/// ```
pub fn strike_ladder(spot: f64, interval: f64, depth: usize) -> Vec<f64> {
    let atm = (spot / interval).round() * interval;
    let depth = depth as i64;
    (-depth..=depth).map(|i| atm + i as f64 * interval).collect()
}

/// Per-strike valuation and sensitivities derived from a market snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeAnalytics {
    /// Exercise price.
    pub strike: f64,
    /// Theoretical call/put values.
    pub price: OptionPrice,
    /// Call-side Greeks.
    pub call_greeks: Greeks,
    /// Put-side Greeks.
    pub put_greeks: Greeks,
}

fn analyze_row(market: &Market, strike: f64, expiry: f64) -> Result<StrikeAnalytics, PricingError> {
    let sigma = market.vol(strike, expiry);
    let quote = OptionQuote::new(market.spot, strike, market.rate, sigma, expiry);
    quote.validate()?;
    Ok(StrikeAnalytics {
        strike,
        price: OptionPrice {
            call: black_scholes_price(OptionType::Call, quote.spot, strike, quote.rate, sigma, expiry),
            put: black_scholes_price(OptionType::Put, quote.spot, strike, quote.rate, sigma, expiry),
        },
        call_greeks: black_scholes_greeks(OptionType::Call, quote.spot, strike, quote.rate, sigma, expiry),
        put_greeks: black_scholes_greeks(OptionType::Put, quote.spot, strike, quote.rate, sigma, expiry),
    })
}

/// Prices and Greeks for every strike in the chain against one market
/// snapshot and expiry.
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] if any per-strike quote fails
/// validation (the snapshot and market builders make this unreachable for
/// values built through them).
pub fn analyze(
    market: &Market,
    chain: &ChainSnapshot,
    expiry: f64,
) -> Result<Vec<StrikeAnalytics>, PricingError> {
    chain
        .rows()
        .iter()
        .map(|row| analyze_row(market, row.strike, expiry))
        .collect()
}

/// Parallel variant of [`analyze`]. Per-strike work shares nothing, so the
/// chain maps cleanly over a Rayon pool.
#[cfg(feature = "parallel")]
pub fn analyze_parallel(
    market: &Market,
    chain: &ChainSnapshot,
    expiry: f64,
) -> Result<Vec<StrikeAnalytics>, PricingError> {
    chain
        .rows()
        .par_iter()
        .map(|row| analyze_row(market, row.strike, expiry))
        .collect()
}
