//! OptChain is a deterministic analytics library for index and stock option chains:
//! Black-Scholes valuation, the standard Greeks, a synthetic volatility-smile
//! generator, and chain-level aggregate risk metrics (max pain, put-call ratio,
//! ATM implied volatility).
//!
//! The crate is pure and stateless. Every operation is a synchronous function of
//! its inputs with no I/O, no clocks, and no shared mutable state, so callers may
//! fan out per-strike work across threads without coordination (the `parallel`
//! feature adds a Rayon-powered chain scan). Market-data acquisition, order entry,
//! and rendering are the caller's concern.
//!
//! Numerical considerations:
//! - The normal CDF uses the Abramowitz-Stegun rational approximation to `erf`
//!   (max absolute error ~1.5e-7). Substitute a higher-precision CDF if you need
//!   tighter bounds; the trade-off here is speed over exactness.
//! - Degenerate inputs (`t <= 0` or `sigma <= 0`) collapse to intrinsic value and
//!   step-function deltas rather than dividing by zero.
//! - The smile module is a *synthetic* volatility-smile generator for demo and
//!   test data. It is not an implied-volatility solver and must not be used where
//!   calibration accuracy matters.
//!
//! # Feature Flags
//! - `parallel`: enables Rayon-powered parallel chain analytics.
//!
//! # Quick Start
//! Price a Black-Scholes call:
//! ```rust
//! use optchain::core::OptionType;
//! use optchain::pricing::european::black_scholes_price;
//!
//! let px = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
//! assert!(px > 10.0 && px < 11.0);
//! ```
//!
//! Compute Greeks:
//! ```rust
//! use optchain::core::{OptionQuote, OptionType};
//! use optchain::greeks::compute_greeks;
//!
//! let quote = OptionQuote::new(100.0, 100.0, 0.05, 0.20, 1.0);
//! let g = compute_greeks(&quote, OptionType::Call).unwrap();
//! assert!(g.delta > 0.0 && g.delta < 1.0 && g.gamma > 0.0);
//! ```
//!
//! Chain-level aggregates:
//! ```rust
//! use optchain::chain::{ChainSnapshot, StrikeRow};
//!
//! let chain = ChainSnapshot::new(vec![
//!     StrikeRow::new(100.0, 50.0, 200.0, 10.0, 40.0, 22.0, 23.0),
//!     StrikeRow::new(110.0, 100.0, 100.0, 25.0, 25.0, 20.0, 20.0),
//!     StrikeRow::new(120.0, 200.0, 50.0, 40.0, 10.0, 22.0, 23.0),
//! ])
//! .unwrap();
//!
//! let metrics = chain.metrics(110.0).unwrap();
//! assert_eq!(metrics.max_pain_strike, 110.0);
//! ```

pub mod chain;
pub mod core;
pub mod greeks;
pub mod market;
pub mod math;
pub mod pricing;
pub mod vol;
