//! Volatility tooling.
//!
//! The only surface here is a *synthetic* smile generator used to fabricate
//! plausible implied-volatility columns for demo chains. It is not an
//! implied-volatility solver: no market price is inverted anywhere in this
//! module, and it must not be relied on where calibration accuracy matters.

mod smile;

pub use smile::{estimate_iv, NoNoise, NoiseSource, SyntheticSmile, UniformNoise};
