use rand::Rng;
use serde::{Deserialize, Serialize};

/// Source of symmetric jitter for randomized demo data.
///
/// Implementations return a value in `[-0.5, 0.5)` per draw. The analytics
/// stay deterministic unless a caller explicitly threads a noisy source
/// through; tests use [`NoNoise`] or a seeded [`UniformNoise`].
pub trait NoiseSource {
    /// Next jitter sample in `[-0.5, 0.5)`.
    fn next_jitter(&mut self) -> f64;
}

/// Zero-noise source; the deterministic default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn next_jitter(&mut self) -> f64 {
        0.0
    }
}

/// Uniform jitter backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformNoise<R> {
    /// Wraps a generator; seed it for reproducible demo data.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for UniformNoise<R> {
    fn next_jitter(&mut self) -> f64 {
        self.rng.gen::<f64>() - 0.5
    }
}

/// Synthetic volatility-smile generator.
///
/// Produces an implied-volatility *percentage* (20.0 = 20%) as a deterministic
/// function of strike-over-spot moneyness and expiry: a base level, fixed
/// step-ups as moneyness leaves the inner and outer bands around 1.0, a
/// short-expiry bump, and a floor. This reproduces the shape retail chain
/// displays fabricate for mock data; it is not a calibration of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSmile {
    /// Base volatility fraction at the money (0.20 = 20%).
    pub base_vol: f64,
    /// Step added each time |moneyness - 1| crosses a band, as a fraction.
    pub wing_step: f64,
    /// Inner band half-width around moneyness 1.0.
    pub inner_band: f64,
    /// Outer band half-width around moneyness 1.0.
    pub outer_band: f64,
    /// Expiry cutoff (years) below which the short-dated bump applies.
    pub short_expiry_cutoff: f64,
    /// Bump added below the cutoff, as a fraction.
    pub short_expiry_bump: f64,
    /// Peak-to-peak jitter amplitude, as a fraction.
    pub jitter_amplitude: f64,
    /// Output floor in percent.
    pub floor_pct: f64,
}

impl Default for SyntheticSmile {
    /// Constants used by the mock NSE chain displays: 20% base, 5-point wings
    /// at the ±5% and ±10% moneyness bands, 3-point bump under ~one month,
    /// ±2% jitter span, 10% floor.
    fn default() -> Self {
        Self {
            base_vol: 0.20,
            wing_step: 0.05,
            inner_band: 0.05,
            outer_band: 0.10,
            short_expiry_cutoff: 0.08,
            short_expiry_bump: 0.03,
            jitter_amplitude: 0.04,
            floor_pct: 10.0,
        }
    }
}

impl SyntheticSmile {
    /// Deterministic smile value in percent for the given strike-over-spot
    /// moneyness and expiry (years).
    pub fn iv(&self, moneyness: f64, expiry: f64) -> f64 {
        self.iv_with_noise(moneyness, expiry, 0.0)
    }

    /// Smile value with an explicit additive perturbation.
    ///
    /// `noise` is the raw jitter added to the volatility fraction before
    /// scaling to percent; pass the output of a [`NoiseSource`] draw times
    /// [`SyntheticSmile::jitter_amplitude`], or any fixed offset for tests.
    /// The floor applies after the perturbation.
    pub fn iv_with_noise(&self, moneyness: f64, expiry: f64, noise: f64) -> f64 {
        let mut vol = self.base_vol;

        let wing = (moneyness - 1.0).abs();
        if wing > self.inner_band {
            vol += self.wing_step;
        }
        if wing > self.outer_band {
            vol += self.wing_step;
        }

        if expiry < self.short_expiry_cutoff {
            vol += self.short_expiry_bump;
        }

        vol += noise;

        (vol * 100.0).max(self.floor_pct)
    }

    /// Smile value with jitter drawn from the given source, scaled by
    /// [`SyntheticSmile::jitter_amplitude`].
    pub fn iv_with<N: NoiseSource>(&self, moneyness: f64, expiry: f64, noise: &mut N) -> f64 {
        self.iv_with_noise(moneyness, expiry, noise.next_jitter() * self.jitter_amplitude)
    }
}

/// Smile value in percent under the default parameters.
///
/// `noise` defaults to 0 in spirit: pass `0.0` for the deterministic surface.
///
/// # Examples
/// ```rust
/// use optchain::vol::estimate_iv;
///
/// assert_eq!(estimate_iv(1.0, 0.25, 0.0), 20.0);
/// assert_eq!(estimate_iv(0.93, 0.25, 0.0), 25.0);
/// ```
pub fn estimate_iv(moneyness: f64, expiry: f64, noise: f64) -> f64 {
    SyntheticSmile::default().iv_with_noise(moneyness, expiry, noise)
}
