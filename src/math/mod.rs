use std::f64::consts::SQRT_2;

/// Standard normal density.
pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Error function via the Abramowitz & Stegun 7.1.26 rational approximation.
///
/// Max absolute error ~1.5e-7. Odd symmetry is exact by construction; the
/// `exp(-x*x)` term underflows to 0 for large |x|, so the tails saturate at
/// ±1 without overflow.
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    // The coefficients sum to 0.999999999, not 1; shortcut keeps erf(0) == 0
    // and normal_cdf(0) == 0.5 exact.
    if x == 0.0 {
        return 0.0;
    }

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

/// Standard normal cumulative distribution, `0.5 * (1 + erf(x / sqrt(2)))`.
///
/// Output is in [0, 1] and monotone in `x`; accuracy is bounded by the [`erf`]
/// approximation (~7.5e-8 on the CDF). Callers needing tighter error bounds
/// should substitute a higher-precision implementation.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}
