// Greeks contracts: reference values at the Hull ATM benchmark, delta bounds,
// call-put parity of gamma/vega, quoting conventions, and the degenerate
// step-function boundary.
//
// Benchmark: S = 100, K = 100, r = 0.05, sigma = 0.20, T = 1.0
//   d1 = 0.35, d2 = 0.15, phi(0.35) = 0.375240
//   delta_call = N(0.35)                       =  0.636831
//   gamma      = phi(d1) / (S * sigma * √T)    =  0.0187620
//   vega       = S * phi(d1) * √T / 100        =  0.375240   (per vol point)
//   theta_call = [-S*phi(d1)*sigma/(2√T) - r*K*e^{-rT}*N(d2)] / 365
//              = -6.414026 / 365               = -0.0175727  (per calendar day)
//   theta_put  = [-3.752398 + 4.756147*N(-0.15)] / 365
//              = -1.657881 / 365               = -0.0045421

use approx::assert_abs_diff_eq;
use optchain::core::{OptionQuote, OptionType, PricingError};
use optchain::greeks::{black_scholes_greeks, compute_greeks};

fn atm_quote() -> OptionQuote {
    OptionQuote::new(100.0, 100.0, 0.05, 0.20, 1.0)
}

#[test]
fn hull_atm_reference_values() {
    let call = compute_greeks(&atm_quote(), OptionType::Call).unwrap();
    let put = compute_greeks(&atm_quote(), OptionType::Put).unwrap();

    assert_abs_diff_eq!(call.delta, 0.636831, epsilon = 1e-4);
    assert_abs_diff_eq!(put.delta, -0.363169, epsilon = 1e-4);
    assert_abs_diff_eq!(call.gamma, 0.0187620, epsilon = 1e-5);
    assert_abs_diff_eq!(call.vega, 0.375240, epsilon = 1e-4);
    assert_abs_diff_eq!(call.theta, -0.0175727, epsilon = 1e-5);
    assert_abs_diff_eq!(put.theta, -0.0045421, epsilon = 1e-5);
}

#[test]
fn delta_bounds_hold_across_grid() {
    for s in [40.0, 80.0, 100.0, 130.0, 300.0] {
        for k in [50.0, 100.0, 200.0] {
            for sigma in [0.05, 0.2, 0.8] {
                for t in [0.01, 0.5, 3.0] {
                    let call = black_scholes_greeks(OptionType::Call, s, k, 0.05, sigma, t);
                    let put = black_scholes_greeks(OptionType::Put, s, k, 0.05, sigma, t);
                    assert!(
                        (0.0..=1.0).contains(&call.delta),
                        "call delta {} out of bounds at s={s} k={k}",
                        call.delta
                    );
                    assert!(
                        (-1.0..=0.0).contains(&put.delta),
                        "put delta {} out of bounds at s={s} k={k}",
                        put.delta
                    );
                }
            }
        }
    }
}

#[test]
fn gamma_and_vega_shared_between_sides() {
    for s in [80.0, 100.0, 120.0] {
        for t in [0.05, 1.0] {
            let call = black_scholes_greeks(OptionType::Call, s, 100.0, 0.065, 0.25, t);
            let put = black_scholes_greeks(OptionType::Put, s, 100.0, 0.065, 0.25, t);
            assert_eq!(call.gamma, put.gamma);
            assert_eq!(call.vega, put.vega);
            assert!(call.gamma >= 0.0);
            assert!(call.vega >= 0.0);
        }
    }
}

#[test]
fn degenerate_boundary_is_a_step_function() {
    // ITM at expiry: delta pins to the intrinsic slope.
    let itm_call = black_scholes_greeks(OptionType::Call, 110.0, 100.0, 0.05, 0.2, 0.0);
    assert_eq!(itm_call.delta, 1.0);
    assert_eq!(itm_call.gamma, 0.0);
    assert_eq!(itm_call.theta, 0.0);
    assert_eq!(itm_call.vega, 0.0);

    let otm_call = black_scholes_greeks(OptionType::Call, 90.0, 100.0, 0.05, 0.2, 0.0);
    assert_eq!(otm_call.delta, 0.0);

    let itm_put = black_scholes_greeks(OptionType::Put, 90.0, 100.0, 0.05, 0.2, 0.0);
    assert_eq!(itm_put.delta, -1.0);

    let otm_put = black_scholes_greeks(OptionType::Put, 110.0, 100.0, 0.05, 0.2, 0.0);
    assert_eq!(otm_put.delta, 0.0);

    // Zero vol behaves the same as zero expiry.
    let zero_vol = black_scholes_greeks(OptionType::Call, 110.0, 100.0, 0.05, 0.0, 1.0);
    assert_eq!(zero_vol.delta, 1.0);
    assert_eq!(zero_vol.vega, 0.0);
}

#[test]
fn theta_is_negative_for_long_options_at_the_money() {
    let call = black_scholes_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 0.5);
    let put = black_scholes_greeks(OptionType::Put, 100.0, 100.0, 0.05, 0.2, 0.5);
    assert!(call.theta < 0.0);
    assert!(put.theta < 0.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let quote = OptionQuote::new(0.0, 100.0, 0.05, 0.2, 1.0);
    match compute_greeks(&quote, OptionType::Put) {
        Err(PricingError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
