// Chain-level aggregate contracts: max pain by direct enumeration, exact
// put-call ratio, ATM implied vol lookup and fallback, and the full per-strike
// analytics scan against a market snapshot.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use optchain::chain::{
    analyze, strike_ladder, ChainSnapshot, StrikeRow, DEFAULT_ATM_IV_PCT,
};
use optchain::core::{from_json, to_json, PricingError};
use optchain::market::Market;
use optchain::vol::SyntheticSmile;

fn row(strike: f64, call_oi: f64, put_oi: f64) -> StrikeRow {
    StrikeRow::new(strike, call_oi, put_oi, call_oi * 0.2, put_oi * 0.2, 22.0, 23.0)
}

// Writer payout at each candidate settlement:
//   at 100: 100*(110-100) + 200*(120-100) = 5000
//   at 110: 200*(120-110) + 200*(110-100) = 4000   <- minimum
//   at 120: 100*(120-110) + 200*(120-100) = 5000
#[test]
fn max_pain_matches_direct_enumeration() {
    let chain = ChainSnapshot::new(vec![
        row(100.0, 50.0, 200.0),
        row(110.0, 100.0, 100.0),
        row(120.0, 200.0, 50.0),
    ])
    .unwrap();

    assert_eq!(chain.writer_payout(100.0), 5000.0);
    assert_eq!(chain.writer_payout(110.0), 4000.0);
    assert_eq!(chain.writer_payout(120.0), 5000.0);

    // Cross-check the scan against brute-force enumeration.
    let brute = chain
        .rows()
        .iter()
        .map(|r| (r.strike, chain.writer_payout(r.strike)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap()
        .0;
    assert_eq!(chain.max_pain().unwrap(), brute);
    assert_eq!(chain.max_pain().unwrap(), 110.0);
}

#[test]
fn put_call_ratio_is_exact() {
    let chain = ChainSnapshot::new(vec![
        row(100.0, 400_000.0, 500_000.0),
        row(110.0, 350_000.0, 450_000.0),
        row(120.0, 250_000.0, 300_000.0),
    ])
    .unwrap();
    assert_eq!(chain.total_call_oi(), 1_000_000.0);
    assert_eq!(chain.total_put_oi(), 1_250_000.0);
    assert_eq!(chain.put_call_ratio().unwrap(), 1.25);
}

#[test]
fn put_call_ratio_undefined_with_zero_call_oi() {
    let chain = ChainSnapshot::new(vec![row(100.0, 0.0, 500.0)]).unwrap();
    match chain.put_call_ratio() {
        Err(PricingError::AggregateUndefined(_)) => {}
        other => panic!("expected AggregateUndefined, got {other:?}"),
    }
}

#[test]
fn atm_iv_uses_nearest_strike() {
    let chain = ChainSnapshot::new(vec![
        StrikeRow::new(100.0, 1.0, 1.0, 0.0, 0.0, 18.0, 20.0),
        StrikeRow::new(110.0, 1.0, 1.0, 0.0, 0.0, 24.0, 26.0),
    ])
    .unwrap();
    // Spot 104 is nearer 100: mean of 18 and 20.
    assert_eq!(chain.atm_iv(104.0), 19.0);
    // Spot 106 is nearer 110: mean of 24 and 26.
    assert_eq!(chain.atm_iv(106.0), 25.0);
    // Empty chain falls back to the named default.
    let empty = ChainSnapshot::new(vec![]).unwrap();
    assert_eq!(empty.atm_iv(104.0), DEFAULT_ATM_IV_PCT);
}

#[test]
fn metrics_bundles_all_three_aggregates() {
    let chain = ChainSnapshot::new(vec![
        row(100.0, 50.0, 200.0),
        row(110.0, 100.0, 100.0),
        row(120.0, 200.0, 50.0),
    ])
    .unwrap();
    let metrics = chain.metrics(110.0).unwrap();
    assert_eq!(metrics.max_pain_strike, 110.0);
    assert_eq!(metrics.put_call_ratio, 1.0);
    assert_eq!(metrics.atm_iv_pct, 22.5);
}

#[test]
fn analyze_prices_every_strike_consistently() {
    let market = Market::builder()
        .spot(19_850.0)
        .rate(0.065)
        .smile(SyntheticSmile::default())
        .build()
        .unwrap();

    let rows: Vec<StrikeRow> = strike_ladder(19_850.0, 50.0, 10)
        .into_iter()
        .map(|k| StrikeRow::new(k, 10_000.0, 10_000.0, 500.0, 500.0, 20.0, 20.0))
        .collect();
    let chain = ChainSnapshot::new(rows).unwrap();

    let expiry = 0.05;
    let analytics = analyze(&market, &chain, expiry).unwrap();
    assert_eq!(analytics.len(), 21);

    let df = (-market.rate * expiry).exp();
    for (i, a) in analytics.iter().enumerate() {
        // Parity per strike, against the strike-specific smile vol.
        let forward = market.spot - a.strike * df;
        assert_relative_eq!(
            a.price.call - a.price.put,
            forward,
            max_relative = 1e-6,
            epsilon = 1e-6
        );
        assert!(a.price.call >= 0.0 && a.price.put >= 0.0);
        assert!((0.0..=1.0).contains(&a.call_greeks.delta));
        assert!((-1.0..=0.0).contains(&a.put_greeks.delta));
        assert_eq!(a.call_greeks.gamma, a.put_greeks.gamma);
        assert_eq!(a.call_greeks.vega, a.put_greeks.vega);

        // Call value decreases as strike climbs.
        if i > 0 {
            assert!(a.price.call <= analytics[i - 1].price.call);
        }
    }

    // The ladder spans ~±2.5% of spot; with sigma*sqrt(T) ~ 5% that puts the
    // wing deltas well apart without pinning to 0/1.
    let first = analytics.first().unwrap().call_greeks.delta;
    let last = analytics.last().unwrap().call_greeks.delta;
    assert!(first > 0.65, "ITM wing delta too low: {first}");
    assert!(last < 0.40, "OTM wing delta too high: {last}");
    assert!(first > last);
}

#[test]
fn snapshot_round_trips_through_json() {
    let chain = ChainSnapshot::new(vec![row(100.0, 50.0, 200.0), row(110.0, 100.0, 100.0)]).unwrap();
    let json = to_json(&chain).unwrap();
    let decoded: ChainSnapshot = from_json(&json).unwrap();
    assert_eq!(decoded, chain);
}

#[test]
fn atm_reference_premiums_are_plausible() {
    // NIFTY-style snapshot: spot 19850, 6.5% rate, 20% flat vol, ~18 days.
    let market = Market::builder()
        .spot(19_850.0)
        .rate(0.065)
        .flat_vol(0.20)
        .build()
        .unwrap();
    let chain = ChainSnapshot::new(vec![row(19_850.0, 1.0, 1.0)]).unwrap();
    let analytics = analyze(&market, &chain, 0.05).unwrap();
    let atm = &analytics[0];

    // ATM straddle premium around 3.6% of spot at these parameters
    // (~ 0.7979 * sigma * sqrt(T) plus a small rate effect).
    let straddle = atm.price.call + atm.price.put;
    assert_abs_diff_eq!(straddle / market.spot, 0.037, epsilon = 0.01);
    assert!(atm.call_greeks.delta > 0.5 && atm.call_greeks.delta < 0.62);
}
