//! Property tests for the closed-form pricer and scenario grids.
//!
//! Checks arbitrage bounds, parity and monotonicity over a wide parameter
//! range, plus the documented reference scenario end to end.

use approx::assert_relative_eq;
use pricer_models::analytical::{BlackScholesModel, SensitivityReport, SensitivitySelector};
use pricer_models::scenarios::GridBounds;
use proptest::prelude::*;

fn params() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        1.0_f64..500.0,
        1.0_f64..500.0,
        0.01_f64..1.5,
        -0.05_f64..0.15,
        1.0 / 365.0..5.0_f64,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_put_call_parity((s, k, sigma, r, t) in params()) {
        let model = BlackScholesModel::new(s, k, sigma, r, t).unwrap();
        let rhs = s - k * (-r * t).exp();
        prop_assert!((model.call_price() - model.put_price() - rhs).abs() <= 1e-9 * s.max(k));
    }

    #[test]
    fn test_price_bounds((s, k, sigma, r, t) in params()) {
        let model = BlackScholesModel::new(s, k, sigma, r, t).unwrap();
        let df = (-r * t).exp();
        let tol = 1e-9 * s.max(k);
        prop_assert!(model.call_price() >= (s - k * df).max(0.0) - tol);
        prop_assert!(model.call_price() <= s + tol);
        prop_assert!(model.put_price() >= (k * df - s).max(0.0) - tol);
        prop_assert!(model.put_price() <= k * df + tol);
    }

    #[test]
    fn test_monotone_in_spot((s, k, sigma, r, t) in params(), bump in 0.01_f64..10.0) {
        let lo = BlackScholesModel::new(s, k, sigma, r, t).unwrap();
        let hi = BlackScholesModel::new(s + bump, k, sigma, r, t).unwrap();
        prop_assert!(hi.call_price() >= lo.call_price());
        prop_assert!(hi.put_price() <= lo.put_price());
    }

    #[test]
    fn test_strictly_monotone_in_spot_near_the_money(
        k in 10.0_f64..500.0,
        log_moneyness in -0.5_f64..0.5,
        sigma in 0.2_f64..1.0,
        r in -0.05_f64..0.15,
        t in 1.0_f64..4.0,
        rel_bump in 0.005_f64..0.2
    ) {
        let s = k * log_moneyness.exp();
        let lo = BlackScholesModel::new(s, k, sigma, r, t).unwrap();
        let hi = BlackScholesModel::new(s * (1.0 + rel_bump), k, sigma, r, t).unwrap();
        prop_assert!(hi.call_price() > lo.call_price());
        prop_assert!(hi.put_price() < lo.put_price());
    }

    #[test]
    fn test_greek_signs((s, k, sigma, r, t) in params()) {
        let g = BlackScholesModel::new(s, k, sigma, r, t).unwrap().greeks();
        prop_assert!((0.0..=1.0).contains(&g.delta_call));
        prop_assert!((-1.0..=0.0).contains(&g.delta_put));
        prop_assert!((g.delta_call - g.delta_put - 1.0).abs() < 1e-12);
        prop_assert!(g.gamma >= 0.0);
        prop_assert!(g.vega >= 0.0);
        prop_assert!(g.rho_call >= 0.0);
        prop_assert!(g.rho_put <= 0.0);
    }
}

#[test]
fn test_reference_scenario() {
    let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();

    assert_relative_eq!(model.call_price(), 3.858949125174327, max_relative = 1e-10);
    assert_relative_eq!(model.put_price(), 1.5965110535188067, max_relative = 1e-10);
    assert_relative_eq!(model.breakeven_call(), 63.858949125174327, max_relative = 1e-10);
    assert_relative_eq!(model.breakeven_put(), 58.403488946481193, max_relative = 1e-10);

    match model.sensitivity_analysis(Some(SensitivitySelector::Delta)) {
        SensitivityReport::Delta { call, put } => {
            assert_relative_eq!(call, 0.6568491697390297, max_relative = 1e-10);
            assert_relative_eq!(put, call - 1.0, epsilon = 1e-15);
        }
        other => panic!("Expected Delta report, got {:?}", other),
    }

    let curve = model.theta_decay_curve().unwrap();
    assert_eq!(curve.len(), 40);

    let heatmap = model.price_heatmap(10, GridBounds::default()).unwrap();
    assert_eq!(heatmap.calls.shape(), (10, 10));
}

#[test]
fn test_heatmap_agrees_with_scalar_at_every_cell() {
    let model = BlackScholesModel::new(100.0, 95.0, 0.25, 0.03, 0.75).unwrap();
    let h = model
        .price_heatmap(7, GridBounds::default().x_range(80.0, 120.0).y_range(0.1, 0.5))
        .unwrap();

    for (i, &sigma) in h.volatilities.iter().enumerate() {
        for (j, &spot) in h.spots.iter().enumerate() {
            let cell = BlackScholesModel::new(spot, 95.0, sigma, 0.03, 0.75).unwrap();
            assert_eq!(h.calls.get(i, j), cell.call_price());
            assert_eq!(h.puts.get(i, j), cell.put_price());
        }
    }
}
