//! Property tests for simulated paths and trade P&L bounds.

use pricer_models::analytical::BlackScholesModel;
use pricer_pricing::mc::{simulate_gbm_path, TradeSimulationConfig, TradeSimulator};
use pricer_pricing::rng::PricerRng;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_path_shape_and_positivity(
        spot in 1.0_f64..500.0,
        vol in 0.01_f64..1.5,
        rate in -0.05_f64..0.15,
        expiry in 0.01_f64..5.0,
        steps in 1usize..200,
        seed in any::<u64>()
    ) {
        let model = BlackScholesModel::new(spot, spot, vol, rate, expiry).unwrap();
        let path = simulate_gbm_path(&model, steps, None, &mut PricerRng::from_seed(seed)).unwrap();

        prop_assert_eq!(path.len(), steps + 1);
        prop_assert_eq!(path.times.len(), steps + 1);
        prop_assert_eq!(path.prices[0], spot);
        prop_assert_eq!(path.times[0], 0.0);
        prop_assert_eq!(path.times[steps], expiry);
        prop_assert!(path.prices.iter().all(|p| p.is_finite() && *p > 0.0));
    }

    #[test]
    fn test_trial_loss_never_exceeds_premium(
        premium in 0.0_f64..20.0,
        contracts in 1u32..500,
        parallel in any::<bool>(),
        seed in any::<u64>()
    ) {
        let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
        let config = TradeSimulationConfig::builder()
            .premium(premium)
            .contracts(contracts)
            .trials(32)
            .steps(4)
            .seed(seed)
            .parallel(parallel)
            .build()
            .unwrap();
        let result = TradeSimulator::new(config).run_seeded(&model).unwrap();

        let floor = -premium * f64::from(contracts);
        prop_assert!(result.pnls.iter().all(|&p| p >= floor - 1e-9));
        prop_assert!(result.win_rate >= 0.0 && result.win_rate <= 1.0);
        prop_assert!(result.worst - 1e-6 <= result.mean && result.mean <= result.best + 1e-6);
    }
}
