//! Monte Carlo P&L of a bought call held to expiry.
//!
//! Each trial simulates one GBM path, takes the terminal price and books
//! `(max(S_T - K, 0) - premium) × contracts`. The premium is paid whether
//! or not the option finishes in the money.

use pricer_core::math::{cumulative_sum, mean, sample_std_dev};
use pricer_models::analytical::BlackScholesModel;
use rayon::prelude::*;

use super::config::TradeSimulationConfig;
use super::error::SimulationError;
use super::paths::{terminal_price, GbmParams};
use crate::rng::PricerRng;

/// Aggregated outcome of a trade simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeSimulationResult {
    /// P&L of each trial, in trial order
    pub pnls: Vec<f64>,
    /// Mean P&L across trials
    pub mean: f64,
    /// Cumulative P&L (equity curve), in trial order
    pub equity_curve: Vec<f64>,
    /// Sample standard deviation of trial P&L; 0 for a single trial
    pub std_dev: f64,
    /// Fraction of trials with positive P&L
    pub win_rate: f64,
    /// Best trial P&L
    pub best: f64,
    /// Worst trial P&L
    pub worst: f64,
    /// Seed drawn from the caller's generator at the start of the run.
    /// Sequential trials replay from `PricerRng::from_seed(seed)`; parallel
    /// trial `i` replays from `PricerRng::for_stream(seed, i)`.
    pub seed: u64,
}

impl TradeSimulationResult {
    fn from_pnls(pnls: Vec<f64>, seed: u64) -> Self {
        let n = pnls.len() as f64;
        let wins = pnls.iter().filter(|&&p| p > 0.0).count() as f64;
        let best = pnls.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = pnls.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            mean: mean(&pnls).unwrap_or(0.0),
            equity_curve: cumulative_sum(&pnls),
            std_dev: sample_std_dev(&pnls).unwrap_or(0.0),
            win_rate: wins / n,
            best,
            worst,
            seed,
            pnls,
        }
    }

    /// Number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.pnls.len()
    }

    /// Total P&L, the last point of the equity curve.
    #[inline]
    pub fn total(&self) -> f64 {
        self.equity_curve.last().copied().unwrap_or(0.0)
    }
}

/// Monte Carlo trade simulator.
///
/// # Reproducibility
///
/// Every run first draws one seed from the supplied generator. Sequential
/// runs then advance a single generator built from that seed trial by
/// trial; parallel runs give trial `i` its own stream
/// [`PricerRng::for_stream`]`(seed, i)` and collect results in trial order.
/// The drawn seed is reported in [`TradeSimulationResult::seed`], so a run
/// can be replayed even when the caller's generator had already advanced.
/// A fixed seed gives bit-identical output in either mode, though the two
/// modes produce different samples from each other.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::BlackScholesModel;
/// use pricer_pricing::mc::{TradeSimulationConfig, TradeSimulator};
///
/// let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
/// let config = TradeSimulationConfig::builder()
///     .premium(3.25)
///     .contracts(100)
///     .trials(200)
///     .steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = TradeSimulator::new(config).run_seeded(&model).unwrap();
/// assert_eq!(result.pnls.len(), 200);
/// assert!(result.worst >= -325.0 - 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct TradeSimulator {
    config: TradeSimulationConfig,
}

impl TradeSimulator {
    /// Creates a simulator for a validated configuration.
    #[inline]
    pub fn new(config: TradeSimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &TradeSimulationConfig {
        &self.config
    }

    /// Runs with a generator seeded from the configuration, or from OS
    /// entropy when no seed is configured.
    ///
    /// # Errors
    ///
    /// See [`TradeSimulator::run`].
    pub fn run_seeded(
        &self,
        model: &BlackScholesModel,
    ) -> Result<TradeSimulationResult, SimulationError> {
        let mut rng = match self.config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };
        self.run(model, &mut rng)
    }

    /// Runs every trial against `model`, drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if the configuration does not validate.
    pub fn run(
        &self,
        model: &BlackScholesModel,
        rng: &mut PricerRng,
    ) -> Result<TradeSimulationResult, SimulationError> {
        self.config.validate()?;
        let steps = self.config.steps();

        let params = GbmParams::from_model(model, self.config.drift());
        let strike = model.strike();
        let premium = self.config.premium();
        let contracts = f64::from(self.config.contracts());
        let trial_pnl = |terminal: f64| ((terminal - strike).max(0.0) - premium) * contracts;

        let trials = self.config.trials();
        let seed = rng.next_seed();
        let pnls: Vec<f64> = if self.config.parallel() {
            (0..trials)
                .into_par_iter()
                .map_init(
                    || vec![0.0; steps],
                    |buffer, i| {
                        let mut stream = PricerRng::for_stream(seed, i);
                        trial_pnl(terminal_price(&params, buffer, &mut stream))
                    },
                )
                .collect()
        } else {
            let mut run_rng = PricerRng::from_seed(seed);
            let mut buffer = vec![0.0; steps];
            (0..trials)
                .map(|_| trial_pnl(terminal_price(&params, &mut buffer, &mut run_rng)))
                .collect()
        };

        let result = TradeSimulationResult::from_pnls(pnls, seed);

        tracing::debug!(
            trials,
            steps,
            parallel = self.config.parallel(),
            drift = params.drift,
            mean_pnl = result.mean,
            win_rate = result.win_rate,
            "trade simulation finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_model() -> BlackScholesModel {
        BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap()
    }

    fn config(trials: usize, parallel: bool) -> TradeSimulationConfig {
        TradeSimulationConfig::builder()
            .premium(3.25)
            .contracts(100)
            .trials(trials)
            .steps(100)
            .seed(2024)
            .parallel(parallel)
            .build()
            .unwrap()
    }

    #[test]
    fn test_result_shapes() {
        let result = TradeSimulator::new(config(250, false))
            .run_seeded(&reference_model())
            .unwrap();
        assert_eq!(result.trials(), 250);
        assert_eq!(result.equity_curve.len(), 250);
        assert_relative_eq!(result.total(), result.pnls.iter().sum::<f64>(), max_relative = 1e-12);
        assert_relative_eq!(result.mean, result.total() / 250.0, max_relative = 1e-9);
    }

    #[test]
    fn test_loss_capped_at_premium() {
        let result = TradeSimulator::new(config(500, false))
            .run_seeded(&reference_model())
            .unwrap();
        for &p in &result.pnls {
            assert!(p >= -325.0 - 1e-9);
        }
        assert!(result.worst >= -325.0 - 1e-9);
        assert!(result.best >= result.worst);
        assert!((0.0..=1.0).contains(&result.win_rate));
    }

    #[test]
    fn test_sequential_reproducible() {
        let sim = TradeSimulator::new(config(300, false));
        let a = sim.run_seeded(&reference_model()).unwrap();
        let b = sim.run_seeded(&reference_model()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, PricerRng::from_seed(2024).next_seed());
    }

    #[test]
    fn test_parallel_reproducible() {
        let sim = TradeSimulator::new(config(300, true));
        let a = sim.run_seeded(&reference_model()).unwrap();
        let b = sim.run_seeded(&reference_model()).unwrap();
        assert_eq!(a.pnls, b.pnls);
        assert_eq!(a.equity_curve, b.equity_curve);
    }

    #[test]
    fn test_parallel_trials_use_own_streams() {
        let model = reference_model();
        let sim = TradeSimulator::new(config(16, true));
        let mut rng = PricerRng::from_seed(2024);
        let result = sim.run(&model, &mut rng).unwrap();

        let params = GbmParams::from_model(&model, None);
        let mut buffer = vec![0.0; 100];
        for (i, &pnl) in result.pnls.iter().enumerate() {
            let mut stream = PricerRng::for_stream(result.seed, i);
            let s_t = terminal_price(&params, &mut buffer, &mut stream);
            assert_eq!(pnl, ((s_t - 60.0).max(0.0) - 3.25) * 100.0);
        }
    }

    #[test]
    fn test_sequential_matches_manual_trials() {
        let model = reference_model();
        let sim = TradeSimulator::new(config(5, false));
        let result = sim.run(&model, &mut PricerRng::from_seed(1)).unwrap();

        let params = GbmParams::from_model(&model, None);
        let mut rng = PricerRng::from_seed(result.seed);
        let mut buffer = vec![0.0; 100];
        for &pnl in &result.pnls {
            let s_t = terminal_price(&params, &mut buffer, &mut rng);
            assert_eq!(pnl, ((s_t - 60.0).max(0.0) - 3.25) * 100.0);
        }
    }

    #[test]
    fn test_reported_seed_replays_advanced_generator() {
        let model = reference_model();
        let params = GbmParams::from_model(&model, None);

        for parallel in [false, true] {
            let sim = TradeSimulator::new(config(8, parallel));
            let mut rng = PricerRng::from_seed(77);
            let first = sim.run(&model, &mut rng).unwrap();
            let second = sim.run(&model, &mut rng).unwrap();
            assert_ne!(first.seed, second.seed);
            assert_ne!(first.pnls, second.pnls);

            let mut sequential = PricerRng::from_seed(second.seed);
            let mut buffer = vec![0.0; 100];
            for (i, &pnl) in second.pnls.iter().enumerate() {
                let s_t = if parallel {
                    terminal_price(&params, &mut buffer, &mut PricerRng::for_stream(second.seed, i))
                } else {
                    terminal_price(&params, &mut buffer, &mut sequential)
                };
                assert_eq!(pnl, ((s_t - 60.0).max(0.0) - 3.25) * 100.0);
            }
        }
    }

    #[test]
    fn test_single_trial_statistics() {
        let result = TradeSimulator::new(config(1, false))
            .run_seeded(&reference_model())
            .unwrap();
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.best, result.worst);
        assert_eq!(result.mean, result.pnls[0]);
    }

    #[test]
    fn test_zero_premium_never_loses() {
        let cfg = TradeSimulationConfig::builder()
            .premium(0.0)
            .contracts(1)
            .trials(200)
            .steps(20)
            .seed(3)
            .build()
            .unwrap();
        let result = TradeSimulator::new(cfg).run_seeded(&reference_model()).unwrap();
        assert!(result.pnls.iter().all(|&p| p >= 0.0));
    }
}
