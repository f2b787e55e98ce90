//! Path command implementation

use clap::Args;
use pricer_pricing::mc::{simulate_gbm_path, SimulatedPath};
use pricer_pricing::rng::PricerRng;
use serde::Serialize;
use tracing::info;

use super::{Inputs, ModelArgs};
use crate::config::CliConfig;
use crate::output::{Cell, Report, Table};
use crate::Result;

/// Arguments of the path command
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of time steps (default from config)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Annualised drift μ (default: the risk-free rate)
    #[arg(long, allow_negative_numbers = true)]
    pub drift: Option<f64>,
}

/// One simulated price path.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Number of time steps
    pub steps: usize,
    /// Drift used for the path
    pub drift: f64,
    /// Generator seed; pass it back with `--seed` to replay the path
    pub seed: u64,
    /// Times and prices
    pub path: SimulatedPath,
}

impl Report for PathReport {
    fn table(&self) -> Table {
        let mut t = Table::new(["step", "time", "price"]);
        for (i, (time, price)) in self.path.times.iter().zip(&self.path.prices).enumerate() {
            t.push([Cell::from(i), Cell::Num(*time), Cell::Num(*price)]);
        }
        t
    }
}

/// Run the path command
pub fn run(args: &PathArgs, config: &CliConfig) -> Result<PathReport> {
    let model = args.model.build()?;
    let steps = args.steps.unwrap_or(config.path_steps);
    let mut rng = match config.seed {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };

    let path = simulate_gbm_path(&model, steps, args.drift, &mut rng)?;
    info!(
        steps,
        seed = rng.seed(),
        terminal = path.terminal().unwrap_or(f64::NAN),
        "simulated price path"
    );

    Ok(PathReport {
        inputs: Inputs::of(&model),
        steps,
        drift: args.drift.unwrap_or(model.rate()),
        seed: rng.seed(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn args(steps: Option<usize>) -> PathArgs {
        PathArgs {
            model: ModelArgs {
                spot: 62.0,
                strike: 60.0,
                vol: 0.32,
                rate: 0.04,
                expiry: None,
                days: Some(40.0),
            },
            steps,
            drift: None,
        }
    }

    fn seeded(seed: u64) -> CliConfig {
        CliConfig {
            seed: Some(seed),
            path_steps: 25,
            ..Default::default()
        }
    }

    #[test]
    fn test_steps_default_to_config() {
        let report = run(&args(None), &seeded(7)).unwrap();
        assert_eq!(report.path.len(), 26);
        assert_eq!(report.table().rows.len(), 26);
        assert_eq!(report.path.prices[0], 62.0);
        assert_eq!(report.drift, 0.04);
    }

    #[test]
    fn test_seeded_paths_replay() {
        let a = run(&args(Some(10)), &seeded(42)).unwrap();
        let b = run(&args(Some(10)), &seeded(42)).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = run(&args(Some(0)), &seeded(1)).unwrap_err();
        assert!(matches!(err, CliError::Simulation(_)));
    }
}
