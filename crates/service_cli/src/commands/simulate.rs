//! Simulate command implementation
//!
//! Monte Carlo P&L of a bought call. Table output shows summary statistics;
//! CSV lists every trial with the running equity.

use clap::Args;
use pricer_pricing::mc::{TradeSimulationConfig, TradeSimulationResult, TradeSimulator};
use serde::Serialize;
use tracing::info;

use super::{Inputs, ModelArgs};
use crate::config::CliConfig;
use crate::output::{Cell, Report, Table};
use crate::Result;

/// Arguments of the simulate command
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Premium paid per unit
    #[arg(long)]
    pub premium: f64,

    /// Number of contracts; each trial P&L is scaled by it
    #[arg(long)]
    pub contracts: u32,

    /// Number of Monte Carlo trials
    #[arg(long)]
    pub trials: usize,

    /// Time steps per path (default from config)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Annualised drift μ (default: the risk-free rate)
    #[arg(long, allow_negative_numbers = true)]
    pub drift: Option<f64>,
}

/// Monte Carlo trade outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SimulateReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Closed-form call value, for comparison with the premium
    pub fair_value: f64,
    /// Premium paid per unit
    pub premium: f64,
    /// Contracts held
    pub contracts: u32,
    /// Time steps per path
    pub steps: usize,
    /// Drift used for the paths
    pub drift: f64,
    /// Whether trials ran on the thread pool
    pub parallel: bool,
    /// Per-trial P&L, equity curve and statistics
    pub result: TradeSimulationResult,
}

impl Report for SimulateReport {
    fn table(&self) -> Table {
        let r = &self.result;
        let mut t = Table::metrics();
        self.inputs.push_metrics(&mut t);
        t.metric("fair value (call)", self.fair_value);
        t.metric("premium", self.premium);
        t.metric("contracts", u64::from(self.contracts));
        t.metric("trials", r.trials());
        t.metric("steps", self.steps);
        t.metric("drift", self.drift);
        t.metric("mode", if self.parallel { "parallel" } else { "sequential" });
        t.metric("trial seed", r.seed);
        t.metric("mean pnl", r.mean);
        t.metric("std dev", r.std_dev);
        t.metric("win rate", r.win_rate);
        t.metric("best", r.best);
        t.metric("worst", r.worst);
        t.metric("total pnl", r.total());
        t
    }

    fn csv_table(&self) -> Table {
        let mut t = Table::new(["trial", "pnl", "equity"]);
        for (i, (pnl, equity)) in self.result.pnls.iter().zip(&self.result.equity_curve).enumerate() {
            t.push([Cell::from(i + 1), Cell::Num(*pnl), Cell::Num(*equity)]);
        }
        t
    }
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, config: &CliConfig) -> Result<SimulateReport> {
    let model = args.model.build()?;
    let steps = args.steps.unwrap_or(config.path_steps);

    let sim_config = TradeSimulationConfig::builder()
        .premium(args.premium)
        .contracts(args.contracts)
        .trials(args.trials)
        .steps(steps)
        .maybe_drift(args.drift)
        .maybe_seed(config.seed)
        .parallel(config.parallel)
        .build()?;

    let result = TradeSimulator::new(sim_config).run_seeded(&model)?;
    info!(
        trials = result.trials(),
        mean_pnl = result.mean,
        win_rate = result.win_rate,
        seed = result.seed,
        "trade simulation complete"
    );

    Ok(SimulateReport {
        inputs: Inputs::of(&model),
        fair_value: model.call_price(),
        premium: args.premium,
        contracts: args.contracts,
        steps,
        drift: args.drift.unwrap_or(model.rate()),
        parallel: config.parallel,
        result,
    })
}
