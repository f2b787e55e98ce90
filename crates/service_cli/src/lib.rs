//! # bsm: Command Line Front End
//!
//! Exposes the Black-Scholes-Merton engine as the `bsm` binary.
//!
//! # Commands
//!
//! - `bsm price` - Fair values, breakevens, parity, intrinsic and time value
//! - `bsm greeks` - Delta, gamma, vega, rho and theta
//! - `bsm theta-decay` - Theta across the remaining life
//! - `bsm heatmap` - Fair values over spot × volatility
//! - `bsm pnl-chart` - Theoretical P&L over expiry price × volatility
//! - `bsm path` - One simulated GBM price path
//! - `bsm simulate` - Monte Carlo P&L of a bought call
//! - `bsm edge` - Model value against dealer quotes
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate only parses arguments, layers
//! configuration and renders reports. All numerics live in `pricer_models`
//! and `pricer_pricing`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

use commands::edge::EdgeArgs;
use commands::path::PathArgs;
use commands::simulate::SimulateArgs;
use commands::{GridArgs, ModelArgs};
use config::{CliArgs, CliConfig};
use output::{emit, OutputFormat};

/// Black-Scholes-Merton option pricing and simulation
#[derive(Parser, Debug)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (default: bsm.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seed for simulated paths and trials
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Run Monte Carlo trials on the thread pool
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flags that take part in configuration layering.
    pub fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            format: self.format,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a European call and put
    Price {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Analytical Greeks and theta
    Greeks {
        #[command(flatten)]
        model: ModelArgs,

        /// Only one sensitivity: d(elta), g(amma), v(ega) or r(ho)
        #[arg(long, value_name = "CODE")]
        only: Option<String>,
    },

    /// Theta sampled daily until expiry
    ThetaDecay {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Call/put fair values over spot × volatility
    Heatmap {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Theoretical P&L over expiry price × volatility
    PnlChart {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Simulate one GBM price path
    Path(PathArgs),

    /// Monte Carlo P&L of a bought call
    Simulate(SimulateArgs),

    /// Trade edge and realised P&L against dealer quotes
    Edge(EdgeArgs),
}

impl Commands {
    /// Command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Price { .. } => "price",
            Commands::Greeks { .. } => "greeks",
            Commands::ThetaDecay { .. } => "theta-decay",
            Commands::Heatmap { .. } => "heatmap",
            Commands::PnlChart { .. } => "pnl-chart",
            Commands::Path(_) => "path",
            Commands::Simulate(_) => "simulate",
            Commands::Edge(_) => "edge",
        }
    }
}

/// Runs `command` and writes its report to `out` in the configured format.
pub fn execute<W: Write>(command: &Commands, config: &CliConfig, out: W) -> Result<()> {
    let format = config.format;
    match command {
        Commands::Price { model } => emit(&commands::price::run(model)?, format, out),
        Commands::Greeks { model, only } => {
            emit(&commands::greeks::run(model, only.as_deref())?, format, out)
        }
        Commands::ThetaDecay { model } => emit(&commands::theta_decay::run(model)?, format, out),
        Commands::Heatmap { model, grid } => {
            emit(&commands::heatmap::run(model, grid, config)?, format, out)
        }
        Commands::PnlChart { model, grid } => {
            emit(&commands::pnl_chart::run(model, grid, config)?, format, out)
        }
        Commands::Path(args) => emit(&commands::path::run(args, config)?, format, out),
        Commands::Simulate(args) => emit(&commands::simulate::run(args, config)?, format, out),
        Commands::Edge(args) => emit(&commands::edge::run(args)?, format, out),
    }
}
