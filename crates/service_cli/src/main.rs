//! bsm - Black-Scholes-Merton pricing from the command line
//!
//! Parses arguments, layers configuration (defaults < `bsm.toml` < `BSM_*`
//! environment < flags), initialises logging and runs one command.

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::config::{build_config, CliConfig, LogLevel};
use service_cli::{execute, Cli};

/// `RUST_LOG` wins unless `--verbose` is given; otherwise the configured level.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let fallback = || EnvFilter::new(config.log_level.as_filter_str());
    let filter = if verbose {
        EnvFilter::new(LogLevel::Debug.as_filter_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    };

    // Logs go to stderr so JSON and CSV on stdout stay machine-readable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli.config_args()).context("failed to load configuration")?;
    init_tracing(&config, cli.verbose);
    debug!(?config, command = cli.command.name(), "configuration loaded");

    let stdout = std::io::stdout();
    if let Err(e) = execute(&cli.command, &config, stdout.lock()) {
        error!(error = %e, command = cli.command.name(), "command failed");
        return Err(e.into());
    }
    Ok(())
}
