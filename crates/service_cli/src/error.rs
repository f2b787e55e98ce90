//! CLI error types

use pricer_core::types::PricingError;
use pricer_models::analytical::DomainError;
use pricer_models::scenarios::ScenarioError;
use pricer_pricing::mc::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Model parameters outside the pricing domain
    #[error("Model error: {0}")]
    Domain(#[from] DomainError),

    /// Scenario grid could not be evaluated
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Simulation failed
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Pricing error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON serialisation failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
