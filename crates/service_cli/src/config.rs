//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::output::OutputFormat;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "bsm.toml";

/// Environment variable names
pub mod env_vars {
    /// Log level override
    pub const LOG_LEVEL: &str = "BSM_LOG_LEVEL";
    /// Output format override
    pub const FORMAT: &str = "BSM_FORMAT";
    /// Simulation seed
    pub const SEED: &str = "BSM_SEED";
    /// Default steps for `path`
    pub const PATH_STEPS: &str = "BSM_PATH_STEPS";
    /// Default grid resolution
    pub const GRID_SIZE: &str = "BSM_GRID_SIZE";
}

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format
    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    /// Grid resolution below 2
    #[error("Invalid grid size: {0}. Must be at least 2")]
    InvalidGridSize(usize),

    /// Zero path steps
    #[error("Invalid path steps: {0}. Must be at least 1")]
    InvalidPathSteps(usize),

    /// Config file unreadable or malformed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable present but unparsable
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-model construction
    Trace,
    /// Grid and simulation summaries
    Debug,
    /// Command progress
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Output format
    pub format: OutputFormat,
    /// Seed for `path` and `simulate`; random when unset
    pub seed: Option<u64>,
    /// Default steps for `path`
    pub path_steps: usize,
    /// Default scenario grid resolution
    pub grid_size: usize,
    /// Run simulation trials in parallel
    pub parallel: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
            seed: None,
            path_steps: 1_000,
            grid_size: 10,
            parallel: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `BSM_*` variables present in the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies variables returned by `lookup`; absent keys leave fields untouched.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(env_vars::FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(seed) = lookup(env_vars::SEED) {
            self.seed = Some(parse_env(env_vars::SEED, &seed)?);
        }
        if let Some(steps) = lookup(env_vars::PATH_STEPS) {
            self.path_steps = parse_env(env_vars::PATH_STEPS, &steps)?;
        }
        if let Some(size) = lookup(env_vars::GRID_SIZE) {
            self.grid_size = parse_env(env_vars::GRID_SIZE, &size)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.path_steps == 0 {
            return Err(ConfigError::InvalidPathSteps(self.path_steps));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.parallel {
            self.parallel = true;
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", key, value)))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Force debug logging
    pub verbose: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Seed override
    pub seed: Option<u64>,
    /// Parallel trials
    pub parallel: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `bsm.toml` when present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                CliConfig::from_file(fallback)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
