//! Monte Carlo trade simulation configuration.
//!
//! This module provides the configuration type and builder for
//! [`TradeSimulator`](super::TradeSimulator).

use super::error::SimulationError;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 1_000_000;

/// Steps per trial path when not set explicitly.
pub const DEFAULT_STEPS: usize = 1_000;

/// Trade simulation configuration.
///
/// Immutable configuration describing a bought call position and how many
/// independent trials to run. Use [`TradeSimulationConfigBuilder`] to
/// construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TradeSimulationConfig;
///
/// let config = TradeSimulationConfig::builder()
///     .premium(3.25)
///     .contracts(100)
///     .trials(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.trials(), 10_000);
/// assert_eq!(config.steps(), 1_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeSimulationConfig {
    /// Premium paid per unit.
    premium: f64,
    /// Number of contracts held.
    contracts: u32,
    /// Number of independent trials.
    trials: usize,
    /// Time steps per trial path.
    steps: usize,
    /// Path drift; `None` uses the model rate.
    drift: Option<f64>,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Run trials on the rayon pool.
    parallel: bool,
}

impl TradeSimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> TradeSimulationConfigBuilder {
        TradeSimulationConfigBuilder::default()
    }

    /// Returns the premium paid per unit.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Returns the number of contracts.
    #[inline]
    pub fn contracts(&self) -> u32 {
        self.contracts
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the number of time steps per trial.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the drift override.
    #[inline]
    pub fn drift(&self) -> Option<f64> {
        self.drift
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether trials run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if:
    /// - `trials` is 0 or greater than [`MAX_TRIALS`]
    /// - `steps` is 0 or greater than [`MAX_STEPS`]
    /// - `premium` is negative or not finite
    /// - `contracts` is 0
    /// - `drift` is set and not finite
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(SimulationError::InvalidTrialCount(self.trials));
        }
        if self.steps == 0 || self.steps > MAX_STEPS {
            return Err(SimulationError::InvalidStepCount(self.steps));
        }
        if !self.premium.is_finite() || self.premium < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "premium",
                value: format!("{} must be finite and non-negative", self.premium),
            });
        }
        if self.contracts == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "contracts",
                value: "must be at least 1".to_string(),
            });
        }
        if let Some(mu) = self.drift {
            if !mu.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name: "drift",
                    value: format!("{} must be finite", mu),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`TradeSimulationConfig`].
///
/// `premium`, `contracts` and `trials` are required; `steps` defaults to
/// [`DEFAULT_STEPS`] and trials run sequentially unless
/// [`parallel`](Self::parallel) is set.
#[derive(Clone, Debug, Default)]
pub struct TradeSimulationConfigBuilder {
    premium: Option<f64>,
    contracts: Option<u32>,
    trials: Option<usize>,
    steps: Option<usize>,
    drift: Option<f64>,
    seed: Option<u64>,
    parallel: bool,
}

impl TradeSimulationConfigBuilder {
    /// Sets the premium paid per unit.
    #[inline]
    pub fn premium(mut self, premium: f64) -> Self {
        self.premium = Some(premium);
        self
    }

    /// Sets the number of contracts.
    #[inline]
    pub fn contracts(mut self, contracts: u32) -> Self {
        self.contracts = Some(contracts);
        self
    }

    /// Sets the number of independent trials.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the number of time steps per trial path.
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the path drift μ.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Sets an optional drift; `None` keeps the model rate.
    #[inline]
    pub fn maybe_drift(mut self, drift: Option<f64>) -> Self {
        self.drift = drift;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Runs trials on the rayon pool.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if a required field is missing or
    /// [`TradeSimulationConfig::validate`] fails.
    pub fn build(self) -> Result<TradeSimulationConfig, SimulationError> {
        let premium = self.premium.ok_or(SimulationError::InvalidParameter {
            name: "premium",
            value: "must be specified".to_string(),
        })?;

        let contracts = self.contracts.ok_or(SimulationError::InvalidParameter {
            name: "contracts",
            value: "must be specified".to_string(),
        })?;

        let trials = self.trials.ok_or(SimulationError::InvalidParameter {
            name: "trials",
            value: "must be specified".to_string(),
        })?;

        let config = TradeSimulationConfig {
            premium,
            contracts,
            trials,
            steps: self.steps.unwrap_or(DEFAULT_STEPS),
            drift: self.drift,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
