//! Error types for path simulation and the Monte Carlo trade engine.
//!
//! Configuration errors are raised at build time; model domain errors are
//! wrapped so callers see one error type from this crate.

use pricer_core::types::PricingError;
use pricer_models::analytical::DomainError;
use thiserror::Error;

use super::config::{MAX_STEPS, MAX_TRIALS};

/// Simulation error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Step count outside [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Trial count outside [1, MAX_TRIALS].
    #[error("Invalid trial count {0}: must be in range [1, {max}]", max = MAX_TRIALS)]
    InvalidTrialCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The model rejected its inputs.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::Domain(e) => e.into(),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
