//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and simulation operations
//! - `GridError`: Errors from grid and matrix construction

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every layer above `pricer_core` converts its own error type into a
/// `PricingError` so callers can handle a single type at the boundary.
///
/// # Variants
/// - `InvalidInput`: Invalid model parameters or request arguments
/// - `NumericalInstability`: Computation produced a non-finite result
/// - `ModelFailure`: Model assumptions violated
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

/// Grid construction errors.
///
/// # Examples
/// ```
/// use pricer_core::types::GridError;
///
/// let err = GridError::InvalidResolution { got: 1, min: 2 };
/// assert_eq!(format!("{}", err), "Invalid grid resolution: got 1, need at least 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Too few points requested along an axis.
    #[error("Invalid grid resolution: got {got}, need at least {min}")]
    InvalidResolution {
        /// Number of points requested
        got: usize,
        /// Minimum number of points accepted
        min: usize,
    },

    /// Row data does not match the declared matrix shape.
    #[error("Shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// Element count implied by rows x cols
        expected: usize,
        /// Element count supplied
        got: usize,
    },

    /// Axis bound is NaN or infinite.
    #[error("Non-finite axis bound: {name} = {value}")]
    NonFiniteBound {
        /// Name of the offending bound
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<GridError> for PricingError {
    fn from(err: GridError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("bad strike".to_string());
        assert_eq!(format!("{}", err), "Invalid input: bad strike");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("d1 is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: d1 is NaN");
    }

    #[test]
    fn test_model_failure_display() {
        let err = PricingError::ModelFailure("negative variance".to_string());
        assert_eq!(format!("{}", err), "Model failure: negative variance");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
        let grid = GridError::InvalidResolution { got: 0, min: 2 };
        let _: &dyn std::error::Error = &grid;
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = GridError::ShapeMismatch {
            expected: 9,
            got: 8,
        };
        assert_eq!(
            format!("{}", err),
            "Shape mismatch: expected 9 elements, got 8"
        );
    }

    #[test]
    fn test_grid_error_to_pricing_error() {
        let err: PricingError = GridError::NonFiniteBound {
            name: "x_min",
            value: f64::NAN,
        }
        .into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("x_min")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
