//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `DomainError`: Model parameters outside the Black-Scholes domain

use pricer_core::types::PricingError;
use thiserror::Error;

/// Model parameters outside the domain of the Black-Scholes formulas.
///
/// Raised at construction time (and at every mesh point of a scenario grid).
/// Parameters are never clamped.
///
/// # Examples
/// ```
/// use pricer_models::analytical::DomainError;
///
/// let err = DomainError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Non-positive spot price; ln(S/K) is undefined.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-positive strike; ln(S/K) is undefined.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-positive time to expiry.
    #[error("Invalid time to expiry: t = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value (years)
        expiry: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("Non-finite parameter: {name} = {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// σ·√t evaluated to zero (underflow), so d1 would divide by zero.
    #[error("Degenerate diffusion: σ·√t = {vol_sqrt_t}")]
    DegenerateDiffusion {
        /// The evaluated σ·√t
        vol_sqrt_t: f64,
    },
}

impl From<DomainError> for PricingError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DegenerateDiffusion { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = DomainError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = DomainError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = DomainError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_non_finite_display() {
        let err = DomainError::NonFinite {
            name: "rate",
            value: f64::INFINITY,
        };
        assert_eq!(format!("{}", err), "Non-finite parameter: rate = inf");
    }

    #[test]
    fn test_invalid_input_to_pricing_error() {
        let pricing_err: PricingError = DomainError::InvalidExpiry { expiry: 0.0 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("expiry")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_degenerate_to_pricing_error() {
        let pricing_err: PricingError =
            DomainError::DegenerateDiffusion { vol_sqrt_t: 0.0 }.into();
        match pricing_err {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("σ·√t")),
            _ => panic!("Expected NumericalInstability variant"),
        }
    }
}
