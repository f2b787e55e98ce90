//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton toolkit:
//! - Fair values, breakevens, parity, intrinsic and time value
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) and a selector query
//! - Theta decay across the remaining life of the option
//! - Trade analytics: theoretical P&L, trade edge, realised P&L
//!
//! ## Design Principles
//!
//! - **One derivation path**: [`DerivedQuantities::compute`] feeds every output
//! - **Fail fast**: invalid inputs return [`DomainError`], never clamped values
//! - **Numerical accuracy**: erfc-based CDF accurate to double precision

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod theta_decay;
pub mod trade;

// Re-export main types at module level
pub use black_scholes::{BlackScholesModel, DerivedQuantities, ModelParameters};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::DomainError;
pub use greeks::{Greeks, SensitivityReport, SensitivitySelector, Thetas, DAYS_PER_YEAR};
pub use theta_decay::{theta_time_grid, ThetaDecayCurve};
pub use trade::{StatLine, TradeSummary};
