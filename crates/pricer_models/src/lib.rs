//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form Black-Scholes-Merton pricing for European options.
//!
//! This crate provides:
//! - Validated model construction with fail-fast domain errors
//! - Call/put fair values, breakevens, parity, intrinsic and time value
//! - Analytical Greeks and theta decay across the remaining life
//! - Trade analytics: theoretical P&L, trade edge, realised P&L
//! - Scenario sweeps over spot × volatility and expiry price × volatility
//!
//! ## Design Principles
//!
//! - **Immutable models**: every query reads from values computed once in
//!   [`analytical::BlackScholesModel::new`]
//! - **Scalar-first**: scenario grids evaluate the scalar pricer per cell
//! - **Builder pattern** for scenario bounds with sensible defaults
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::BlackScholesModel;
//!
//! let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
//! let forward_gap = 62.0 - 60.0 * (-0.04_f64 * 40.0 / 365.0).exp();
//! assert!((model.put_call_parity() - forward_gap).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod scenarios;
