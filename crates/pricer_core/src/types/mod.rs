//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing and grid operations
//!
//! # Re-exports
//!
//! [`PricingError`] and [`GridError`] are re-exported at this module level.

pub mod error;

pub use error::{GridError, PricingError};
