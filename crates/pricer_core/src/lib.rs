//! # pricer_core: Numeric Foundation for the BSM Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Coordinate grids and dense matrices for scenario sweeps (`math::grid`)
//! - Running sums and sample statistics for simulation output (`math::series`)
//! - Error types: `PricingError`, `GridError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::{linspace, meshgrid};
//!
//! let spots = linspace(80.0_f64, 120.0, 5);
//! let vols = linspace(0.1_f64, 0.3, 3);
//! let (x, y) = meshgrid(&spots, &vols);
//! assert_eq!(x.shape(), (3, 5));
//! assert_eq!(y.get(2, 0), 0.3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Matrix` and `GridError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
