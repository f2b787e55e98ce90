//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for the path
//! simulator and the Monte Carlo trade engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Independent streams**: [`PricerRng::for_stream`] derives one generator
//!   per parallel trial from a base seed and the trial index
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling conventions
//! ("initialise", "randomise", "behaviour").
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::{stream_seed, PricerRng};
