//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing drives stochastic simulation on top of the closed-form
//! model in Layer 2:
//! - Exact-solution geometric Brownian motion paths
//! - Monte Carlo P&L of a bought call over many independent trials
//! - Seeded, reproducible random number generation
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `linspace`, cumulative sums and summary statistics
//! - Layer 2 (pricer_models): `BlackScholesModel` supplies S, K, σ, r and t
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::BlackScholesModel;
//! use pricer_pricing::mc::simulate_gbm_path;
//! use pricer_pricing::rng::PricerRng;
//!
//! let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let path = simulate_gbm_path(&model, 250, None, &mut rng).unwrap();
//! assert_eq!(path.prices.len(), 251);
//! assert_eq!(path.prices[0], 62.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Path simulation and Monte Carlo trade P&L
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{
    simulate_gbm_path, SimulatedPath, SimulationError, TradeSimulationConfig,
    TradeSimulationResult, TradeSimulator,
};
pub use rng::PricerRng;
