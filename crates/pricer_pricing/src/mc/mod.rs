//! Path simulation and Monte Carlo trade P&L.
//!
//! # Architecture
//!
//! ```text
//! TradeSimulator
//! ├── TradeSimulationConfig  (premium, contracts, trials, steps, drift, seed)
//! ├── PricerRng              (one generator, or one stream per parallel trial)
//! └── Orchestration
//!     ├── terminal_price()   (exact GBM solution at T)
//!     └── TradeSimulationResult::from_pnls()
//! ```
//!
//! [`simulate_gbm_path`] exposes the full path for charting; the trade
//! engine only needs the terminal price and reuses one increment buffer per
//! worker.
//!
//! # Example
//!
//! ```rust
//! use pricer_models::analytical::BlackScholesModel;
//! use pricer_pricing::mc::{TradeSimulationConfig, TradeSimulator};
//!
//! let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
//! let config = TradeSimulationConfig::builder()
//!     .premium(3.25)
//!     .contracts(100)
//!     .trials(1_000)
//!     .steps(100)
//!     .seed(7)
//!     .parallel(true)
//!     .build()
//!     .unwrap();
//!
//! let result = TradeSimulator::new(config).run_seeded(&model).unwrap();
//! assert_eq!(result.equity_curve.len(), 1_000);
//! ```

mod config;
mod error;
mod paths;
mod trade;

pub use config::{
    TradeSimulationConfig, TradeSimulationConfigBuilder, DEFAULT_STEPS, MAX_STEPS, MAX_TRIALS,
};
pub use error::SimulationError;
pub use paths::{simulate_gbm_path, GbmParams, SimulatedPath};
pub use trade::{TradeSimulationResult, TradeSimulator};
