//! Path generation for Monte Carlo simulation.
//!
//! Paths follow the exact solution of geometric Brownian motion rather than
//! an Euler-Maruyama recursion, so there is no discretisation bias at any
//! step count:
//!
//! ```text
//! S(tᵢ) = S₀ × exp((μ - ½σ²)tᵢ + σW(tᵢ))
//! ```
//!
//! W is built by cumulating `n_steps` increments `√dt × Z` with `W(0) = 0`,
//! and tᵢ = linspace(0, T, n_steps + 1).

use pricer_core::math::{cumulative_sum, linspace};
use pricer_models::analytical::BlackScholesModel;

use super::config::MAX_STEPS;
use super::error::SimulationError;
use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// μ defaults to the model's risk-free rate. That is the risk-neutral
/// drift, not a real-world expected return.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift (μ) - annualised.
    pub drift: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Horizon (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Takes S, σ and t from `model`; μ is `drift` or the model rate.
    #[inline]
    pub fn from_model(model: &BlackScholesModel, drift: Option<f64>) -> Self {
        Self {
            spot: model.spot(),
            drift: drift.unwrap_or_else(|| model.rate()),
            volatility: model.volatility(),
            maturity: model.expiry(),
        }
    }

    /// (μ - ½σ²)
    #[inline]
    fn log_drift(&self) -> f64 {
        self.drift - 0.5 * self.volatility * self.volatility
    }

    /// Price at time `t` given the Brownian level `w`.
    #[inline]
    pub fn price_at(&self, t: f64, w: f64) -> f64 {
        self.spot * (self.log_drift() * t + self.volatility * w).exp()
    }
}

/// A simulated price path on a uniform time grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedPath {
    /// Time grid, `n_steps + 1` points from 0 to T inclusive
    pub times: Vec<f64>,
    /// Price at each grid point; `prices[0]` is the spot
    pub prices: Vec<f64>,
}

impl SimulatedPath {
    /// Number of points on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false for paths built by [`simulate_gbm_path`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price at expiry.
    #[inline]
    pub fn terminal(&self) -> Option<f64> {
        self.prices.last().copied()
    }
}

pub(crate) fn check_steps(n_steps: usize) -> Result<(), SimulationError> {
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(SimulationError::InvalidStepCount(n_steps));
    }
    Ok(())
}

/// Simulates one GBM price path from the model's spot to its expiry.
///
/// `drift` overrides μ; `None` uses the model rate. The generator advances
/// by exactly `n_steps` normal draws.
///
/// # Errors
///
/// `SimulationError::InvalidStepCount` if `n_steps` is 0 or above the
/// configured maximum; `SimulationError::InvalidParameter` for a non-finite
/// drift.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::BlackScholesModel;
/// use pricer_pricing::mc::simulate_gbm_path;
/// use pricer_pricing::rng::PricerRng;
///
/// let model = BlackScholesModel::new(100.0, 100.0, 0.2, 0.05, 1.0).unwrap();
/// let a = simulate_gbm_path(&model, 10, None, &mut PricerRng::from_seed(1)).unwrap();
/// let b = simulate_gbm_path(&model, 10, None, &mut PricerRng::from_seed(1)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.times[10], 1.0);
/// ```
pub fn simulate_gbm_path(
    model: &BlackScholesModel,
    n_steps: usize,
    drift: Option<f64>,
    rng: &mut PricerRng,
) -> Result<SimulatedPath, SimulationError> {
    check_steps(n_steps)?;
    check_drift(drift)?;

    let params = GbmParams::from_model(model, drift);
    let sqrt_dt = (params.maturity / n_steps as f64).sqrt();

    let mut increments = vec![0.0; n_steps];
    rng.fill_normal(&mut increments);
    for z in increments.iter_mut() {
        *z *= sqrt_dt;
    }

    let mut brownian = Vec::with_capacity(n_steps + 1);
    brownian.push(0.0);
    brownian.extend(cumulative_sum(&increments));

    let times = linspace(0.0, params.maturity, n_steps + 1);
    let prices = times
        .iter()
        .zip(&brownian)
        .map(|(&t, &w)| params.price_at(t, w))
        .collect();

    tracing::trace!(n_steps, drift = params.drift, seed = rng.seed(), "simulated GBM path");

    Ok(SimulatedPath { times, prices })
}

/// Terminal price of one path, drawing `buffer.len()` normals.
///
/// Bit-identical to the last element of [`simulate_gbm_path`] for the same
/// generator state: W(T) is summed in the same order and t_n is exactly T.
pub(crate) fn terminal_price(params: &GbmParams, buffer: &mut [f64], rng: &mut PricerRng) -> f64 {
    let sqrt_dt = (params.maturity / buffer.len() as f64).sqrt();
    rng.fill_normal(buffer);
    let w_t = buffer.iter().fold(0.0, |w, &z| w + z * sqrt_dt);
    params.price_at(params.maturity, w_t)
}

pub(crate) fn check_drift(drift: Option<f64>) -> Result<(), SimulationError> {
    match drift {
        Some(mu) if !mu.is_finite() => Err(SimulationError::InvalidParameter {
            name: "drift",
            value: format!("{} must be finite", mu),
        }),
        _ => Ok(()),
    }
}
