//! Two-dimensional parameter sweeps for heatmap rendering.
//!
//! Both sweeps put a price axis on x (columns) and volatility on y (rows):
//! - [`PriceHeatmap`]: call and put fair values over spot × volatility
//! - [`PnlChart`]: theoretical P&L over expiry price × volatility
//!
//! Every cell is an independent evaluation of the scalar closed-form pricer,
//! so a cell equals what [`BlackScholesModel::new`](crate::analytical::BlackScholesModel::new)
//! returns for the same inputs bit for bit.

mod heatmap;
mod pnl_chart;

pub use heatmap::PriceHeatmap;
pub use pnl_chart::PnlChart;

use pricer_core::types::GridError;
use thiserror::Error;

use crate::analytical::DomainError;

/// Smallest accepted grid resolution.
pub const MIN_GRID_SIZE: usize = 2;

/// Default half-width of the volatility axis, as a fraction of σ.
pub const DEFAULT_VOL_SPREAD: f64 = 0.5;

/// Default half-width of the price axis, as a fraction of S.
pub const DEFAULT_PRICE_SPREAD: f64 = 0.2;

/// Scenario grid errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// Resolution or bounds rejected before evaluation.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A mesh point lies outside the model domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ScenarioError> for pricer_core::types::PricingError {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::Grid(e) => e.into(),
            ScenarioError::Domain(e) => e.into(),
        }
    }
}

/// Optional axis bounds; unset bounds fall back to defaults around the model.
///
/// # Examples
/// ```
/// use pricer_models::scenarios::GridBounds;
///
/// let bounds = GridBounds::default().x_range(50.0, 75.0).y_min(0.1);
/// assert_eq!(bounds.x_min, Some(50.0));
/// assert_eq!(bounds.y_max, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Lower bound of the price axis
    pub x_min: Option<f64>,
    /// Upper bound of the price axis
    pub x_max: Option<f64>,
    /// Lower bound of the volatility axis
    pub y_min: Option<f64>,
    /// Upper bound of the volatility axis
    pub y_max: Option<f64>,
}

impl GridBounds {
    /// Sets the lower price bound.
    pub fn x_min(mut self, value: f64) -> Self {
        self.x_min = Some(value);
        self
    }

    /// Sets the upper price bound.
    pub fn x_max(mut self, value: f64) -> Self {
        self.x_max = Some(value);
        self
    }

    /// Sets both price bounds.
    pub fn x_range(self, min: f64, max: f64) -> Self {
        self.x_min(min).x_max(max)
    }

    /// Sets the lower volatility bound.
    pub fn y_min(mut self, value: f64) -> Self {
        self.y_min = Some(value);
        self
    }

    /// Sets the upper volatility bound.
    pub fn y_max(mut self, value: f64) -> Self {
        self.y_max = Some(value);
        self
    }

    /// Sets both volatility bounds.
    pub fn y_range(self, min: f64, max: f64) -> Self {
        self.y_min(min).y_max(max)
    }

    /// Fills unset bounds from `price` ± 20 % and `volatility` ± 50 %.
    pub(crate) fn resolve(&self, price: f64, volatility: f64) -> Result<ResolvedBounds, GridError> {
        let resolved = ResolvedBounds {
            x_min: self.x_min.unwrap_or(price - DEFAULT_PRICE_SPREAD * price),
            x_max: self.x_max.unwrap_or(price + DEFAULT_PRICE_SPREAD * price),
            y_min: self.y_min.unwrap_or(volatility - DEFAULT_VOL_SPREAD * volatility),
            y_max: self.y_max.unwrap_or(volatility + DEFAULT_VOL_SPREAD * volatility),
        };
        for (name, value) in [
            ("x_min", resolved.x_min),
            ("x_max", resolved.x_max),
            ("y_min", resolved.y_min),
            ("y_max", resolved.y_max),
        ] {
            if !value.is_finite() {
                return Err(GridError::NonFiniteBound { name, value });
            }
        }
        Ok(resolved)
    }
}

/// Bounds with every default applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResolvedBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

pub(crate) fn check_size(size: usize) -> Result<(), GridError> {
    if size < MIN_GRID_SIZE {
        return Err(GridError::InvalidResolution {
            got: size,
            min: MIN_GRID_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_defaults() {
        let r = GridBounds::default().resolve(62.0, 0.32).unwrap();
        assert_relative_eq!(r.x_min, 49.6);
        assert_relative_eq!(r.x_max, 74.4);
        assert_relative_eq!(r.y_min, 0.16);
        assert_relative_eq!(r.y_max, 0.48);
    }

    #[test]
    fn test_resolve_keeps_explicit_bounds() {
        let r = GridBounds::default()
            .x_range(40.0, 80.0)
            .y_max(0.9)
            .resolve(62.0, 0.32)
            .unwrap();
        assert_eq!(r.x_min, 40.0);
        assert_eq!(r.x_max, 80.0);
        assert_relative_eq!(r.y_min, 0.16);
        assert_eq!(r.y_max, 0.9);
    }

    #[test]
    fn test_resolve_rejects_non_finite() {
        let err = GridBounds::default()
            .y_min(f64::NAN)
            .resolve(62.0, 0.32)
            .unwrap_err();
        assert!(matches!(err, GridError::NonFiniteBound { name: "y_min", .. }));
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(2).is_ok());
        assert_eq!(
            check_size(1).unwrap_err(),
            GridError::InvalidResolution { got: 1, min: 2 }
        );
    }
}
