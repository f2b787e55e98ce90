//! Theta as a function of remaining time to expiry.

use super::black_scholes::{BlackScholesModel, DerivedQuantities};
use super::error::DomainError;
use super::greeks::{thetas_from, DAYS_PER_YEAR};

/// Theta sampled once per day from one day to expiry up to the model expiry.
///
/// All five series have the same length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThetaDecayCurve {
    /// Remaining time to expiry in years
    pub times: Vec<f64>,
    /// Call theta per year at each time
    pub call: Vec<f64>,
    /// Put theta per year at each time
    pub put: Vec<f64>,
    /// Call theta per day
    pub call_daily: Vec<f64>,
    /// Put theta per day
    pub put_daily: Vec<f64>,
}

impl ThetaDecayCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Time grid `linspace(1/365, t, floor(t·365))`.
///
/// When fewer than two daily samples fit, the grid is the single point `t`.
pub fn theta_time_grid(expiry: f64) -> Vec<f64> {
    let n = (expiry * DAYS_PER_YEAR).floor();
    if n < 2.0 {
        return vec![expiry];
    }
    pricer_core::math::linspace(1.0 / DAYS_PER_YEAR, expiry, n as usize)
}

impl BlackScholesModel {
    /// Theta across the remaining life of the option.
    ///
    /// S, K, σ and r are held fixed while the time to expiry varies over
    /// [`theta_time_grid`].
    ///
    /// # Errors
    /// Propagates `DomainError` if a grid point leaves the model domain,
    /// which cannot happen for a successfully constructed model.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesModel;
    ///
    /// let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
    /// let curve = model.theta_decay_curve().unwrap();
    /// assert_eq!(curve.len(), 40);
    /// ```
    pub fn theta_decay_curve(&self) -> Result<ThetaDecayCurve, DomainError> {
        let times = theta_time_grid(self.expiry());
        let n = times.len();
        let mut curve = ThetaDecayCurve {
            times: Vec::with_capacity(n),
            call: Vec::with_capacity(n),
            put: Vec::with_capacity(n),
            call_daily: Vec::with_capacity(n),
            put_daily: Vec::with_capacity(n),
        };

        for t in times {
            let params = self.params().with_expiry(t);
            let derived = DerivedQuantities::compute(&params)?;
            let th = thetas_from(&params, &derived);
            curve.times.push(t);
            curve.call.push(th.call);
            curve.put.push(th.put);
            curve.call_daily.push(th.call_daily);
            curve.put_daily.push(th.put_daily);
        }

        tracing::debug!(samples = curve.len(), expiry = self.expiry(), "theta decay curve built");
        Ok(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_grid_daily_spacing() {
        let grid = theta_time_grid(40.0 / 365.0);
        assert_eq!(grid.len(), 40);
        assert_relative_eq!(grid[0], 1.0 / 365.0);
        assert_eq!(grid[39], 40.0 / 365.0);
        assert_relative_eq!(grid[1] - grid[0], 1.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_grid_short_expiry_single_point() {
        assert_eq!(theta_time_grid(0.5 / 365.0), vec![0.5 / 365.0]);
        assert_eq!(theta_time_grid(1.5 / 365.0), vec![1.5 / 365.0]);
    }

    #[test]
    fn test_time_grid_one_year() {
        let grid = theta_time_grid(1.0);
        assert_eq!(grid.len(), 365);
        assert_eq!(grid[364], 1.0);
    }

    #[test]
    fn test_last_point_matches_model_thetas() {
        let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
        let curve = model.theta_decay_curve().unwrap();
        let th = model.thetas();
        let last = curve.len() - 1;
        assert_relative_eq!(curve.call[last], th.call, max_relative = 1e-14);
        assert_relative_eq!(curve.put[last], th.put, max_relative = 1e-14);
    }

    #[test]
    fn test_daily_series_divided_by_365() {
        let model = BlackScholesModel::new(100.0, 100.0, 0.25, 0.03, 0.25).unwrap();
        let curve = model.theta_decay_curve().unwrap();
        for i in 0..curve.len() {
            assert_eq!(curve.call_daily[i], curve.call[i] / 365.0);
            assert_eq!(curve.put_daily[i], curve.put[i] / 365.0);
        }
    }

    #[test]
    fn test_atm_theta_accelerates_into_expiry() {
        let model = BlackScholesModel::new(100.0, 100.0, 0.25, 0.0, 0.25).unwrap();
        let curve = model.theta_decay_curve().unwrap();
        // With r = 0, ATM theta ∝ -1/√t: largest magnitude at one day out
        assert!(curve.call[0] < curve.call[curve.len() - 1]);
        assert!(curve.call.iter().all(|&th| th < 0.0));
    }
}
