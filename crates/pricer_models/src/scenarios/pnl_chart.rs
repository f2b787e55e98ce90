//! Theoretical P&L over an expiry price × volatility mesh.

use pricer_core::math::grid::{linspace, meshgrid, Matrix};

use super::{check_size, GridBounds, ScenarioError};
use crate::analytical::{BlackScholesModel, DerivedQuantities};

/// Theoretical call/put P&L over expiry price × volatility.
///
/// Row `i` holds volatility `volatilities[i]` and column `j` holds the
/// market price at expiry `market_prices[j]`. Spot, strike, rate and expiry
/// are the model's; only the premium (through σ) varies down the rows.
/// Negative cells are reported as-is even though a buyer would not trade.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlChart {
    /// Market price at expiry axis
    pub market_prices: Vec<f64>,
    /// Volatility axis
    pub volatilities: Vec<f64>,
    /// Market price coordinate at each cell
    pub price_mesh: Matrix<f64>,
    /// Volatility coordinate at each cell
    pub vol_mesh: Matrix<f64>,
    /// `market_price - (K + C(σ))`
    pub call_pnl: Matrix<f64>,
    /// `(K - P(σ)) - market_price`
    pub put_pnl: Matrix<f64>,
}

impl BlackScholesModel {
    /// Theoretical P&L of a bought call and put over expiry price × volatility.
    ///
    /// Unset bounds default to S ± 20 % for the expiry price and σ ± 50 %.
    ///
    /// # Errors
    /// - `ScenarioError::Grid` if `size < 2` or a bound is not finite
    /// - `ScenarioError::Domain` if a volatility on the axis is <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesModel;
    /// use pricer_models::scenarios::GridBounds;
    ///
    /// let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
    /// let chart = model.theoretical_pnl_chart(8, GridBounds::default()).unwrap();
    /// assert_eq!(chart.call_pnl.shape(), (8, 8));
    /// ```
    pub fn theoretical_pnl_chart(
        &self,
        size: usize,
        bounds: GridBounds,
    ) -> Result<PnlChart, ScenarioError> {
        check_size(size)?;
        let b = bounds.resolve(self.spot(), self.volatility())?;

        let market_prices = linspace(b.x_min, b.x_max, size);
        let volatilities = linspace(b.y_min, b.y_max, size);
        let (price_mesh, vol_mesh) = meshgrid(&market_prices, &volatilities);

        // Premiums depend on σ only, so one evaluation per row
        let base = *self.params();
        let rows = volatilities
            .iter()
            .map(|&sigma| DerivedQuantities::compute(&base.with_volatility(sigma)))
            .collect::<Result<Vec<_>, _>>()?;

        let strike = base.strike;
        let call_pnl = Matrix::from_fn(size, size, |i, j| {
            price_mesh.get(i, j) - (strike + rows[i].call_price)
        });
        let put_pnl = Matrix::from_fn(size, size, |i, j| {
            (strike - rows[i].put_price) - price_mesh.get(i, j)
        });

        tracing::debug!(
            size,
            price_min = b.x_min,
            price_max = b.x_max,
            vol_min = b.y_min,
            vol_max = b.y_max,
            "theoretical P&L chart evaluated"
        );

        Ok(PnlChart {
            market_prices,
            volatilities,
            price_mesh,
            vol_mesh,
            call_pnl,
            put_pnl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::DomainError;

    fn reference_model() -> BlackScholesModel {
        BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap()
    }

    #[test]
    fn test_chart_shapes() {
        let chart = reference_model()
            .theoretical_pnl_chart(8, GridBounds::default())
            .unwrap();
        assert_eq!(chart.market_prices.len(), 8);
        assert_eq!(chart.price_mesh.shape(), (8, 8));
        assert_eq!(chart.vol_mesh.shape(), (8, 8));
        assert_eq!(chart.call_pnl.shape(), (8, 8));
        assert_eq!(chart.put_pnl.shape(), (8, 8));
    }

    #[test]
    fn test_chart_cells_match_model_pnl() {
        let model = reference_model();
        let chart = model
            .theoretical_pnl_chart(5, GridBounds::default().x_range(55.0, 70.0))
            .unwrap();
        for i in 0..5 {
            let row_model =
                BlackScholesModel::new(62.0, 60.0, chart.volatilities[i], 0.04, 40.0 / 365.0)
                    .unwrap();
            for j in 0..5 {
                let mp = chart.market_prices[j];
                assert_eq!(chart.call_pnl.get(i, j), row_model.theoretical_call_pnl(mp));
                assert_eq!(chart.put_pnl.get(i, j), row_model.theoretical_put_pnl(mp));
            }
        }
    }

    #[test]
    fn test_chart_pnl_direction() {
        let chart = reference_model()
            .theoretical_pnl_chart(6, GridBounds::default())
            .unwrap();
        for i in 0..6 {
            for j in 1..6 {
                assert!(chart.call_pnl.get(i, j) > chart.call_pnl.get(i, j - 1));
                assert!(chart.put_pnl.get(i, j) < chart.put_pnl.get(i, j - 1));
            }
        }
        // Higher volatility means a dearer premium and lower call P&L
        assert!(chart.call_pnl.get(5, 0) < chart.call_pnl.get(0, 0));
    }

    #[test]
    fn test_chart_negative_volatility_bound() {
        let err = reference_model()
            .theoretical_pnl_chart(3, GridBounds::default().y_range(-0.1, 0.3))
            .unwrap_err();
        assert_eq!(
            err,
            ScenarioError::Domain(DomainError::InvalidVolatility { volatility: -0.1 })
        );
    }
}
