//! Call/put fair values over a spot × volatility mesh.

use pricer_core::math::grid::{linspace, meshgrid, Matrix};

use super::{check_size, GridBounds, ScenarioError};
use crate::analytical::{BlackScholesModel, DerivedQuantities};

/// Fair values over a spot × volatility mesh.
///
/// All matrices are `size × size`; row `i` holds volatility `volatilities[i]`
/// and column `j` holds spot `spots[j]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceHeatmap {
    /// Spot axis
    pub spots: Vec<f64>,
    /// Volatility axis
    pub volatilities: Vec<f64>,
    /// Spot coordinate at each cell
    pub spot_mesh: Matrix<f64>,
    /// Volatility coordinate at each cell
    pub vol_mesh: Matrix<f64>,
    /// Call fair value at each cell
    pub calls: Matrix<f64>,
    /// Put fair value at each cell
    pub puts: Matrix<f64>,
}

impl BlackScholesModel {
    /// Call and put fair values over spot × volatility.
    ///
    /// Unset bounds default to S ± 20 % and σ ± 50 %. Strike, rate and
    /// expiry stay at the model's values; the model itself is untouched.
    ///
    /// # Errors
    /// - `ScenarioError::Grid` if `size < 2` or a bound is not finite
    /// - `ScenarioError::Domain` if a mesh point has S <= 0 or σ <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesModel;
    /// use pricer_models::scenarios::GridBounds;
    ///
    /// let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
    /// let heatmap = model.price_heatmap(10, GridBounds::default()).unwrap();
    /// assert_eq!(heatmap.calls.shape(), (10, 10));
    /// ```
    pub fn price_heatmap(
        &self,
        size: usize,
        bounds: GridBounds,
    ) -> Result<PriceHeatmap, ScenarioError> {
        check_size(size)?;
        let b = bounds.resolve(self.spot(), self.volatility())?;

        let spots = linspace(b.x_min, b.x_max, size);
        let volatilities = linspace(b.y_min, b.y_max, size);
        let (spot_mesh, vol_mesh) = meshgrid(&spots, &volatilities);

        let base = *self.params();
        let derived = Matrix::try_from_fn(size, size, |i, j| {
            let params = base
                .with_spot(spot_mesh.get(i, j))
                .with_volatility(vol_mesh.get(i, j));
            DerivedQuantities::compute(&params)
        })?;

        tracing::debug!(
            size,
            spot_min = b.x_min,
            spot_max = b.x_max,
            vol_min = b.y_min,
            vol_max = b.y_max,
            "price heatmap evaluated"
        );

        Ok(PriceHeatmap {
            calls: derived.map(|d| d.call_price),
            puts: derived.map(|d| d.put_price),
            spots,
            volatilities,
            spot_mesh,
            vol_mesh,
        })
    }
}
