//! P&L chart command implementation

use pricer_models::scenarios::PnlChart;
use serde::Serialize;
use tracing::info;

use super::{GridArgs, Inputs, ModelArgs};
use crate::config::CliConfig;
use crate::output::{Cell, Report, Table};
use crate::Result;

/// Theoretical call/put P&L over expiry price × volatility.
#[derive(Debug, Clone, Serialize)]
pub struct PnlChartReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Axes, meshes and P&L values
    pub chart: PnlChart,
}

impl Report for PnlChartReport {
    fn table(&self) -> Table {
        let c = &self.chart;
        let mut t = Table::new(["expiry price", "volatility", "call pnl", "put pnl"]);
        for (i, vol) in c.volatilities.iter().enumerate() {
            for (j, price) in c.market_prices.iter().enumerate() {
                t.push([
                    Cell::Num(*price),
                    Cell::Num(*vol),
                    Cell::Num(c.call_pnl.get(i, j)),
                    Cell::Num(c.put_pnl.get(i, j)),
                ]);
            }
        }
        t
    }
}

/// Run the pnl-chart command
pub fn run(model_args: &ModelArgs, grid: &GridArgs, config: &CliConfig) -> Result<PnlChartReport> {
    let model = model_args.build()?;
    let size = grid.size.unwrap_or(config.grid_size);
    let chart = model.theoretical_pnl_chart(size, grid.bounds())?;
    info!(size, "evaluated theoretical P&L chart");
    Ok(PnlChartReport {
        inputs: Inputs::of(&model),
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cells_match_scalar_pnl() {
        let model_args = ModelArgs {
            spot: 62.0,
            strike: 60.0,
            vol: 0.32,
            rate: 0.04,
            expiry: None,
            days: Some(40.0),
        };
        let grid = GridArgs {
            size: Some(5),
            min_vol: Some(0.32),
            max_vol: Some(0.64),
            ..Default::default()
        };
        let report = run(&model_args, &grid, &CliConfig::default()).unwrap();
        let model = model_args.build().unwrap();

        // Row 0 is σ = 0.32, the model volatility
        for (j, &price) in report.chart.market_prices.iter().enumerate() {
            assert_relative_eq!(
                report.chart.call_pnl.get(0, j),
                model.theoretical_call_pnl(price),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                report.chart.put_pnl.get(0, j),
                model.theoretical_put_pnl(price),
                epsilon = 1e-12
            );
        }
        assert_eq!(report.table().rows.len(), 25);
    }
}
