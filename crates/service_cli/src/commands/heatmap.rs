//! Heatmap command implementation
//!
//! Table and CSV output list one row per grid cell; JSON carries the axes
//! and full matrices.

use pricer_models::scenarios::PriceHeatmap;
use serde::Serialize;
use tracing::info;

use super::{GridArgs, Inputs, ModelArgs};
use crate::config::CliConfig;
use crate::output::{Cell, Report, Table};
use crate::Result;

/// Call/put fair values over spot × volatility.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Axes, meshes and values
    pub heatmap: PriceHeatmap,
}

impl Report for HeatmapReport {
    fn table(&self) -> Table {
        let h = &self.heatmap;
        let mut t = Table::new(["spot", "volatility", "call", "put"]);
        for (i, vol) in h.volatilities.iter().enumerate() {
            for (j, spot) in h.spots.iter().enumerate() {
                t.push([
                    Cell::Num(*spot),
                    Cell::Num(*vol),
                    Cell::Num(h.calls.get(i, j)),
                    Cell::Num(h.puts.get(i, j)),
                ]);
            }
        }
        t
    }
}

/// Run the heatmap command
pub fn run(model_args: &ModelArgs, grid: &GridArgs, config: &CliConfig) -> Result<HeatmapReport> {
    let model = model_args.build()?;
    let size = grid.size.unwrap_or(config.grid_size);
    let heatmap = model.price_heatmap(size, grid.bounds())?;
    info!(size, "evaluated price heatmap");
    Ok(HeatmapReport {
        inputs: Inputs::of(&model),
        heatmap,
    })
}
