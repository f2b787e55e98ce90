//! Theta decay command implementation

use pricer_models::analytical::{ThetaDecayCurve, DAYS_PER_YEAR};
use serde::Serialize;
use tracing::info;

use super::{Inputs, ModelArgs};
use crate::output::{Cell, Report, Table};
use crate::Result;

/// Theta across the remaining life of the option.
#[derive(Debug, Clone, Serialize)]
pub struct ThetaDecayReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Theta per year and per day at each remaining time
    pub curve: ThetaDecayCurve,
}

impl Report for ThetaDecayReport {
    fn table(&self) -> Table {
        let mut t = Table::new([
            "days left",
            "years left",
            "call theta",
            "put theta",
            "call theta/day",
            "put theta/day",
        ]);
        let c = &self.curve;
        for i in 0..c.len() {
            t.push([
                Cell::Num(c.times[i] * DAYS_PER_YEAR),
                Cell::Num(c.times[i]),
                Cell::Num(c.call[i]),
                Cell::Num(c.put[i]),
                Cell::Num(c.call_daily[i]),
                Cell::Num(c.put_daily[i]),
            ]);
        }
        t
    }
}

/// Run the theta-decay command
pub fn run(args: &ModelArgs) -> Result<ThetaDecayReport> {
    let model = args.build()?;
    let curve = model.theta_decay_curve()?;
    info!(points = curve.len(), "computed theta decay");
    Ok(ThetaDecayReport {
        inputs: Inputs::of(&model),
        curve,
    })
}
