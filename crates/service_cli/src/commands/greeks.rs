//! Greeks command implementation

use pricer_models::analytical::{SensitivityReport, Thetas};
use serde::Serialize;
use tracing::{info, warn};

use super::{Inputs, ModelArgs};
use crate::output::{Report, Table};
use crate::Result;

/// Selected sensitivities plus theta.
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Sensitivities picked by `--only`, or all of them
    pub sensitivities: SensitivityReport,
    /// Theta per year and per day
    pub theta: Thetas,
}

impl Report for GreeksReport {
    fn table(&self) -> Table {
        let mut t = Table::metrics();
        match self.sensitivities {
            SensitivityReport::Delta { call, put } => {
                t.metric("delta call", call);
                t.metric("delta put", put);
            }
            SensitivityReport::Gamma { value } => t.metric("gamma", value),
            SensitivityReport::Vega { value } => t.metric("vega", value),
            SensitivityReport::Rho { call, put } => {
                t.metric("rho call", call);
                t.metric("rho put", put);
            }
            SensitivityReport::All(g) => {
                t.metric("delta call", g.delta_call);
                t.metric("delta put", g.delta_put);
                t.metric("gamma", g.gamma);
                t.metric("vega", g.vega);
                t.metric("rho call", g.rho_call);
                t.metric("rho put", g.rho_put);
            }
        }
        t.metric("theta call (per year)", self.theta.call);
        t.metric("theta put (per year)", self.theta.put);
        t.metric("theta call (per day)", self.theta.call_daily);
        t.metric("theta put (per day)", self.theta.put_daily);
        t
    }
}

/// Run the greeks command
///
/// `only` takes `d`, `g`, `v`, `r` or the full names; anything else falls
/// back to the full set.
pub fn run(args: &ModelArgs, only: Option<&str>) -> Result<GreeksReport> {
    let model = args.build()?;
    let sensitivities = model.sensitivity_analysis_by_code(only);
    if let (Some(code), SensitivityReport::All(_)) = (only, &sensitivities) {
        warn!(code, "unknown sensitivity selector, showing all Greeks");
    }
    info!(selector = only.unwrap_or("all"), "computed Greeks");

    Ok(GreeksReport {
        inputs: Inputs::of(&model),
        sensitivities,
        theta: model.thetas(),
    })
}
