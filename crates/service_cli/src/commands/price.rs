//! Price command implementation
//!
//! Fair values, breakevens, parity, intrinsic and time value.

use pricer_models::analytical::BlackScholesModel;
use serde::Serialize;
use tracing::info;

use super::{Inputs, ModelArgs};
use crate::output::{Report, Table};
use crate::Result;

/// Closed-form valuation of both sides.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Model inputs
    pub inputs: Inputs,
    /// d₁
    pub d1: f64,
    /// d₂
    pub d2: f64,
    /// Call fair value
    pub call: f64,
    /// Put fair value
    pub put: f64,
    /// K + C
    pub breakeven_call: f64,
    /// K - P
    pub breakeven_put: f64,
    /// C - P
    pub put_call_parity: f64,
    /// max(S - K, 0)
    pub intrinsic_value: f64,
    /// C - intrinsic value
    pub time_value: f64,
}

impl PriceReport {
    /// Collects every closed-form output of `model`.
    pub fn from_model(model: &BlackScholesModel) -> Self {
        Self {
            inputs: Inputs::of(model),
            d1: model.d1(),
            d2: model.d2(),
            call: model.call_price(),
            put: model.put_price(),
            breakeven_call: model.breakeven_call(),
            breakeven_put: model.breakeven_put(),
            put_call_parity: model.put_call_parity(),
            intrinsic_value: model.intrinsic_value(),
            time_value: model.time_value(),
        }
    }
}

impl Report for PriceReport {
    fn table(&self) -> Table {
        let mut t = Table::metrics();
        self.inputs.push_metrics(&mut t);
        t.metric("d1", self.d1);
        t.metric("d2", self.d2);
        t.metric("call", self.call);
        t.metric("put", self.put);
        t.metric("breakeven call", self.breakeven_call);
        t.metric("breakeven put", self.breakeven_put);
        t.metric("put-call parity (C - P)", self.put_call_parity);
        t.metric("intrinsic value", self.intrinsic_value);
        t.metric("time value", self.time_value);
        t
    }
}

/// Run the price command
pub fn run(args: &ModelArgs) -> Result<PriceReport> {
    let model = args.build()?;
    info!(
        call = model.call_price(),
        put = model.put_price(),
        "priced European options"
    );
    Ok(PriceReport::from_model(&model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_price_report_reference_scenario() {
        let args = ModelArgs {
            spot: 62.0,
            strike: 60.0,
            vol: 0.32,
            rate: 0.04,
            expiry: None,
            days: Some(40.0),
        };
        let report = run(&args).unwrap();
        assert_relative_eq!(report.call, 3.858949125174327, max_relative = 1e-10);
        assert_relative_eq!(report.put, 1.5965110535188067, max_relative = 1e-10);
        assert_relative_eq!(report.intrinsic_value, 2.0);
        assert_relative_eq!(report.time_value, report.call - 2.0);
        assert_eq!(report.table().rows.len(), 15);
    }
}
