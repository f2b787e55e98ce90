//! Edge command implementation
//!
//! Compares model values with dealer quotes and evaluates the trade at an
//! expiry price.

use clap::Args;
use pricer_models::analytical::TradeSummary;
use serde::Serialize;
use tracing::info;

use super::{Inputs, ModelArgs};
use crate::output::{Report, Table};
use crate::Result;

/// Arguments of the edge command
#[derive(Args, Debug, Clone)]
pub struct EdgeArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Market maker's call quote
    #[arg(long)]
    pub call_quote: Option<f64>,

    /// Market maker's put quote
    #[arg(long)]
    pub put_quote: Option<f64>,

    /// Market price at expiry (default: spot)
    #[arg(long)]
    pub expiry_price: Option<f64>,
}

/// Edge and realised P&L against one quote.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuoteEdge {
    /// Quote observed
    pub quote: f64,
    /// Model value advantage of buying at the quote
    pub edge: f64,
    /// Per-unit P&L at the expiry price with the quote as premium
    pub realised_pnl: f64,
}

/// Trade summary plus optional quote comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeReport {
    /// Model inputs
    pub inputs: Inputs,
    /// Breakevens, max losses and profits at the expiry price
    pub summary: TradeSummary,
    /// Call quote comparison, when `--call-quote` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<QuoteEdge>,
    /// Put quote comparison, when `--put-quote` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<QuoteEdge>,
}

impl Report for EdgeReport {
    fn table(&self) -> Table {
        let s = &self.summary;
        let mut t = Table::metrics();
        self.inputs.push_metrics(&mut t);
        t.metric("expiry price", s.market_price_at_expiry);
        t.metric("call breakeven", s.call.breakeven);
        t.metric("call max loss", s.call.max_loss);
        t.metric("call profit", s.call.profit);
        t.metric("put breakeven", s.put.breakeven);
        t.metric("put max loss", s.put.max_loss);
        t.metric("put profit", s.put.profit);
        if let Some(c) = self.call {
            t.metric("call quote", c.quote);
            t.metric("call edge", c.edge);
            t.metric("call realised pnl", c.realised_pnl);
        }
        if let Some(p) = self.put {
            t.metric("put quote", p.quote);
            t.metric("put edge", p.edge);
            t.metric("put realised pnl", p.realised_pnl);
        }
        t
    }
}

/// Run the edge command
pub fn run(args: &EdgeArgs) -> Result<EdgeReport> {
    let model = args.model.build()?;
    let expiry_price = args.expiry_price.unwrap_or(model.spot());

    let call = args.call_quote.map(|quote| QuoteEdge {
        quote,
        edge: model.call_trade_edge(quote),
        realised_pnl: model.realised_call_pnl(quote, expiry_price),
    });
    let put = args.put_quote.map(|quote| QuoteEdge {
        quote,
        edge: model.put_trade_edge(quote),
        realised_pnl: model.realised_put_pnl(quote, expiry_price),
    });

    info!(
        expiry_price,
        call_edge = call.map(|c| c.edge),
        put_edge = put.map(|p| p.edge),
        "evaluated trade edge"
    );

    Ok(EdgeReport {
        inputs: Inputs::of(&model),
        summary: model.summary(expiry_price),
        call,
        put,
    })
}
