//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report; rendering is left to [`crate::output::emit`].

pub mod edge;
pub mod greeks;
pub mod heatmap;
pub mod path;
pub mod pnl_chart;
pub mod price;
pub mod simulate;
pub mod theta_decay;

use clap::{ArgGroup, Args};
use pricer_models::analytical::{BlackScholesModel, DAYS_PER_YEAR};
use pricer_models::scenarios::GridBounds;
use serde::Serialize;

use crate::output::{Cell, Table};
use crate::Result;

/// The five model inputs shared by every command.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("horizon").required(true).args(["expiry", "days"])))]
pub struct ModelArgs {
    /// Spot price of the underlying
    #[arg(long, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price
    #[arg(long, allow_negative_numbers = true)]
    pub strike: f64,

    /// Annualised volatility, e.g. 0.32 for 32%
    #[arg(long, allow_negative_numbers = true)]
    pub vol: f64,

    /// Annualised continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Time to expiry in years
    #[arg(long, allow_negative_numbers = true)]
    pub expiry: Option<f64>,

    /// Time to expiry in calendar days (divided by 365)
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<f64>,
}

impl ModelArgs {
    /// Time to expiry in years.
    pub fn expiry_years(&self) -> f64 {
        match (self.expiry, self.days) {
            (Some(t), _) => t,
            (None, Some(days)) => days / DAYS_PER_YEAR,
            // clap's group makes one of the two mandatory
            (None, None) => f64::NAN,
        }
    }

    /// Validates the inputs and builds the model.
    pub fn build(&self) -> Result<BlackScholesModel> {
        let model =
            BlackScholesModel::new(self.spot, self.strike, self.vol, self.rate, self.expiry_years())?;
        Ok(model)
    }
}

/// Optional scenario grid bounds.
#[derive(Args, Debug, Clone, Default)]
pub struct GridArgs {
    /// Grid resolution per axis (default from config)
    #[arg(long)]
    pub size: Option<usize>,

    /// Lower bound of the price axis
    #[arg(long, allow_negative_numbers = true)]
    pub min_price: Option<f64>,

    /// Upper bound of the price axis
    #[arg(long, allow_negative_numbers = true)]
    pub max_price: Option<f64>,

    /// Lower bound of the volatility axis
    #[arg(long, allow_negative_numbers = true)]
    pub min_vol: Option<f64>,

    /// Upper bound of the volatility axis
    #[arg(long, allow_negative_numbers = true)]
    pub max_vol: Option<f64>,
}

impl GridArgs {
    /// Bounds with only the flags that were given set.
    pub fn bounds(&self) -> GridBounds {
        GridBounds {
            x_min: self.min_price,
            x_max: self.max_price,
            y_min: self.min_vol,
            y_max: self.max_vol,
        }
    }
}

/// Model inputs echoed back in every report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Inputs {
    /// Spot
    pub spot: f64,
    /// Strike
    pub strike: f64,
    /// Volatility
    pub volatility: f64,
    /// Rate
    pub rate: f64,
    /// Expiry in years
    pub expiry: f64,
}

impl Inputs {
    /// Inputs of `model`.
    pub fn of(model: &BlackScholesModel) -> Self {
        Self {
            spot: model.spot(),
            strike: model.strike(),
            volatility: model.volatility(),
            rate: model.rate(),
            expiry: model.expiry(),
        }
    }

    /// Appends the inputs as metric rows.
    pub fn push_metrics(&self, table: &mut Table) {
        table.metric("spot", self.spot);
        table.metric("strike", self.strike);
        table.metric("volatility", self.volatility);
        table.metric("rate", self.rate);
        table.metric("expiry (years)", self.expiry);
        table.push([
            Cell::from("expiry (days)"),
            Cell::Num(self.expiry * DAYS_PER_YEAR),
        ]);
    }
}
