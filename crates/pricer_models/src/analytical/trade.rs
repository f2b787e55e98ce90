//! Trade-level analytics for a bought call or put.
//!
//! Theoretical P&L compares an expiry price with the model breakeven; trade
//! edge compares the model fair value with an observed quote; realised P&L
//! is the payoff at expiry net of the premium actually paid.

use super::black_scholes::BlackScholesModel;

/// Breakeven, maximum loss and profit for one option side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLine {
    /// Expiry price at which the position nets zero
    pub breakeven: f64,
    /// Most the buyer can lose: the fair-value premium
    pub max_loss: f64,
    /// Profit per unit at the supplied expiry price
    pub profit: f64,
}

/// Call and put stat lines at one expiry price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeSummary {
    /// Expiry price the profits were evaluated at
    pub market_price_at_expiry: f64,
    /// Bought call
    pub call: StatLine,
    /// Bought put
    pub put: StatLine,
}

impl BlackScholesModel {
    /// Breakevens, premiums and profits for both sides at `market_price_at_expiry`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesModel;
    ///
    /// let model = BlackScholesModel::new(62.0, 60.0, 0.32, 0.04, 40.0 / 365.0).unwrap();
    /// let summary = model.summary(70.0);
    /// assert!(summary.call.profit > 0.0);
    /// assert!(summary.put.profit < 0.0);
    /// ```
    pub fn summary(&self, market_price_at_expiry: f64) -> TradeSummary {
        TradeSummary {
            market_price_at_expiry,
            call: StatLine {
                breakeven: self.breakeven_call(),
                max_loss: self.call_price(),
                profit: self.theoretical_call_pnl(market_price_at_expiry),
            },
            put: StatLine {
                breakeven: self.breakeven_put(),
                max_loss: self.put_price(),
                profit: self.theoretical_put_pnl(market_price_at_expiry),
            },
        }
    }

    /// Market price at expiry minus the call breakeven.
    #[inline]
    pub fn theoretical_call_pnl(&self, market_price: f64) -> f64 {
        market_price - self.breakeven_call()
    }

    /// Put breakeven minus the market price at expiry.
    #[inline]
    pub fn theoretical_put_pnl(&self, market_price: f64) -> f64 {
        self.breakeven_put() - market_price
    }

    /// Model call value minus a dealer quote; positive means the quote is cheap.
    #[inline]
    pub fn call_trade_edge(&self, market_maker_quote: f64) -> f64 {
        self.call_price() - market_maker_quote
    }

    /// Dealer quote minus model put value.
    #[inline]
    pub fn put_trade_edge(&self, market_maker_quote: f64) -> f64 {
        market_maker_quote - self.put_price()
    }

    /// Per-unit P&L of a call bought at `premium` and held to `expiry_price`.
    #[inline]
    pub fn realised_call_pnl(&self, premium: f64, expiry_price: f64) -> f64 {
        (expiry_price - self.strike()).max(0.0) - premium
    }

    /// Per-unit P&L of a put bought at `premium` and held to `expiry_price`.
    #[inline]
    pub fn realised_put_pnl(&self, premium: f64, expiry_price: f64) -> f64 {
        (self.strike() - expiry_price).max(0.0) - premium
    }
}
