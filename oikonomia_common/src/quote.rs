//! Quote data model.
//!
//! A `Quote` is a snapshot of market data for one ticker at fetch time. It is produced
//! by a quote source, consumed immediately by whoever asked for it and never cached.

use serde::{Deserialize, Serialize};

use crate::tickers::TickerSymbol;

/// Market quote for a single ticker symbol.
///
/// Percent fields are expressed in percent (`1.5` means +1.5%), not as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol this quote belongs to.
    pub ticker: TickerSymbol,
    /// Last traded price.
    pub regular_market_price: f64,
    /// Change versus the previous close, in percent.
    pub regular_market_change_percent: f64,
    /// Opening price of the current session.
    pub regular_market_open: f64,
    /// Session high.
    pub regular_market_day_high: f64,
    /// Session low.
    pub regular_market_day_low: f64,
    /// Highest price over the trailing 52 weeks.
    pub fifty_two_week_high: f64,
    /// Lowest price over the trailing 52 weeks.
    pub fifty_two_week_low: f64,
    /// Change over the trailing 52 weeks, in percent.
    pub fifty_two_week_change_percent: f64,
    /// Market capitalisation; `0.0` when the provider does not report it.
    pub market_cap: f64,
    /// Shares traded in the current session.
    pub regular_market_volume: f64,
    /// Average daily volume over the last three months.
    pub average_daily_volume_3_month: f64,
}

impl Quote {
    /// Creates a quote carrying only the fields the sector averages read.
    ///
    /// Every other field is zero. Useful for fixtures and synthetic sources.
    pub fn with_changes(ticker: TickerSymbol, change_percent: f64, change_52wk_percent: f64) -> Self {
        Quote {
            ticker,
            regular_market_price: 0.0,
            regular_market_change_percent: change_percent,
            regular_market_open: 0.0,
            regular_market_day_high: 0.0,
            regular_market_day_low: 0.0,
            fifty_two_week_high: 0.0,
            fifty_two_week_low: 0.0,
            fifty_two_week_change_percent: change_52wk_percent,
            market_cap: 0.0,
            regular_market_volume: 0.0,
            average_daily_volume_3_month: 0.0,
        }
    }

    /// Market cap if the provider reported a positive value.
    pub fn known_market_cap(&self) -> Option<f64> {
        (self.market_cap > 0.0).then_some(self.market_cap)
    }
}
