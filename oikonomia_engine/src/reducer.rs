//! Sector reducer: fetch every ticker of one sector and average the successes.
//!
//! Tickers are fetched one after another. A failed fetch is logged and skipped; it never
//! stops the rest of the sector. A sector with no successful fetch yields no summary at
//! all rather than a zero or NaN one.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use oikonomia_common::{Quote, TickerSymbol};

use crate::source::QuoteSource;

/// Average performance of one sector over the tickers that could be fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSummary {
    /// Mean of `regular_market_change_percent` over the fetched tickers.
    pub average_change_percent: f64,
    /// Mean of `fifty_two_week_change_percent` over the fetched tickers.
    pub average_52wk_change_percent: f64,
}

/// Running totals for one sector.
#[derive(Debug, Default)]
pub struct SectorAccumulator {
    total_change: f64,
    total_52wk_change: f64,
    count: usize,
}

impl SectorAccumulator {
    /// Folds one successfully fetched quote into the totals.
    pub fn add(&mut self, quote: &Quote) {
        self.total_change += quote.regular_market_change_percent;
        self.total_52wk_change += quote.fifty_two_week_change_percent;
        self.count += 1;
    }

    /// Number of quotes folded in so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Averages, or `None` when nothing was added.
    pub fn finish(self) -> Option<SectorSummary> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(SectorSummary {
            average_change_percent: self.total_change / n,
            average_52wk_change_percent: self.total_52wk_change / n,
        })
    }
}

/// Fetches each of `tickers` from `source` in order and reduces the successes.
pub fn reduce_sector<S: QuoteSource + ?Sized>(
    source: &S,
    sector: &str,
    tickers: &[TickerSymbol],
) -> Option<SectorSummary> {
    reduce_sector_until(source, sector, tickers, &AtomicBool::new(false))
}

/// Like [`reduce_sector`], but stops issuing fetches once `cancel` is set.
///
/// A fetch already in flight is allowed to finish; the summary then covers only the
/// tickers reduced before cancellation.
pub fn reduce_sector_until<S: QuoteSource + ?Sized>(
    source: &S,
    sector: &str,
    tickers: &[TickerSymbol],
    cancel: &AtomicBool,
) -> Option<SectorSummary> {
    let mut totals = SectorAccumulator::default();

    for ticker in tickers {
        if cancel.load(Ordering::Relaxed) {
            debug!("Sector {} cancelled before {}", sector, ticker);
            break;
        }
        match source.get_quote(ticker) {
            Ok(quote) => totals.add(&quote),
            Err(e) => warn!("Error fetching {} ({}): {}", ticker, sector, e),
        }
    }

    debug!(
        "Sector {} reduced from {}/{} tickers",
        sector,
        totals.count(),
        tickers.len()
    );
    totals.finish()
}
