//! Overview orchestrator: sector aggregation in the background, headline quotes in
//! the foreground, and a rendezvous before anything is handed on.
//!
//! Failure tolerance is asymmetric. Ticker failures inside a sector only shrink that
//! sector's sample; a failed headline quote or a failed aggregation pass aborts the
//! whole snapshot. An aborted snapshot cancels the aggregation pass and joins its thread
//! before returning, so no fetches outlive [`OverviewOrchestrator::capture`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use oikonomia_common::sectors::SectorTable;
use oikonomia_common::{MarketError, Quote, Result, TickerSymbol};

use crate::aggregator::{SectorSummaryMap, aggregate_until};
use crate::completion::{Pending, completion};
use crate::source::QuoteSource;

/// Everything the presentation layer needs for the market overview.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    /// Headline indicator quotes, in configured order.
    pub headlines: Vec<Quote>,
    /// Per-sector averages. Iteration order carries no meaning.
    pub sectors: SectorSummaryMap,
    /// When the snapshot was completed.
    pub captured_at: DateTime<Utc>,
}

/// Builds [`MarketSnapshot`]s from a shared quote source.
pub struct OverviewOrchestrator<S: ?Sized> {
    source: Arc<S>,
    sectors: Arc<SectorTable>,
    indicators: Vec<TickerSymbol>,
}

impl<S: QuoteSource + ?Sized + 'static> OverviewOrchestrator<S> {
    /// Creates an orchestrator over `sectors` and the ordered headline `indicators`.
    pub fn new(source: Arc<S>, sectors: SectorTable, indicators: Vec<TickerSymbol>) -> Self {
        Self {
            source,
            sectors: Arc::new(sectors),
            indicators,
        }
    }

    /// Produces one consolidated snapshot.
    ///
    /// Starts the aggregation pass on a background thread, fetches the headline
    /// indicators in order on the calling thread, then blocks until the aggregation
    /// delivers its single outcome. If a headline fails, the aggregation is cancelled
    /// and joined before the error is returned.
    pub fn capture(&self) -> Result<MarketSnapshot> {
        let aggregation = self.spawn_aggregation()?;
        let headlines = match self.fetch_headlines() {
            Ok(headlines) => headlines,
            Err(e) => {
                aggregation.abandon();
                return Err(e);
            }
        };

        debug!("Headlines ready, waiting for sector aggregation");
        let sectors = aggregation.finish()?;

        info!(
            "Snapshot complete: {} headlines, {} sectors",
            headlines.len(),
            sectors.len()
        );
        Ok(MarketSnapshot {
            headlines,
            sectors,
            captured_at: Utc::now(),
        })
    }

    /// Fetches every headline indicator in configured order. The first failure aborts.
    pub fn fetch_headlines(&self) -> Result<Vec<Quote>> {
        self.indicators
            .iter()
            .map(|ticker| {
                self.source
                    .get_quote(ticker)
                    .map_err(|e| MarketError::headline(ticker.as_str(), e))
            })
            .collect()
    }

    fn spawn_aggregation(&self) -> Result<Aggregation> {
        let (completer, pending) = completion();
        let source = Arc::clone(&self.source);
        let sectors = Arc::clone(&self.sectors);
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let handle = thread::Builder::new()
            .name("sector-aggregation".to_string())
            .spawn(move || {
                if let Err(e) = completer.complete(aggregate_until(&*source, &sectors, &flag)) {
                    debug!("Sector aggregation outcome discarded: {}", e);
                }
            })?;
        Ok(Aggregation {
            pending,
            cancel,
            handle,
        })
    }
}

/// Background aggregation pass owned by one `capture` call.
struct Aggregation {
    pending: Pending<SectorSummaryMap>,
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Aggregation {
    /// Waits for the outcome, then joins the thread.
    fn finish(self) -> Result<SectorSummaryMap> {
        let outcome = self.pending.wait();
        join_aggregation(self.handle);
        outcome
    }

    /// Stops further fetches and joins the thread; the outcome is dropped.
    fn abandon(self) {
        self.cancel.store(true, Ordering::Relaxed);
        drop(self.pending);
        join_aggregation(self.handle);
    }
}

fn join_aggregation(handle: JoinHandle<()>) {
    if handle.join().is_err() {
        warn!("Sector aggregation thread panicked");
    }
}
