//! Aggregation engine: one reducer thread per sector, joined before returning.
//!
//! Reducers do not share a map. Each one sends `(sector, Option<SectorSummary>)` back
//! over a channel and the calling thread builds the [`SectorSummaryMap`] alone, after
//! every reducer has been joined.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Instant;

use crossbeam_channel::unbounded;
use log::{debug, info};
use oikonomia_common::sectors::SectorTable;
use oikonomia_common::{MarketError, Result};

use crate::reducer::{SectorSummary, reduce_sector_until};
use crate::source::QuoteSource;

/// Sector name to summary. Sectors whose tickers all failed are absent.
pub type SectorSummaryMap = HashMap<String, SectorSummary>;

/// Message from a reducer thread to the fan-in point.
type SectorOutcome = (String, Option<SectorSummary>);

/// Runs one reducer per sector concurrently and collects their summaries.
///
/// Returns only after every reducer thread has finished. Individual ticker failures
/// are absorbed by the reducers; an `Err` here means the pass itself broke (a reducer
/// panicked or could not report back) and no partial map is returned.
pub fn aggregate<S: QuoteSource + ?Sized>(source: &S, sectors: &SectorTable) -> Result<SectorSummaryMap> {
    aggregate_until(source, sectors, &AtomicBool::new(false))
}

/// Like [`aggregate`], but every reducer stops fetching once `cancel` is set.
///
/// Still joins every reducer before returning. A cancelled pass returns whatever was
/// reduced up to that point, which callers are expected to discard.
pub fn aggregate_until<S: QuoteSource + ?Sized>(
    source: &S,
    sectors: &SectorTable,
    cancel: &AtomicBool,
) -> Result<SectorSummaryMap> {
    let started = Instant::now();
    let (outcome_tx, outcome_rx) = unbounded::<SectorOutcome>();

    thread::scope(|scope| -> Result<()> {
        let mut reducers = Vec::with_capacity(sectors.len());
        let mut failure = None;

        for (sector, tickers) in sectors {
            let outcome_tx = outcome_tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("sector-{sector}"))
                .spawn_scoped(scope, move || -> Result<()> {
                    let summary = reduce_sector_until(source, sector, tickers, cancel);
                    outcome_tx
                        .send((sector.clone(), summary))
                        .map_err(|e| MarketError::ChannelSend(format!("sector {sector}: {e}")))
                });
            match spawned {
                Ok(handle) => reducers.push((sector, handle)),
                Err(e) => {
                    failure = Some(MarketError::Io(e));
                    break;
                }
            }
        }

        for (sector, handle) in reducers {
            let joined = match handle.join() {
                Ok(reported) => reported,
                Err(_) => Err(MarketError::Aggregation(format!(
                    "reducer for sector '{sector}' panicked"
                ))),
            };
            if let Err(e) = joined {
                failure.get_or_insert(e);
            }
        }

        failure.map_or(Ok(()), Err)
    })?;
    drop(outcome_tx);

    let mut summaries = SectorSummaryMap::with_capacity(sectors.len());
    for (sector, summary) in outcome_rx.iter() {
        match summary {
            Some(summary) => {
                summaries.insert(sector, summary);
            }
            None => debug!("Sector {} omitted: no ticker could be fetched", sector),
        }
    }

    info!(
        "Aggregated {}/{} sectors from {} in {:?}",
        summaries.len(),
        sectors.len(),
        source.name(),
        started.elapsed()
    );
    Ok(summaries)
}
