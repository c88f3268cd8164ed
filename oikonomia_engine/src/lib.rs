//! Concurrent aggregation engine for the market overview.
//!
//! The engine fetches quotes through a [`QuoteSource`](source::QuoteSource), reduces
//! many tickers into per-sector averages on parallel threads, and joins that work with
//! a separately fetched set of headline quotes:
//!
//! - `source` — the quote source trait and the per-call timeout wrapper.
//! - `reducer` — one sector's sequential fetch-and-average loop.
//! - `aggregator` — fan-out of reducers across sectors and fan-in of their summaries.
//! - `completion` — the single-use channel carrying the aggregation outcome.
//! - `overview` — the orchestrator producing a `MarketSnapshot`.
//! - `trend` — positive / negative / neutral classification of changes.
#![warn(missing_docs)]
pub mod aggregator;
pub mod completion;
pub mod overview;
pub mod reducer;
pub mod source;
pub mod trend;

pub use aggregator::{SectorSummaryMap, aggregate, aggregate_until};
pub use overview::{MarketSnapshot, OverviewOrchestrator};
pub use reducer::SectorSummary;
pub use source::{QuoteSource, TimeoutSource};
pub use trend::Trend;
