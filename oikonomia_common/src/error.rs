//! Error types shared by the engine and the command-line client.
//!
//! The `MarketError` enum unifies quote-fetch failures, channel communication
//! problems, aggregation failures and I/O, allowing every crate in the workspace to
//! propagate a single error type.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by the engine and the client.
#[derive(Error, Debug)]
pub enum MarketError {
    /// I/O error originating from the standard library, the terminal or thread spawning.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// A string could not be turned into a `TickerSymbol`.
    #[error("Invalid ticker symbol: {0:?}")]
    InvalidTicker(String),

    /// The quote provider does not know the requested symbol.
    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    /// The quote provider could not be reached or answered with a transport error.
    #[error("Network error: {0}")]
    Network(String),

    /// A quote call did not answer within the allowed time.
    #[error("Quote for {ticker} timed out after {after:?}")]
    Timeout {
        /// Symbol whose quote was requested.
        ticker: String,
        /// Time budget that expired.
        after: Duration,
    },

    /// The quote provider answered with a payload we could not interpret.
    #[error("Unexpected response format: {0}")]
    ResponseFormat(String),

    /// A headline indicator could not be fetched; fatal to the overview.
    #[error("Failed to fetch headline indicator {ticker}: {source}")]
    HeadlineFetch {
        /// Indicator symbol, e.g. `^DJI`.
        ticker: String,
        /// Underlying fetch error.
        #[source]
        source: Box<MarketError>,
    },

    /// The sector aggregation pass failed as a whole.
    #[error("Sector aggregation failed: {0}")]
    Aggregation(String),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl MarketError {
    /// Wraps a fetch error for a headline indicator.
    pub fn headline(ticker: impl Into<String>, source: MarketError) -> Self {
        MarketError::HeadlineFetch {
            ticker: ticker.into(),
            source: Box::new(source),
        }
    }
}
