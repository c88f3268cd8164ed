//!
//! Common types and utilities shared by the aggregation engine and the client.
//!
//! This crate aggregates:
//! - `error` — unified error type `MarketError` used across the workspace.
//! - `result` — handy `Result<T, MarketError>` alias.
//! - `tickers` — the `TickerSymbol` identifier and its parsing rules.
//! - `quote` — the `Quote` record returned by a quote source.
//! - `sectors` — static sector membership and headline indicators.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tickers;
pub mod quote;
pub mod sectors;

pub use error::MarketError;
pub use result::Result;
pub use quote::Quote;
pub use tickers::TickerSymbol;
