//! Ticker symbols shared between the engine and the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;

/// Longest symbol accepted from the command line.
const MAX_SYMBOL_LEN: usize = 16;

/// Immutable identifier of a tradable instrument (e.g. `AAPL`, `BRK.B`, `^GSPC`).
///
/// Symbols are stored upper-cased. Parsing accepts ASCII letters and digits plus the
/// punctuation used by index and share-class symbols (`^`, `.`, `-`, `=`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Builds a symbol from compile-time configuration that is known to be valid.
    pub(crate) fn from_static(symbol: &'static str) -> Self {
        TickerSymbol(symbol.to_string())
    }

    /// Symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TickerSymbol {
    type Err = MarketError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_SYMBOL_LEN {
            return Err(MarketError::InvalidTicker(raw.to_string()));
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '^' | '.' | '-' | '='));
        if !valid {
            return Err(MarketError::InvalidTicker(raw.to_string()));
        }
        Ok(TickerSymbol(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TickerSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
