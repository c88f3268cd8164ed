//! Canned quote source shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use oikonomia_common::sectors::SectorTable;
use oikonomia_common::{MarketError, Quote, Result, TickerSymbol};
use oikonomia_engine::QuoteSource;

/// What the fixture source does when asked for a ticker.
#[derive(Debug, Clone)]
pub enum Fixture {
    Quote { change: f64, change_52wk: f64, delay: Duration },
    Fail,
    Panic,
}

/// Quote source answering from a fixed table; unknown tickers are "not found".
#[derive(Default)]
pub struct FixtureSource {
    fixtures: HashMap<String, Fixture>,
    calls: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quote(mut self, ticker: &str, change: f64, change_52wk: f64) -> Self {
        self.fixtures.insert(
            ticker.to_string(),
            Fixture::Quote { change, change_52wk, delay: Duration::ZERO },
        );
        self
    }

    pub fn slow_quote(mut self, ticker: &str, change: f64, delay: Duration) -> Self {
        self.fixtures.insert(
            ticker.to_string(),
            Fixture::Quote { change, change_52wk: 0.0, delay },
        );
        self
    }

    pub fn failing(mut self, ticker: &str) -> Self {
        self.fixtures.insert(ticker.to_string(), Fixture::Fail);
        self
    }

    pub fn panicking(mut self, ticker: &str) -> Self {
        self.fixtures.insert(ticker.to_string(), Fixture::Panic);
        self
    }

    /// Tickers requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl QuoteSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn get_quote(&self, ticker: &TickerSymbol) -> Result<Quote> {
        self.calls.lock().unwrap().push(ticker.to_string());
        match self.fixtures.get(ticker.as_str()) {
            Some(Fixture::Quote { change, change_52wk, delay }) => {
                if !delay.is_zero() {
                    thread::sleep(*delay);
                }
                Ok(Quote::with_changes(ticker.clone(), *change, *change_52wk))
            }
            Some(Fixture::Fail) => Err(MarketError::Network(format!("{ticker}: connection reset"))),
            Some(Fixture::Panic) => panic!("fixture asked to panic for {ticker}"),
            None => Err(MarketError::TickerNotFound(ticker.to_string())),
        }
    }
}

pub fn tickers(symbols: &[&str]) -> Vec<TickerSymbol> {
    symbols.iter().map(|s| s.parse().unwrap()).collect()
}

pub fn table(entries: &[(&str, &[&str])]) -> SectorTable {
    entries
        .iter()
        .map(|(name, symbols)| (name.to_string(), tickers(symbols)))
        .collect()
}
