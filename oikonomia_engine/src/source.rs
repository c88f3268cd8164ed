//! Quote source abstraction and the per-call timeout wrapper.
//!
//! The engine never talks to a market-data provider directly. Everything goes through
//! [`QuoteSource`], which the client implements over HTTP and tests implement with
//! canned fixtures.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, bounded};
use log::debug;
use oikonomia_common::{MarketError, Quote, Result, TickerSymbol};

/// Something that can fetch a fresh quote for a ticker.
///
/// Implementations are shared between sector threads, hence `Send + Sync`. A call is a
/// single opaque operation: no retry, caching or rate limiting is expected.
pub trait QuoteSource: Send + Sync {
    /// Human-readable name of this source, used in logs.
    fn name(&self) -> &str;

    /// Fetch the current quote for `ticker`.
    fn get_quote(&self, ticker: &TickerSymbol) -> Result<Quote>;
}

impl<S: QuoteSource + ?Sized> QuoteSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get_quote(&self, ticker: &TickerSymbol) -> Result<Quote> {
        (**self).get_quote(ticker)
    }
}

/// Bounds every call to an inner source by a fixed time budget.
///
/// Each call runs on a short-lived helper thread; the caller waits on a one-slot
/// channel for at most `timeout`. When the budget expires the caller gets
/// [`MarketError::Timeout`] and the helper is left to finish on its own, its late
/// answer being dropped.
pub struct TimeoutSource<S: ?Sized> {
    inner: Arc<S>,
    timeout: Duration,
}

impl<S: QuoteSource + ?Sized + 'static> TimeoutSource<S> {
    /// Wraps an already shared source.
    pub fn new(inner: Arc<S>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl<S: QuoteSource + ?Sized + 'static> QuoteSource for TimeoutSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn get_quote(&self, ticker: &TickerSymbol) -> Result<Quote> {
        let (reply_tx, reply_rx) = bounded::<Result<Quote>>(1);
        let inner = Arc::clone(&self.inner);
        let requested = ticker.clone();

        thread::Builder::new()
            .name(format!("quote-{ticker}"))
            .spawn(move || {
                let outcome = inner.get_quote(&requested);
                if reply_tx.send(outcome).is_err() {
                    debug!("Dropping late quote for {}", requested);
                }
            })?;

        match reply_rx.recv_timeout(self.timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => Err(MarketError::Timeout {
                ticker: ticker.to_string(),
                after: self.timeout,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(MarketError::ChannelRecv(format!(
                "quote worker for {ticker} exited without replying"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowSource {
        delay: Duration,
    }

    impl QuoteSource for SlowSource {
        fn name(&self) -> &str {
            "slow"
        }

        fn get_quote(&self, ticker: &TickerSymbol) -> Result<Quote> {
            thread::sleep(self.delay);
            Ok(Quote::with_changes(ticker.clone(), 1.0, 2.0))
        }
    }

    struct PanickingSource;

    impl QuoteSource for PanickingSource {
        fn name(&self) -> &str {
            "panicking"
        }

        fn get_quote(&self, _ticker: &TickerSymbol) -> Result<Quote> {
            panic!("provider blew up")
        }
    }

    fn ticker(s: &str) -> TickerSymbol {
        s.parse().unwrap()
    }

    #[test]
    fn fast_calls_pass_through() {
        let source = TimeoutSource::new(
            Arc::new(SlowSource { delay: Duration::from_millis(1) }),
            Duration::from_secs(5),
        );
        let quote = source.get_quote(&ticker("AAPL")).unwrap();
        assert_eq!(quote.ticker.as_str(), "AAPL");
        assert_eq!(source.name(), "slow");
    }

    #[test]
    fn hung_calls_become_timeouts() {
        let source = TimeoutSource::new(
            Arc::new(SlowSource { delay: Duration::from_secs(2) }),
            Duration::from_millis(50),
        );
        match source.get_quote(&ticker("JPM")) {
            Err(MarketError::Timeout { ticker, after }) => {
                assert_eq!(ticker, "JPM");
                assert_eq!(after, Duration::from_millis(50));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn worker_panic_is_reported_not_propagated() {
        let source = TimeoutSource::new(Arc::new(PanickingSource), Duration::from_secs(5));
        assert!(matches!(
            source.get_quote(&ticker("GS")),
            Err(MarketError::ChannelRecv(_))
        ));
    }
}
