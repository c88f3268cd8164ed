//! Yahoo Finance quote source.
//!
//! Fetches one year of daily bars from Yahoo's v8 chart API and derives a [`Quote`]
//! from the response metadata and the bar series. One HTTP request per quote; no
//! retry, cache or rate limiting.

use std::time::Duration;

use oikonomia_common::{MarketError, Quote, Result, TickerSymbol};
use oikonomia_engine::QuoteSource;
use serde::Deserialize;

const CHART_ENDPOINT: &str = "https://query2.finance.yahoo.com/v8/finance/chart";

/// Trading days in roughly three months.
const THREE_MONTH_SESSIONS: usize = 63;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ChartMeta {
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
    regular_market_day_high: Option<f64>,
    regular_market_day_low: Option<f64>,
    regular_market_volume: Option<f64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

/// Quote source backed by the Yahoo Finance chart API.
pub struct YahooQuoteSource {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl YahooQuoteSource {
    /// Builds the HTTP client; every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| MarketError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }

    fn chart_url(ticker: &TickerSymbol) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(CHART_ENDPOINT).map_err(|e| MarketError::Format(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| MarketError::Format(format!("{CHART_ENDPOINT} cannot take path segments")))?
            .push(ticker.as_str());
        url.query_pairs_mut()
            .append_pair("range", "1y")
            .append_pair("interval", "1d");
        Ok(url)
    }

    fn transport_error(&self, ticker: &TickerSymbol, e: reqwest::Error) -> MarketError {
        if e.is_timeout() {
            MarketError::Timeout {
                ticker: ticker.to_string(),
                after: self.timeout,
            }
        } else {
            MarketError::Network(format!("{ticker}: {e}"))
        }
    }
}

impl QuoteSource for YahooQuoteSource {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn get_quote(&self, ticker: &TickerSymbol) -> Result<Quote> {
        let url = Self::chart_url(ticker)?;
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.transport_error(ticker, e))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketError::TickerNotFound(ticker.to_string()));
        }
        if !status.is_success() {
            return Err(MarketError::Network(format!("HTTP {status} for {ticker}")));
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            if e.is_timeout() {
                self.transport_error(ticker, e)
            } else {
                MarketError::ResponseFormat(format!("failed to parse response for {ticker}: {e}"))
            }
        })?;
        parse_chart(ticker, chart)
    }
}

/// Percent change from `base` to `value`; zero when there is no usable base.
fn percent_change(value: f64, base: f64) -> f64 {
    if base > 0.0 { (value - base) / base * 100.0 } else { 0.0 }
}

fn parse_chart(ticker: &TickerSymbol, resp: ChartResponse) -> Result<Quote> {
    let result = resp.chart.result.ok_or_else(|| match resp.chart.error {
        Some(err) if err.code == "Not Found" => MarketError::TickerNotFound(ticker.to_string()),
        Some(err) => MarketError::ResponseFormat(format!("{}: {}", err.code, err.description)),
        None => MarketError::ResponseFormat("empty result with no error".into()),
    })?;

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| MarketError::TickerNotFound(ticker.to_string()))?;
    let meta = data.meta;
    let bars = data.indicators.quote.into_iter().next().unwrap_or_default();

    let closes: Vec<f64> = bars.close.iter().flatten().copied().collect();
    let volumes: Vec<f64> = bars.volume.iter().flatten().copied().collect();

    let price = meta
        .regular_market_price
        .or_else(|| closes.last().copied())
        .ok_or_else(|| MarketError::ResponseFormat(format!("no price for {ticker}")))?;

    let previous_close = match closes.len() {
        n if n >= 2 => Some(closes[n - 2]),
        _ => meta.previous_close.or(meta.chart_previous_close),
    };
    let year_open = closes.first().copied();

    let recent = &volumes[volumes.len().saturating_sub(THREE_MONTH_SESSIONS)..];
    let average_volume = if recent.is_empty() {
        0.0
    } else {
        recent.iter().sum::<f64>() / recent.len() as f64
    };

    let last = |series: &[Option<f64>]| series.iter().rev().flatten().next().copied();
    let highest = bars.high.iter().flatten().copied().reduce(f64::max);
    let lowest = bars.low.iter().flatten().copied().reduce(f64::min);

    Ok(Quote {
        ticker: ticker.clone(),
        regular_market_price: price,
        regular_market_change_percent: previous_close.map_or(0.0, |prev| percent_change(price, prev)),
        regular_market_open: last(bars.open.as_slice()).unwrap_or(price),
        regular_market_day_high: meta.regular_market_day_high.or_else(|| last(bars.high.as_slice())).unwrap_or(price),
        regular_market_day_low: meta.regular_market_day_low.or_else(|| last(bars.low.as_slice())).unwrap_or(price),
        fifty_two_week_high: meta.fifty_two_week_high.or(highest).unwrap_or(price),
        fifty_two_week_low: meta.fifty_two_week_low.or(lowest).unwrap_or(price),
        fifty_two_week_change_percent: year_open.map_or(0.0, |open| percent_change(price, open)),
        market_cap: 0.0,
        regular_market_volume: meta.regular_market_volume.or_else(|| volumes.last().copied()).unwrap_or(0.0),
        average_daily_volume_3_month: average_volume,
    })
}
