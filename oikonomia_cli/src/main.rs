//! Oikonomia — a terminal snapshot of financial market conditions.
//!
//! Without arguments it prints the market overview: the headline indices (Dow Jones,
//! S&P 500, Nasdaq) and the average day and 52-week change of eleven industry
//! sectors. With a ticker symbol it prints that ticker's detail view instead.
//!
//! Usage example (CLI):
//! ```bash
//! oikonomia
//! oikonomia AAPL
//! ```
//!
//! Quotes come from Yahoo Finance. Tickers that fail inside a sector are logged and
//! skipped; a failed headline quote or ticker lookup aborts with a non-zero exit code
//! before anything is printed.
#![warn(missing_docs)]
mod args;
mod format;
mod render;
mod yahoo;

use crate::args::Args;
use crate::render::{Presenter, Theme};
use crate::yahoo::YahooQuoteSource;
use clap::Parser;
use log::{debug, error};
use oikonomia_common::sectors::{default_sectors, market_indicators};
use oikonomia_common::{Result, TickerSymbol};
use oikonomia_engine::{OverviewOrchestrator, QuoteSource, TimeoutSource};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// Width used when the terminal size cannot be determined.
const DEFAULT_WIDTH: u16 = 80;

/// Upper bound for every single quote request.
const QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Captures a market snapshot and prints it. Nothing is written if the capture fails.
fn show_overview<S: QuoteSource + ?Sized + 'static>(
    orchestrator: &OverviewOrchestrator<S>,
    presenter: &Presenter,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = orchestrator.capture()?;
    presenter.render_banner(out)?;
    presenter.render_overview(&snapshot, out)
}

/// Fetches one ticker and prints its detail view. Nothing is written if the fetch fails.
fn show_ticker<S: QuoteSource + ?Sized>(
    source: &S,
    ticker: &TickerSymbol,
    presenter: &Presenter,
    out: &mut dyn Write,
) -> Result<()> {
    let quote = source.get_quote(ticker)?;
    presenter.render_banner(out)?;
    presenter.render_detail(&quote, out)
}

fn run(args: &Args) -> Result<()> {
    let yahoo = Arc::new(YahooQuoteSource::new(QUOTE_TIMEOUT)?);
    let source = Arc::new(TimeoutSource::new(yahoo, QUOTE_TIMEOUT));

    let stdout = io::stdout();
    let theme = if !stdout.is_terminal() {
        Theme::plain()
    } else {
        Theme::default()
    };
    let presenter = Presenter::new(theme, terminal_width());
    let mut out = stdout.lock();

    match &args.ticker {
        Some(raw) => {
            let ticker: TickerSymbol = raw.parse()?;
            show_ticker(&*source, &ticker, &presenter, &mut out)
        }
        None => {
            let orchestrator = OverviewOrchestrator::new(source, default_sectors(), market_indicators());
            show_overview(&orchestrator, &presenter, &mut out)
        }
    }
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// Terminal width in columns, or [`DEFAULT_WIDTH`] when stdout is not a terminal.
fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => columns,
        Ok(_) => DEFAULT_WIDTH,
        Err(e) => {
            debug!("Terminal size unavailable ({}), using {} columns", e, DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}
