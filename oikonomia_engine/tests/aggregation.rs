mod common;

use std::time::Duration;

use common::{FixtureSource, table};
use oikonomia_common::MarketError;
use oikonomia_common::sectors::SectorTable;
use oikonomia_engine::aggregate;

#[test]
fn mean_over_three_tickers() {
    let source = FixtureSource::new()
        .quote("JPM", 1.0, 10.0)
        .quote("GS", -2.0, 5.0)
        .quote("BAC", 3.0, 0.0);
    let sectors = table(&[("Finance", &["JPM", "GS", "BAC"])]);

    let map = aggregate(&source, &sectors).unwrap();

    let finance = map["Finance"];
    assert!((finance.average_change_percent - 0.6667).abs() < 0.001);
    assert!((finance.average_52wk_change_percent - 5.0).abs() < 1e-9);
}

#[test]
fn failed_ticker_is_skipped() {
    let source = FixtureSource::new().failing("JPM").quote("GS", 2.0, 8.0);
    let sectors = table(&[("Finance", &["JPM", "GS"])]);

    let map = aggregate(&source, &sectors).unwrap();

    assert_eq!(map["Finance"].average_change_percent, 2.0);
    assert_eq!(map["Finance"].average_52wk_change_percent, 8.0);
    assert_eq!(source.calls().len(), 2);
}

#[test]
fn sector_without_any_quote_is_absent() {
    let source = FixtureSource::new().failing("JPM").quote("AAPL", 1.5, 1.5);
    let sectors = table(&[("Finance", &["JPM"]), ("Technology", &["AAPL"])]);

    let map = aggregate(&source, &sectors).unwrap();

    assert!(!map.contains_key("Finance"));
    assert_eq!(map.len(), 1);
    assert_eq!(map["Technology"].average_change_percent, 1.5);
}

#[test]
fn empty_table_gives_empty_map() {
    let map = aggregate(&FixtureSource::new(), &table(&[])).unwrap();
    assert!(map.is_empty());
}

#[test]
fn sectors_run_in_parallel() {
    let delay = Duration::from_millis(200);
    let source = FixtureSource::new()
        .slow_quote("A", 1.0, delay)
        .slow_quote("B", 1.0, delay)
        .slow_quote("C", 1.0, delay)
        .slow_quote("D", 1.0, delay);
    let sectors = table(&[("One", &["A"]), ("Two", &["B"]), ("Three", &["C"]), ("Four", &["D"])]);

    let started = std::time::Instant::now();
    let map = aggregate(&source, &sectors).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(map.len(), 4);
    assert!(elapsed >= delay);
    assert!(elapsed < delay * 4, "sectors were serialized: {elapsed:?}");
}

#[test]
fn repeated_runs_give_identical_maps() {
    let mut source = FixtureSource::new();
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();
    for s in 0..8 {
        let mut members = Vec::new();
        for t in 0..6 {
            let symbol = format!("S{s}T{t}");
            let change = (s as f64 - 3.5) * 0.37 + t as f64 * 0.11;
            source = if (s + t) % 5 == 0 {
                source.failing(&symbol)
            } else {
                source.slow_quote(&symbol, change, Duration::from_micros(((s * 7 + t) % 4) as u64 * 150))
            };
            members.push(symbol);
        }
        entries.push((format!("Sector {s}"), members));
    }
    let sectors: SectorTable = entries
        .iter()
        .map(|(name, members)| {
            let symbols: Vec<&str> = members.iter().map(String::as_str).collect();
            (name.clone(), common::tickers(&symbols))
        })
        .collect();

    let first = aggregate(&source, &sectors).unwrap();
    assert_eq!(first.len(), 8);
    for _ in 0..25 {
        let again = aggregate(&source, &sectors).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn reducer_panic_fails_the_whole_pass() {
    let source = FixtureSource::new().quote("AAPL", 1.0, 1.0).panicking("JPM");
    let sectors = table(&[("Finance", &["JPM"]), ("Technology", &["AAPL"])]);

    match aggregate(&source, &sectors) {
        Err(MarketError::Aggregation(msg)) => assert!(msg.contains("Finance")),
        other => panic!("expected aggregation failure, got {other:?}"),
    }
}
