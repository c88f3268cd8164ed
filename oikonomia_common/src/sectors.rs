//! Static market configuration: the sector table and the headline indicators.
//!
//! Sector membership is baked into the program. Each sector lists a sample of large
//! constituents plus the matching SPDR sector ETF.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::tickers::TickerSymbol;

/// Headline market indicators in display order: Dow Jones, S&P 500, Nasdaq Composite.
pub const MARKET_INDICATORS: [&str; 3] = ["^DJI", "^GSPC", "^IXIC"];

/// Mapping from sector name to its ticker symbols.
pub type SectorTable = HashMap<String, Vec<TickerSymbol>>;

/// Industry sectors shown in the market overview.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Sector {
    Finance,
    Technology,
    Healthcare,
    Energy,
    #[strum(serialize = "Consumer Discretionary")]
    ConsumerDiscretionary,
    #[strum(serialize = "Consumer Staples")]
    ConsumerStaples,
    Industrials,
    Utilities,
    Materials,
    #[strum(serialize = "Real Estate")]
    RealEstate,
    #[strum(serialize = "Communication Services")]
    CommunicationServices,
}

impl Sector {
    /// Ticker symbols that make up this sector.
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Sector::Finance => &["JPM", "GS", "BAC", "WFC", "C", "AXP", "BRK.B", "BLK", "V", "SCHW", "XLF"],
            Sector::Technology => &["AAPL", "MSFT", "GOOGL", "NVDA", "META", "AMD", "INTC", "TSM", "CRM", "ORCL", "XLK"],
            Sector::Healthcare => &["JNJ", "PFE", "MRK", "UNH", "ABBV", "TMO", "ABT", "LLY", "BMY", "CVS", "XLV"],
            Sector::Energy => &["XOM", "CVX", "COP", "SLB", "PSX", "EOG", "VLO", "MPC", "KMI", "HAL", "XLE"],
            Sector::ConsumerDiscretionary => &["AMZN", "TSLA", "HD", "NKE", "SBUX", "MCD", "LOW", "TGT", "BKNG", "ROST", "XLY"],
            Sector::ConsumerStaples => &["PG", "KO", "PEP", "WMT", "COST", "MO", "PM", "CL", "KHC", "KR", "XLP"],
            Sector::Industrials => &["BA", "CAT", "GE", "UPS", "UNP", "DE", "MMM", "LMT", "RTX", "NOC", "XLI"],
            Sector::Utilities => &["NEE", "DUK", "SO", "D", "AEP", "EXC", "SRE", "PEG", "XEL", "ED", "XLU"],
            Sector::Materials => &["LIN", "SHW", "NEM", "DD", "FCX", "APD", "ECL", "NUE", "MLM", "ALB", "XLB"],
            Sector::RealEstate => &["PLD", "AMT", "CCI", "EQIX", "O", "SPG", "DLR", "WELL", "AVB", "VTR", "XLRE"],
            Sector::CommunicationServices => &["GOOGL", "META", "DIS", "NFLX", "TMUS", "VZ", "T", "CHTR", "EA", "XLC"],
        }
    }

    /// Members as owned `TickerSymbol`s.
    pub fn tickers(self) -> Vec<TickerSymbol> {
        self.members().iter().copied().map(TickerSymbol::from_static).collect()
    }
}

/// The sector table the tool ships with.
pub fn default_sectors() -> SectorTable {
    Sector::iter()
        .map(|sector| (sector.to_string(), sector.tickers()))
        .collect()
}

/// The headline indicators as `TickerSymbol`s, in display order.
pub fn market_indicators() -> Vec<TickerSymbol> {
    MARKET_INDICATORS.iter().copied().map(TickerSymbol::from_static).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_every_sector() {
        let table = default_sectors();
        assert_eq!(table.len(), 11);
        assert_eq!(table["Finance"].len(), 11);
        assert_eq!(table["Communication Services"].len(), 10);
        assert!(table["Real Estate"].iter().any(|t| t.as_str() == "XLRE"));
    }

    #[test]
    fn static_members_are_valid_symbols() {
        for sector in Sector::iter() {
            for member in sector.members() {
                let parsed: TickerSymbol = member.parse().unwrap();
                assert_eq!(parsed.as_str(), *member);
            }
        }
    }

    #[test]
    fn sector_names_round_trip() {
        let sector: Sector = "Consumer Staples".parse().unwrap();
        assert_eq!(sector, Sector::ConsumerStaples);
        assert_eq!(Sector::RealEstate.to_string(), "Real Estate");
    }

    #[test]
    fn indicators_keep_their_order() {
        let names: Vec<String> = market_indicators().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["^DJI", "^GSPC", "^IXIC"]);
    }
}
