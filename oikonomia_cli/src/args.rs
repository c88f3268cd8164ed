//! Command-line arguments for the market overview tool.
//!
//! The tool takes at most one positional argument, the ticker symbol. There are no
//! flags: anything given, including text starting with `-`, is taken as the ticker.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    about = "A Financial Market Analysis Tool",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Ticker symbol to show in detail (e.g. `AAPL`).
    /// Without it the market overview is shown.
    #[clap(allow_hyphen_values = true)]
    pub ticker: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_overview() {
        let args = Args::try_parse_from(["oikonomia"]).unwrap();
        assert!(args.ticker.is_none());
    }

    #[test]
    fn single_positional_is_the_ticker() {
        let args = Args::try_parse_from(["oikonomia", "aapl"]).unwrap();
        assert_eq!(args.ticker.as_deref(), Some("aapl"));
    }

    #[test]
    fn flag_lookalikes_are_taken_as_the_ticker() {
        for raw in ["--no-color", "--timeout-secs", "--help", "-V"] {
            let args = Args::try_parse_from(["oikonomia", raw]).unwrap();
            assert_eq!(args.ticker.as_deref(), Some(raw));
        }
    }

    #[test]
    fn more_than_one_argument_is_rejected() {
        assert!(Args::try_parse_from(["oikonomia", "AAPL", "MSFT"]).is_err());
    }
}
