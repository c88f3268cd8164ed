//! Number formatting for prices, percents and volumes.

/// Inserts `,` between groups of three digits: `1234567` → `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Price with grouped thousands and two decimals: `42137.5` → `42,137.50`.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Whole count with grouped thousands, truncating any fraction.
pub fn format_count(value: f64) -> String {
    group_thousands(value as i64)
}

/// Percent with two decimals: `-1.234` → `-1.23%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-98765), "-98,765");
    }

    #[test]
    fn prices_keep_two_decimals() {
        assert_eq!(format_price(42137.5), "42,137.50");
        assert_eq!(format_price(0.999), "1.00");
        assert_eq!(format_price(-1234.567), "-1,234.57");
        assert_eq!(format_price(-0.001), "0.00");
    }

    #[test]
    fn counts_and_percents() {
        assert_eq!(format_count(51_234_567.9), "51,234,567");
        assert_eq!(format_percent(-1.234), "-1.23%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
