//! Display formatting for table cells.
//!
//! Amounts are stored numeric and rendered as USD only here; dates render
//! as MM/DD/YYYY. The search engine matches against these rendered values,
//! so they are part of the visibility contract, not just cosmetics.

use chrono::{Datelike, NaiveDate};

/// Format a currency value as USD: two decimals, comma thousands
/// separators, `$` prefix (`1234.5` -> `"$1,234.50"`).
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-${}.{:02}", grouped, frac)
    } else {
        format!("${}.{:02}", grouped, frac)
    }
}

/// Format a date as MM/DD/YYYY, the legacy table's display format.
pub fn format_date_mdy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(1234567.89), "$1,234,567.89");
        assert_eq!(format_usd(-42.1), "-$42.10");
    }

    #[test]
    fn test_format_date_mdy() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date_mdy(d), "03/05/2024");
        let d = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date_mdy(d), "12/31/1999");
    }
}
