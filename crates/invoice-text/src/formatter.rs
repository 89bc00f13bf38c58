//! Money, date and document-number formatting

use crate::{Result, TextError};
use chrono::{Datelike, Days, NaiveDate};

/// Month abbreviations used on rendered documents
const MONTHS_SHORT: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Format a number with a fixed count of decimals
///
/// Rounds the exact binary value. Exact halfway values round away from zero,
/// so `0.125` gives `0.13` while `0.015` (stored just below the tie) gives
/// `0.01`. Non-finite values render as `NaN` / `Infinity` / `-Infinity`, and
/// negative zero renders unsigned.
///
/// # Examples
/// ```
/// use invoice_text::to_fixed;
/// assert_eq!(to_fixed(673.0, 2), "673.00");
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(-2.5, 0), "-3");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let multiplier = 10_f64.powi(digits as i32);
    let scaled = value.abs() * multiplier;
    // A tie only when the scaled product is exact; near-ties format as their binary value
    let exact = value.abs().mul_add(multiplier, -scaled) == 0.0;
    let magnitude = if exact && scaled.fract() == 0.5 {
        (scaled.trunc() + 1.0) / multiplier
    } else {
        value.abs()
    };

    let formatted = format!("{magnitude:.digits$}");
    if value < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Format a plain number the shortest way that round-trips
///
/// # Examples
/// ```
/// use invoice_text::format_number;
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Format a money value: currency symbol followed by the amount to two decimals
///
/// The symbol is free text and is not validated. No thousands separators.
///
/// # Examples
/// ```
/// use invoice_text::format_money;
/// assert_eq!(format_money("US$", 753.76), "US$753.76");
/// assert_eq!(format_money("US$", 1234567.0), "US$1234567.00");
/// ```
pub fn format_money(currency: &str, value: f64) -> String {
    format!("{currency}{}", to_fixed(value, 2))
}

/// Format a date for display (e.g. "JAN 5, 2025")
pub fn format_display_date(date: NaiveDate) -> String {
    let month_name = MONTHS_SHORT[date.month0() as usize];
    format!("{} {}, {}", month_name, date.day(), date.year())
}

/// Add calendar days to a date
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| TextError::InvalidDate(format!("{date} + {days} days is out of range")))
}

/// Parse an ISO date (`YYYY-MM-DD`)
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| TextError::InvalidDate(format!("{text}: {e}")))
}

/// Build a document number: `YYYYMMDD` followed by a two-digit suffix
///
/// Only the last two digits of `suffix` are used.
pub fn generate_document_number(date: NaiveDate, suffix: u32) -> String {
    format!("{}{:02}", date.format("%Y%m%d"), suffix % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(33.65, 2), "33.65");
        assert_eq!(to_fixed(47.11, 2), "47.11");
        assert_eq!(to_fixed(753.76, 2), "753.76");
    }

    #[test]
    fn test_to_fixed_ties_round_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_values_just_below_tie() {
        assert_eq!(to_fixed(0.015, 2), "0.01");
        assert_eq!(to_fixed(0.045, 2), "0.04");
        assert_eq!(to_fixed(0.075, 2), "0.07");
        assert_eq!(to_fixed(0.155, 2), "0.15");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(-0.015, 2), "-0.01");
        // 0.30 at 5% tax
        assert_eq!(to_fixed(0.30 * (5.0 / 100.0), 2), "0.01");
    }

    #[test]
    fn test_to_fixed_negative() {
        assert_eq!(to_fixed(-12.5, 2), "-12.50");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_money_free_text_symbol() {
        assert_eq!(format_money("CA$ ", 10.0), "CA$ 10.00");
        assert_eq!(format_money("€", 1.1), "€1.10");
    }

    #[test]
    fn test_format_money_no_thousands_separator() {
        assert_eq!(format_money("US$", 26920.0), "US$26920.00");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(date(2025, 1, 5)), "JAN 5, 2025");
        assert_eq!(format_display_date(date(2024, 12, 31)), "DEC 31, 2024");
    }

    #[test]
    fn test_add_days_crosses_month() {
        assert_eq!(add_days(date(2025, 1, 15), 30).unwrap(), date(2025, 2, 14));
        assert_eq!(add_days(date(2024, 12, 15), 30).unwrap(), date(2025, 1, 14));
    }

    #[test]
    fn test_add_days_overflow() {
        assert!(add_days(NaiveDate::MAX, 1).is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-01-05").unwrap(), date(2025, 1, 5));
        assert!(parse_iso_date("JAN 5, 2025").is_err());
    }

    #[test]
    fn test_generate_document_number() {
        assert_eq!(generate_document_number(date(2025, 1, 5), 7), "2025010507");
        assert_eq!(generate_document_number(date(2025, 1, 5), 142), "2025010542");
    }
}
