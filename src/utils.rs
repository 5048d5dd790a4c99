// Utility functions
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a calendar date, if possible.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).ok()
}

/// Formats a money amount rounded to two decimals, without trailing zeros.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!("{}", rounded)
}
