//! Text parsing/formatting helpers for site-rendered values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Format a calendar day the way the host chart labels its samples
/// (`"Jan 5, 2024"` — no zero padding on the day).
pub fn format_day(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// Parse a site-rendered price cell (`"$2.45"`) into a decimal.
///
/// The currency prefix is optional; whitespace is ignored.
pub fn parse_dollar_price(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let bare = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    Decimal::from_str(bare).ok()
}

/// Parse the leading integer of a volume cell.
///
/// Matches the host script's `parseInt` semantics: digits are consumed until
/// the first non-digit, so `"12 sold"` parses as `12`. Returns `None` when
/// the text has no leading digits.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    i64::from_str(&digits).ok()
}
