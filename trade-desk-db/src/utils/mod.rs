use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses an amount as typed into a form (`"1,250,000.50"`, `" 5000 "`).
///
/// Thousands separators and surrounding whitespace are ignored. Returns `None`
/// for blank or non-numeric input.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Case-insensitive substring match used by listing searches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
