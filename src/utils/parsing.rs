//! Cell normalization for statement values

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::types::StatementDate;

/// Indian rupee sign as printed on statements
pub const RUPEE_SIGN: char = '₹';

fn date_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("date shape regex"))
}

/// Strip the currency sign and thousands separators from an amount cell
///
/// Returns `None` when nothing is left.
pub fn clean_amount_cell(text: &str) -> Option<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != RUPEE_SIGN && *c != ',')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Parse a `DD/MM/YYYY` date
///
/// Anything else, including ISO dates and two-digit years, is `Unparsed`.
pub fn parse_statement_date(text: &str) -> StatementDate {
    let text = text.trim();
    if !date_shape_re().is_match(text) {
        return StatementDate::Unparsed;
    }

    NaiveDate::parse_from_str(text, "%d/%m/%Y")
        .map(StatementDate::Parsed)
        .unwrap_or(StatementDate::Unparsed)
}

/// Parse a decimal amount, tolerating the currency sign and separators
pub fn parse_amount(text: &str) -> Option<BigDecimal> {
    let cleaned = clean_amount_cell(text)?;
    BigDecimal::from_str(&cleaned).ok()
}
