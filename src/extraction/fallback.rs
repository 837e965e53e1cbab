//! Text pattern scan used when a statement has no extractable grid

use regex::Regex;
use std::sync::OnceLock;

use crate::types::TransactionRecord;

/// `<DD/MM/YYYY> ... Given|Received ... ₹ <amount>` within one line of text.
///
/// When a line carries both labels the first one after the date wins, even if
/// the amount printed next to it belongs to the other label.
fn transaction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}/\d{2}/\d{4}).*?(Given|Received).*?₹\s*([\d,]+)")
            .expect("transaction regex")
    })
}

/// Scan plain statement text for transactions
///
/// Each match becomes one record with the amount placed in the column named
/// by the label; text that does not match is skipped.
pub fn scan_text(text: &str) -> Vec<TransactionRecord> {
    transaction_re()
        .captures_iter(text)
        .map(|caps| {
            let date = &caps[1];
            let amount = caps[3].replace(',', "");
            match &caps[2] {
                "Given" => TransactionRecord::from_raw(Some(date), Some(&amount), None),
                _ => TransactionRecord::from_raw(Some(date), None, Some(&amount)),
            }
        })
        .collect()
}
