//! Core types and data structures for statement reconciliation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::parsing::{parse_amount, parse_statement_date};

/// Date of a statement line
///
/// Cells that do not follow the `DD/MM/YYYY` layout are kept as `Unparsed`
/// so the row survives even though it can never take part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatementDate {
    /// A calendar date read from the statement
    Parsed(NaiveDate),
    /// The cell was empty or not in the expected format
    Unparsed,
}

impl StatementDate {
    /// Returns the calendar date, if one was parsed
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            StatementDate::Parsed(date) => Some(*date),
            StatementDate::Unparsed => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, StatementDate::Parsed(_))
    }
}

impl fmt::Display for StatementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementDate::Parsed(date) => write!(f, "{}", date),
            StatementDate::Unparsed => write!(f, "(unparsed)"),
        }
    }
}

/// Amount roles tracked per party statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountColumn {
    /// Money sent to the other party
    Given,
    /// Money received from the other party
    Received,
}

impl AmountColumn {
    /// Header label used on statements and by the column selector
    pub fn label(&self) -> &'static str {
        match self {
            AmountColumn::Given => "Given",
            AmountColumn::Received => "Received",
        }
    }
}

impl fmt::Display for AmountColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AmountColumn {
    type Err = ReconcileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Given" => Ok(AmountColumn::Given),
            "Received" => Ok(AmountColumn::Received),
            other => Err(ReconcileError::UnknownColumn(other.to_string())),
        }
    }
}

/// One statement line normalized into typed values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Date of the transaction
    pub date: StatementDate,
    /// Amount given, if the cell held a number
    pub given: Option<BigDecimal>,
    /// Amount received, if the cell held a number
    pub received: Option<BigDecimal>,
}

impl TransactionRecord {
    /// Create a record from already typed values
    pub fn new(
        date: StatementDate,
        given: Option<BigDecimal>,
        received: Option<BigDecimal>,
    ) -> Self {
        Self {
            date,
            given,
            received,
        }
    }

    /// Build a record from raw cell text
    ///
    /// Unparsable dates become [`StatementDate::Unparsed`] and unparsable
    /// amounts become `None`; this never fails.
    pub fn from_raw(date: Option<&str>, given: Option<&str>, received: Option<&str>) -> Self {
        Self {
            date: date.map_or(StatementDate::Unparsed, parse_statement_date),
            given: given.and_then(parse_amount),
            received: received.and_then(parse_amount),
        }
    }

    /// Amount held in the given column
    pub fn amount(&self, column: AmountColumn) -> Option<&BigDecimal> {
        match column {
            AmountColumn::Given => self.given.as_ref(),
            AmountColumn::Received => self.received.as_ref(),
        }
    }
}

/// Ordered statement lines extracted from one document
///
/// Dates may repeat; there is no uniqueness constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTable {
    pub records: Vec<TransactionRecord>,
}

impl TransactionTable {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    /// Append the records of another table, keeping order
    pub fn extend(&mut self, other: TransactionTable) {
        self.records.extend(other.records);
    }

    /// Number of records whose date could not be parsed
    pub fn unparsed_dates(&self) -> usize {
        self.records.iter().filter(|r| !r.date.is_parsed()).count()
    }
}

impl FromIterator<TransactionRecord> for TransactionTable {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Outcome of comparing one aligned pair of amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Both amounts present and within tolerance
    Match,
    /// Amounts differ, or one side has no entry for the date
    Mismatch,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => f.write_str("Match"),
            Verdict::Mismatch => f.write_str("Mismatch"),
        }
    }
}

/// A row of the outer join between two statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub date: NaiveDate,
    /// Amount from the first statement
    pub first: Option<BigDecimal>,
    /// Amount from the second statement
    pub second: Option<BigDecimal>,
    pub verdict: Verdict,
}

impl ComparisonRow {
    pub fn is_match(&self) -> bool {
        self.verdict == Verdict::Match
    }
}

/// Errors that can occur while extracting a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ExtractionError {
    #[error("Error reading document: {0}")]
    DocumentRead(String),
    #[error("No recognizable Given/Received data found in document")]
    NoRecognizableData,
}

/// Result type for extraction operations
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Errors raised by the reconciliation entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    #[error("Unknown amount column: {0} (expected Given or Received)")]
    UnknownColumn(String),
}
