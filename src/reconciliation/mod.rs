//! Reconciliation of two statements by date
//!
//! Each statement is projected onto `(date, amount)` for one column, the two
//! projections are full-outer-joined on date and every joined pair is marked
//! as a match when the amounts differ by less than the tolerance.

pub mod report;

pub use report::*;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{AmountColumn, ComparisonRow, TransactionTable, Verdict};

/// Options for [`ReconciliationEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Amounts closer than this are considered equal (strictly less than)
    pub tolerance: BigDecimal,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            tolerance: BigDecimal::from(1),
        }
    }
}

/// Compares two transaction tables column by column
#[derive(Debug, Clone, Default)]
pub struct ReconciliationEngine {
    options: ReconcileOptions,
}

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReconcileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Outer-join `first` and `second` on date for `column`
    ///
    /// Records with an unparsed date or no amount in `column` are left out.
    /// A date repeated on either side yields every pairing for that date.
    /// Rows come out in ascending date order.
    pub fn reconcile(
        &self,
        first: &TransactionTable,
        second: &TransactionTable,
        column: AmountColumn,
    ) -> Vec<ComparisonRow> {
        let mut by_date: BTreeMap<NaiveDate, (Vec<&BigDecimal>, Vec<&BigDecimal>)> =
            BTreeMap::new();

        for (date, amount) in project(first, column) {
            by_date.entry(date).or_default().0.push(amount);
        }
        for (date, amount) in project(second, column) {
            by_date.entry(date).or_default().1.push(amount);
        }

        let mut rows = Vec::new();
        for (date, (left, right)) in by_date {
            match (left.is_empty(), right.is_empty()) {
                (false, false) => {
                    for l in &left {
                        for r in &right {
                            rows.push(self.row(date, Some(*l), Some(*r)));
                        }
                    }
                }
                (false, true) => rows.extend(left.iter().map(|l| self.row(date, Some(*l), None))),
                (true, false) => rows.extend(right.iter().map(|r| self.row(date, None, Some(*r)))),
                (true, true) => {}
            }
        }

        log::debug!(
            "Reconciled {} vs {} record(s) on {}: {} row(s)",
            first.len(),
            second.len(),
            column,
            rows.len()
        );
        rows
    }

    /// Match iff both amounts are present and closer than the tolerance
    pub fn verdict(&self, first: Option<&BigDecimal>, second: Option<&BigDecimal>) -> Verdict {
        match (first, second) {
            (Some(a), Some(b)) if (a - b).abs() < self.options.tolerance => Verdict::Match,
            _ => Verdict::Mismatch,
        }
    }

    fn row(&self, date: NaiveDate, first: Option<&BigDecimal>, second: Option<&BigDecimal>) -> ComparisonRow {
        ComparisonRow {
            date,
            verdict: self.verdict(first, second),
            first: first.cloned(),
            second: second.cloned(),
        }
    }
}

/// `(date, amount)` pairs of the records that can take part in a comparison
fn project(
    table: &TransactionTable,
    column: AmountColumn,
) -> impl Iterator<Item = (NaiveDate, &BigDecimal)> + '_ {
    table
        .iter()
        .filter_map(move |record| Some((record.date.date()?, record.amount(column)?)))
}

/// Reconcile with the default one-unit tolerance
pub fn reconcile(
    first: &TransactionTable,
    second: &TransactionTable,
    column: AmountColumn,
) -> Vec<ComparisonRow> {
    ReconciliationEngine::new().reconcile(first, second, column)
}
