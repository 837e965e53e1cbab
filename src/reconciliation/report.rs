//! A full comparison request: two documents in, one report out

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ReconcileOptions, ReconciliationEngine};
use crate::extraction::Extractor;
use crate::types::{AmountColumn, ComparisonRow, ExtractionResult, TransactionTable};

/// Whether the reconciler ran for a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonStatus {
    /// Both documents were extracted and compared
    Compared(Vec<ComparisonRow>),
    /// At least one document failed to extract
    Skipped { reason: String },
}

/// Outcome of comparing two statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub id: String,
    pub column: AmountColumn,
    /// Extraction outcome of the first document
    pub first: ExtractionResult<TransactionTable>,
    /// Extraction outcome of the second document
    pub second: ExtractionResult<TransactionTable>,
    pub status: ComparisonStatus,
}

impl ReconciliationReport {
    /// Comparison rows, empty when the comparison was skipped
    pub fn rows(&self) -> &[ComparisonRow] {
        match &self.status {
            ComparisonStatus::Compared(rows) => rows,
            ComparisonStatus::Skipped { .. } => &[],
        }
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows().iter().filter(|row| !row.is_match())
    }

    pub fn mismatch_count(&self) -> usize {
        self.mismatches().count()
    }

    /// True only when the comparison ran and every row matched
    pub fn all_match(&self) -> bool {
        self.is_compared() && self.mismatch_count() == 0
    }

    pub fn is_compared(&self) -> bool {
        matches!(self.status, ComparisonStatus::Compared(_))
    }

    /// One-line summary for display
    pub fn summary(&self) -> String {
        match &self.status {
            ComparisonStatus::Skipped { reason } => format!("Comparison skipped: {}", reason),
            ComparisonStatus::Compared(_) => match self.mismatch_count() {
                0 => "All entries match".to_string(),
                n => format!("Found {} mismatched row(s)", n),
            },
        }
    }
}

/// Extract both statements and reconcile them on `column`
///
/// A failure on one document never prevents the other from being extracted;
/// the comparison itself only runs when both succeeded.
pub fn compare_statements(
    extractor: &Extractor,
    first: &[u8],
    second: &[u8],
    column: AmountColumn,
    options: &ReconcileOptions,
) -> ReconciliationReport {
    let id = Uuid::new_v4().to_string();
    log::info!("Comparison {}: reconciling on {}", id, column);

    let first = extract_logged(extractor, &id, "first", first);
    let second = extract_logged(extractor, &id, "second", second);

    let status = match (&first, &second) {
        (Ok(a), Ok(b)) => {
            let rows = ReconciliationEngine::with_options(options.clone()).reconcile(a, b, column);
            let mismatched = rows.iter().filter(|row| !row.is_match()).count();
            log::info!(
                "Comparison {}: {} row(s), {} mismatched",
                id,
                rows.len(),
                mismatched
            );
            ComparisonStatus::Compared(rows)
        }
        _ => {
            let reason = skip_reason(&first, &second);
            log::warn!("Comparison {}: skipped, {}", id, reason);
            ComparisonStatus::Skipped { reason }
        }
    };

    ReconciliationReport {
        id,
        column,
        first,
        second,
        status,
    }
}

fn extract_logged(
    extractor: &Extractor,
    id: &str,
    which: &str,
    bytes: &[u8],
) -> ExtractionResult<TransactionTable> {
    let result = extractor.extract(bytes);
    match &result {
        Ok(table) => log::debug!("Comparison {}: {} document has {} record(s)", id, which, table.len()),
        Err(e) => log::warn!("Comparison {}: {} document: {}", id, which, e),
    }
    result
}

fn skip_reason(
    first: &ExtractionResult<TransactionTable>,
    second: &ExtractionResult<TransactionTable>,
) -> String {
    match (first, second) {
        (Err(a), Err(b)) => format!("first document: {}; second document: {}", a, b),
        (Err(a), _) => format!("first document: {}", a),
        (_, Err(b)) => format!("second document: {}", b),
        (Ok(_), Ok(_)) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::blank_pdf;
    use crate::types::{ExtractionError, Verdict};
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn report_with(status: ComparisonStatus) -> ReconciliationReport {
        ReconciliationReport {
            id: "test".to_string(),
            column: AmountColumn::Given,
            first: Ok(TransactionTable::default()),
            second: Ok(TransactionTable::default()),
            status,
        }
    }

    fn row(verdict: Verdict) -> ComparisonRow {
        ComparisonRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            first: Some(BigDecimal::from(1)),
            second: None,
            verdict,
        }
    }

    #[test]
    fn test_report_helpers() {
        let report = report_with(ComparisonStatus::Compared(vec![
            row(Verdict::Match),
            row(Verdict::Mismatch),
            row(Verdict::Mismatch),
        ]));

        assert_eq!(report.rows().len(), 3);
        assert_eq!(report.mismatch_count(), 2);
        assert!(!report.all_match());
        assert_eq!(report.summary(), "Found 2 mismatched row(s)");
    }

    #[test]
    fn test_all_match_requires_a_comparison() {
        let compared = report_with(ComparisonStatus::Compared(vec![row(Verdict::Match)]));
        assert!(compared.all_match());
        assert_eq!(compared.summary(), "All entries match");

        let skipped = report_with(ComparisonStatus::Skipped {
            reason: "first document: nope".to_string(),
        });
        assert!(!skipped.all_match());
        assert!(skipped.rows().is_empty());
        assert_eq!(skipped.summary(), "Comparison skipped: first document: nope");
    }

    #[test]
    fn test_failures_are_recorded_per_document() {
        let report = compare_statements(
            &Extractor::default(),
            b"not a pdf",
            &blank_pdf(),
            AmountColumn::Received,
            &ReconcileOptions::default(),
        );

        assert!(matches!(report.first, Err(ExtractionError::DocumentRead(_))));
        assert_eq!(report.second, Err(ExtractionError::NoRecognizableData));
        assert!(!report.is_compared());
        match &report.status {
            ComparisonStatus::Skipped { reason } => {
                assert!(reason.starts_with("first document: Error reading document"));
                assert!(reason.ends_with(
                    "second document: No recognizable Given/Received data found in document"
                ));
            }
            other => panic!("expected skipped comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_report_ids_are_unique() {
        let extractor = Extractor::default();
        let options = ReconcileOptions::default();
        let a = compare_statements(&extractor, b"x", b"y", AmountColumn::Given, &options);
        let b = compare_statements(&extractor, b"x", b"y", AmountColumn::Given, &options);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
