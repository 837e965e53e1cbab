//! The structured-table and text-pattern extraction stages

use super::config::{TableDetection, TableScope};
use super::document::StatementDocument;
use super::fallback::scan_text;
use super::table::{find_tables, RawTable};
use crate::traits::{ExtractionStrategy, StrategyOutcome};
use crate::types::{TransactionRecord, TransactionTable};

/// Reads tables whose header mentions "Date", scoped by [`TableScope`]
///
/// Each page runs the passes of its [`TableDetection`] in order; a later pass
/// only runs when the earlier ones accepted nothing on that page.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStrategy {
    scope: TableScope,
    detection: TableDetection,
}

impl TableStrategy {
    pub fn new(scope: TableScope, detection: TableDetection) -> Self {
        Self { scope, detection }
    }
}

impl ExtractionStrategy for TableStrategy {
    fn name(&self) -> &'static str {
        "table"
    }

    fn extract(&self, document: &StatementDocument) -> StrategyOutcome {
        let mut accepted = TransactionTable::default();

        for page in document.pages() {
            for pass in self.detection.passes() {
                let tables = find_tables(page, *pass);
                log::debug!(
                    "Page {}: {:?} pass found {} candidate table(s)",
                    page.page_number() + 1,
                    pass,
                    tables.len()
                );

                let mut page_accepted = false;
                for table in &tables {
                    let Some(records) = table_records(table) else {
                        continue;
                    };
                    accepted.extend(TransactionTable::new(records));
                    page_accepted = true;

                    if self.scope == TableScope::FirstTable {
                        return StrategyOutcome::Found(accepted);
                    }
                }

                if page_accepted {
                    break;
                }
            }
        }

        if accepted.is_empty() {
            StrategyOutcome::Empty
        } else {
            StrategyOutcome::Found(accepted)
        }
    }
}

/// Records of a qualifying table, or `None` when the table has no "Date"
/// header or no data row with more than one cell
fn table_records(table: &RawTable) -> Option<Vec<TransactionRecord>> {
    let Some((roles, rows)) = table.locate_header() else {
        log::debug!("Page {}: skipping table without a Date column", table.page_number);
        return None;
    };

    let records: Vec<TransactionRecord> = rows
        .into_iter()
        .filter(|row| row.len() > 1)
        .map(|row| roles.raw_row(row).into_record())
        .collect();

    if records.is_empty() {
        return None;
    }

    log::debug!(
        "Page {}: accepted table with {} row(s), roles {:?}",
        table.page_number,
        records.len(),
        roles
    );
    Some(records)
}

/// Matches `date ... Given|Received ... ₹ amount` across the document text
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStrategy;

impl ExtractionStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn extract(&self, document: &StatementDocument) -> StrategyOutcome {
        let records = scan_text(&document.full_text());
        if records.is_empty() {
            StrategyOutcome::Empty
        } else {
            StrategyOutcome::Found(TransactionTable::new(records))
        }
    }
}
