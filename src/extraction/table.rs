//! Table finding on a parsed page and header role resolution
//!
//! Tables come from pdfplumber's finder: ruled grids in the lattice pass,
//! text-aligned columns in the stream pass. The header is the first row that
//! mentions "Date"; caption rows above it are not part of the statement.

use pdfplumber::{Page, Strategy, TableSettings};

use super::config::GridPass;
use crate::types::TransactionRecord;
use crate::utils::parsing::clean_amount_cell;

pub type Row = Vec<Option<String>>;

/// Cells of one table found on a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// 1-based
    pub page_number: usize,
    pub rows: Vec<Row>,
}

impl RawTable {
    /// The header row with its resolved roles, and the rows below it
    ///
    /// Blank rows are dropped. Returns `None` when no row mentions "Date".
    pub fn locate_header(&self) -> Option<(ColumnRoles, Vec<&Row>)> {
        let mut rows = self.rows.iter().filter(|row| !is_blank(row));
        let roles = rows.by_ref().find_map(|row| {
            let roles = ColumnRoles::resolve(row);
            roles.is_qualifying().then_some(roles)
        })?;
        Some((roles, rows.collect()))
    }
}

fn is_blank(row: &[Option<String>]) -> bool {
    row.iter()
        .all(|cell| cell.as_deref().map_or(true, |c| c.trim().is_empty()))
}

fn table_settings(pass: GridPass) -> TableSettings {
    match pass {
        GridPass::Lattice => TableSettings::default(),
        GridPass::Stream => TableSettings {
            strategy: Strategy::Stream,
            min_words_vertical: 2,
            min_words_horizontal: 1,
            ..TableSettings::default()
        },
    }
}

/// Tables found on `page` by one pass, top to bottom
pub fn find_tables(page: &Page, pass: GridPass) -> Vec<RawTable> {
    let page_number = page.page_number() + 1;
    page.extract_tables(&table_settings(pass))
        .into_iter()
        .map(|rows| RawTable { page_number, rows })
        .collect()
}

/// Raw cell text for one statement line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: Option<String>,
    pub given: Option<String>,
    pub received: Option<String>,
}

impl RawRow {
    pub fn into_record(self) -> TransactionRecord {
        TransactionRecord::from_raw(
            self.date.as_deref(),
            self.given.as_deref(),
            self.received.as_deref(),
        )
    }
}

/// Header-to-role lookup built once per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub date: Option<usize>,
    pub given: Option<usize>,
    pub received: Option<usize>,
}

impl ColumnRoles {
    /// Locate the first header cell containing each label (case-sensitive)
    pub fn resolve(header: &[Option<String>]) -> Self {
        let labels: Vec<&str> = header
            .iter()
            .map(|cell| cell.as_deref().map_or("", str::trim))
            .collect();
        let find = |label: &str| labels.iter().position(|h| h.contains(label));

        Self {
            date: find("Date"),
            given: find("Given"),
            received: find("Received"),
        }
    }

    /// A table qualifies only when some header mentions "Date"
    pub fn is_qualifying(&self) -> bool {
        self.date.is_some()
    }

    pub fn raw_row(&self, row: &[Option<String>]) -> RawRow {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .and_then(|c| c.as_deref())
                .filter(|c| !c.is_empty())
        };

        RawRow {
            date: cell(self.date).map(|c| c.trim().to_string()),
            given: cell(self.given).and_then(clean_amount_cell),
            received: cell(self.received).and_then(clean_amount_cell),
        }
    }
}
