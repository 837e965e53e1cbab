//! # Statement Recon
//!
//! Extracts Date/Given/Received transaction tables from party statement PDFs
//! and reconciles two statements against each other by date.
//!
//! ## Features
//!
//! - **Table extraction**: pdfplumber table finding over ruled grids and text-aligned columns
//! - **Pattern fallback**: Text scan for `date ... Given|Received ... ₹ amount` lines
//! - **Normalization**: Currency symbols, thousands separators and `DD/MM/YYYY` dates into typed values
//! - **Reconciliation**: Outer join on date with a configurable match tolerance
//! - **Reports**: Per-document outcomes, comparison rows and mismatch counts, serializable with serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use statement_recon::{compare_statements, AmountColumn, Extractor, ReconcileOptions};
//!
//! let first = std::fs::read("party_a.pdf").unwrap();
//! let second = std::fs::read("party_b.pdf").unwrap();
//!
//! let report = compare_statements(
//!     &Extractor::default(),
//!     &first,
//!     &second,
//!     AmountColumn::Given,
//!     &ReconcileOptions::default(),
//! );
//! println!("{}", report.summary());
//! ```

pub mod extraction;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use extraction::{
    Extractor, ExtractorConfig, Staging, StatementDocument, TableDetection, TableScope,
};
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
