//! Traits for pluggable extraction stages

use crate::extraction::StatementDocument;
use crate::types::TransactionTable;

/// Result of running one extraction stage against a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// The stage produced records
    Found(TransactionTable),
    /// The stage ran but found nothing it recognizes
    Empty,
    /// The document could not be read by this stage
    Failed(String),
}

/// One stage of the extraction pipeline
///
/// The [`Extractor`](crate::extraction::Extractor) evaluates its stages in
/// order and stops at the first one that returns [`StrategyOutcome::Found`]
/// or [`StrategyOutcome::Failed`].
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Try to pull a transaction table out of the document
    fn extract(&self, document: &StatementDocument) -> StrategyOutcome;
}
