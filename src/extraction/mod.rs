//! Statement extraction: PDF bytes in, normalized transaction table out
//!
//! Extraction runs an ordered list of [`ExtractionStrategy`] stages. The
//! default list tries structured table detection first and falls back to a
//! text pattern scan when no page has a qualifying table.

pub mod config;
pub mod document;
pub mod fallback;
pub mod strategies;
pub mod table;

pub use config::*;
pub use document::StatementDocument;
pub use strategies::{PatternStrategy, TableStrategy};

use crate::traits::{ExtractionStrategy, StrategyOutcome};
use crate::types::{ExtractionError, ExtractionResult, TransactionTable};

/// Turns statement PDFs into [`TransactionTable`]s
pub struct Extractor {
    config: ExtractorConfig,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl Extractor {
    /// Create an extractor with the table stage followed by the pattern stage
    pub fn new(config: ExtractorConfig) -> Self {
        let strategies: Vec<Box<dyn ExtractionStrategy>> = vec![
            Box::new(TableStrategy::new(config.table_scope, config.detection)),
            Box::new(PatternStrategy),
        ];
        Self { config, strategies }
    }

    /// Create an extractor with a custom list of stages
    pub fn with_strategies(
        config: ExtractorConfig,
        strategies: Vec<Box<dyn ExtractionStrategy>>,
    ) -> Self {
        Self { config, strategies }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the transaction table from raw PDF bytes
    pub fn extract(&self, bytes: &[u8]) -> ExtractionResult<TransactionTable> {
        let document = StatementDocument::load(bytes, &self.config).inspect_err(|e| {
            log::error!("Statement extraction: {}", e);
        })?;
        log::debug!(
            "Statement extraction: loaded {} page(s) from {} bytes",
            document.page_count(),
            bytes.len()
        );

        self.extract_document(&document)
    }

    /// Run the stages against an already loaded document
    pub fn extract_document(&self, document: &StatementDocument) -> ExtractionResult<TransactionTable> {
        for strategy in &self.strategies {
            match strategy.extract(document) {
                StrategyOutcome::Found(table) if !table.is_empty() => {
                    log::info!(
                        "Statement extraction: {} stage found {} record(s)",
                        strategy.name(),
                        table.len()
                    );
                    let unparsed = table.unparsed_dates();
                    if unparsed > 0 {
                        log::warn!(
                            "Statement extraction: {} of {} date(s) are not DD/MM/YYYY",
                            unparsed,
                            table.len()
                        );
                    }
                    return Ok(table);
                }
                StrategyOutcome::Found(_) | StrategyOutcome::Empty => {
                    log::debug!("Statement extraction: {} stage found nothing", strategy.name());
                }
                StrategyOutcome::Failed(message) => {
                    log::error!(
                        "Statement extraction: {} stage failed: {}",
                        strategy.name(),
                        message
                    );
                    return Err(ExtractionError::DocumentRead(message));
                }
            }
        }

        log::warn!("Statement extraction: no recognizable Given/Received data");
        Err(ExtractionError::NoRecognizableData)
    }
}
