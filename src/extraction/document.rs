//! Loading statement bytes into parsed PDF pages

use pdfplumber::{Page, Pdf, PdfError, TextOptions};
use std::io::Write;

use super::config::{ExtractorConfig, Staging};
use crate::types::{ExtractionError, ExtractionResult};

/// A parsed statement ready for the extraction stages
///
/// Every page is interpreted once, when the document is loaded; the stages
/// share the parsed pages.
pub struct StatementDocument {
    pages: Vec<Page>,
}

impl StatementDocument {
    /// Parse `bytes` as a PDF
    ///
    /// Documents encrypted with the empty user password are decrypted. When
    /// the configuration stages input through a temporary file, that file is
    /// gone by the time this returns, on success and on failure.
    pub fn load(bytes: &[u8], config: &ExtractorConfig) -> ExtractionResult<Self> {
        let pdf = match config.staging {
            Staging::InMemory => Pdf::open(bytes, None).map_err(read_error)?,
            Staging::TempFile => open_staged(bytes)?,
        };

        let pages = pdf
            .pages_iter()
            .collect::<Result<Vec<Page>, PdfError>>()
            .map_err(read_error)?;

        Ok(Self { pages })
    }

    /// Pages in document order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of every page, each page terminated by a newline
    pub fn full_text(&self) -> String {
        let options = TextOptions::default();
        let mut text = String::new();
        for page in &self.pages {
            text.push_str(&page.extract_text(&options));
            text.push('\n');
        }
        text
    }
}

fn open_staged(bytes: &[u8]) -> ExtractionResult<Pdf> {
    let mut staged = tempfile::Builder::new()
        .prefix("statement-")
        .suffix(".pdf")
        .tempfile()
        .map_err(read_error)?;
    staged.write_all(bytes).map_err(read_error)?;
    staged.flush().map_err(read_error)?;

    log::debug!("Staged {} bytes at {}", bytes.len(), staged.path().display());
    Pdf::open_file(staged.path(), None).map_err(read_error)
}

fn read_error(err: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::DocumentRead(err.to_string())
}
