//! Extractor configuration

use serde::{Deserialize, Serialize};

/// Which qualifying tables contribute records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableScope {
    /// Only the first qualifying table of the first page that has one
    #[default]
    FirstTable,
    /// Every qualifying table on every page, in page order
    AllPages,
}

/// How input bytes are handed to the PDF parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Staging {
    /// Parse straight from the caller's buffer
    #[default]
    InMemory,
    /// Write the bytes to a temporary `.pdf` file that is removed when
    /// loading finishes, whatever the outcome
    TempFile,
}

/// How tables are located on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableDetection {
    /// Only grids drawn with ruling lines
    Lattice,
    /// Only columns inferred from text alignment
    Stream,
    /// Ruled grids first; text alignment on pages where no ruled grid qualifies
    #[default]
    LatticeThenStream,
}

/// A single table-finding pass over a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPass {
    Lattice,
    Stream,
}

impl TableDetection {
    /// Passes to run on each page, in order
    pub fn passes(self) -> &'static [GridPass] {
        match self {
            TableDetection::Lattice => &[GridPass::Lattice],
            TableDetection::Stream => &[GridPass::Stream],
            TableDetection::LatticeThenStream => &[GridPass::Lattice, GridPass::Stream],
        }
    }
}

/// Configuration for [`crate::extraction::Extractor`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub table_scope: TableScope,
    pub staging: Staging,
    pub detection: TableDetection,
}

impl ExtractorConfig {
    /// Accumulate qualifying tables across all pages
    pub fn all_pages(mut self) -> Self {
        self.table_scope = TableScope::AllPages;
        self
    }

    /// Stage input bytes through a temporary file
    pub fn staged_to_temp_file(mut self) -> Self {
        self.staging = Staging::TempFile;
        self
    }

    pub fn with_detection(mut self, detection: TableDetection) -> Self {
        self.detection = detection;
        self
    }
}
