//! The document-level layout type

use serde::{Deserialize, Serialize};

use super::page::LayoutPage;

/// A complete, positioned document: pages in order, each owning its blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnifiedLayout {
    pub pages: Vec<LayoutPage>,
    /// Cursor used while assembling — the page currently receiving new
    /// blocks. Not meaningful once assembly has finished.
    pub current_page: usize,
}

impl UnifiedLayout {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current_page: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether page numbers are 1..N with no gaps, per the testable
    /// property of the same name.
    pub fn page_numbers_dense(&self) -> bool {
        self.pages
            .iter()
            .enumerate()
            .all(|(i, p)| p.number == (i as u32) + 1)
    }
}
