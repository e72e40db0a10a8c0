//! Page-level layout types: input configuration, chrome placement, and
//! the finished per-page block list

use serde::{Deserialize, Serialize};

use super::block::LayoutBlock;
use crate::primitives::{Margins, Size};

/// Input to the assembler: the page geometry a document (or a section
/// within it) lays out against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_size: Size,
    pub base_margins: Margins,
    /// Column count for the active section; 1 means no multi-column layout.
    pub columns: u32,
    pub column_spacing: f64,
}

impl PageConfig {
    pub fn new(page_size: Size, base_margins: Margins) -> Self {
        Self {
            page_size,
            base_margins,
            columns: 1,
            column_spacing: 0.0,
        }
    }

    /// Usable body width for a single column, accounting for margins and
    /// inter-column spacing.
    pub fn column_width(&self) -> f64 {
        let usable = self.page_size.width - self.base_margins.left - self.base_margins.right;
        if self.columns <= 1 {
            return usable;
        }
        let columns = self.columns as f64;
        (usable - self.column_spacing * (columns - 1.0)) / columns
    }
}

/// Precomputed per-page-class chrome: header/footer placements and the
/// body offsets they imply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageVariant {
    pub header_placements: Vec<LayoutBlock>,
    pub footer_placements: Vec<LayoutBlock>,
    pub body_top_offset: f64,
    pub body_bottom_offset: f64,
    pub header_distance: f64,
    pub footer_distance: f64,
}

impl PageVariant {
    /// An empty variant, returned when a section defines no header/footer
    /// at all for the requested page class.
    pub fn empty(base_margins: Margins) -> Self {
        Self {
            header_placements: Vec::new(),
            footer_placements: Vec::new(),
            body_top_offset: base_margins.top,
            body_bottom_offset: base_margins.bottom,
            header_distance: base_margins.header,
            footer_distance: base_margins.footer,
        }
    }
}

/// One finished output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// 1-based; page numbers across a `UnifiedLayout` are dense and start
    /// at 1.
    pub number: u32,
    pub size: Size,
    pub margins: Margins,
    pub blocks: Vec<LayoutBlock>,
    /// Title-page-style override: leave this page's header/footer bands
    /// untouched by the pagination manager.
    pub skip_headers_footers: bool,
}

impl LayoutPage {
    pub fn new(number: u32, size: Size, margins: Margins) -> Self {
        Self {
            number,
            size,
            margins,
            blocks: Vec::new(),
            skip_headers_footers: false,
        }
    }

    /// Whether this page has at least one non-chrome block — required for
    /// every page except page 1, per the layout validator.
    pub fn has_body_content(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_chrome())
    }
}
