//! Typeset paragraph content

use serde::{Deserialize, Serialize};

use super::inline::InlineItem;
use super::overlay::OverlayBox;
use crate::css::{BoxStyle, TextAlign};

/// One typeset line within a paragraph.
///
/// `baseline_y` is relative to the paragraph's own box, not the page — the
/// assembler works top-down internally (baseline_y increasing strictly as
/// lines accumulate) and the paragraph's frame is placed on the page only
/// once page packing assigns it a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLine {
    pub baseline_y: f64,
    pub height: f64,
    pub offset_x: f64,
    pub available_width: f64,
    pub items: Vec<InlineItem>,
    pub align: TextAlign,
}

impl ParagraphLine {
    /// Sum of item widths plus inter-item gaps already baked into `x`
    /// positions — the natural (unjustified) content width of the line.
    pub fn content_width(&self) -> f64 {
        self.items
            .last()
            .map(|last| last.x + last.width)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A fully typeset paragraph: lines plus any overlays anchored within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLayout {
    pub lines: Vec<ParagraphLine>,
    pub overlays: Vec<OverlayBox>,
    pub style: BoxStyle,
    pub metadata: ParagraphMetadata,
}

/// Warnings and derived facts about a paragraph that don't belong on a
/// `ParagraphLine` but are useful to the renderer or the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphMetadata {
    pub warnings: Vec<String>,
    /// True when `keep_together` forced this paragraph to be measured as an
    /// atom for split purposes.
    pub kept_together: bool,
}

impl ParagraphLayout {
    pub fn total_height(&self) -> f64 {
        self.lines.iter().map(|l| l.height).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(ParagraphLine::is_empty)
    }
}
