//! Inline content: the atoms that make up a typeset line

use serde::{Deserialize, Serialize};

use crate::css::{FontStyle, FontWeight};
use crate::primitives::Color;

/// Discriminates the kind of atom placed on a line, and carries the data
/// specific to that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineItemData {
    /// A run of shaped text.
    TextRun {
        text: String,
        font_family: String,
        font_size: f64,
        font_weight: FontWeight,
        font_style: FontStyle,
        color: Color,
        /// Set when this run carries a hyperlink, grouped into the
        /// paragraph's `hyperlinks` metadata by the assembler.
        hyperlink_target: Option<String>,
    },
    /// A computed field (page number, date, cross-reference) whose text has
    /// already been resolved to a display string by the time it reaches the
    /// assembler.
    Field { text: String, font_family: String, font_size: f64 },
    /// An image anchored inline with the surrounding text.
    InlineImage {
        stream_key: String,
        width: f64,
        height: f64,
    },
    /// A small floating textbox anchored inline (rare; most textboxes are
    /// page-anchored `OverlayBox`es instead).
    InlineTextbox { width: f64, height: f64 },
    /// An explicit `<w:br/>` line break — never inferred from `\n` in run
    /// text, since WordprocessingML has no embedded newlines.
    Break,
}

impl InlineItemData {
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineItemData::TextRun { .. } => "text_run",
            InlineItemData::Field { .. } => "field",
            InlineItemData::InlineImage { .. } => "inline_image",
            InlineItemData::InlineTextbox { .. } => "inline_textbox",
            InlineItemData::Break => "break",
        }
    }
}

/// One atom placed on a `ParagraphLine`.
///
/// `x` is line-local (relative to the line's own origin, not the page), set
/// once the assembler has finished distributing space for the line's
/// alignment (left/right/center/justify).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineItem {
    pub x: f64,
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
    pub data: InlineItemData,
}

impl InlineItem {
    pub fn new(width: f64, ascent: f64, descent: f64, data: InlineItemData) -> Self {
        Self {
            x: 0.0,
            width,
            ascent,
            descent,
            data,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self.data, InlineItemData::Break)
    }
}
