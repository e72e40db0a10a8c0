//! Run-level (character) formatting

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A contiguous run of identically formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub color: Option<RgbColor>,
    /// Set when this run sits inside a `<w:hyperlink>`.
    pub hyperlink_rel_id: Option<String>,
    /// True for an explicit `<w:br/>` — a sibling marker, never inferred
    /// from embedded newlines (WordprocessingML run text has none).
    pub is_line_break: bool,
    /// True for an explicit page break run.
    pub is_page_break: bool,
    /// True for a `<w:tab/>` — advances to the paragraph's next tab stop.
    pub is_tab: bool,
    /// Set for a `<w:footnoteReference>` run, carrying the referenced
    /// footnote's id.
    pub footnote_ref: Option<i64>,
    /// Set for a `<w:endnoteReference>` run, carrying the referenced
    /// endnote's id.
    pub endnote_ref: Option<i64>,
}

impl RunRecord {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            font_family: None,
            font_size: None,
            color: None,
            hyperlink_rel_id: None,
            is_line_break: false,
            is_page_break: false,
            is_tab: false,
            footnote_ref: None,
            endnote_ref: None,
        }
    }
}
