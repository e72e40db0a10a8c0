//! The semantic tree the Layout Structure Builder walks

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::formatting::{HyperlinkRecord, IndentRecord, SpacingRecord, TabStop};
use super::numbering::NumberingRef;
use super::run::{RgbColor, RunRecord};
use super::section::SectionRecord;

/// What kind of body element this node represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Paragraph,
    Table,
    Image,
    Textbox,
    /// Carries the section properties of the section this break introduces.
    SectionBreak,
    /// Malformed or unrecognized element — the builder still emits a node
    /// for it (never drops it silently) so a diagnostic can be attached.
    Unknown(String),
}

/// Horizontal merge span / vertical merge state of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VerticalMergeRecord {
    None,
    Restart,
    Continue,
}

/// One border edge (`<w:tcBorders>`/`<w:tblBorders>` side): width and color
/// only — the renderer always draws it solid, matching the office suite's
/// own fallback for border styles it doesn't special-case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderRecord {
    pub width: f64,
    pub color: RgbColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCellRecord {
    pub content: Vec<ElementRecord>,
    pub grid_span: u32,
    pub vertical_merge: VerticalMergeRecord,
    pub preferred_width: Option<f64>,
    pub margins: IndentRecord,
    /// `<w:shd>` fill color, when the cell has its own.
    pub shading: Option<RgbColor>,
    pub border_top: Option<BorderRecord>,
    pub border_right: Option<BorderRecord>,
    pub border_bottom: Option<BorderRecord>,
    pub border_left: Option<BorderRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowRecord {
    pub cells: Vec<TableCellRecord>,
    pub cant_split: bool,
    pub is_header_row: bool,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    /// Explicit column widths from the grid, when the document specifies
    /// one; otherwise the builder distributes preferred widths proportionally.
    pub grid_columns: Vec<f64>,
    pub rows: Vec<TableRowRecord>,
    /// `<w:tblBorders>` default, applied to any cell edge that doesn't
    /// carry its own `<w:tcBorders>` override; also what the grid lines
    /// between cells are drawn with.
    pub default_cell_border: Option<BorderRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub rel_id: String,
    pub width_emu: i64,
    pub height_emu: i64,
    /// Set when the source media is WMF/EMF and needs `ImageConverter`
    /// raster conversion before it can be embedded.
    pub is_vector_metafile: bool,
}

/// One node of the semantic tree: preserves type tag, raw properties, style
/// reference, run sequence, numbering reference, bookmarks, hyperlinks,
/// section break markers, tab stops, spacing, and indentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub kind: ElementKind,
    pub source_uid: String,
    /// Arbitrary attributes the builder doesn't interpret itself but keeps
    /// for diagnostics and the round-trip export contract.
    pub raw_properties: HashMap<String, String>,
    pub style_ref: Option<String>,
    pub runs: Vec<RunRecord>,
    pub children: Vec<ElementRecord>,
    pub table: Option<TableRecord>,
    pub image: Option<ImageRecord>,
    pub numbering_ref: Option<NumberingRef>,
    pub bookmarks: Vec<String>,
    pub hyperlinks: Vec<HyperlinkRecord>,
    pub section_break: Option<SectionRecord>,
    pub tab_stops: Vec<TabStop>,
    pub spacing: SpacingRecord,
    pub indentation: IndentRecord,
    pub heading_level: Option<u8>,
    pub page_break_before: bool,
    pub keep_with_next: bool,
    pub keep_together: bool,
    pub is_watermark: bool,
}

impl ElementRecord {
    /// A minimal generic/diagnostic node, emitted by the builder in place of
    /// an element it couldn't interpret — never fatal.
    pub fn generic(source_uid: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        let mut raw_properties = HashMap::new();
        raw_properties.insert("diagnostic".to_string(), diagnostic.into());
        Self {
            kind: ElementKind::Unknown("generic".to_string()),
            source_uid: source_uid.into(),
            raw_properties,
            style_ref: None,
            runs: Vec::new(),
            children: Vec::new(),
            table: None,
            image: None,
            numbering_ref: None,
            bookmarks: Vec::new(),
            hyperlinks: Vec::new(),
            section_break: None,
            tab_stops: Vec::new(),
            spacing: SpacingRecord::default(),
            indentation: IndentRecord::default(),
            heading_level: None,
            page_break_before: false,
            keep_with_next: false,
            keep_together: false,
            is_watermark: false,
        }
    }

    pub fn is_empty_paragraph(&self) -> bool {
        matches!(self.kind, ElementKind::Paragraph)
            && self.runs.iter().all(|r| r.text.trim().is_empty())
    }
}
