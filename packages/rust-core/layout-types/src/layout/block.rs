//! Blocks: the unit the page-packing cursor positions and splits

use serde::{Deserialize, Serialize};

use super::image::ImageLayout;
use super::paragraph::ParagraphLayout;
use super::table::TableLayout;
use crate::css::StyleDeclaration;
use crate::primitives::Rect;

/// An in-flow textbox: a floating-width container of nested blocks.
///
/// Distinct from `OverlayBox`'s `Textbox` payload, which holds a page-
/// anchored textbox with already-flattened text lines — this variant is an
/// in-flow block participating in normal page packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextboxLayout {
    pub frame: Rect,
    pub blocks: Vec<BlockPayload>,
    pub style: StyleDeclaration,
}

/// Fallback for a malformed or unrecognized element — never fatal, carries
/// a diagnostic instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericLayout {
    pub frame: Rect,
    pub original_block_type: String,
    pub diagnostic: Option<String>,
}

/// The typeset content of a block, tagged by kind.
///
/// Kept as a closed enum rather than a dynamic dict so the dispatcher's
/// `match` over block kinds is exhaustiveness-checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockPayload {
    Paragraph(ParagraphLayout),
    Table(TableLayout),
    Image(ImageLayout),
    Textbox(TextboxLayout),
    Generic(GenericLayout),
}

impl BlockPayload {
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockPayload::Paragraph(_) => "paragraph",
            BlockPayload::Table(_) => "table",
            BlockPayload::Image(_) => "image",
            BlockPayload::Textbox(_) => "textbox",
            BlockPayload::Generic(_) => "generic",
        }
    }
}

/// A resolved hyperlink spanning one or more runs within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperlinkRef {
    pub target: String,
    pub run_start: usize,
    pub run_end: usize,
}

/// decimal / upper-roman / lower-roman / upper-alpha / lower-alpha / bullet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ListType {
    Decimal,
    UpperRoman,
    LowerRoman,
    UpperAlpha,
    LowerAlpha,
    Bullet,
}

/// Numbering reference plus the resolved marker text, carried on a
/// paragraph's raw data for the round-trip export contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingInfo {
    pub num_id: Option<i64>,
    pub level: Option<u8>,
    pub list_type: Option<ListType>,
    pub marker_text: String,
    pub number_position: f64,
    pub text_position: f64,
}

/// Paragraph indentation, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndentInfo {
    pub first_line: f64,
    pub hanging: f64,
    pub left: f64,
    pub right: f64,
}

/// Paragraph spacing before/after and line spacing, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingInfo {
    pub before: f64,
    pub after: f64,
    pub line_spacing: Option<f64>,
}

/// Section properties carried on the paragraph that introduces a section
/// break, matching the fields the round-trip exporter needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub page_size: crate::primitives::Size,
    pub margins: crate::primitives::Margins,
    pub columns: u32,
    pub column_spacing: f64,
    pub title_page: bool,
    pub different_odd_even: bool,
}

/// A single run's character formatting, flattened for the round-trip
/// contract (distinct from the richer `StyleDeclaration` the cascade
/// produces, which this is derived from).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFormat {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
}

/// Derived boolean/enum facts about a block, named exactly per the §6
/// round-trip contract (`effective_format`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveFormat {
    pub heading_level: Option<u8>,
    pub is_list_item: bool,
    pub list_level: Option<u8>,
    pub list_type: Option<ListType>,
    pub is_empty: bool,
    pub is_page_break: bool,
    pub is_section_break: bool,
    pub has_line_break: bool,
}

/// The flat, serializable data the round-trip JSON exporter needs —
/// retained alongside the `BlockPayload` but never walked for mutation
/// during layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBlockData {
    pub style: StyleDeclaration,
    pub runs: Vec<RunFormat>,
    pub numbering: Option<NumberingInfo>,
    pub marker: String,
    pub indent: IndentInfo,
    pub spacing: SpacingInfo,
    pub hyperlinks: Vec<HyperlinkRef>,
    pub section_properties: Option<SectionProperties>,
    pub effective_format: EffectiveFormat,
}

/// A typeset payload plus its retained raw semantic data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockContent {
    pub payload: BlockPayload,
    pub raw: RawBlockData,
}

/// The kind tag used by the PDF compiler's rendering dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    Table,
    Image,
    Header,
    Footer,
    Footnotes,
    Endnotes,
    Textbox,
    Decorator,
    Rectangle,
    VmlShape,
}

/// A positioned block on a page.
///
/// `frame`'s coordinate origin is the page's bottom-left corner (PDF
/// convention); `0 ≤ frame.y` and `frame.y + frame.height ≤ page.height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    pub frame: Rect,
    pub block_type: BlockKind,
    pub content: BlockContent,
    pub style: StyleDeclaration,
    pub page_number: u32,
    /// Identifier of the semantic-tree element this block was built from,
    /// used to correlate warnings back to source.
    pub source_uid: String,
    /// Position among sibling blocks before page packing, preserved so a
    /// split block's fragments can be told apart from genuinely distinct
    /// blocks sharing the same `source_uid`.
    pub sequence: u32,
    pub page_break_before: bool,
    pub page_break_after: bool,
    pub keep_with_next: bool,
    pub keep_together: bool,
    pub is_watermark: bool,
}

impl LayoutBlock {
    pub fn is_chrome(&self) -> bool {
        matches!(
            self.block_type,
            BlockKind::Header | BlockKind::Footer | BlockKind::Footnotes | BlockKind::Endnotes
        )
    }
}
