//! Shared layout and style types for the DOCX-to-PDF core
//!
//! This crate defines the geometry primitives, style model, and positioned-
//! document data model shared between `layout-engine` (which produces a
//! `UnifiedLayout`) and `pdf-generator` (which renders one). It performs no
//! I/O and depends on no third-party layout engine.
//!
//! # Dimensional Units
//!
//! All dimensional values use `f64` representing PDF points (1/72 inch)
//! once layout has finished; `units` converts from the source units
//! (twips, EMU, millimeters).
//!
//! # Module Organization
//!
//! - `error` - Validation errors
//! - `primitives` - Color, Spacing, BorderStyle, Size, Margins, Rect
//! - `units` - twips/EMU/mm to points conversion
//! - `css` - StyleDeclaration and style property enums
//! - `layout` - the positioned-document data model (`InlineItem` through
//!   `UnifiedLayout`)
//! - `text_measurement` - TextMeasurer trait

mod css;
mod error;
mod layout;
mod primitives;
pub mod text_measurement;
pub mod units;

pub use css::{
    BoxStyle, FontStyle, FontWeight, StyleDeclaration, TextAlign, TextDecoration, TextStyle,
    TextTransform, VerticalAlign, WhiteSpace,
};
pub use error::ValidationError;
pub use layout::{
    BlockContent, BlockKind, BlockPayload, EffectiveFormat, GenericLayout, HyperlinkRef,
    ImageLayout, ImageSource, IndentInfo, InlineItem, InlineItemData, LayoutBlock, LayoutPage,
    ListType, NumberingInfo, OverlayBox, OverlayPayload, PageConfig, PageVariant, ParagraphLayout,
    ParagraphLine, ParagraphMetadata, RawBlockData, RunFormat, SectionProperties, SpacingInfo,
    TableCellLayout, TableLayout, TableRow, TextboxLayout, UnifiedLayout, VerticalMerge,
};
pub use primitives::{BorderLineStyle, BorderStyle, Color, Margins, Rect, Size, Spacing};
pub use text_measurement::{EstimatedTextMeasurer, TextMeasurer};

pub use css::text_style::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT_RATIO};
