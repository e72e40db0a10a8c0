//! The positioned-document data model: inline items through pages

mod block;
mod document;
mod image;
mod inline;
mod overlay;
mod page;
mod paragraph;
mod table;

pub use block::{
    BlockContent, BlockKind, BlockPayload, EffectiveFormat, GenericLayout, HyperlinkRef,
    IndentInfo, LayoutBlock, ListType, NumberingInfo, RawBlockData, RunFormat, SectionProperties,
    SpacingInfo, TextboxLayout,
};
pub use document::UnifiedLayout;
pub use image::{ImageLayout, ImageSource};
pub use inline::{InlineItem, InlineItemData};
pub use overlay::{OverlayBox, OverlayPayload};
pub use page::{LayoutPage, PageConfig, PageVariant};
pub use paragraph::{ParagraphLayout, ParagraphLine, ParagraphMetadata};
pub use table::{TableCellLayout, TableLayout, TableRow, VerticalMerge};
