//! Semantic-tree data records produced by an external `SemanticParser`

mod element;
mod formatting;
mod note;
mod numbering;
mod relationship;
mod run;
mod section;

pub use element::{
    BorderRecord, ElementKind, ElementRecord, ImageRecord, TableCellRecord, TableRecord,
    TableRowRecord, VerticalMergeRecord,
};
pub use formatting::{
    HyperlinkRecord, IndentRecord, LineRule, SpacingRecord, TabStop, TabStopAlignment,
};
pub use note::{EndnoteRecord, FootnoteRecord};
pub use numbering::{
    AbstractNumbering, NumberingData, NumberingFormat, NumberingInstance, NumberingLevel,
    NumberingRef,
};
pub use relationship::{RelationshipEntry, RelationshipMap, TargetMode};
pub use run::{RgbColor, RunRecord};
pub use section::{MarginsRecord, PageOrientation, PageSizeRecord, SectionBreakType, SectionRecord};
