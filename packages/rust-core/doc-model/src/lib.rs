//! The document-model boundary: capability traits plus the semantic-tree
//! records they produce
//!
//! This crate defines interfaces only. Concrete XML/ZIP parsing and WMF/EMF
//! rasterization are supplied by a caller-provided implementation; building
//! one is out of scope here. `layout-engine`'s structure builder consumes
//! `SemanticParser`/`PackageReader` and walks the `ElementRecord` tree they
//! produce.
//!
//! # Module Organization
//!
//! - `error` - `ParsingError`
//! - `traits` - `PackageReader`, `SemanticParser`, `ImageConverter`
//! - `records` - the semantic-tree data types

mod error;
mod records;
mod traits;

pub use error::ParsingError;
pub use records::{
    AbstractNumbering, BorderRecord, ElementKind, ElementRecord, EndnoteRecord, FootnoteRecord,
    HyperlinkRecord, ImageRecord, IndentRecord, LineRule, MarginsRecord, NumberingData,
    NumberingFormat, NumberingInstance, NumberingLevel, NumberingRef, PageOrientation,
    PageSizeRecord, RelationshipEntry, RelationshipMap, RgbColor, RunRecord, SectionBreakType,
    SectionRecord, SpacingRecord, TabStop, TabStopAlignment, TableCellRecord, TableRecord,
    TableRowRecord, TargetMode, VerticalMergeRecord,
};
pub use traits::{ImageConverter, PackageReader, SemanticParser};
