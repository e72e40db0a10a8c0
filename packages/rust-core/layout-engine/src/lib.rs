//! Layout Engine
//!
//! Turns a WordprocessingML document's semantic tree (as produced by a
//! `doc_model::SemanticParser` implementation) into a fully paginated
//! `layout_types::UnifiedLayout`, ready for the PDF compiler.
//!
//! # Pipeline
//! 1. `structure_builder` — cascade styles and resolve numbering markers
//!    over the semantic tree, grouped by section.
//! 2. `measure` — turn each section's structured elements into sized,
//!    block-local `BlockPayload`s (paragraph line-breaking, table column
//!    and row geometry, image/textbox sizing).
//! 3. `page_packer` — pack measured blocks onto pages, splitting
//!    paragraphs between lines and tables between rows when one doesn't
//!    fit the remaining page.
//! 4. `page_variator` — resolve which header/footer variant applies to
//!    each page number and lay out that variant's chrome.
//! 5. `pagination_manager` — stamp the resolved chrome onto each page.
//!
//! `validator` is a standalone post-hoc check, not a pipeline stage.

mod assembler;
mod error;
mod measure;
mod page_packer;
mod page_variator;
mod pagination_manager;
mod structure_builder;
mod text_layout;
mod validator;

pub use assembler::{assemble, assemble_with_defaults, measurement_failed, AssemblyOutput};
pub use error::LayoutError;
pub use measure::MeasuredBlock;
pub use page_packer::{paginate, PaginationOutput};
pub use page_variator::{build_variant, build_variant_set, variant_name_for_page, VariantSet};
pub use pagination_manager::{apply_variant, ManagerOutput};
pub use structure_builder::{
    build_structure, DocumentStructure, SectionStructure, StructuredElement, StructuredTable,
    StructuredTableCell, StructuredTableRow,
};
pub use text_layout::{is_trailing_alignment, next_tab_stop, wrap_text, DEFAULT_TAB_INTERVAL};
pub use validator::{validate, ValidationReport};
