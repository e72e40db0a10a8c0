//! Style resolution for the WordprocessingML → PDF layout pipeline
//!
//! Resolves the cascade from a document's default style, through a
//! paragraph's referenced style, to a run's direct formatting — and
//! separately resolves numbered-list markers via [`NumberingResolver`].
//!
//! # Architecture Position
//!
//! ```text
//! doc-model::ElementRecord (semantic tree)
//!     ↓
//! style-resolver::resolve_paragraph_style() → StyleDeclaration  ← THIS CRATE
//! style-resolver::resolve_run_style()       → TextStyle
//! style-resolver::NumberingResolver          → NumberingInfo
//!     ↓
//! layout-engine::assemble() → UnifiedLayout
//!     ↓
//! pdf-generator::generate() → PDF bytes
//! ```
//!
//! # Cascade Order
//! 1. Inherited text properties from the parent paragraph/style
//! 2. The paragraph's own style-level overrides (box model always wins here,
//!    since it never inherits)
//! 3. Run-level direct formatting, resolved separately via
//!    [`resolve_run_style`]

mod inheritance;
mod merge;
mod numbering;
mod run_style;
mod stylesheet;

pub use inheritance::{apply_inherited_properties, inherit_text_styles};
pub use merge::{merge_inherited_styles, merge_style_overrides};
pub use numbering::NumberingResolver;
pub use run_style::resolve_run_style;
pub use stylesheet::StyleSheet;

use layout_types::StyleDeclaration;

/// Resolve a paragraph's style: inherited text properties from the parent,
/// overridden by the paragraph's own style declaration (box model always
/// comes from the paragraph itself, never from the parent).
///
/// # Example
/// ```
/// use style_resolver::resolve_paragraph_style;
/// use layout_types::StyleDeclaration;
///
/// let mut parent = StyleDeclaration::default();
/// parent.text.font_size = Some(12.0);
///
/// let mut own = StyleDeclaration::default();
/// own.text.font_size = None; // not set at the paragraph level, inherits
///
/// let resolved = resolve_paragraph_style(&own, Some(&parent));
/// assert_eq!(resolved.text.font_size, Some(12.0));
/// ```
pub fn resolve_paragraph_style(
    own_style: &StyleDeclaration,
    parent_style: Option<&StyleDeclaration>,
) -> StyleDeclaration {
    match parent_style {
        Some(parent) => apply_inherited_properties(own_style.clone(), parent),
        None => own_style.clone(),
    }
}
