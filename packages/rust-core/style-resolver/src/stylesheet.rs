//! Document-level style dictionary
//!
//! The first two stages of the cascade ("document defaults → referenced
//! style") live here as plain data; `resolve_paragraph_style` applies the
//! third stage (a paragraph's own direct formatting) on top of whatever
//! this returns.

use std::collections::HashMap;

use layout_types::StyleDeclaration;

/// A document's default style plus its named (referenced) styles, keyed by
/// the style id an `ElementRecord::style_ref` points at.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    pub document_default: StyleDeclaration,
    pub named_styles: HashMap<String, StyleDeclaration>,
}

impl StyleSheet {
    pub fn new(document_default: StyleDeclaration) -> Self {
        Self {
            document_default,
            named_styles: HashMap::new(),
        }
    }

    /// Resolve a style reference to its declaration, falling back to the
    /// document default when the reference is absent or unknown.
    pub fn resolve_ref(&self, style_ref: Option<&str>) -> &StyleDeclaration {
        style_ref
            .and_then(|id| self.named_styles.get(id))
            .unwrap_or(&self.document_default)
    }
}
