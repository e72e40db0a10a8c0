//! Font collection and registration for PDF generation
//!
//! This module walks a finished layout collecting the distinct
//! (family, weight, style) combinations it uses, then registers each as a
//! Standard 14 Type1 font resource under a stable, numbered alias.

use crate::error::PDFError;
use font_toolkit::mapper::{map_web_safe_font, select_font_variant};
use layout_types::{
    BlockContent, BlockPayload, InlineItemData, LayoutBlock, ParagraphLayout, TableLayout,
    TextboxLayout, UnifiedLayout,
};
use lopdf::{dictionary, Document, Object};
use std::collections::HashMap;

/// Manages font collection and registration for PDF documents.
///
/// Aliases (`/F1`, `/F2`, ...) are assigned in the order their
/// (family, bold, italic) key is first seen while walking the layout, and
/// stay stable across a single compile regardless of how many pages
/// reference the same font afterwards.
#[derive(Debug, Default)]
pub struct PDFFontRegistry {
    /// Resolved Standard 14 base font name, keyed by its numbered alias.
    aliases: Vec<(String, String)>,
}

impl PDFFontRegistry {
    /// Create a new empty font registry.
    pub fn new() -> Self {
        Self {
            aliases: Vec::new(),
        }
    }

    /// Whether any font has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Collect the distinct fonts used across a whole layout and assign each
    /// a stable numbered alias, in first-seen order. A Helvetica baseline is
    /// always registered first so text with no resolvable font still has a
    /// fallback resource available.
    pub fn collect_and_register(&mut self, layout: &UnifiedLayout) {
        self.aliases.clear();
        let mut seen: HashMap<&'static str, ()> = HashMap::new();
        let mut resolved = Vec::new();

        let mut push = |base_font: &'static str, seen: &mut HashMap<&'static str, ()>| {
            if seen.insert(base_font, ()).is_none() {
                resolved.push(base_font);
            }
        };

        push("Helvetica", &mut seen);

        for page in &layout.pages {
            for block in &page.blocks {
                collect_from_block(block, &mut push, &mut seen);
            }
        }

        self.aliases = resolved
            .into_iter()
            .enumerate()
            .map(|(i, base_font)| (format!("F{}", i + 1), base_font.to_string()))
            .collect();
    }

    /// Alias (`/F1`, `/F2`, ...) resolved for a given font family/weight/
    /// style, falling back to the Helvetica alias when nothing matches
    /// (should not happen once `collect_and_register` has run, since every
    /// family walked there resolves to the same `select_font_variant`
    /// result used here).
    pub fn alias_for(
        &self,
        font_family: &str,
        weight: font_toolkit::FontWeight,
        style: font_toolkit::FontStyle,
    ) -> &str {
        let base_font = select_font_variant(map_web_safe_font(font_family), weight, style);
        self.aliases
            .iter()
            .find(|(_, base)| base == base_font)
            .map(|(alias, _)| alias.as_str())
            .unwrap_or("F1")
    }

    /// Register every collected alias as a Type1 font resource on the given
    /// page's `/Resources /Font` dictionary.
    pub fn register_fonts(&self, doc: &mut Document, page_id: (u32, u16)) -> Result<(), PDFError> {
        for (alias, base_font) in &self.aliases {
            Self::register_type1_font(doc, page_id, alias, base_font)?;
        }
        Ok(())
    }

    /// Register a Standard 14 Type1 font.
    fn register_type1_font(
        doc: &mut Document,
        page_id: (u32, u16),
        name: &str,
        base_font: &str,
    ) -> Result<(), PDFError> {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
        });

        Self::add_font_to_page_resources(doc, page_id, name, font_id)
    }

    /// Add a font to a page's resources.
    fn add_font_to_page_resources(
        doc: &mut Document,
        page_id: (u32, u16),
        name: &str,
        font_id: (u32, u16),
    ) -> Result<(), PDFError> {
        let page_obj = doc
            .get_object_mut(page_id)
            .map_err(|e| PDFError::RenderingError(format!("Failed to get page: {}", e)))?;

        if let Object::Dictionary(ref mut page_dict) = page_obj {
            let resources = match page_dict.get(b"Resources") {
                Ok(Object::Dictionary(_)) => page_dict
                    .get_mut(b"Resources")
                    .and_then(|obj| obj.as_dict_mut())
                    .map_err(|e| PDFError::RenderingError(format!("Invalid resources: {}", e)))?,
                _ => {
                    page_dict.set("Resources", dictionary! {});
                    page_dict
                        .get_mut(b"Resources")
                        .and_then(|obj| obj.as_dict_mut())
                        .map_err(|e| {
                            PDFError::RenderingError(format!("Failed to create resources: {}", e))
                        })?
                }
            };

            let fonts_dict = match resources.get(b"Font") {
                Ok(Object::Dictionary(_)) => resources
                    .get_mut(b"Font")
                    .and_then(|obj| obj.as_dict_mut())
                    .map_err(|e| PDFError::RenderingError(format!("Invalid fonts: {}", e)))?,
                _ => {
                    resources.set("Font", dictionary! {});
                    resources
                        .get_mut(b"Font")
                        .and_then(|obj| obj.as_dict_mut())
                        .map_err(|e| {
                            PDFError::RenderingError(format!("Failed to create fonts: {}", e))
                        })?
                }
            };

            fonts_dict.set(name, Object::Reference(font_id));
            Ok(())
        } else {
            Err(PDFError::RenderingError(
                "Page is not a dictionary".to_string(),
            ))
        }
    }
}

/// Walk a single block's payload, recursing into tables/textboxes, pushing
/// every distinct resolved base font it references.
fn collect_from_block(
    block: &LayoutBlock,
    push: &mut impl FnMut(&'static str, &mut HashMap<&'static str, ()>),
    seen: &mut HashMap<&'static str, ()>,
) {
    collect_from_content(&block.content, push, seen);
}

fn collect_from_content(
    content: &BlockContent,
    push: &mut impl FnMut(&'static str, &mut HashMap<&'static str, ()>),
    seen: &mut HashMap<&'static str, ()>,
) {
    match &content.payload {
        BlockPayload::Paragraph(paragraph) => collect_from_paragraph(paragraph, push, seen),
        BlockPayload::Table(table) => collect_from_table(table, push, seen),
        BlockPayload::Textbox(textbox) => collect_from_textbox(textbox, push, seen),
        BlockPayload::Image(_) | BlockPayload::Generic(_) => {}
    }
}

fn collect_from_paragraph(
    paragraph: &ParagraphLayout,
    push: &mut impl FnMut(&'static str, &mut HashMap<&'static str, ()>),
    seen: &mut HashMap<&'static str, ()>,
) {
    for line in &paragraph.lines {
        for item in &line.items {
            if let InlineItemData::TextRun {
                font_family,
                font_weight,
                font_style,
                ..
            } = &item.data
            {
                push(resolve_base_font(font_family, *font_weight, *font_style), seen);
            }
        }
    }
}

fn collect_from_table(
    table: &TableLayout,
    push: &mut impl FnMut(&'static str, &mut HashMap<&'static str, ()>),
    seen: &mut HashMap<&'static str, ()>,
) {
    for row in &table.rows {
        for cell in &row.cells {
            for payload in &cell.blocks {
                collect_from_payload(payload, push, seen);
            }
        }
    }
}

fn collect_from_textbox(
    textbox: &TextboxLayout,
    push: &mut impl FnMut(&'static str, &mut HashMap<&'static str, ()>),
    seen: &mut HashMap<&'static str, ()>,
) {
    for payload in &textbox.blocks {
        collect_from_payload(payload, push, seen);
    }
}

fn collect_from_payload(
    payload: &BlockPayload,
    push: &mut impl FnMut(&'static str, &mut HashMap<&'static str, ()>),
    seen: &mut HashMap<&'static str, ()>,
) {
    match payload {
        BlockPayload::Paragraph(paragraph) => collect_from_paragraph(paragraph, push, seen),
        BlockPayload::Table(table) => collect_from_table(table, push, seen),
        BlockPayload::Textbox(textbox) => collect_from_textbox(textbox, push, seen),
        BlockPayload::Image(_) | BlockPayload::Generic(_) => {}
    }
}

fn resolve_base_font(
    font_family: &str,
    weight: layout_types::FontWeight,
    style: layout_types::FontStyle,
) -> &'static str {
    let toolkit_weight = match weight {
        layout_types::FontWeight::Normal => font_toolkit::FontWeight::Normal,
        layout_types::FontWeight::Bold => font_toolkit::FontWeight::Bold,
        layout_types::FontWeight::Lighter => font_toolkit::FontWeight::Lighter,
        layout_types::FontWeight::Bolder => font_toolkit::FontWeight::Bolder,
    };
    let toolkit_style = match style {
        layout_types::FontStyle::Normal => font_toolkit::FontStyle::Normal,
        layout_types::FontStyle::Italic => font_toolkit::FontStyle::Italic,
        layout_types::FontStyle::Oblique => font_toolkit::FontStyle::Oblique,
    };
    select_font_variant(map_web_safe_font(font_family), toolkit_weight, toolkit_style)
}
