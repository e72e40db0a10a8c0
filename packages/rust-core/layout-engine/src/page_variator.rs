//! Page Variator: resolves which header/footer variant applies to a given
//! page number and lays out that variant's chrome blocks.
//!
//! Placement direction matters here in a way it doesn't for the body: a
//! header grows downward from `header_distance` below the page top, and a
//! footer grows upward from `footer_distance` above the page bottom, each
//! accumulating `spacing.after` between its own blocks.

use std::collections::HashMap;

use layout_types::{LayoutBlock, PageConfig, PageVariant, TextMeasurer};

use crate::measure::{self, MeasuredBlock};
use crate::structure_builder::StructuredElement;

/// The four variant names a section's `headers`/`footers` map may use, in
/// the order they're tried for a given page number.
pub fn variant_name_for_page<'a>(page_number: u32, available: &HashMap<String, Vec<StructuredElement>>) -> Option<&'a str> {
    if page_number == 1 && available.contains_key("first") {
        return Some("first");
    }
    if page_number % 2 == 0 && available.contains_key("even") {
        return Some("even");
    }
    if page_number > 1 && available.contains_key("odd") {
        return Some("odd");
    }
    if available.contains_key("default") {
        return Some("default");
    }
    None
}

struct BandBlock {
    measured: MeasuredBlock,
    offset: f64,
}

fn lay_out_band(
    elements: &[StructuredElement],
    width: f64,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> (Vec<BandBlock>, f64) {
    let measured = measure::measure_top_level(elements, width, measurer, warnings);
    let mut offset = 0.0;
    let mut out = Vec::with_capacity(measured.len());
    for mb in measured {
        let gap = mb.content.raw.spacing.after.unwrap_or(0.0);
        let h = mb.height();
        out.push(BandBlock { measured: mb, offset });
        offset += h + gap;
    }
    (out, offset)
}

fn finalize_block(mb: MeasuredBlock, x: f64, y: f64, width: f64, height: f64, sequence: u64) -> LayoutBlock {
    LayoutBlock {
        frame: layout_types::Rect::new(x, y, width, height),
        block_type: mb.block_type,
        content: mb.content,
        style: mb.style,
        page_number: 0,
        source_uid: mb.source_uid,
        sequence,
        page_break_before: false,
        page_break_after: false,
        keep_with_next: mb.keep_with_next,
        keep_together: mb.keep_together,
        is_watermark: mb.is_watermark,
    }
}

/// Build the `PageVariant` for a given variant name, or an empty variant
/// when the section has no header/footer under that name.
pub fn build_variant(
    headers: &HashMap<String, Vec<StructuredElement>>,
    footers: &HashMap<String, Vec<StructuredElement>>,
    variant_name: Option<&str>,
    page_config: &PageConfig,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> PageVariant {
    let margins = page_config.base_margins;
    let variant_name = match variant_name {
        Some(v) => v,
        None => return PageVariant::empty(margins),
    };

    let width = page_config.column_width();
    let page_height = page_config.page_size.height;
    let mut sequence = 0u64;

    let header_elements = headers.get(variant_name);
    let footer_elements = footers.get(variant_name);

    let (header_band, header_total) = match header_elements {
        Some(els) => lay_out_band(els, width, measurer, warnings),
        None => (Vec::new(), 0.0),
    };
    let (footer_band, footer_total) = match footer_elements {
        Some(els) => lay_out_band(els, width, measurer, warnings),
        None => (Vec::new(), 0.0),
    };

    let top_start = page_height - margins.header;
    let mut header_placements = Vec::with_capacity(header_band.len());
    for bb in header_band {
        let h = bb.measured.height();
        let y = top_start - bb.offset - h;
        sequence += 1;
        header_placements.push(finalize_block(bb.measured, margins.left, y, width, h, sequence));
    }

    let bottom_start = margins.footer;
    let mut footer_placements = Vec::with_capacity(footer_band.len());
    for bb in footer_band {
        let h = bb.measured.height();
        let y = bottom_start + bb.offset;
        sequence += 1;
        footer_placements.push(finalize_block(bb.measured, margins.left, y, width, h, sequence));
    }

    let body_top_offset = if header_placements.is_empty() {
        margins.top
    } else {
        margins.top.max(margins.header + header_total)
    };
    let body_bottom_offset = if footer_placements.is_empty() {
        margins.bottom
    } else {
        margins.bottom.max(margins.footer + footer_total)
    };

    PageVariant {
        header_placements,
        footer_placements,
        body_top_offset,
        body_bottom_offset,
        header_distance: margins.header,
        footer_distance: margins.footer,
    }
}

/// One `PageVariant` per variant name actually declared by a section, plus
/// whatever empty fallback is needed for page numbers that match none.
pub struct VariantSet {
    pub by_name: HashMap<String, PageVariant>,
    pub empty: PageVariant,
}

pub fn build_variant_set(
    headers: &HashMap<String, Vec<StructuredElement>>,
    footers: &HashMap<String, Vec<StructuredElement>>,
    page_config: &PageConfig,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> VariantSet {
    let mut names: Vec<&str> = headers.keys().map(|s| s.as_str()).chain(footers.keys().map(|s| s.as_str())).collect();
    names.sort_unstable();
    names.dedup();

    let mut by_name = HashMap::new();
    for name in names {
        let variant = build_variant(headers, footers, Some(name), page_config, measurer, warnings);
        by_name.insert(name.to_string(), variant);
    }

    VariantSet { by_name, empty: PageVariant::empty(page_config.base_margins) }
}

impl VariantSet {
    pub fn resolve(&self, page_number: u32, headers: &HashMap<String, Vec<StructuredElement>>) -> &PageVariant {
        match variant_name_for_page(page_number, headers) {
            Some(name) => self.by_name.get(name).unwrap_or(&self.empty),
            None => &self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_with(variants: &[&str]) -> HashMap<String, Vec<StructuredElement>> {
        variants.iter().map(|v| (v.to_string(), Vec::new())).collect()
    }

    #[test]
    fn page_one_prefers_first_variant() {
        let available = sections_with(&["first", "default"]);
        assert_eq!(variant_name_for_page(1, &available), Some("first"));
    }

    #[test]
    fn even_page_prefers_even_variant() {
        let available = sections_with(&["even", "odd", "default"]);
        assert_eq!(variant_name_for_page(2, &available), Some("even"));
    }

    #[test]
    fn odd_page_after_first_prefers_odd_variant() {
        let available = sections_with(&["odd", "default"]);
        assert_eq!(variant_name_for_page(3, &available), Some("odd"));
    }

    #[test]
    fn falls_back_to_default_then_none() {
        let available = sections_with(&["default"]);
        assert_eq!(variant_name_for_page(2, &available), Some("default"));

        let none_available: HashMap<String, Vec<StructuredElement>> = HashMap::new();
        assert_eq!(variant_name_for_page(2, &none_available), None);
    }
}
