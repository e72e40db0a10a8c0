//! Layout Assembler: the top-level entry point that turns a document's
//! semantic tree into a fully paginated `UnifiedLayout`.
//!
//! Pipeline position: `structure_builder::build_structure` produces a
//! `DocumentStructure` (cascaded style + resolved numbering, still
//! unmeasured); this module measures each section's content, paginates it,
//! then resolves and stamps header/footer chrome per page.

use std::collections::HashMap;

use doc_model::{SectionBreakType, SemanticParser};
use layout_types::{
    BlockKind, EstimatedTextMeasurer, LayoutBlock, LayoutPage, Margins, PageConfig, Rect, Size,
    TextMeasurer, UnifiedLayout,
};
use style_resolver::StyleSheet;

use crate::measure;
use crate::page_packer;
use crate::page_variator;
use crate::pagination_manager;
use crate::structure_builder::{self, DocumentStructure, SectionStructure, StructuredElement};
use crate::LayoutError;

pub struct AssemblyOutput {
    pub layout: UnifiedLayout,
    pub warnings: Vec<String>,
}

/// Build a complete layout from a document's semantic tree, using the
/// estimated glyph-width text measurer. Most callers want this; `assemble`
/// itself takes a `TextMeasurer` for callers with real font metrics wired
/// up (the PDF compiler's font registry, typically).
pub fn assemble_with_defaults(
    parser: &dyn SemanticParser,
    stylesheet: &StyleSheet,
) -> Result<AssemblyOutput, doc_model::ParsingError> {
    let measurer = EstimatedTextMeasurer;
    assemble(parser, stylesheet, &measurer)
}

pub fn assemble(
    parser: &dyn SemanticParser,
    stylesheet: &StyleSheet,
    measurer: &dyn TextMeasurer,
) -> Result<AssemblyOutput, doc_model::ParsingError> {
    let (structure, mut warnings) = structure_builder::build_structure(parser, stylesheet)?;
    let mut layout = UnifiedLayout::new();

    for group in group_continuous_sections(&structure.sections) {
        assemble_section_group(&group, &structure.footnotes, measurer, &mut warnings, &mut layout);
    }

    if let Some(first) = layout.pages.first_mut() {
        first.skip_headers_footers = first.skip_headers_footers || section_wants_title_page(&structure);
    }

    append_endnote_section(&structure, measurer, &mut warnings, &mut layout);

    Ok(AssemblyOutput { layout, warnings })
}

/// Append the document's endnotes as a trailing section after the last body
/// page, paginated against the last section's page geometry (or a letter-
/// size default when the document has no sections at all). Every block on
/// these trailing pages is tagged `BlockKind::Endnotes`, regardless of the
/// content it actually carries, purely for render-band/chrome classification
/// — the dispatcher still renders each block by its own payload.
fn append_endnote_section(
    structure: &DocumentStructure,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
    layout: &mut UnifiedLayout,
) {
    if structure.endnotes.is_empty() {
        return;
    }

    let page_config = structure
        .sections
        .last()
        .map(|s| PageConfig {
            page_size: convert_size(s.properties.page_size),
            base_margins: convert_margins(s.properties.margins),
            columns: s.properties.columns.max(1),
            column_spacing: s.properties.column_spacing,
        })
        .unwrap_or_else(|| PageConfig::new(Size::LETTER, Margins::ONE_INCH));

    let elems: Vec<StructuredElement> = structure.endnotes.iter().map(|(_, e)| e.clone()).collect();
    let measured = measure::measure_top_level(&elems, page_config.column_width(), measurer, warnings);
    let out = page_packer::paginate(measured, &page_config);
    warnings.extend(out.warnings);

    let starting_number = layout.pages.len() as u32;
    for mut page in out.pages {
        page.number = starting_number + page.number;
        for block in &mut page.blocks {
            block.block_type = BlockKind::Endnotes;
        }
        layout.pages.push(page);
    }
}

fn convert_size(size: doc_model::PageSizeRecord) -> layout_types::Size {
    layout_types::Size { width: size.width, height: size.height }
}

fn convert_margins(margins: doc_model::MarginsRecord) -> layout_types::Margins {
    layout_types::Margins {
        top: margins.top,
        right: margins.right,
        bottom: margins.bottom,
        left: margins.left,
        header: margins.header,
        footer: margins.footer,
    }
}

fn section_wants_title_page(structure: &DocumentStructure) -> bool {
    structure.sections.first().map(|s| s.properties.title_page).unwrap_or(false)
}

/// Split sections into independently-paginated runs. A `Continuous` break
/// joins a section to the previous one's page flow instead of starting a
/// new page, so the two are measured and packed together as one run; every
/// other break type (including the first section's, which has none) starts
/// a new one.
fn group_continuous_sections(sections: &[SectionStructure]) -> Vec<Vec<&SectionStructure>> {
    let mut groups: Vec<Vec<&SectionStructure>> = Vec::new();
    for section in sections {
        let continuous = matches!(section.properties.break_type, Some(SectionBreakType::Continuous));
        if continuous {
            if let Some(run) = groups.last_mut() {
                run.push(section);
                continue;
            }
        }
        groups.push(vec![section]);
    }
    groups
}

/// Insert a blank page before a group that opens with `EvenPage`/`OddPage`,
/// when the next page's parity doesn't already match what the break
/// demands. A no-op for `NextPage`/`None`/`Continuous` groups.
fn pad_for_parity(layout: &mut UnifiedLayout, break_type: Option<SectionBreakType>, page_config: &PageConfig) {
    let want_even = match break_type {
        Some(SectionBreakType::EvenPage) => true,
        Some(SectionBreakType::OddPage) => false,
        _ => return,
    };
    let next_number = layout.pages.len() as u32 + 1;
    if (next_number % 2 == 0) != want_even {
        layout.pages.push(LayoutPage::new(next_number, page_config.page_size, page_config.base_margins));
    }
}

fn assemble_section_group(
    group: &[&SectionStructure],
    footnotes: &[(i64, StructuredElement)],
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
    layout: &mut UnifiedLayout,
) {
    let leader = group[0];
    let page_config = PageConfig {
        page_size: convert_size(leader.properties.page_size),
        base_margins: convert_margins(leader.properties.margins),
        columns: leader.properties.columns.max(1),
        column_spacing: leader.properties.column_spacing,
    };

    pad_for_parity(layout, leader.properties.break_type, &page_config);

    let mut measured = Vec::new();
    for section in group {
        measured.extend(measure::measure_top_level(&section.body, page_config.column_width(), measurer, warnings));
    }

    // Captured before `measured` moves into `paginate`, keyed by each
    // top-level block's own source_uid — the same key a split fragment's
    // suffixed source_uid resolves back to via `strip_split_suffix`.
    let footnote_anchors: HashMap<String, Vec<i64>> = measured
        .iter()
        .filter(|b| !b.footnote_refs.is_empty())
        .map(|b| (b.source_uid.clone(), b.footnote_refs.clone()))
        .collect();

    let out = page_packer::paginate(measured, &page_config);
    warnings.extend(out.warnings);

    let variant_set = page_variator::build_variant_set(&leader.headers, &leader.footers, &page_config, measurer, warnings);

    let starting_number = layout.pages.len() as u32;
    for mut page in out.pages {
        page.number = starting_number + page.number;
        if leader.properties.title_page && page.number == 1 {
            page.skip_headers_footers = true;
        }

        let anchored_ids = anchored_footnote_ids(&page, &footnote_anchors);
        if !anchored_ids.is_empty() {
            let elems: Vec<StructuredElement> = anchored_ids
                .iter()
                .filter_map(|id| footnotes.iter().find(|(fid, _)| fid == id).map(|(_, e)| e.clone()))
                .collect();
            let footnote_blocks = measure::measure_top_level(&elems, page_config.column_width(), measurer, warnings);
            place_footnote_blocks(&mut page, footnote_blocks, page_config.base_margins, page_config.column_width());
        }

        let variant = variant_set.resolve(page.number, &leader.headers);
        let manager_out = pagination_manager::apply_variant(&mut page, variant);
        warnings.extend(manager_out.warnings);
        layout.pages.push(page);
    }
}

/// Footnote ids anchored by any block placed on `page`, in first-seen
/// order, resolved through `footnote_anchors` (keyed by the pre-split
/// source_uid recorded before pagination).
fn anchored_footnote_ids(page: &LayoutPage, footnote_anchors: &HashMap<String, Vec<i64>>) -> Vec<i64> {
    let mut ids = Vec::new();
    for block in &page.blocks {
        let Some(refs) = footnote_anchors.get(strip_split_suffix(&block.source_uid)) else { continue };
        for &id in refs {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Undo the `#split-head`/`#split-tail` suffixes `page_packer` appends to a
/// block's source_uid when it splits it across pages, recovering the
/// source_uid footnote anchors were recorded against before pagination.
fn strip_split_suffix(source_uid: &str) -> &str {
    let mut s = source_uid;
    while let Some(stripped) = s.strip_suffix("#split-head").or_else(|| s.strip_suffix("#split-tail")) {
        s = stripped;
    }
    s
}

/// Stack a page's anchored footnotes bottom-up within its bottom margin,
/// reserving that body-band space for them. Tagged `BlockKind::Footnotes`
/// regardless of their own payload kind, purely for render-band ordering.
fn place_footnote_blocks(page: &mut LayoutPage, blocks: Vec<measure::MeasuredBlock>, margins: Margins, column_width: f64) {
    let mut next_sequence = page.blocks.iter().map(|b| b.sequence).max().unwrap_or(0) + 1;
    let mut cursor_y = margins.bottom + blocks.iter().map(|b| b.height()).sum::<f64>();

    for block in blocks {
        let height = block.height();
        page.blocks.push(LayoutBlock {
            frame: Rect::new(margins.left, cursor_y - height, column_width, height),
            block_type: BlockKind::Footnotes,
            content: block.content,
            style: block.style,
            page_number: page.number,
            source_uid: block.source_uid,
            sequence: next_sequence,
            page_break_before: false,
            page_break_after: false,
            keep_with_next: block.keep_with_next,
            keep_together: block.keep_together,
            is_watermark: false,
        });
        next_sequence += 1;
        cursor_y -= height;
    }
}

/// Surface a `LayoutError` for a block that measurement couldn't place at
/// all (used by callers that want a typed error rather than a warning
/// string, e.g. when building a diagnostics report).
pub fn measurement_failed(source_uid: impl Into<String>, message: impl Into<String>) -> LayoutError {
    LayoutError::MeasurementFailed { source_uid: source_uid.into(), message: message.into() }
}
