//! Layout Structure Builder
//!
//! Walks the semantic tree an external `SemanticParser` produces and turns
//! it into a `DocumentStructure`: ordered body elements grouped by section,
//! headers/footers keyed by variant, and footnote/endnote content — each
//! node carrying its cascaded paragraph style and resolved numbering
//! marker, but still unmeasured (no coordinates yet).

use std::collections::HashMap;

use doc_model::{
    ElementKind, ElementRecord, IndentRecord, ParsingError, SectionRecord, SemanticParser,
    SpacingRecord, TabStop,
};
use layout_types::{NumberingInfo, StyleDeclaration};
use style_resolver::{resolve_paragraph_style, NumberingResolver, StyleSheet};

/// Nesting is a tree, not a graph, in `ElementRecord` — but pathologically
/// deep textbox-in-textbox nesting is still worth a hard stop rather than a
/// stack overflow.
const MAX_NESTING_DEPTH: usize = 10;

#[derive(Debug, Clone)]
pub struct StructuredTableCell {
    pub content: Vec<StructuredElement>,
    pub grid_span: u32,
    pub vertical_merge: doc_model::VerticalMergeRecord,
    pub preferred_width: Option<f64>,
    pub margins: IndentRecord,
    pub shading: Option<doc_model::RgbColor>,
    pub border_top: Option<doc_model::BorderRecord>,
    pub border_right: Option<doc_model::BorderRecord>,
    pub border_bottom: Option<doc_model::BorderRecord>,
    pub border_left: Option<doc_model::BorderRecord>,
}

#[derive(Debug, Clone)]
pub struct StructuredTableRow {
    pub cells: Vec<StructuredTableCell>,
    pub cant_split: bool,
    pub is_header_row: bool,
    pub height: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct StructuredTable {
    pub grid_columns: Vec<f64>,
    pub rows: Vec<StructuredTableRow>,
    pub default_cell_border: Option<doc_model::BorderRecord>,
}

/// One semantic-tree node with its style and numbering already resolved.
#[derive(Debug, Clone)]
pub struct StructuredElement {
    pub kind: ElementKind,
    pub source_uid: String,
    pub style: StyleDeclaration,
    pub runs: Vec<doc_model::RunRecord>,
    pub numbering: Option<NumberingInfo>,
    pub image: Option<doc_model::ImageRecord>,
    pub table: Option<StructuredTable>,
    pub children: Vec<StructuredElement>,
    pub tab_stops: Vec<TabStop>,
    pub spacing: SpacingRecord,
    pub indentation: IndentRecord,
    pub heading_level: Option<u8>,
    pub hyperlinks: Vec<doc_model::HyperlinkRecord>,
    pub page_break_before: bool,
    pub keep_with_next: bool,
    pub keep_together: bool,
    pub is_watermark: bool,
    /// Footnote/endnote ids anchored anywhere in this element's own runs or
    /// its descendants (including table cell content) — the transitive set
    /// the assembler uses to decide which footnotes belong on which page.
    pub footnote_refs: Vec<i64>,
    pub endnote_refs: Vec<i64>,
    /// Set for generic/diagnostic nodes, including the `_circular_ref`
    /// nesting-depth stub.
    pub diagnostic: Option<String>,
}

pub struct SectionStructure {
    pub properties: SectionRecord,
    pub body: Vec<StructuredElement>,
    pub headers: HashMap<String, Vec<StructuredElement>>,
    pub footers: HashMap<String, Vec<StructuredElement>>,
}

pub struct DocumentStructure {
    pub sections: Vec<SectionStructure>,
    pub footnotes: Vec<(i64, StructuredElement)>,
    pub endnotes: Vec<(i64, StructuredElement)>,
}

fn circular_ref_stub(source_uid: &str, depth: usize) -> StructuredElement {
    StructuredElement {
        kind: ElementKind::Unknown("_circular_ref".to_string()),
        source_uid: format!("{source_uid}#_circular_ref"),
        style: StyleDeclaration::default(),
        runs: Vec::new(),
        numbering: None,
        image: None,
        table: None,
        children: Vec::new(),
        tab_stops: Vec::new(),
        spacing: SpacingRecord::default(),
        indentation: IndentRecord::default(),
        heading_level: None,
        hyperlinks: Vec::new(),
        page_break_before: false,
        keep_with_next: false,
        keep_together: false,
        is_watermark: false,
        footnote_refs: Vec::new(),
        endnote_refs: Vec::new(),
        diagnostic: Some(format!("nesting depth {depth} exceeded, content truncated")),
    }
}

fn structure_table(
    table: &doc_model::TableRecord,
    parent_style: &StyleDeclaration,
    stylesheet: &StyleSheet,
    numbering: &mut NumberingResolver,
    depth: usize,
    warnings: &mut Vec<String>,
) -> StructuredTable {
    let rows = table
        .rows
        .iter()
        .map(|row| StructuredTableRow {
            cells: row
                .cells
                .iter()
                .map(|cell| StructuredTableCell {
                    content: cell
                        .content
                        .iter()
                        .map(|e| structure_element(e, parent_style, stylesheet, numbering, depth, warnings))
                        .collect(),
                    grid_span: cell.grid_span,
                    vertical_merge: cell.vertical_merge,
                    preferred_width: cell.preferred_width,
                    margins: cell.margins,
                    shading: cell.shading,
                    border_top: cell.border_top,
                    border_right: cell.border_right,
                    border_bottom: cell.border_bottom,
                    border_left: cell.border_left,
                })
                .collect(),
            cant_split: row.cant_split,
            is_header_row: row.is_header_row,
            height: row.height,
        })
        .collect();

    StructuredTable {
        grid_columns: table.grid_columns.clone(),
        rows,
        default_cell_border: table.default_cell_border,
    }
}

/// Structure a single element (and its children) against a style cascade.
/// Exposed at crate visibility so header/footer content — which never
/// takes part in the body's section splitting — can be structured the
/// same way the body is, with its own independent numbering counters.
pub(crate) fn structure_element(
    elem: &ElementRecord,
    parent_style: &StyleDeclaration,
    stylesheet: &StyleSheet,
    numbering: &mut NumberingResolver,
    depth: usize,
    warnings: &mut Vec<String>,
) -> StructuredElement {
    if depth > MAX_NESTING_DEPTH {
        warnings.push(format!(
            "{}: nesting depth exceeded ({depth}), truncating",
            elem.source_uid
        ));
        return circular_ref_stub(&elem.source_uid, depth);
    }

    let own_style = stylesheet.resolve_ref(elem.style_ref.as_deref());
    let style = resolve_paragraph_style(own_style, Some(parent_style));

    let numbering_info = elem.numbering_ref.and_then(|num_ref| {
        let resolved = numbering.resolve(&num_ref);
        if resolved.is_none() {
            warnings.push(format!(
                "{}: unresolvable numbering reference num_id={} level={}",
                elem.source_uid, num_ref.num_id, num_ref.level
            ));
        }
        resolved
    });

    let diagnostic = match &elem.kind {
        ElementKind::Unknown(_) => elem.raw_properties.get("diagnostic").cloned(),
        _ => None,
    };

    let table = elem
        .table
        .as_ref()
        .map(|t| structure_table(t, &style, stylesheet, numbering, depth + 1, warnings));

    let children: Vec<StructuredElement> = elem
        .children
        .iter()
        .map(|c| structure_element(c, &style, stylesheet, numbering, depth + 1, warnings))
        .collect();

    let mut footnote_refs: Vec<i64> = elem.runs.iter().filter_map(|r| r.footnote_ref).collect();
    let mut endnote_refs: Vec<i64> = elem.runs.iter().filter_map(|r| r.endnote_ref).collect();
    for child in &children {
        footnote_refs.extend(child.footnote_refs.iter().copied());
        endnote_refs.extend(child.endnote_refs.iter().copied());
    }
    if let Some(t) = &table {
        for row in &t.rows {
            for cell in &row.cells {
                for cell_elem in &cell.content {
                    footnote_refs.extend(cell_elem.footnote_refs.iter().copied());
                    endnote_refs.extend(cell_elem.endnote_refs.iter().copied());
                }
            }
        }
    }

    StructuredElement {
        kind: elem.kind.clone(),
        source_uid: elem.source_uid.clone(),
        style,
        runs: elem.runs.clone(),
        numbering: numbering_info,
        image: elem.image.clone(),
        table,
        children,
        tab_stops: elem.tab_stops.clone(),
        spacing: elem.spacing,
        indentation: elem.indentation,
        heading_level: elem.heading_level,
        hyperlinks: elem.hyperlinks.clone(),
        page_break_before: elem.page_break_before,
        keep_with_next: elem.keep_with_next,
        keep_together: elem.keep_together,
        is_watermark: elem.is_watermark,
        footnote_refs,
        endnote_refs,
        diagnostic,
    }
}

/// Split a container's direct children into chunks at `SectionBreak`
/// boundaries. A `SectionBreak` node is itself consumed (not copied into
/// the output) since its section's properties are read from
/// `parse_sections` instead.
fn split_by_section(children: &[ElementRecord]) -> Vec<Vec<ElementRecord>> {
    let mut chunks: Vec<Vec<ElementRecord>> = vec![Vec::new()];
    for child in children {
        if matches!(child.kind, ElementKind::SectionBreak) {
            chunks.push(Vec::new());
        } else {
            chunks.last_mut().unwrap().push(child.clone());
        }
    }
    chunks
}

/// Walk the document and produce a `DocumentStructure`. Never fails on
/// malformed content — only on a collaborator-level parsing error (missing
/// part, unreadable XML), which the caller may still choose to recover
/// from by substituting an empty document.
pub fn build_structure(
    parser: &dyn SemanticParser,
    stylesheet: &StyleSheet,
) -> Result<(DocumentStructure, Vec<String>), ParsingError> {
    let mut warnings = Vec::new();

    let sections_meta = parser.parse_sections()?;
    if sections_meta.is_empty() {
        return Err(ParsingError::UnsupportedFeature {
            feature: "document declares no sections".to_string(),
        });
    }

    let numbering_data = parser.numbering_data()?;
    let mut resolver = NumberingResolver::new(numbering_data);

    let body_root = parser.parse_body()?;
    let chunks = split_by_section(&body_root.children);

    if chunks.len() != sections_meta.len() {
        warnings.push(format!(
            "section break count ({}) does not match declared section count ({}); excess content attributed to the last section",
            chunks.len() - 1,
            sections_meta.len()
        ));
    }

    let mut sections = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.into_iter().enumerate() {
        let properties = sections_meta
            .get(i)
            .or_else(|| sections_meta.last())
            .expect("non-empty sections_meta checked above")
            .clone();

        let body: Vec<StructuredElement> = chunk
            .iter()
            .map(|e| {
                structure_element(
                    e,
                    &stylesheet.document_default,
                    stylesheet,
                    &mut resolver,
                    0,
                    &mut warnings,
                )
            })
            .collect();

        let mut headers = HashMap::new();
        for (variant, rel_id) in &properties.headers {
            let header_root = parser.parse_header(rel_id)?;
            let structured = header_root
                .children
                .iter()
                .map(|e| {
                    structure_element(
                        e,
                        &stylesheet.document_default,
                        stylesheet,
                        &mut resolver,
                        0,
                        &mut warnings,
                    )
                })
                .collect();
            headers.insert(variant.clone(), structured);
        }

        let mut footers = HashMap::new();
        for (variant, rel_id) in &properties.footers {
            let footer_root = parser.parse_footer(rel_id)?;
            let structured = footer_root
                .children
                .iter()
                .map(|e| {
                    structure_element(
                        e,
                        &stylesheet.document_default,
                        stylesheet,
                        &mut resolver,
                        0,
                        &mut warnings,
                    )
                })
                .collect();
            footers.insert(variant.clone(), structured);
        }

        sections.push(SectionStructure {
            properties,
            body,
            headers,
            footers,
        });
    }

    let footnotes = parser
        .parse_footnotes()?
        .into_iter()
        .map(|f| {
            (
                f.id,
                structure_element(
                    &f.content,
                    &stylesheet.document_default,
                    stylesheet,
                    &mut resolver,
                    0,
                    &mut warnings,
                ),
            )
        })
        .collect();

    let endnotes = parser
        .parse_endnotes()?
        .into_iter()
        .map(|e| {
            (
                e.id,
                structure_element(
                    &e.content,
                    &stylesheet.document_default,
                    stylesheet,
                    &mut resolver,
                    0,
                    &mut warnings,
                ),
            )
        })
        .collect();

    Ok((
        DocumentStructure {
            sections,
            footnotes,
            endnotes,
        },
        warnings,
    ))
}
