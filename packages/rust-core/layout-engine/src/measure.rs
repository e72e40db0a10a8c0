//! Measurement: turns a `StructuredElement` into one or more `MeasuredBlock`s
//! with fully typeset, block-local geometry — no page position yet. Page
//! packing (`pagination`) is the next and final stage, which only ever
//! needs a block's total height and its splitting behavior.
//!
//! Every nested frame (a table cell's `Rect`, a paragraph line's
//! `baseline_y`) is relative to its own block's origin, never to the page;
//! only the top-level `LayoutBlock::frame` the pagination cursor produces is
//! page-absolute. This mirrors `ParagraphLine::baseline_y`'s existing
//! documented convention and lets a split table fragment rebuild its own
//! local frame from scratch without having to untangle absolute
//! coordinates first.

use std::collections::HashMap;

use doc_model::{ElementKind, LineRule, VerticalMergeRecord};
use layout_types::{
    BlockContent, BlockKind, BlockPayload, BoxStyle, Color, EffectiveFormat, GenericLayout,
    HyperlinkRef, ImageLayout, ImageSource, IndentInfo, InlineItem, InlineItemData, ListType,
    NumberingInfo, OverlayBox, ParagraphLayout, ParagraphLine, ParagraphMetadata, Rect, RunFormat,
    Spacing, SpacingInfo, StyleDeclaration, TableCellLayout, TableLayout, TableRow, TextAlign,
    TextMeasurer, TextStyle, TextboxLayout, VerticalMerge, DEFAULT_LINE_HEIGHT_RATIO,
};
use style_resolver::resolve_run_style;

use crate::structure_builder::{StructuredElement, StructuredTable, StructuredTableRow};
use crate::text_layout::{next_tab_stop, wrap_text};

/// Fallback dimensions for content that can't be measured, per the
/// assembler's non-fatal failure policy.
const FALLBACK_HEIGHT: f64 = 20.0;
const FALLBACK_WIDTH: f64 = 50.0;

pub struct MeasuredBlock {
    pub block_type: BlockKind,
    pub content: BlockContent,
    pub style: StyleDeclaration,
    pub source_uid: String,
    pub page_break_before: bool,
    pub page_break_after: bool,
    pub keep_with_next: bool,
    pub keep_together: bool,
    pub is_watermark: bool,
    /// Footnote/endnote ids anchored within this block, carried through
    /// from the `StructuredElement` it was measured from so the assembler
    /// can tell which page to place the referenced footnote/endnote on.
    pub footnote_refs: Vec<i64>,
    pub endnote_refs: Vec<i64>,
}

impl MeasuredBlock {
    pub fn height(&self) -> f64 {
        match &self.content.payload {
            BlockPayload::Paragraph(p) => p.total_height().max(FALLBACK_HEIGHT.min(p.total_height().max(1.0))),
            BlockPayload::Table(t) => t.rows.iter().map(|r| r.height).sum(),
            BlockPayload::Image(i) => i.frame.height,
            BlockPayload::Textbox(t) => t.frame.height,
            BlockPayload::Generic(g) => g.frame.height,
        }
    }
}

/// Measure every top-level element of a flow (a section body, a header, a
/// table cell's content, a textbox's content) against `container_width`.
pub fn measure_top_level(
    elements: &[StructuredElement],
    container_width: f64,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> Vec<MeasuredBlock> {
    elements
        .iter()
        .flat_map(|e| measure_element(e, container_width, measurer, warnings))
        .collect()
}

fn measure_element(
    elem: &StructuredElement,
    container_width: f64,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> Vec<MeasuredBlock> {
    match &elem.kind {
        ElementKind::Paragraph => measure_paragraph(elem, container_width, measurer),
        ElementKind::Table => vec![measure_table(elem, container_width, measurer, warnings)],
        ElementKind::Image => vec![measure_image(elem, container_width, warnings)],
        ElementKind::Textbox => vec![measure_textbox(elem, container_width, measurer, warnings)],
        ElementKind::SectionBreak | ElementKind::Unknown(_) => {
            vec![measure_generic(elem, container_width)]
        }
    }
}

fn measure_generic(elem: &StructuredElement, container_width: f64) -> MeasuredBlock {
    let diagnostic = elem.diagnostic.clone().or_else(|| match &elem.kind {
        ElementKind::Unknown(tag) => Some(format!("unrecognized element kind: {tag}")),
        ElementKind::SectionBreak => Some("stray section break encountered as a block".to_string()),
        _ => None,
    });
    let payload = BlockPayload::Generic(GenericLayout {
        frame: Rect::new(0.0, 0.0, container_width.max(FALLBACK_WIDTH), FALLBACK_HEIGHT),
        original_block_type: format!("{:?}", elem.kind),
        diagnostic,
    });
    MeasuredBlock {
        block_type: BlockKind::Decorator,
        content: BlockContent { payload, raw: raw_data(elem, Vec::new(), None) },
        style: elem.style.clone(),
        source_uid: elem.source_uid.clone(),
        page_break_before: elem.page_break_before,
        page_break_after: false,
        keep_with_next: elem.keep_with_next,
        keep_together: elem.keep_together,
        is_watermark: elem.is_watermark,
        footnote_refs: elem.footnote_refs.clone(),
        endnote_refs: elem.endnote_refs.clone(),
    }
}

fn raw_data(
    elem: &StructuredElement,
    runs: Vec<RunFormat>,
    marker_override: Option<String>,
) -> layout_types::RawBlockData {
    let hyperlinks = elem
        .hyperlinks
        .iter()
        .map(|h| HyperlinkRef {
            target: h.rel_id.clone().or_else(|| h.anchor.clone()).unwrap_or_default(),
            run_start: h.run_start,
            run_end: h.run_end,
        })
        .collect();

    let marker = marker_override.unwrap_or_else(|| {
        elem.numbering.as_ref().map(|n| n.marker_text.clone()).unwrap_or_default()
    });

    layout_types::RawBlockData {
        style: elem.style.clone(),
        runs,
        numbering: elem.numbering.clone(),
        marker,
        indent: IndentInfo {
            first_line: elem.indentation.first_line,
            hanging: elem.indentation.hanging,
            left: elem.indentation.left,
            right: elem.indentation.right,
        },
        spacing: SpacingInfo {
            before: elem.spacing.before,
            after: elem.spacing.after,
            line_spacing: elem.spacing.line,
        },
        hyperlinks,
        section_properties: None,
        effective_format: EffectiveFormat {
            heading_level: elem.heading_level,
            is_list_item: elem.numbering.is_some(),
            list_level: elem.numbering.as_ref().and_then(|n| n.level),
            list_type: elem.numbering.as_ref().and_then(|n| n.list_type),
            is_empty: elem.runs.iter().all(|r| r.text.trim().is_empty()),
            is_page_break: elem.runs.iter().any(|r| r.is_page_break),
            is_section_break: matches!(elem.kind, ElementKind::SectionBreak),
            has_line_break: elem.runs.iter().any(|r| r.is_line_break),
        },
    }
}

/// Per-line text cursor used while packing words onto lines.
struct LineBuilder {
    items: Vec<InlineItem>,
    cursor_x: f64,
    max_width: f64,
    max_ascent: f64,
    max_descent: f64,
}

impl LineBuilder {
    fn new(max_width: f64) -> Self {
        Self { items: Vec::new(), cursor_x: 0.0, max_width, max_ascent: 0.0, max_descent: 0.0 }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, mut item: InlineItem) {
        item.x = self.cursor_x;
        self.cursor_x += item.width;
        self.max_ascent = self.max_ascent.max(item.ascent);
        self.max_descent = self.max_descent.max(item.descent);
        self.items.push(item);
    }

    fn finish(self, offset_x: f64, available_width: f64, align: TextAlign, baseline_y: f64, line_height: f64) -> ParagraphLine {
        ParagraphLine {
            baseline_y,
            height: line_height,
            offset_x,
            available_width,
            items: self.items,
            align,
        }
    }
}

fn measure_paragraph(
    elem: &StructuredElement,
    container_width: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<MeasuredBlock> {
    let align = elem.style.text.text_align.unwrap_or(TextAlign::Left);
    let base_left = elem
        .numbering
        .as_ref()
        .map(|n| n.text_position)
        .unwrap_or(elem.indentation.left);
    let first_line_left = elem
        .numbering
        .as_ref()
        .map(|n| n.number_position)
        .unwrap_or(base_left + elem.indentation.first_line);
    let right = elem.indentation.right;
    let cont_width = (container_width - base_left - right).max(1.0);
    let first_width = (container_width - first_line_left - right).max(1.0);

    let line_height_factor = elem.style.text.line_height.unwrap_or(DEFAULT_LINE_HEIGHT_RATIO);

    // Split the paragraph's runs into segments at explicit page-break runs;
    // a segment becomes its own paragraph block.
    let mut segments: Vec<Vec<&doc_model::RunRecord>> = vec![Vec::new()];
    for run in &elem.runs {
        if run.is_page_break {
            segments.push(Vec::new());
        } else {
            segments.last_mut().unwrap().push(run);
        }
    }
    let segment_count = segments.len();

    let mut run_formats = Vec::new();
    let mut blocks = Vec::with_capacity(segment_count);

    for (seg_idx, runs) in segments.into_iter().enumerate() {
        let mut lines: Vec<ParagraphLine> = Vec::new();
        let mut baseline_y = 0.0;
        let is_first_line_of_paragraph = seg_idx == 0;
        let mut line = LineBuilder::new(if is_first_line_of_paragraph { first_width } else { cont_width });

        if seg_idx == 0 {
            if let Some(info) = &elem.numbering {
                if !info.marker_text.is_empty() {
                    let style = TextStyle::default();
                    let font_size = elem.style.text.font_size.unwrap_or(style.font_size.unwrap());
                    let font_family = elem.style.text.font_family.clone().unwrap_or_else(|| style.font_family.clone().unwrap());
                    let width = measurer.measure_text(&info.marker_text, font_size, &font_family);
                    line.push(InlineItem {
                        x: 0.0,
                        width,
                        ascent: font_size * 0.8,
                        descent: font_size * 0.2,
                        data: InlineItemData::TextRun {
                            text: info.marker_text.clone(),
                            font_family,
                            font_size,
                            font_weight: elem.style.text.font_weight.unwrap_or(style.font_weight.unwrap()),
                            font_style: elem.style.text.font_style.unwrap_or(style.font_style.unwrap()),
                            color: elem.style.text.color.unwrap_or(Color::BLACK),
                            hyperlink_target: None,
                        },
                    });
                }
            }
        }

        let mut tab_cursor: Option<f64> = None;

        for run in runs {
            run_formats.push(RunFormat {
                text: run.text.clone(),
                bold: run.bold,
                italic: run.italic,
                underline: run.underline,
                strikethrough: run.strikethrough,
                font_family: run.font_family.clone(),
                font_size: run.font_size,
            });

            if run.is_line_break {
                let line_max_width = if lines.is_empty() { first_width } else { cont_width };
                let offset_x = if lines.is_empty() { first_line_left } else { base_left };
                baseline_y += line_height_factor_height(line.max_ascent, line.max_descent, font_or_default(elem, run), line_height_factor);
                lines.push(std::mem::replace(&mut line, LineBuilder::new(cont_width)).finish(
                    offset_x,
                    line_max_width,
                    align,
                    baseline_y,
                    line_height_factor_height(0.0, 0.0, font_or_default(elem, run), line_height_factor),
                ));
                tab_cursor = None;
                continue;
            }

            if run.is_tab {
                tab_cursor = Some(next_tab_stop(line.cursor_x, &elem.tab_stops));
                continue;
            }

            let resolved = resolve_run_style(run, &elem.style.text);
            let font_size = resolved.font_size.unwrap_or(12.0);
            let font_family = resolved.font_family.clone().unwrap_or_else(|| "Helvetica".to_string());
            let color = resolved.color.unwrap_or(Color::BLACK);
            let font_weight = resolved.font_weight.unwrap_or(layout_types::FontWeight::Normal);
            let font_style = resolved.font_style.unwrap_or(layout_types::FontStyle::Normal);

            for word in run.text.split_whitespace() {
                let text = word.to_string();
                if let Some(target_x) = tab_cursor.take() {
                    line.cursor_x = target_x.max(line.cursor_x);
                }
                let space_width = measurer.measure_text(" ", font_size, &font_family);
                let word_width = measurer.measure_text(&text, font_size, &font_family);
                let needs_space = !line.is_empty();
                let projected = line.cursor_x + if needs_space { space_width } else { 0.0 } + word_width;

                if projected > line.max_width && !line.is_empty() {
                    let line_max_width = if lines.is_empty() { first_width } else { cont_width };
                    let offset_x = if lines.is_empty() { first_line_left } else { base_left };
                    let finished = std::mem::replace(&mut line, LineBuilder::new(cont_width));
                    let h = finished.max_ascent + finished.max_descent;
                    let lh = h.max(font_size * line_height_factor);
                    baseline_y += lh;
                    lines.push(finished.finish(offset_x, line_max_width, align, baseline_y, lh));
                } else if needs_space {
                    line.cursor_x += space_width;
                }

                line.push(InlineItem {
                    x: 0.0,
                    width: word_width,
                    ascent: font_size * 0.8,
                    descent: font_size * 0.2,
                    data: InlineItemData::TextRun {
                        text,
                        font_family: font_family.clone(),
                        font_size,
                        font_weight,
                        font_style,
                        color,
                        hyperlink_target: run.hyperlink_rel_id.clone(),
                    },
                });
            }
        }

        if !line.is_empty() {
            let line_max_width = if lines.is_empty() { first_width } else { cont_width };
            let offset_x = if lines.is_empty() { first_line_left } else { base_left };
            let h = line.max_ascent + line.max_descent;
            let font_size_fallback = elem.style.text.font_size.unwrap_or(12.0);
            let lh = h.max(font_size_fallback * line_height_factor);
            baseline_y += lh;
            lines.push(line.finish(offset_x, line_max_width, align, baseline_y, lh));
        }

        if lines.is_empty() {
            let font_size = elem.style.text.font_size.unwrap_or(12.0);
            let lh = font_size * line_height_factor;
            lines.push(ParagraphLine {
                baseline_y: lh,
                height: lh,
                offset_x: first_line_left,
                available_width: first_width,
                items: Vec::new(),
                align,
            });
        }

        let payload = BlockPayload::Paragraph(ParagraphLayout {
            lines,
            overlays: Vec::new(),
            style: elem.style.box_model.clone(),
            metadata: ParagraphMetadata { warnings: Vec::new(), kept_together: elem.keep_together },
        });

        blocks.push(MeasuredBlock {
            block_type: BlockKind::Paragraph,
            content: BlockContent { payload, raw: raw_data(elem, run_formats.clone(), None) },
            style: elem.style.clone(),
            source_uid: if segment_count > 1 { format!("{}#seg{}", elem.source_uid, seg_idx) } else { elem.source_uid.clone() },
            page_break_before: elem.page_break_before && seg_idx == 0,
            page_break_after: seg_idx + 1 < segment_count,
            keep_with_next: elem.keep_with_next,
            keep_together: elem.keep_together,
            is_watermark: elem.is_watermark,
            footnote_refs: elem.footnote_refs.clone(),
            endnote_refs: elem.endnote_refs.clone(),
        });
    }

    blocks
}

fn font_or_default(elem: &StructuredElement, _run: &doc_model::RunRecord) -> f64 {
    elem.style.text.font_size.unwrap_or(12.0)
}

fn line_height_factor_height(ascent: f64, descent: f64, font_size: f64, factor: f64) -> f64 {
    (ascent + descent).max(font_size * factor)
}

/// Distribute a table's column widths across `container_width`: explicit
/// grid widths are scaled to fill it; otherwise columns are uniform.
fn compute_column_widths(table: &StructuredTable, container_width: f64) -> Vec<f64> {
    let column_count = table
        .rows
        .iter()
        .map(|r| r.cells.iter().map(|c| c.grid_span.max(1)).sum::<u32>())
        .max()
        .unwrap_or(1)
        .max(1) as usize;

    if table.grid_columns.len() == column_count {
        let sum: f64 = table.grid_columns.iter().sum();
        if sum > 0.0 {
            let scale = container_width / sum;
            return table.grid_columns.iter().map(|w| w * scale).collect();
        }
    }

    vec![container_width / column_count as f64; column_count]
}

struct CellBuild {
    col_start: usize,
    span: usize,
    grid_span: u32,
    vertical_merge: VerticalMergeRecord,
    blocks: Vec<BlockPayload>,
    content_height: f64,
    margins: doc_model::IndentRecord,
    shading: Option<doc_model::RgbColor>,
    border_top: Option<doc_model::BorderRecord>,
    border_right: Option<doc_model::BorderRecord>,
    border_bottom: Option<doc_model::BorderRecord>,
    border_left: Option<doc_model::BorderRecord>,
}

fn to_layout_color(c: doc_model::RgbColor) -> Color {
    Color::rgb(c.r, c.g, c.b)
}

fn to_border_style(b: doc_model::BorderRecord) -> layout_types::BorderStyle {
    layout_types::BorderStyle::solid(b.width, to_layout_color(b.color))
}

struct RowBuild {
    cells: Vec<CellBuild>,
    height: f64,
    cant_split: bool,
    is_header_row: bool,
}

fn build_row(
    row: &StructuredTableRow,
    col_widths: &[f64],
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> RowBuild {
    let mut col_cursor = 0usize;
    let mut cells = Vec::with_capacity(row.cells.len());

    for cell in &row.cells {
        let span = (cell.grid_span.max(1) as usize).min(col_widths.len().saturating_sub(col_cursor).max(1));
        let width: f64 = col_widths
            .get(col_cursor..(col_cursor + span).min(col_widths.len()))
            .map(|s| s.iter().sum())
            .unwrap_or(FALLBACK_WIDTH);
        let content_width = (width - cell.margins.left - cell.margins.right).max(1.0);

        let measured = measure_top_level(&cell.content, content_width, measurer, warnings);
        let content_height: f64 = measured.iter().map(|b| b.height()).sum();
        let blocks = measured.into_iter().map(|b| b.content.payload).collect();

        cells.push(CellBuild {
            col_start: col_cursor,
            span,
            grid_span: cell.grid_span.max(1),
            vertical_merge: cell.vertical_merge,
            blocks,
            content_height,
            margins: cell.margins,
            shading: cell.shading,
            border_top: cell.border_top,
            border_right: cell.border_right,
            border_bottom: cell.border_bottom,
            border_left: cell.border_left,
        });
        col_cursor += span;
    }

    let height = cells
        .iter()
        .filter(|c| !matches!(c.vertical_merge, VerticalMergeRecord::Continue))
        .map(|c| c.content_height)
        .fold(0.0_f64, f64::max);
    let height = if height <= 0.0 { FALLBACK_HEIGHT } else { height };

    RowBuild { cells, height, cant_split: row.cant_split, is_header_row: row.is_header_row }
}

fn measure_table(
    elem: &StructuredElement,
    container_width: f64,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> MeasuredBlock {
    let table = match &elem.table {
        Some(t) => t,
        None => {
            warnings.push(format!("{}: table element with no table data", elem.source_uid));
            return measure_generic(elem, container_width);
        }
    };

    let col_widths = compute_column_widths(table, container_width);
    let grid_lines = {
        let mut lines = Vec::with_capacity(col_widths.len() + 1);
        let mut acc = 0.0;
        lines.push(0.0);
        for w in &col_widths {
            acc += w;
            lines.push(acc);
        }
        lines
    };

    let row_builds: Vec<RowBuild> = table.rows.iter().map(|r| build_row(r, &col_widths, measurer, warnings)).collect();
    let total_height: f64 = row_builds.iter().map(|r| r.height).sum();

    let mut out_rows: Vec<TableRow> = Vec::with_capacity(row_builds.len());
    let mut active: HashMap<usize, (usize, usize)> = HashMap::new();
    let mut cumulative_from_top = 0.0;

    for rb in &row_builds {
        let row_top = total_height - cumulative_from_top;
        let row_bottom = row_top - rb.height;
        let mut out_cells: Vec<TableCellLayout> = Vec::new();

        for cell in &rb.cells {
            let x: f64 = col_widths.get(..cell.col_start).map(|s| s.iter().sum()).unwrap_or(0.0);
            let width: f64 = col_widths
                .get(cell.col_start..(cell.col_start + cell.span).min(col_widths.len()))
                .map(|s| s.iter().sum())
                .unwrap_or(FALLBACK_WIDTH);
            let mut style = BoxStyle::default().with_padding(Spacing::new(0.0, cell.margins.right, 0.0, cell.margins.left));
            style.background_color = cell.shading.map(to_layout_color);
            style.border_top = cell.border_top.or(table.default_cell_border).map(to_border_style);
            style.border_right = cell.border_right.or(table.default_cell_border).map(to_border_style);
            style.border_bottom = cell.border_bottom.or(table.default_cell_border).map(to_border_style);
            style.border_left = cell.border_left.or(table.default_cell_border).map(to_border_style);

            match cell.vertical_merge {
                VerticalMergeRecord::Continue => {
                    if let Some(&(ri, ci)) = active.get(&cell.col_start) {
                        if let Some(row) = out_rows.get_mut(ri) {
                            if let Some(prev) = row.cells.get_mut(ci) {
                                prev.frame.height += rb.height;
                                prev.frame.y = row_bottom;
                            }
                        }
                    }
                }
                VerticalMergeRecord::Restart => {
                    out_cells.push(TableCellLayout {
                        frame: Rect::new(x, row_bottom, width, rb.height),
                        blocks: cell.blocks.clone(),
                        style,
                        grid_span: cell.grid_span,
                        vertical_merge: VerticalMerge::Restart,
                    });
                    active.insert(cell.col_start, (out_rows.len(), out_cells.len() - 1));
                }
                VerticalMergeRecord::None => {
                    out_cells.push(TableCellLayout {
                        frame: Rect::new(x, row_bottom, width, rb.height),
                        blocks: cell.blocks.clone(),
                        style,
                        grid_span: cell.grid_span,
                        vertical_merge: VerticalMerge::None,
                    });
                }
            }
        }

        out_rows.push(TableRow { cells: out_cells, height: rb.height, cant_split: rb.cant_split, is_header_row: rb.is_header_row });
        cumulative_from_top += rb.height;
    }

    let payload = BlockPayload::Table(TableLayout {
        frame: Rect::new(0.0, 0.0, container_width, total_height),
        rows: out_rows,
        grid_lines,
        style: elem.style.box_model.clone(),
        grid_border: table.default_cell_border.map(to_border_style),
    });

    MeasuredBlock {
        block_type: BlockKind::Table,
        content: BlockContent { payload, raw: raw_data(elem, Vec::new(), None) },
        style: elem.style.clone(),
        source_uid: elem.source_uid.clone(),
        page_break_before: elem.page_break_before,
        page_break_after: false,
        keep_with_next: elem.keep_with_next,
        keep_together: elem.keep_together,
        is_watermark: elem.is_watermark,
        footnote_refs: elem.footnote_refs.clone(),
        endnote_refs: elem.endnote_refs.clone(),
    }
}

fn measure_image(elem: &StructuredElement, container_width: f64, warnings: &mut Vec<String>) -> MeasuredBlock {
    let image = elem.image.as_ref();
    let (width, height) = match image {
        Some(img) => (
            layout_types::units::emu_to_points(img.width_emu as f64),
            layout_types::units::emu_to_points(img.height_emu as f64),
        ),
        None => {
            warnings.push(format!("{}: image element with no image data", elem.source_uid));
            (FALLBACK_WIDTH, FALLBACK_HEIGHT)
        }
    };
    let width = width.min(container_width).max(1.0);
    let height = height.max(1.0);

    let source = match image {
        Some(img) if img.is_vector_metafile => ImageSource::StreamKey(img.rel_id.clone()),
        Some(img) => ImageSource::Path(img.rel_id.clone()),
        None => ImageSource::Path(String::new()),
    };

    let payload = match ImageLayout::new(Rect::new(0.0, 0.0, width, height), source, true) {
        Ok(layout) => BlockPayload::Image(layout),
        Err(_) => BlockPayload::Generic(GenericLayout {
            frame: Rect::new(0.0, 0.0, FALLBACK_WIDTH, FALLBACK_HEIGHT),
            original_block_type: "image".to_string(),
            diagnostic: Some("image had non-positive dimensions".to_string()),
        }),
    };

    MeasuredBlock {
        block_type: BlockKind::Image,
        content: BlockContent { payload, raw: raw_data(elem, Vec::new(), None) },
        style: elem.style.clone(),
        source_uid: elem.source_uid.clone(),
        page_break_before: elem.page_break_before,
        page_break_after: false,
        keep_with_next: elem.keep_with_next,
        keep_together: true,
        is_watermark: elem.is_watermark,
        footnote_refs: elem.footnote_refs.clone(),
        endnote_refs: elem.endnote_refs.clone(),
    }
}

fn measure_textbox(
    elem: &StructuredElement,
    container_width: f64,
    measurer: &dyn TextMeasurer,
    warnings: &mut Vec<String>,
) -> MeasuredBlock {
    let width = elem.style.box_model.width.unwrap_or(container_width);
    let measured = measure_top_level(&elem.children, width, measurer, warnings);
    let height: f64 = measured.iter().map(|b| b.height()).sum();
    let blocks = measured.into_iter().map(|b| b.content.payload).collect();

    let payload = BlockPayload::Textbox(TextboxLayout {
        frame: Rect::new(0.0, 0.0, width, height.max(1.0)),
        blocks,
        style: elem.style.clone(),
    });

    MeasuredBlock {
        block_type: BlockKind::Textbox,
        content: BlockContent { payload, raw: raw_data(elem, Vec::new(), None) },
        style: elem.style.clone(),
        source_uid: elem.source_uid.clone(),
        page_break_before: elem.page_break_before,
        page_break_after: false,
        keep_with_next: elem.keep_with_next,
        keep_together: true,
        is_watermark: elem.is_watermark,
        footnote_refs: elem.footnote_refs.clone(),
        endnote_refs: elem.endnote_refs.clone(),
    }
}

// Overlay construction (anchored images/textboxes/shapes) is driven from
// the compiler side once a block's resolved anchor is known; this module
// only measures in-flow content. Re-exported here so callers that do need
// to build one (e.g. a watermark) don't need a second import path.
pub use layout_types::OverlayPayload;

pub fn anchor_overlay(frame: Rect, payload: OverlayPayload, is_watermark: bool, opacity: Option<f64>) -> OverlayBox {
    OverlayBox { frame, payload, is_watermark, opacity }
}
