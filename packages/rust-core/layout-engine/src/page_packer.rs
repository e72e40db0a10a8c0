//! Page packing: walks a flat block stream downward from the top of the
//! body region, splitting paragraphs between lines and tables between rows
//! when a block doesn't fit the remaining space on the current page.
//!
//! Headers, footers, and watermarks are not placed here — that's
//! `page_variator`/`pagination_manager`'s job, once this stage has decided
//! how many body pages exist and how tall each one's content is.

use layout_types::{
    BlockContent, BlockKind, BlockPayload, LayoutBlock, LayoutPage, Margins, PageConfig,
    ParagraphLayout, ParagraphLine, ParagraphMetadata, Rect, TableLayout, TableRow,
};

use crate::measure::MeasuredBlock;

const MIN_KEEP_LINES: usize = 2;

pub struct PaginationOutput {
    pub pages: Vec<LayoutPage>,
    pub warnings: Vec<String>,
}

/// Pack `blocks` onto pages of `page_config`'s size, honoring each block's
/// break/keep flags and splitting paragraphs/tables that overflow a page.
pub fn paginate(blocks: Vec<MeasuredBlock>, page_config: &PageConfig) -> PaginationOutput {
    let mut warnings = Vec::new();
    let margins = page_config.base_margins;
    let column_width = page_config.column_width();
    let top_y = page_config.page_size.height - margins.top;
    let bottom_y = margins.bottom;
    let usable_height = (top_y - bottom_y).max(0.0);

    let mut pages: Vec<LayoutPage> = vec![LayoutPage::new(1, page_config.page_size, margins)];
    let mut cursor_y = top_y;
    let mut sequence: u64 = 0;

    let mut pending: Vec<MeasuredBlock> = blocks.into_iter().rev().collect();

    while let Some(block) = pending.pop() {
        let page = pages.last().unwrap();
        let page_has_content = page.has_body_content();

        if block.page_break_before && page_has_content {
            new_page(&mut pages, &mut cursor_y, top_y, page_config, margins);
        }

        let remaining = cursor_y - bottom_y;
        let height = block.height();

        if height <= remaining || !page_has_content {
            if height > remaining && !page_has_content {
                // Doesn't even fit a fresh page: place it anyway, whole, and warn.
                warnings.push(format!(
                    "{}: content ({:.1}pt) exceeds the usable page height ({:.1}pt); placed anyway",
                    block.source_uid, height, usable_height
                ));
            }
            place_whole(&mut pages, &mut sequence, block, column_width, margins, cursor_y, height);
            cursor_y -= height;
            continue;
        }

        // Doesn't fit in the remaining space on a non-empty page: try to split.
        match try_split(block, remaining, column_width, &mut warnings) {
            Some((head, tail)) => {
                let head_height = head.height();
                place_whole(&mut pages, &mut sequence, head, column_width, margins, cursor_y, head_height);
                new_page(&mut pages, &mut cursor_y, top_y, page_config, margins);
                pending.push(tail);
            }
            None => {
                new_page(&mut pages, &mut cursor_y, top_y, page_config, margins);
                pending.push(block);
            }
        }
    }

    PaginationOutput { pages, warnings }
}

fn new_page(pages: &mut Vec<LayoutPage>, cursor_y: &mut f64, top_y: f64, page_config: &PageConfig, margins: Margins) {
    let number = pages.len() as u32 + 1;
    pages.push(LayoutPage::new(number, page_config.page_size, margins));
    *cursor_y = top_y;
}

fn place_whole(
    pages: &mut [LayoutPage],
    sequence: &mut u64,
    block: MeasuredBlock,
    column_width: f64,
    margins: Margins,
    cursor_y: f64,
    height: f64,
) {
    let page = pages.last_mut().unwrap();
    let page_number = page.number;
    *sequence += 1;
    page.blocks.push(LayoutBlock {
        frame: Rect::new(margins.left, cursor_y - height, column_width, height),
        block_type: block.block_type,
        content: block.content,
        style: block.style,
        page_number,
        source_uid: block.source_uid,
        sequence: *sequence,
        page_break_before: block.page_break_before,
        page_break_after: block.page_break_after,
        keep_with_next: block.keep_with_next,
        keep_together: block.keep_together,
        is_watermark: block.is_watermark,
    });
}

/// Try to split a block across the remaining space on the current page.
/// Returns `None` when the block can't be usefully split (it should move to
/// a fresh page whole instead).
fn try_split(
    block: MeasuredBlock,
    remaining_height: f64,
    column_width: f64,
    warnings: &mut Vec<String>,
) -> Option<(MeasuredBlock, MeasuredBlock)> {
    if block.keep_together {
        return None;
    }

    match block.content.payload {
        BlockPayload::Paragraph(p) => split_paragraph(block.block_type, block.content.raw, block.style, block.source_uid, block.keep_with_next, p, remaining_height, warnings),
        BlockPayload::Table(t) => split_table(block.block_type, block.content.raw, block.style, block.source_uid, block.keep_with_next, t, remaining_height, column_width, warnings),
        other => {
            let _ = other;
            None
        }
    }
}

fn split_paragraph(
    block_type: BlockKind,
    raw: layout_types::RawBlockData,
    style: layout_types::StyleDeclaration,
    source_uid: String,
    keep_with_next: bool,
    mut layout: ParagraphLayout,
    remaining_height: f64,
    warnings: &mut Vec<String>,
) -> Option<(MeasuredBlock, MeasuredBlock)> {
    let total_lines = layout.lines.len();
    if total_lines < 2 * MIN_KEEP_LINES {
        return None;
    }

    let mut consumed = 0.0;
    let mut fit_count = 0;
    for line in &layout.lines {
        if consumed + line.height > remaining_height {
            break;
        }
        consumed += line.height;
        fit_count += 1;
    }

    if fit_count < MIN_KEEP_LINES || total_lines - fit_count < MIN_KEEP_LINES {
        warnings.push(format!("{source_uid}: paragraph split would violate widow/orphan control; moved whole"));
        return None;
    }

    let tail_lines: Vec<ParagraphLine> = layout.lines.split_off(fit_count);

    let mut tail_baseline = 0.0;
    let tail_lines: Vec<ParagraphLine> = tail_lines
        .into_iter()
        .map(|mut l| {
            tail_baseline += l.height;
            l.baseline_y = tail_baseline;
            l
        })
        .collect();

    let head = MeasuredBlock {
        block_type,
        content: BlockContent {
            payload: BlockPayload::Paragraph(ParagraphLayout {
                lines: layout.lines,
                overlays: Vec::new(),
                style: layout.style.clone(),
                metadata: ParagraphMetadata { warnings: Vec::new(), kept_together: false },
            }),
            raw: raw.clone(),
        },
        style: style.clone(),
        source_uid: format!("{source_uid}#split-head"),
        page_break_before: false,
        page_break_after: false,
        keep_with_next: true,
        keep_together: false,
        is_watermark: false,
        footnote_refs: Vec::new(),
        endnote_refs: Vec::new(),
    };

    let tail = MeasuredBlock {
        block_type,
        content: BlockContent {
            payload: BlockPayload::Paragraph(ParagraphLayout {
                lines: tail_lines,
                overlays: layout.overlays,
                style: layout.style,
                metadata: layout.metadata,
            }),
            raw,
        },
        style,
        source_uid: format!("{source_uid}#split-tail"),
        page_break_before: false,
        page_break_after: false,
        keep_with_next,
        keep_together: false,
        is_watermark: false,
        footnote_refs: Vec::new(),
        endnote_refs: Vec::new(),
    };

    Some((head, tail))
}

fn split_table(
    block_type: BlockKind,
    raw: layout_types::RawBlockData,
    style: layout_types::StyleDeclaration,
    source_uid: String,
    keep_with_next: bool,
    table: TableLayout,
    remaining_height: f64,
    column_width: f64,
    warnings: &mut Vec<String>,
) -> Option<(MeasuredBlock, MeasuredBlock)> {
    let header_rows: Vec<TableRow> = table.rows.iter().filter(|r| r.is_header_row).cloned().collect();
    let header_height: f64 = header_rows.iter().map(|r| r.height).sum();

    let mut consumed = 0.0;
    let mut split_at = None;
    for (idx, row) in table.rows.iter().enumerate() {
        if row.cant_split && consumed + row.height > remaining_height {
            split_at = Some(idx);
            break;
        }
        if consumed + row.height > remaining_height {
            split_at = Some(idx);
            break;
        }
        consumed += row.height;
    }

    let split_at = match split_at {
        Some(idx) if idx > 0 => idx,
        _ => {
            warnings.push(format!("{source_uid}: table row doesn't fit the remaining page and has no prior row to split after"));
            return None;
        }
    };

    let mut head_rows = table.rows[..split_at].to_vec();
    let mut tail_rows: Vec<TableRow> = table.rows[split_at..].to_vec();

    if header_height > 0.0 && !tail_rows.first().map(|r| r.is_header_row).unwrap_or(false) {
        let mut with_header = header_rows.clone();
        with_header.extend(tail_rows);
        tail_rows = with_header;
    }

    relayout_row_frames(&mut head_rows);
    relayout_row_frames(&mut tail_rows);

    let head_height_total: f64 = head_rows.iter().map(|r| r.height).sum();
    let tail_height_total: f64 = tail_rows.iter().map(|r| r.height).sum();

    let head = MeasuredBlock {
        block_type,
        content: BlockContent {
            payload: BlockPayload::Table(TableLayout {
                frame: Rect::new(0.0, 0.0, column_width, head_height_total),
                rows: head_rows,
                grid_lines: table.grid_lines.clone(),
                style: table.style.clone(),
                grid_border: table.grid_border.clone(),
            }),
            raw: raw.clone(),
        },
        style: style.clone(),
        source_uid: format!("{source_uid}#split-head"),
        page_break_before: false,
        page_break_after: false,
        keep_with_next: true,
        keep_together: false,
        is_watermark: false,
        footnote_refs: Vec::new(),
        endnote_refs: Vec::new(),
    };

    let tail = MeasuredBlock {
        block_type,
        content: BlockContent {
            payload: BlockPayload::Table(TableLayout {
                frame: Rect::new(0.0, 0.0, column_width, tail_height_total),
                rows: tail_rows,
                grid_lines: table.grid_lines,
                style: table.style,
                grid_border: table.grid_border,
            }),
            raw,
        },
        style,
        source_uid: format!("{source_uid}#split-tail"),
        page_break_before: false,
        page_break_after: false,
        keep_with_next,
        keep_together: false,
        is_watermark: false,
        footnote_refs: Vec::new(),
        endnote_refs: Vec::new(),
    };

    Some((head, tail))
}

/// Recompute each row's local y from its (already-correct) height, top to
/// bottom, after a split has dropped some rows from the original table.
///
/// A vertically merged cell whose span crosses the split point keeps
/// whatever total height it already had; only its bottom edge moves to
/// track whichever row it now lands in last.
fn relayout_row_frames(rows: &mut [TableRow]) {
    let total: f64 = rows.iter().map(|r| r.height).sum();
    let mut from_top = 0.0;
    for row in rows.iter_mut() {
        let top = total - from_top;
        let bottom = top - row.height;
        for cell in row.cells.iter_mut() {
            cell.frame.y = bottom;
        }
        from_top += row.height;
    }
}
