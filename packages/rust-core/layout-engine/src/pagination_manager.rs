//! Pagination Manager: injects each page's resolved header/footer chrome
//! into its block list, skipping pages that opt out (title pages) and
//! flagging any chrome that overlaps body content as a non-fatal warning.

use layout_types::{LayoutPage, PageVariant, Rect};

pub struct ManagerOutput {
    pub warnings: Vec<String>,
}

/// Stamp `variant`'s header/footer placements onto `page` (unless it opts
/// out), renumbering them to `page.number` and continuing the page's own
/// sequence counter.
pub fn apply_variant(page: &mut LayoutPage, variant: &PageVariant) -> ManagerOutput {
    let mut warnings = Vec::new();

    if page.skip_headers_footers {
        return ManagerOutput { warnings };
    }

    let mut next_sequence = page.blocks.iter().map(|b| b.sequence).max().unwrap_or(0) + 1;

    let body_frames: Vec<Rect> = page
        .blocks
        .iter()
        .filter(|b| !b.is_chrome())
        .map(|b| b.frame)
        .collect();

    for placement in variant.header_placements.iter().chain(variant.footer_placements.iter()) {
        let mut block = placement.clone();
        block.page_number = page.number;
        block.sequence = next_sequence;
        next_sequence += 1;

        if body_frames.iter().any(|f| f.overlaps(&block.frame)) {
            warnings.push(format!(
                "page {}: chrome block {} overlaps body content",
                page.number, block.source_uid
            ));
        }

        page.blocks.push(block);
    }

    ManagerOutput { warnings }
}
