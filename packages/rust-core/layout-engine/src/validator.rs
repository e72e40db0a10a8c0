//! Layout Validator: a battery of structural sanity checks over a finished
//! `UnifiedLayout`. Not part of the assembly pipeline itself — callers (in
//! practice, the test suite and any caller wanting a second opinion before
//! handing a layout to the PDF compiler) invoke this separately.

use layout_types::UnifiedLayout;

pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn validate(layout: &UnifiedLayout) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for page in &layout.pages {
        for block in &page.blocks {
            if block.frame.width <= 0.0 || block.frame.height <= 0.0 {
                errors.push(format!(
                    "page {}: block {} has non-positive dimensions ({:.1} x {:.1})",
                    page.number, block.source_uid, block.frame.width, block.frame.height
                ));
            }
            if !block.frame.within(page.size) {
                errors.push(format!(
                    "page {}: block {} frame extends outside the page",
                    page.number, block.source_uid
                ));
            }
            if let Some(margin) = block.style.box_model.margin {
                if margin.top < 0.0 || margin.right < 0.0 || margin.bottom < 0.0 || margin.left < 0.0 {
                    errors.push(format!("page {}: block {} has negative margin", page.number, block.source_uid));
                }
            }
            if let Some(padding) = block.style.box_model.padding {
                if padding.top < 0.0 || padding.right < 0.0 || padding.bottom < 0.0 || padding.left < 0.0 {
                    errors.push(format!("page {}: block {} has negative padding", page.number, block.source_uid));
                }
            }
        }

        let non_chrome: Vec<_> = page.blocks.iter().filter(|b| !b.is_chrome() && !b.is_watermark).collect();
        for i in 0..non_chrome.len() {
            for j in (i + 1)..non_chrome.len() {
                if non_chrome[i].frame.overlaps(&non_chrome[j].frame) {
                    errors.push(format!(
                        "page {}: blocks {} and {} overlap",
                        page.number, non_chrome[i].source_uid, non_chrome[j].source_uid
                    ));
                }
            }
        }

        if page.number > 1 && !page.has_body_content() {
            warnings.push(format!("page {}: no non-chrome content", page.number));
        }
    }

    if !layout.page_numbers_dense() {
        errors.push("page numbers are not dense starting at 1".to_string());
    }

    ValidationReport { is_valid: errors.is_empty(), errors, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_types::{
        BlockContent, BlockKind, BlockPayload, GenericLayout, LayoutPage, Margins, RawBlockData,
        Rect, Size, StyleDeclaration,
    };

    fn block(uid: &str, frame: Rect) -> layout_types::LayoutBlock {
        layout_types::LayoutBlock {
            frame,
            block_type: BlockKind::Paragraph,
            content: BlockContent {
                payload: BlockPayload::Generic(GenericLayout { frame, original_block_type: "p".to_string(), diagnostic: None }),
                raw: RawBlockData {
                    style: StyleDeclaration::default(),
                    runs: Vec::new(),
                    numbering: None,
                    marker: String::new(),
                    indent: Default::default(),
                    spacing: Default::default(),
                    hyperlinks: Vec::new(),
                    section_properties: None,
                    effective_format: Default::default(),
                },
            },
            style: StyleDeclaration::default(),
            page_number: 1,
            source_uid: uid.to_string(),
            sequence: 1,
            page_break_before: false,
            page_break_after: false,
            keep_with_next: false,
            keep_together: false,
            is_watermark: false,
        }
    }

    #[test]
    fn well_formed_single_page_layout_is_valid() {
        let mut page = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        page.blocks.push(block("p1", Rect::new(72.0, 700.0, 400.0, 20.0)));
        let layout = UnifiedLayout { pages: vec![page], current_page: 0 };
        let report = validate(&layout);
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn out_of_page_frame_is_an_error() {
        let mut page = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        page.blocks.push(block("p1", Rect::new(72.0, 700.0, 10000.0, 20.0)));
        let layout = UnifiedLayout { pages: vec![page], current_page: 0 };
        let report = validate(&layout);
        assert!(!report.is_valid);
    }

    #[test]
    fn overlapping_body_blocks_are_an_error() {
        let mut page = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        page.blocks.push(block("p1", Rect::new(72.0, 700.0, 400.0, 40.0)));
        page.blocks.push(block("p2", Rect::new(72.0, 710.0, 400.0, 40.0)));
        let layout = UnifiedLayout { pages: vec![page], current_page: 0 };
        let report = validate(&layout);
        assert!(!report.is_valid);
    }

    #[test]
    fn empty_non_first_page_is_only_a_warning() {
        let page1 = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        let page2 = LayoutPage::new(2, Size::LETTER, Margins::ONE_INCH);
        let layout = UnifiedLayout { pages: vec![page1, page2], current_page: 0 };
        let report = validate(&layout);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
    }
}
