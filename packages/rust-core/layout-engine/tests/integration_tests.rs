//! End-to-end pipeline tests: semantic tree -> structure -> measurement ->
//! pagination -> chrome -> validation.

use std::collections::HashMap;

use doc_model::{
    ElementKind, ElementRecord, EndnoteRecord, FootnoteRecord, MarginsRecord, NumberingData,
    PageOrientation, PageSizeRecord, ParsingError, RunRecord, SectionBreakType, SectionRecord,
    SemanticParser,
};
use layout_engine::{assemble_with_defaults, validate};
use style_resolver::StyleSheet;

struct FakeParser {
    body: ElementRecord,
    sections: Vec<SectionRecord>,
    headers: HashMap<String, ElementRecord>,
    footers: HashMap<String, ElementRecord>,
}

impl SemanticParser for FakeParser {
    fn parse_sections(&self) -> Result<Vec<SectionRecord>, ParsingError> {
        Ok(self.sections.clone())
    }
    fn parse_body(&self) -> Result<ElementRecord, ParsingError> {
        Ok(self.body.clone())
    }
    fn parse_header(&self, rel_id: &str) -> Result<ElementRecord, ParsingError> {
        Ok(self.headers.get(rel_id).cloned().unwrap_or_else(|| ElementRecord::generic("hdr", "")))
    }
    fn parse_footer(&self, rel_id: &str) -> Result<ElementRecord, ParsingError> {
        Ok(self.footers.get(rel_id).cloned().unwrap_or_else(|| ElementRecord::generic("ftr", "")))
    }
    fn parse_footnotes(&self) -> Result<Vec<FootnoteRecord>, ParsingError> {
        Ok(Vec::new())
    }
    fn parse_endnotes(&self) -> Result<Vec<EndnoteRecord>, ParsingError> {
        Ok(Vec::new())
    }
    fn numbering_data(&self) -> Result<NumberingData, ParsingError> {
        Ok(NumberingData::default())
    }
}

fn letter_section(headers: HashMap<String, String>, footers: HashMap<String, String>) -> SectionRecord {
    SectionRecord {
        page_size: PageSizeRecord { width: 612.0, height: 792.0, orientation: PageOrientation::Portrait },
        margins: MarginsRecord { top: 72.0, bottom: 72.0, left: 72.0, right: 72.0, header: 36.0, footer: 36.0 },
        columns: 1,
        column_spacing: 0.0,
        headers,
        footers,
        title_page: false,
        different_first_page: false,
        different_odd_even: false,
        break_type: None,
    }
}

fn paragraph(uid: &str, text: &str) -> ElementRecord {
    let mut e = ElementRecord::generic(uid, "");
    e.kind = ElementKind::Paragraph;
    e.runs = vec![RunRecord::text(text)];
    e
}

fn body_of(paragraphs: Vec<ElementRecord>) -> ElementRecord {
    let mut body = ElementRecord::generic("body", "");
    body.kind = ElementKind::Paragraph;
    body.children = paragraphs;
    body
}

#[test]
fn short_document_produces_a_single_valid_page() {
    let parser = FakeParser {
        body: body_of(vec![paragraph("p1", "hello world")]),
        sections: vec![letter_section(HashMap::new(), HashMap::new())],
        headers: HashMap::new(),
        footers: HashMap::new(),
    };
    let out = assemble_with_defaults(&parser, &StyleSheet::default()).expect("assembly should succeed");

    assert_eq!(out.layout.page_count(), 1);
    let report = validate(&out.layout);
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn long_document_paginates_and_stays_valid() {
    let paragraphs = (0..300)
        .map(|i| paragraph(&format!("p{i}"), "a reasonably long line of body text that takes up real space on a page"))
        .collect();
    let parser = FakeParser {
        body: body_of(paragraphs),
        sections: vec![letter_section(HashMap::new(), HashMap::new())],
        headers: HashMap::new(),
        footers: HashMap::new(),
    };
    let out = assemble_with_defaults(&parser, &StyleSheet::default()).expect("assembly should succeed");

    assert!(out.layout.page_count() > 1);
    assert!(out.layout.page_numbers_dense());
    let report = validate(&out.layout);
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn default_header_and_footer_are_stamped_onto_every_page() {
    let mut headers = HashMap::new();
    headers.insert("default".to_string(), "hdr-rel".to_string());
    let mut footers = HashMap::new();
    footers.insert("default".to_string(), "ftr-rel".to_string());

    let mut header_elements = HashMap::new();
    header_elements.insert("hdr-rel".to_string(), body_of(vec![paragraph("h1", "Company Name")]));
    let mut footer_elements = HashMap::new();
    footer_elements.insert("ftr-rel".to_string(), body_of(vec![paragraph("f1", "Confidential")]));

    let parser = FakeParser {
        body: body_of(vec![paragraph("p1", "hello world")]),
        sections: vec![letter_section(headers, footers)],
        headers: header_elements,
        footers: footer_elements,
    };
    let out = assemble_with_defaults(&parser, &StyleSheet::default()).expect("assembly should succeed");

    let page = &out.layout.pages[0];
    assert!(page.blocks.iter().any(|b| b.is_chrome()));
    let report = validate(&out.layout);
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn title_page_section_suppresses_chrome_on_first_page_only() {
    let mut section = letter_section(HashMap::new(), HashMap::new());
    section.title_page = true;

    let paragraphs = (0..300)
        .map(|i| paragraph(&format!("p{i}"), "a reasonably long line of body text that takes up real space on a page"))
        .collect();
    let parser = FakeParser {
        body: body_of(paragraphs),
        sections: vec![section],
        headers: HashMap::new(),
        footers: HashMap::new(),
    };
    let out = assemble_with_defaults(&parser, &StyleSheet::default()).expect("assembly should succeed");

    assert!(out.layout.pages.len() > 1);
    assert!(out.layout.pages[0].skip_headers_footers);
    assert!(!out.layout.pages[1].skip_headers_footers);
}

#[test]
fn multiple_sections_renumber_pages_continuously() {
    let mut section_break = ElementRecord::generic("sbreak", "");
    section_break.kind = ElementKind::SectionBreak;

    let mut body = ElementRecord::generic("body", "");
    body.kind = ElementKind::Paragraph;
    body.children = vec![paragraph("p1", "first section body"), section_break, paragraph("p2", "second section body")];

    let mut second_section = letter_section(HashMap::new(), HashMap::new());
    second_section.break_type = Some(SectionBreakType::NextPage);

    let parser = FakeParser {
        body,
        sections: vec![letter_section(HashMap::new(), HashMap::new()), second_section],
        headers: HashMap::new(),
        footers: HashMap::new(),
    };
    let out = assemble_with_defaults(&parser, &StyleSheet::default()).expect("assembly should succeed");

    assert_eq!(out.layout.page_count(), 2);
    assert!(out.layout.page_numbers_dense());
    let numbers: Vec<u32> = out.layout.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, (1..=numbers.len() as u32).collect::<Vec<_>>());
}
