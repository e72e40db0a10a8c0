//! Section properties as produced by `parse_sections`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSizeRecord {
    pub width: f64,
    pub height: f64,
    pub orientation: PageOrientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginsRecord {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub header: f64,
    pub footer: f64,
}

/// How a section transitions from the previous one — carried on the
/// paragraph whose `section_break` introduces it.
///
/// Resolved per WordprocessingML semantics: `continuous` never forces a
/// page; `next_page` always starts a new page; `even_page`/`odd_page`
/// insert a blank page only when the next page's parity doesn't already
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SectionBreakType {
    Continuous,
    NextPage,
    EvenPage,
    OddPage,
}

/// One section's properties: page geometry, columns, and the header/footer
/// relationship ids it binds per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub page_size: PageSizeRecord,
    pub margins: MarginsRecord,
    pub columns: u32,
    pub column_spacing: f64,
    /// variant name ("default"/"first"/"even"/"odd") → header relationship id
    pub headers: HashMap<String, String>,
    /// variant name → footer relationship id
    pub footers: HashMap<String, String>,
    pub title_page: bool,
    pub different_first_page: bool,
    pub different_odd_even: bool,
    /// `None` for the document's first section, which has no preceding break.
    pub break_type: Option<SectionBreakType>,
}
