//! Paragraph-level formatting carried on an `ElementRecord`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TabStopAlignment {
    Left,
    Center,
    Right,
    Decimal,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    pub position: f64,
    pub alignment: TabStopAlignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineRule {
    Auto,
    Exact,
    AtLeast,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingRecord {
    pub before: f64,
    pub after: f64,
    pub line: Option<f64>,
    pub line_rule: LineRule,
}

impl Default for SpacingRecord {
    fn default() -> Self {
        Self {
            before: 0.0,
            after: 0.0,
            line: None,
            line_rule: LineRule::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndentRecord {
    pub first_line: f64,
    pub hanging: f64,
    pub left: f64,
    pub right: f64,
}

/// A resolved hyperlink span within a paragraph's run sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperlinkRecord {
    pub rel_id: Option<String>,
    pub anchor: Option<String>,
    pub run_start: usize,
    pub run_end: usize,
}
