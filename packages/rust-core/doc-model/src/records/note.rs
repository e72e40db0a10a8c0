//! Footnote / endnote records

use serde::{Deserialize, Serialize};

use super::element::ElementRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootnoteRecord {
    pub id: i64,
    pub content: ElementRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndnoteRecord {
    pub id: i64,
    pub content: ElementRecord,
}
