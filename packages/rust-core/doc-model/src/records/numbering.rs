//! List numbering definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Marker format for a numbering level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumberingFormat {
    Decimal,
    UpperRoman,
    LowerRoman,
    UpperLetter,
    LowerLetter,
    Bullet,
}

/// One level of an abstract numbering definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingLevel {
    pub format: NumberingFormat,
    /// Marker template, e.g. `"%1."` or `"%1.%2"` — `%N` placeholders refer
    /// to the running counter at level N (1-based).
    pub text_template: String,
    pub start: i64,
    /// Indent where the marker glyph itself is placed.
    pub number_position: f64,
    /// Indent where the paragraph text starts (after the marker).
    pub text_position: f64,
    pub bullet_char: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbstractNumbering {
    pub levels: HashMap<u8, NumberingLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingInstance {
    pub abstract_num_id: i64,
}

/// `numbering_data()` return type: the full set of numbering definitions a
/// document can reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingData {
    pub numbering_instances: HashMap<i64, NumberingInstance>,
    pub abstract_numberings: HashMap<i64, AbstractNumbering>,
}

/// A paragraph's reference into `NumberingData`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberingRef {
    pub num_id: i64,
    pub level: u8,
}
