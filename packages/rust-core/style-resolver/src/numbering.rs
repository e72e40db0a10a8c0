//! List numbering resolution
//!
//! Resolves a paragraph's `NumberingRef` against a document's `NumberingData`
//! into a rendered marker, maintaining the running per-level counters a
//! single document-wide pass needs.

use std::collections::HashMap;

use doc_model::{NumberingData, NumberingFormat, NumberingLevel, NumberingRef};
use layout_types::{ListType, NumberingInfo};

/// Tracks per-`(num_id, level)` counters across a document walk.
///
/// Starting a paragraph at level N resets every counter at a level deeper
/// than N, per WordprocessingML list semantics — a level-1 item breaks any
/// in-progress level-2+ sub-list.
pub struct NumberingResolver {
    data: NumberingData,
    counters: HashMap<(i64, u8), i64>,
}

impl NumberingResolver {
    pub fn new(data: NumberingData) -> Self {
        Self {
            data,
            counters: HashMap::new(),
        }
    }

    /// Resolve one paragraph's numbering reference, advancing its counter
    /// and resetting any deeper ones. Returns `None` if the reference points
    /// at a numbering definition or level the document doesn't declare.
    pub fn resolve(&mut self, num_ref: &NumberingRef) -> Option<NumberingInfo> {
        let instance = self.data.numbering_instances.get(&num_ref.num_id)?;
        let abstract_num = self
            .data
            .abstract_numberings
            .get(&instance.abstract_num_id)?;
        let level = abstract_num.levels.get(&num_ref.level)?.clone();

        self.counters
            .retain(|(id, lvl), _| !(*id == num_ref.num_id && *lvl > num_ref.level));

        let counter = self
            .counters
            .entry((num_ref.num_id, num_ref.level))
            .or_insert(level.start - 1);
        *counter += 1;
        let current = *counter;

        let marker_text = if matches!(level.format, NumberingFormat::Bullet) {
            level
                .bullet_char
                .map(|c| c.to_string())
                .unwrap_or_else(|| "\u{2022}".to_string())
        } else {
            render_template(&level, &self.counters, num_ref, current)
        };

        Some(NumberingInfo {
            num_id: Some(num_ref.num_id),
            level: Some(num_ref.level),
            list_type: Some(map_list_type(level.format)),
            marker_text,
            number_position: level.number_position,
            text_position: level.text_position,
        })
    }
}

/// Substitute `%1`, `%2`, ... placeholders in a level's template with the
/// running counters at each ancestor level, formatted per that level's
/// own numbering format (WordprocessingML allows e.g. `1.a.i`-style mixes).
fn render_template(
    level: &NumberingLevel,
    counters: &HashMap<(i64, u8), i64>,
    num_ref: &NumberingRef,
    current: i64,
) -> String {
    let mut out = String::new();
    let mut chars = level.text_template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                let ancestor_level = (digit as u8).saturating_sub(1);
                let value = if ancestor_level == num_ref.level {
                    current
                } else {
                    *counters
                        .get(&(num_ref.num_id, ancestor_level))
                        .unwrap_or(&1)
                };
                out.push_str(&format_number(level.format, value));
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn format_number(format: NumberingFormat, n: i64) -> String {
    match format {
        NumberingFormat::Decimal => n.to_string(),
        NumberingFormat::UpperRoman => to_roman(n).to_uppercase(),
        NumberingFormat::LowerRoman => to_roman(n),
        NumberingFormat::UpperLetter => to_alpha(n).to_uppercase(),
        NumberingFormat::LowerLetter => to_alpha(n),
        NumberingFormat::Bullet => String::new(),
    }
}

fn map_list_type(format: NumberingFormat) -> ListType {
    match format {
        NumberingFormat::Decimal => ListType::Decimal,
        NumberingFormat::UpperRoman => ListType::UpperRoman,
        NumberingFormat::LowerRoman => ListType::LowerRoman,
        NumberingFormat::UpperLetter => ListType::UpperAlpha,
        NumberingFormat::LowerLetter => ListType::LowerAlpha,
        NumberingFormat::Bullet => ListType::Bullet,
    }
}

/// Lowercase roman numeral for `n >= 1`; falls back to decimal for `n <= 0`.
fn to_roman(n: i64) -> String {
    if n <= 0 {
        return n.to_string();
    }
    const TABLE: &[(i64, &str)] = &[
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut remaining = n;
    let mut out = String::new();
    for &(value, symbol) in TABLE {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

/// Lowercase alphabetic marker for `n >= 1`: a, b, ..., z, aa, ab, ...
fn to_alpha(n: i64) -> String {
    if n <= 0 {
        return n.to_string();
    }
    let mut remaining = n;
    let mut letters = Vec::new();
    while remaining > 0 {
        let rem = (remaining - 1) % 26;
        letters.push((b'a' + rem as u8) as char);
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{AbstractNumbering, NumberingInstance};

    fn single_level_data(format: NumberingFormat, template: &str) -> NumberingData {
        let mut levels = HashMap::new();
        levels.insert(
            0,
            NumberingLevel {
                format,
                text_template: template.to_string(),
                start: 1,
                number_position: 18.0,
                text_position: 36.0,
                bullet_char: None,
            },
        );
        let mut abstract_numberings = HashMap::new();
        abstract_numberings.insert(0, AbstractNumbering { levels });
        let mut numbering_instances = HashMap::new();
        numbering_instances.insert(1, NumberingInstance { abstract_num_id: 0 });
        NumberingData {
            numbering_instances,
            abstract_numberings,
        }
    }

    #[test]
    fn decimal_list_increments() {
        let mut resolver = NumberingResolver::new(single_level_data(
            NumberingFormat::Decimal,
            "%1.",
        ));
        let num_ref = NumberingRef { num_id: 1, level: 0 };
        assert_eq!(resolver.resolve(&num_ref).unwrap().marker_text, "1.");
        assert_eq!(resolver.resolve(&num_ref).unwrap().marker_text, "2.");
        assert_eq!(resolver.resolve(&num_ref).unwrap().marker_text, "3.");
    }

    #[test]
    fn sub_level_resets_on_parent_restart() {
        let mut levels = HashMap::new();
        levels.insert(
            0,
            NumberingLevel {
                format: NumberingFormat::Decimal,
                text_template: "%1.".to_string(),
                start: 1,
                number_position: 18.0,
                text_position: 36.0,
                bullet_char: None,
            },
        );
        levels.insert(
            1,
            NumberingLevel {
                format: NumberingFormat::LowerLetter,
                text_template: "%2.".to_string(),
                start: 1,
                number_position: 36.0,
                text_position: 54.0,
                bullet_char: None,
            },
        );
        let mut abstract_numberings = HashMap::new();
        abstract_numberings.insert(0, AbstractNumbering { levels });
        let mut numbering_instances = HashMap::new();
        numbering_instances.insert(1, NumberingInstance { abstract_num_id: 0 });
        let mut resolver = NumberingResolver::new(NumberingData {
            numbering_instances,
            abstract_numberings,
        });

        let level0 = NumberingRef { num_id: 1, level: 0 };
        let level1 = NumberingRef { num_id: 1, level: 1 };

        assert_eq!(resolver.resolve(&level0).unwrap().marker_text, "1.");
        assert_eq!(resolver.resolve(&level1).unwrap().marker_text, "a.");
        assert_eq!(resolver.resolve(&level1).unwrap().marker_text, "b.");
        // restarting at level 0 resets the level-1 counter
        assert_eq!(resolver.resolve(&level0).unwrap().marker_text, "2.");
        assert_eq!(resolver.resolve(&level1).unwrap().marker_text, "a.");
    }

    #[test]
    fn roman_and_alpha_formatting() {
        assert_eq!(to_roman(4), "iv");
        assert_eq!(to_roman(9), "ix");
        assert_eq!(to_roman(14), "xiv");
        assert_eq!(to_alpha(1), "a");
        assert_eq!(to_alpha(26), "z");
        assert_eq!(to_alpha(27), "aa");
    }

    #[test]
    fn unknown_reference_returns_none() {
        let mut resolver = NumberingResolver::new(NumberingData::default());
        let num_ref = NumberingRef { num_id: 99, level: 0 };
        assert!(resolver.resolve(&num_ref).is_none());
    }
}
