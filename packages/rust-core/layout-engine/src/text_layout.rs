//! Text layout - wrapping, measurement, and tab-stop advancement
//!
//! Hyphenation is out of scope: WordprocessingML documents carry explicit
//! `<w:br/>` line breaks rather than relying on hyphenated reflow, and the
//! source documents this pipeline targets are pre-authored rather than
//! free-flowing prose.

use doc_model::{TabStop, TabStopAlignment};
use layout_types::TextMeasurer;

/// Default tab advance when a paragraph defines no explicit `TabStop`
/// covering the current position, per common word-processor behavior.
pub const DEFAULT_TAB_INTERVAL: f64 = 36.0;

pub(crate) fn calculate_text_width(
    text: &str,
    font_size: f64,
    font_name: &str,
    measurer: &dyn TextMeasurer,
) -> f64 {
    measurer.measure_text(text, font_size, font_name)
}

/// Combine words with intermediate punctuation to prevent orphan separators
///
/// Handles patterns like "1997 – 2002" to prevent breaking into "1997 –" | "2002"
///
/// Returns `(combined_word, words_consumed)` where `words_consumed` includes
/// the current word.
fn combine_words_with_punctuation(words: &[&str], index: usize) -> (String, usize) {
    let word = words[index];

    if index + 2 < words.len() {
        let next = words[index + 1];
        let char_count = next.chars().count();
        if char_count <= 2 && (next.contains('–') || next.contains('—') || next.contains('-')) {
            let combined = format!("{} {} {}", word, next, words[index + 2]);
            return (combined, 3);
        }
    }

    (word.to_string(), 1)
}

/// Greedily wrap `text` into lines no wider than `max_width`. Long words that
/// don't fit even alone on a line are kept intact (overflow rather than
/// split) since hyphenation is out of scope.
pub fn wrap_text(
    text: &str,
    max_width: f64,
    font_size: f64,
    font_name: &str,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut current_line = String::new();
    let mut i = 0;

    while i < words.len() {
        let (word, consumed) = combine_words_with_punctuation(&words, i);
        i += consumed;

        let test_line = if current_line.is_empty() {
            word.clone()
        } else {
            format!("{} {}", current_line, word)
        };

        let test_width = calculate_text_width(&test_line, font_size, font_name, measurer);

        if test_width > max_width && !current_line.is_empty() {
            lines.push(current_line.trim().to_string());
            current_line = word;
        } else {
            current_line = test_line;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.trim().to_string());
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Advance `current_x` to the next tab stop at or after it. Falls back to
/// `DEFAULT_TAB_INTERVAL`-spaced stops when the paragraph declares none past
/// the current position. Only left/center/right/decimal/bar alignment tags
/// are preserved on the value; positioning logic treats all of them as a
/// left-aligned jump, since the tab's own content width isn't known until
/// the item following it is measured.
pub fn next_tab_stop(current_x: f64, tab_stops: &[TabStop]) -> f64 {
    let mut candidates: Vec<&TabStop> = tab_stops.iter().filter(|t| t.position > current_x).collect();
    candidates.sort_by(|a, b| a.position.partial_cmp(&b.position).unwrap());

    match candidates.first() {
        Some(stop) => stop.position,
        None => {
            let steps = (current_x / DEFAULT_TAB_INTERVAL).floor() + 1.0;
            steps * DEFAULT_TAB_INTERVAL
        }
    }
}

/// Whether a tab stop requests right-to-left content positioning, kept
/// alongside `next_tab_stop` so callers that do want alignment-aware
/// placement (decimal tab columns) have somewhere to look it up.
pub fn is_trailing_alignment(tab_stops: &[TabStop], position: f64) -> bool {
    tab_stops
        .iter()
        .find(|t| (t.position - position).abs() < 0.01)
        .map(|t| matches!(t.alignment, TabStopAlignment::Right | TabStopAlignment::Decimal))
        .unwrap_or(false)
}
