//! Text layout and wrapping tests
//!
//! Tests for the word-wrapping and tab-stop helpers that `measure` builds
//! paragraph line-breaking on top of.

use doc_model::{TabStop, TabStopAlignment};
use layout_engine::{is_trailing_alignment, next_tab_stop, wrap_text};
use layout_types::EstimatedTextMeasurer;

#[test]
fn wrap_text_single_line_fits() {
    let lines = wrap_text("Hello", 200.0, 10.0, "Helvetica", &EstimatedTextMeasurer);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "Hello");
}

#[test]
fn wrap_text_splits_long_text_into_multiple_lines() {
    let text = "This is a long line of text that should wrap to multiple lines";
    let lines = wrap_text(text, 100.0, 10.0, "Helvetica", &EstimatedTextMeasurer);
    assert!(lines.len() > 1);
}

#[test]
fn wrap_text_empty_string_yields_one_empty_line() {
    let lines = wrap_text("", 100.0, 10.0, "Helvetica", &EstimatedTextMeasurer);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "");
}

#[test]
fn wrap_text_keeps_date_ranges_together() {
    let lines = wrap_text("2019 - 2022", 1000.0, 10.0, "Helvetica", &EstimatedTextMeasurer);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "2019 - 2022");
}

#[test]
fn next_tab_stop_uses_first_stop_past_cursor() {
    let stops = vec![TabStop { position: 100.0, alignment: TabStopAlignment::Left }];
    let x = next_tab_stop(40.0, &stops);
    assert_eq!(x, 100.0);
}

#[test]
fn next_tab_stop_falls_back_to_default_interval_past_last_stop() {
    let x = next_tab_stop(10.0, &[]);
    assert_eq!(x, layout_engine::DEFAULT_TAB_INTERVAL);
}

#[test]
fn trailing_alignment_detects_right_aligned_stop() {
    let stops = vec![TabStop { position: 300.0, alignment: TabStopAlignment::Right }];
    assert!(is_trailing_alignment(&stops, 300.0));
    assert!(!is_trailing_alignment(&stops, 50.0));
}
