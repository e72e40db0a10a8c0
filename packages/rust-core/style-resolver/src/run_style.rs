//! Run-level style resolution
//!
//! Applies a `RunRecord`'s direct character formatting on top of the
//! paragraph's cascaded `TextStyle`, producing the style a single run is
//! rendered with.

use doc_model::RunRecord;
use layout_types::{Color, FontStyle, FontWeight, TextDecoration, TextStyle};

/// Resolve the effective text style for one run, given the paragraph-level
/// style it cascades from.
///
/// # Example
/// ```
/// use style_resolver::resolve_run_style;
/// use doc_model::RunRecord;
/// use layout_types::{TextStyle, FontWeight};
///
/// let base = TextStyle::new();
/// let mut run = RunRecord::text("hello");
/// run.bold = true;
///
/// let resolved = resolve_run_style(&run, &base);
/// assert_eq!(resolved.font_weight, Some(FontWeight::Bold));
/// ```
pub fn resolve_run_style(run: &RunRecord, base: &TextStyle) -> TextStyle {
    let mut resolved = base.clone();

    if run.bold {
        resolved.font_weight = Some(FontWeight::Bold);
    }
    if run.italic {
        resolved.font_style = Some(FontStyle::Italic);
    }
    if let Some(ref family) = run.font_family {
        resolved.font_family = Some(family.clone());
    }
    if let Some(size) = run.font_size {
        resolved.font_size = Some(size);
    }
    if let Some(color) = run.color {
        resolved.color = Some(Color::rgb(color.r, color.g, color.b));
    }

    resolved.text_decoration = match (run.underline, run.strikethrough) {
        (true, true) => Some(TextDecoration::UnderlineStrikethrough),
        (true, false) => Some(TextDecoration::Underline),
        (false, true) => Some(TextDecoration::Strikethrough),
        (false, false) => resolved.text_decoration,
    };

    resolved
}
