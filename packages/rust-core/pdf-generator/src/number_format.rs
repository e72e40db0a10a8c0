//! PDF number formatting.
//!
//! Coordinates, widths, and opacities all pass through here before they're
//! written into a content stream. Integers print as integers; floats print
//! with up to four fractional digits, trailing zeros and a trailing `.`
//! trimmed. No locale-sensitive formatting — PDF content streams are not
//! locale-aware and a comma decimal separator would corrupt the operand.

/// Format a number for use as a PDF content-stream operand.
///
/// ```
/// use pdf_generator::number_format::format_number;
/// assert_eq!(format_number(12.0), "12");
/// assert_eq!(format_number(12.5), "12.5");
/// assert_eq!(format_number(12.34567), "12.3457");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.00001), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let rounded = format!("{:.4}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join a sequence of numbers with a single space, each formatted via
/// [`format_number`]. Convenience for building matrix/array operands like
/// `cm`'s six-number argument list.
pub fn format_numbers(values: &[f64]) -> String {
    values.iter().map(|v| format_number(*v)).collect::<Vec<_>>().join(" ")
}
