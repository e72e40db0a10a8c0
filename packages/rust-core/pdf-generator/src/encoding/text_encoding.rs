//! Text encoding utilities for PDF content streams
//!
//! Provides the two text-showing encodings this crate uses: legacy PDF
//! literal strings (for Standard-14 fonts, whose built-in encoding is
//! WinAnsi/ASCII) and `FEFF`-prefixed UTF-16BE hex strings (for any font
//! whose glyphs are addressed by Unicode code point rather than a fixed
//! 8-bit encoding).

/// Escape special characters in PDF strings per PDF specification
///
/// Escapes: backslash, parentheses, newline, carriage return, tab, and control characters
///
/// # Note
/// For literal `(text) Tj` strings only. For hex-string text runs, use
/// [`encode_utf16be_hex`] instead.
///
/// # Examples
/// ```
/// use pdf_generator::encoding::escape_pdf_string;
///
/// assert_eq!(escape_pdf_string("Hello"), "Hello");
/// assert_eq!(escape_pdf_string("Hello (world)"), "Hello \\(world\\)");
/// assert_eq!(escape_pdf_string("C:\\path"), "C:\\\\path");
/// ```
pub fn escape_pdf_string(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '\\' => vec!['\\', '\\'],
            '(' => vec!['\\', '('],
            ')' => vec!['\\', ')'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c if c.is_control() => format!("\\{:03o}", c as u8).chars().collect(),
            c => vec![c],
        })
        .collect()
}

/// Encode text as a `FEFF`-prefixed UTF-16BE hex string for use in `<hex>
/// Tj` operators.
///
/// Each UTF-16 code unit is written as 4 hex digits; characters outside the
/// Basic Multilingual Plane are split into a surrogate pair by
/// `str::encode_utf16`, each half emitted as its own 4-digit group. The
/// leading `FEFF` is the UTF-16BE byte-order mark PDF readers expect at the
/// start of a hex string so they don't mistake it for PDFDocEncoding.
///
/// # Examples
/// ```
/// use pdf_generator::encoding::encode_utf16be_hex;
///
/// let encoded = encode_utf16be_hex("AB");
/// assert_eq!(encoded, "FEFF00410042");
/// ```
pub fn encode_utf16be_hex(text: &str) -> String {
    let mut out = String::with_capacity(4 + text.len() * 4);
    out.push_str("FEFF");
    for unit in text.encode_utf16() {
        out.push_str(&format!("{:04X}", unit));
    }
    out
}
