//! TrueType Font Table Parsing
//!
//! Parses TrueType font tables to extract glyph metrics for PDF embedding.

use ttf_parser::{Face, GlyphId};

/// Extracts glyph widths scaled to PDF's 1000-unit text space
///
/// Returns a vector where the index is the glyph ID and the value is the
/// advance width scaled to PDF's coordinate system. These scaled widths
/// are used in the PDF CIDFont's W (widths) array.
///
/// # Arguments
/// * `face` - Parsed TrueType font face
///
/// # Returns
/// Vector of advance widths scaled to PDF's 1000-unit text space
///
/// # PDF/A-1b Compliance (ISO 19005-1:2005 Clause 6.3.6)
/// The PDF specification (ISO 32000-1 Section 9.7.4.3) requires that CIDFont
/// W array widths be expressed in a coordinate system where **1000 units equal
/// 1 unit in text space**. This is NOT the same as font units from the hmtx table.
///
/// TrueType fonts define glyphs in their own coordinate system with a scale
/// specified by units_per_em (from the 'head' table). Common values:
/// - 1000 units per em (some fonts)
/// - 1024 units per em (some fonts)
/// - 2048 units per em (most modern fonts like Roboto, DejaVu)
///
/// # Scaling Formula
/// ```text
/// pdf_width = (font_width * 1000) / units_per_em
/// ```
///
/// # Example
/// For Roboto Regular (units_per_em = 2048):
/// - Glyph 'a' has advance width = 1138 (font units)
/// - Scaled width = (1138 * 1000) / 2048 = 555
/// - W array contains: [... 68 68 555 ...] where 68 is the glyph ID for 'a'
///
/// Without this scaling, VeraPDF reports errors like:
/// "Glyph width 555.664062 in embedded font â‰  dictionary value 1138"
///
/// # Performance
/// Extracts and scales widths for all glyphs in a single pass. For typical
/// fonts with 500-2000 glyphs, this completes in <1ms.
pub fn extract_glyph_widths(face: &Face) -> Vec<u16> {
    let num_glyphs = face.number_of_glyphs();
    let units_per_em = face.units_per_em() as u32;
    let mut widths = Vec::with_capacity(num_glyphs as usize);

    for glyph_id in 0..num_glyphs {
        let advance = face.glyph_hor_advance(GlyphId(glyph_id)).unwrap_or(0); // Use 0 for missing glyphs (should never happen in valid fonts)

        // Scale from font units to PDF's 1000-unit text space
        // Use u32 for intermediate calculation to avoid overflow
        let scaled = ((advance as u32 * 1000) / units_per_em) as u16;

        widths.push(scaled);
    }

    widths
}
