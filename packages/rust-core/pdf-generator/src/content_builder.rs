//! Content builder abstraction for PDF content streams
//!
//! This module provides a trait-based abstraction for building PDF content streams,
//! allowing for better testability and flexibility in how content is generated.

/// Trait for building PDF content streams
///
/// This trait abstracts the construction of PDF content stream operators,
/// allowing different implementations for production (String) and testing (Mock).
///
/// # Examples
///
/// ```
/// use pdf_generator::content_builder::ContentBuilder;
///
/// let mut content = String::new();
/// content.push_operator("BT");
/// content.push_operator("ET");
/// ```
pub trait ContentBuilder {
    /// Push a raw PDF operator or command to the content stream
    ///
    /// # Arguments
    ///
    /// * `op` - The PDF operator string (e.g., "BT", "ET", "0.5 w")
    fn push_operator(&mut self, op: &str);

    /// Push a formatted PDF operator with arguments
    ///
    /// This is a convenience method that handles formatting.
    ///
    /// # Arguments
    ///
    /// * `fmt_args` - Formatted string arguments
    fn push_formatted(&mut self, fmt_args: std::fmt::Arguments<'_>);

    /// Begin a text block (BT operator)
    fn begin_text(&mut self) {
        self.push_operator("BT\n");
    }

    /// End a text block (ET operator)
    fn end_text(&mut self) {
        self.push_operator("ET\n");
    }

    /// Set font and size (Tf operator)
    ///
    /// # Arguments
    ///
    /// * `font_name` - PDF font resource name (e.g., "Helvetica")
    /// * `size` - Font size in points
    fn set_font(&mut self, font_name: &str, size: f64) {
        self.push_formatted(format_args!("/{} {} Tf\n", font_name, size));
    }

    /// Set text position (Td operator)
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate in points
    fn set_text_position(&mut self, x: f64, y: f64) {
        self.push_formatted(format_args!("{} {} Td\n", x, y));
    }

    /// Show text (Tj operator with hex-encoded string)
    ///
    /// # Arguments
    ///
    /// * `hex_text` - Hex-encoded text string
    fn show_text_hex(&mut self, hex_text: &str) {
        self.push_formatted(format_args!("<{}> Tj\n", hex_text));
    }

    /// Show text (Tj operator with a parenthesised literal string)
    ///
    /// # Arguments
    ///
    /// * `escaped_text` - text already passed through
    ///   [`crate::encoding::escape_pdf_string`]
    fn show_text_literal(&mut self, escaped_text: &str) {
        self.push_formatted(format_args!("({}) Tj\n", escaped_text));
    }

    /// Set fill color RGB (rg operator)
    ///
    /// # Arguments
    ///
    /// * `r` - Red component (0.0-1.0)
    /// * `g` - Green component (0.0-1.0)
    /// * `b` - Blue component (0.0-1.0)
    fn set_fill_color_rgb(&mut self, r: f64, g: f64, b: f64) {
        self.push_formatted(format_args!("{} {} {} rg\n", r, g, b));
    }

    /// Set stroke color RGB (RG operator)
    ///
    /// # Arguments
    ///
    /// * `r` - Red component (0.0-1.0)
    /// * `g` - Green component (0.0-1.0)
    /// * `b` - Blue component (0.0-1.0)
    fn set_stroke_color_rgb(&mut self, r: f64, g: f64, b: f64) {
        self.push_formatted(format_args!("{} {} {} RG\n", r, g, b));
    }

    /// Set line width (w operator)
    ///
    /// # Arguments
    ///
    /// * `width` - Line width in points
    fn set_line_width(&mut self, width: f64) {
        self.push_formatted(format_args!("{} w\n", width));
    }

    /// Set line dash pattern (d operator)
    ///
    /// # Arguments
    ///
    /// * `pattern` - Dash pattern array (e.g., "[3 2]" for dashed)
    /// * `phase` - Dash phase offset
    fn set_dash_pattern(&mut self, pattern: &str, phase: i32) {
        self.push_formatted(format_args!("{} {} d\n", pattern, phase));
    }

    /// Move to position (m operator)
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate
    /// * `y` - Y coordinate
    fn move_to(&mut self, x: f64, y: f64) {
        self.push_formatted(format_args!("{} {} m\n", x, y));
    }

    /// Line to position (l operator)
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate
    /// * `y` - Y coordinate
    fn line_to(&mut self, x: f64, y: f64) {
        self.push_formatted(format_args!("{} {} l\n", x, y));
    }

    /// Stroke path (S operator)
    fn stroke(&mut self) {
        self.push_operator("S\n");
    }

    /// Fill path (f operator)
    fn fill(&mut self) {
        self.push_operator("f\n");
    }

    /// Draw rectangle (re operator)
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate of lower-left corner
    /// * `y` - Y coordinate of lower-left corner
    /// * `width` - Rectangle width
    /// * `height` - Rectangle height
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push_formatted(format_args!("{} {} {} {} re\n", x, y, width, height));
    }

    /// Draw BÃ©zier curve (c operator)
    ///
    /// # Arguments
    ///
    /// * `x1`, `y1` - First control point
    /// * `x2`, `y2` - Second control point
    /// * `x3`, `y3` - End point
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push_formatted(format_args!(
            "{} {} {} {} {} {} c\n",
            x1, y1, x2, y2, x3, y3
        ));
    }

    /// Close the current subpath (h operator)
    fn close_path(&mut self) {
        self.push_operator("h\n");
    }

    /// Push the graphics state onto the stack (q operator)
    fn save_state(&mut self) {
        self.push_operator("q\n");
    }

    /// Pop the graphics state off the stack (Q operator)
    fn restore_state(&mut self) {
        self.push_operator("Q\n");
    }

    /// Concatenate a transformation matrix with the current one (cm operator)
    ///
    /// `[a b c d e f]` maps device space per the usual PDF matrix convention;
    /// the image-placement matrix `[w 0 0 h x y]` scales a unit-square
    /// XObject to `w`×`h` points and positions its lower-left corner at
    /// `(x, y)`.
    fn concat_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.push_formatted(format_args!("{} {} {} {} {} {} cm\n", a, b, c, d, e, f));
    }

    /// Intersect the current clipping path with the current path, using the
    /// nonzero winding rule (W operator). Must be followed by a path-painting
    /// operator (commonly [`end_path_no_paint`](Self::end_path_no_paint)).
    fn clip(&mut self) {
        self.push_operator("W\n");
    }

    /// End the current path without filling or stroking it (n operator).
    /// The usual way to apply a `clip()` without also painting the path.
    fn end_path_no_paint(&mut self) {
        self.push_operator("n\n");
    }

    /// Set the current graphics state from a named ExtGState resource (gs
    /// operator). Used to apply non-stroking alpha for watermark opacity.
    fn set_graphics_state(&mut self, name: &str) {
        self.push_formatted(format_args!("/{} gs\n", name));
    }

    /// Paint a named XObject (Do operator). Used for image placement; the
    /// XObject is scaled into the unit square by a preceding
    /// [`concat_matrix`](Self::concat_matrix) call.
    fn paint_xobject(&mut self, name: &str) {
        self.push_formatted(format_args!("/{} Do\n", name));
    }
}

/// Implementation of ContentBuilder for String
///
/// This is the production implementation that builds actual PDF content streams.
impl ContentBuilder for String {
    fn push_operator(&mut self, op: &str) {
        self.push_str(op);
    }

    fn push_formatted(&mut self, fmt_args: std::fmt::Arguments<'_>) {
        use std::fmt::Write;
        let _ = write!(self, "{}", fmt_args);
    }
}
