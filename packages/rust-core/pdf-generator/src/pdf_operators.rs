//! PDF operator builders for rendering visual elements
//!
//! This module provides low-level functions that generate PDF content stream
//! operators for rendering backgrounds, borders, decorations, and list bullets.
//! Each function appends PDF commands to a mutable string buffer.
//!
//! `LayoutBlock::frame`'s origin is already PDF space (bottom-left), so unlike
//! an HTML-style top-left box these functions never flip a `page_height - y`
//! coordinate — the frame *is* the PDF rectangle.

use crate::content_builder::ContentBuilder;
use crate::error::PDFError;
use layout_types::{BorderLineStyle, BorderStyle, BoxStyle, Color, LayoutBlock, Rect, TextDecoration};

// PDF Rendering Constants

/// Border and decoration line width in points
const DEFAULT_LINE_WIDTH: f64 = 0.5;

/// Underline vertical offset ratio (relative to font size)
/// Positions underline below the text baseline
const UNDERLINE_OFFSET_RATIO: f64 = 0.1;

/// Strikethrough vertical offset ratio (relative to font size)
/// Positions strikethrough line through the middle of text
const STRIKETHROUGH_OFFSET_RATIO: f64 = 0.3;

/// Bézier curve control point constant for circle approximation (kappa)
/// Derivation: 4/3 * tan(π/8) ≈ 0.5522847498
const BEZIER_CIRCLE_KAPPA: f64 = 0.5522847498;

/// Horizontal offset for list bullets in points (distance to the left of list item)
const BULLET_OFFSET_POINTS: f64 = 8.0;

/// Line height ratio threshold for applying leading corrections
const LINE_HEIGHT_ADJUSTMENT_THRESHOLD: f64 = 1.3;

/// Leading correction factor to improve vertical text positioning accuracy
const LEADING_CORRECTION_FACTOR: f64 = 0.95;

/// Render a filled background rectangle covering a block's frame.
pub fn render_background<C: ContentBuilder>(frame: &Rect, color: Color, content: &mut C) -> Result<(), PDFError> {
    content.set_fill_color_rgb(color.r as f64 / 255.0, color.g as f64 / 255.0, color.b as f64 / 255.0);
    content.rectangle(frame.x, frame.y, frame.width, frame.height);
    content.fill();
    Ok(())
}

fn effective_line_width(border: &BorderStyle) -> f64 {
    if border.width <= 1.0 {
        (border.width * 1.33).max(1.0)
    } else {
        border.width * 1.67
    }
}

fn apply_dash_pattern<C: ContentBuilder>(border: &BorderStyle, content: &mut C) {
    match border.style {
        BorderLineStyle::Dashed => content.set_dash_pattern("[3 2]", 0),
        BorderLineStyle::Dotted => content.set_dash_pattern("[1 1]", 0),
        BorderLineStyle::Solid | BorderLineStyle::None => content.set_dash_pattern("[]", 0),
    }
}

/// Render one side of a block's border as a straight line along that edge
/// of `frame`. A no-op for `BorderLineStyle::None`.
fn render_border_side<C: ContentBuilder>(
    border: &BorderStyle,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    content: &mut C,
) -> Result<(), PDFError> {
    if matches!(border.style, BorderLineStyle::None) {
        return Ok(());
    }
    content.set_stroke_color_rgb(
        border.color.r as f64 / 255.0,
        border.color.g as f64 / 255.0,
        border.color.b as f64 / 255.0,
    );
    content.set_line_width(effective_line_width(border));
    apply_dash_pattern(border, content);
    content.move_to(x1, y1);
    content.line_to(x2, y2);
    content.stroke();
    Ok(())
}

/// Render all four independent border sides (`border_top/right/bottom/left`)
/// of a block's box style against its frame, each side drawn as its own
/// straight line — content and background are drawn first so the border
/// sits on top where it overlaps either.
pub fn render_borders<C: ContentBuilder>(block: &LayoutBlock, content: &mut C) -> Result<(), PDFError> {
    render_box_borders(&block.frame, &block.style.box_model, content)
}

/// Render the four border sides of any box-styled frame — the shared
/// implementation behind [`render_borders`], also used for table cells
/// which carry a `BoxStyle` but aren't `LayoutBlock`s themselves.
pub fn render_box_borders<C: ContentBuilder>(frame: &Rect, box_style: &BoxStyle, content: &mut C) -> Result<(), PDFError> {
    let top = frame.y + frame.height;
    let bottom = frame.y;
    let left = frame.x;
    let right = frame.x + frame.width;

    if let Some(border) = &box_style.border_top {
        render_border_side(border, left, top, right, top, content)?;
    }
    if let Some(border) = &box_style.border_bottom {
        render_border_side(border, left, bottom, right, bottom, content)?;
    }
    if let Some(border) = &box_style.border_left {
        render_border_side(border, left, bottom, left, top, content)?;
    }
    if let Some(border) = &box_style.border_right {
        render_border_side(border, right, bottom, right, top, content)?;
    }
    Ok(())
}

/// Render text decoration (underline, strikethrough) under/through a run of
/// text starting at `(x, y)` (baseline) spanning `width` points.
pub fn render_text_decoration<C: ContentBuilder>(
    decoration: TextDecoration,
    x: f64,
    y: f64,
    width: f64,
    font_size: f64,
    color: &Color,
    content: &mut C,
) -> Result<(), PDFError> {
    content.set_stroke_color_rgb(color.r as f64 / 255.0, color.g as f64 / 255.0, color.b as f64 / 255.0);
    content.set_line_width(DEFAULT_LINE_WIDTH);

    if matches!(decoration, TextDecoration::Underline | TextDecoration::UnderlineStrikethrough) {
        let underline_y = y - font_size * UNDERLINE_OFFSET_RATIO;
        content.move_to(x, underline_y);
        content.line_to(x + width, underline_y);
        content.stroke();
    }

    if matches!(decoration, TextDecoration::Strikethrough | TextDecoration::UnderlineStrikethrough) {
        let strike_y = y + font_size * STRIKETHROUGH_OFFSET_RATIO;
        content.move_to(x, strike_y);
        content.line_to(x + width, strike_y);
        content.stroke();
    }

    Ok(())
}

/// Render a filled circle bullet to the left of a list-item block's frame.
pub fn render_list_bullet<C: ContentBuilder>(block: &LayoutBlock, content: &mut C) -> Result<(), PDFError> {
    let style = &block.style;
    let frame = &block.frame;

    let font_size = style.text.font_size.unwrap_or(10.0);
    let line_height = style.text.line_height.unwrap_or(font_size * 1.2);
    let color = style.text.color.unwrap_or(Color { r: 0, g: 0, b: 0, a: 1.0 });

    let line_height_ratio = line_height / font_size;
    let leading = if line_height_ratio > LINE_HEIGHT_ADJUSTMENT_THRESHOLD {
        ((line_height - font_size) / 2.0) * LEADING_CORRECTION_FACTOR
    } else {
        0.0
    };

    let bullet_x = frame.x - BULLET_OFFSET_POINTS;
    let top_y = frame.y + frame.height;
    let bullet_y = top_y - leading - font_size;

    content.set_fill_color_rgb(color.r as f64 / 255.0, color.g as f64 / 255.0, color.b as f64 / 255.0);

    let bullet_radius = font_size * 0.15;
    let bullet_center_y = bullet_y + font_size * 0.4;
    let k_r = BEZIER_CIRCLE_KAPPA * bullet_radius;

    content.move_to(bullet_x + bullet_radius, bullet_center_y);
    content.curve_to(
        bullet_x + bullet_radius,
        bullet_center_y + k_r,
        bullet_x + k_r,
        bullet_center_y + bullet_radius,
        bullet_x,
        bullet_center_y + bullet_radius,
    );
    content.curve_to(
        bullet_x - k_r,
        bullet_center_y + bullet_radius,
        bullet_x - bullet_radius,
        bullet_center_y + k_r,
        bullet_x - bullet_radius,
        bullet_center_y,
    );
    content.curve_to(
        bullet_x - bullet_radius,
        bullet_center_y - k_r,
        bullet_x - k_r,
        bullet_center_y - bullet_radius,
        bullet_x,
        bullet_center_y - bullet_radius,
    );
    content.curve_to(
        bullet_x + k_r,
        bullet_center_y - bullet_radius,
        bullet_x + bullet_radius,
        bullet_center_y - k_r,
        bullet_x + bullet_radius,
        bullet_center_y,
    );
    content.fill();

    Ok(())
}
