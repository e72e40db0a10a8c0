//! Converts a laid-out page into a PDF content stream.
//!
//! `render_page` walks a [`LayoutPage`]'s blocks in band order — watermarks,
//! then headers, then body content, then footnotes/endnotes, then footers —
//! and matches on [`BlockKind`]/[`BlockPayload`] to emit the right operator
//! sequence for each. Anything it can't place (an unresolved image stream, an
//! unrecognized block) is recorded as a warning and skipped rather than
//! aborting the page.

use crate::config::WatermarkOpacities;
use crate::content_builder::ContentBuilder;
use crate::encoding::{encode_utf16be_hex, escape_pdf_string};
use crate::error::PDFError;
use crate::font_registry::PDFFontRegistry;
use crate::image_registry::ImageRegistry;
use crate::pdf_operators::{render_background, render_borders, render_box_borders, render_list_bullet, render_text_decoration};
use crate::text_utils::apply_text_transform;
use image_cache::ImageCache;
use layout_types::{
    BlockKind, BlockPayload, Color, ImageLayout, ImageSource, InlineItemData, LayoutBlock,
    LayoutPage, OverlayBox, OverlayPayload, ParagraphLayout, Rect, StyleDeclaration, TableLayout,
    TextboxLayout,
};
use lopdf::Document;
use std::collections::HashMap;

/// A resource an XObject/ExtGState name was assigned to during rendering,
/// to be wired into the page's `/Resources` dictionary once the content
/// stream is finished.
struct PageResources {
    images: Vec<(String, (u32, u16))>,
    graphics_states: Vec<(String, f64)>,
}

impl PageResources {
    fn new() -> Self {
        Self { images: Vec::new(), graphics_states: Vec::new() }
    }
}

/// Mutable state threaded through a single page's render pass.
struct RenderCtx<'a> {
    doc: &'a mut Document,
    fonts: &'a PDFFontRegistry,
    images: &'a mut ImageRegistry,
    image_resources: &'a HashMap<String, Vec<u8>>,
    image_cache: &'a ImageCache,
    watermark_opacities: WatermarkOpacities,
    warnings: Vec<String>,
    resources: PageResources,
    image_counter: usize,
    gs_counter: usize,
}

/// The result of rendering one page: its content stream plus any warnings
/// raised along the way.
pub struct PageRenderResult {
    pub content: String,
    pub warnings: Vec<String>,
}

/// Render a page's blocks into a content stream.
///
/// Image and alpha-state resources discovered while rendering are wired
/// into the page's `/Resources` dictionary before this returns — callers
/// only need to set the content stream itself.
#[allow(clippy::too_many_arguments)]
pub fn render_page(
    page: &LayoutPage,
    doc: &mut Document,
    page_id: (u32, u16),
    fonts: &PDFFontRegistry,
    images: &mut ImageRegistry,
    image_resources: &HashMap<String, Vec<u8>>,
    image_cache: &ImageCache,
    watermark_opacities: WatermarkOpacities,
) -> Result<PageRenderResult, PDFError> {
    let mut ctx = RenderCtx {
        doc,
        fonts,
        images,
        image_resources,
        image_cache,
        watermark_opacities,
        warnings: Vec::new(),
        resources: PageResources::new(),
        image_counter: 0,
        gs_counter: 0,
    };

    let mut content = String::new();

    for block in ordered_blocks(page) {
        render_block(block, &mut content, &mut ctx)?;
    }

    for (name, image_id) in &ctx.resources.images {
        ImageRegistry::add_to_page_resources(ctx.doc, page_id, name, *image_id)?;
    }
    add_graphics_state_resources(ctx.doc, page_id, &ctx.resources.graphics_states)?;

    Ok(PageRenderResult { content, warnings: ctx.warnings })
}

/// Reorder a page's blocks into render bands: watermarks first (so later
/// content paints over them), then headers, then ordinary body content,
/// then footnotes/endnotes, then footers. Relative order within each band
/// is preserved.
fn ordered_blocks(page: &LayoutPage) -> Vec<&LayoutBlock> {
    let band = |b: &LayoutBlock| -> u8 {
        if b.is_watermark {
            0
        } else {
            match b.block_type {
                BlockKind::Header => 1,
                BlockKind::Footnotes | BlockKind::Endnotes => 3,
                BlockKind::Footer => 4,
                _ => 2,
            }
        }
    };
    let mut blocks: Vec<&LayoutBlock> = page.blocks.iter().collect();
    blocks.sort_by_key(|b| band(b));
    blocks
}

fn render_block<C: ContentBuilder>(
    block: &LayoutBlock,
    content: &mut C,
    ctx: &mut RenderCtx,
) -> Result<(), PDFError> {
    let watermark_alpha = block.is_watermark.then(|| watermark_opacity_for(block, ctx));

    if let Some(alpha) = watermark_alpha {
        let gs_name = format!("GS{}", ctx.gs_counter + 1);
        ctx.gs_counter += 1;
        ctx.resources.graphics_states.push((gs_name.clone(), alpha));
        content.save_state();
        content.set_graphics_state(&gs_name);
    }

    render_background_and_borders(block, content)?;

    match &block.content.payload {
        BlockPayload::Paragraph(paragraph) => {
            render_paragraph(&block.frame, paragraph, &block.style, content, ctx)?
        }
        BlockPayload::Table(table) => render_table(table, content, ctx)?,
        BlockPayload::Image(image) => render_image(&block.frame, image, content, ctx)?,
        BlockPayload::Textbox(textbox) => render_textbox(textbox, content, ctx)?,
        BlockPayload::Generic(generic) => {
            if let Some(diagnostic) = &generic.diagnostic {
                ctx.warnings.push(format!(
                    "skipped unrenderable block '{}': {}",
                    generic.original_block_type, diagnostic
                ));
            }
        }
    }

    render_list_marker(block, content, ctx)?;

    if watermark_alpha.is_some() {
        content.restore_state();
    }

    Ok(())
}

/// Draw a list item's marker: a bullet glyph for `ListType::Bullet`, or the
/// resolved marker text (e.g. "1.", "a)") for every other numbered type.
fn render_list_marker<C: ContentBuilder>(block: &LayoutBlock, content: &mut C, ctx: &mut RenderCtx) -> Result<(), PDFError> {
    let effective = &block.content.raw.effective_format;
    if !effective.is_list_item {
        return Ok(());
    }

    if matches!(effective.list_type, Some(layout_types::ListType::Bullet)) {
        return render_list_bullet(block, content);
    }

    let marker = &block.content.raw.marker;
    if marker.is_empty() {
        return Ok(());
    }

    let font_size = block.style.text.font_size.unwrap_or(10.0);
    let color = block.style.text.color.unwrap_or(Color::BLACK);
    let x = block.frame.x - BULLET_OFFSET_POINTS;
    let y = block.frame.y + block.frame.height - font_size;
    render_text_run(marker, "Helvetica", font_size, layout_types::FontWeight::Normal, layout_types::FontStyle::Normal, &color, None, x, y, 0.0, content, ctx)
}

/// Horizontal offset for a numbered-list marker, to the left of the item's frame.
const BULLET_OFFSET_POINTS: f64 = 8.0;

/// Watermark opacity for a block: its own `OverlayBox`-style override isn't
/// reachable from a `LayoutBlock` directly, so this falls back to the
/// config's per-kind defaults (§4.8): images 0.5, VML shapes 0.3, else 0.35.
fn watermark_opacity_for(block: &LayoutBlock, ctx: &RenderCtx) -> f64 {
    match block.block_type {
        BlockKind::Image => ctx.watermark_opacities.images,
        BlockKind::VmlShape => ctx.watermark_opacities.vml_shape,
        _ => ctx.watermark_opacities.default,
    }
}

fn render_background_and_borders<C: ContentBuilder>(
    block: &LayoutBlock,
    content: &mut C,
) -> Result<(), PDFError> {
    if let Some(bg) = block.style.box_model.background_color {
        render_background(&block.frame, bg, content)?;
    }
    render_borders(block, content)
}

fn render_paragraph<C: ContentBuilder>(
    frame: &Rect,
    paragraph: &ParagraphLayout,
    style: &StyleDeclaration,
    content: &mut C,
    ctx: &mut RenderCtx,
) -> Result<(), PDFError> {
    for line in &paragraph.lines {
        let baseline_y = frame.y + frame.height - line.baseline_y;
        for item in &line.items {
            let x = frame.x + line.offset_x + item.x;
            match &item.data {
                InlineItemData::TextRun { text, font_family, font_size, font_weight, font_style, color, .. } => {
                    let transformed = apply_text_transform(text, style);
                    render_text_run(&transformed, font_family, *font_size, *font_weight, *font_style, color, style.text.text_decoration, x, baseline_y, item.width, content, ctx)?;
                }
                InlineItemData::Field { text, font_family, font_size } => {
                    let color = style.text.color.unwrap_or(Color::BLACK);
                    render_text_run(text, font_family, *font_size, layout_types::FontWeight::Normal, layout_types::FontStyle::Normal, &color, style.text.text_decoration, x, baseline_y, item.width, content, ctx)?;
                }
                InlineItemData::InlineImage { stream_key, width, height } => {
                    let inline_frame = Rect::new(x, baseline_y - item.descent, *width, *height);
                    let image = ImageLayout::new(inline_frame, ImageSource::StreamKey(stream_key.clone()), true)
                        .map_err(|e| PDFError::RenderingError(e.to_string()))?;
                    render_image(&inline_frame, &image, content, ctx)?;
                }
                InlineItemData::InlineTextbox { .. } | InlineItemData::Break => {}
            }
        }
    }

    for overlay in &paragraph.overlays {
        render_overlay(overlay, content, ctx)?;
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_text_run<C: ContentBuilder>(
    text: &str,
    font_family: &str,
    font_size: f64,
    weight: layout_types::FontWeight,
    style: layout_types::FontStyle,
    color: &Color,
    decoration: Option<layout_types::TextDecoration>,
    x: f64,
    y: f64,
    width: f64,
    content: &mut C,
    ctx: &mut RenderCtx,
) -> Result<(), PDFError> {
    if text.is_empty() {
        return Ok(());
    }
    let toolkit_weight = convert_weight(weight);
    let toolkit_style = convert_style(style);
    let alias = ctx.fonts.alias_for(font_family, toolkit_weight, toolkit_style);

    content.set_fill_color_rgb(color.r as f64 / 255.0, color.g as f64 / 255.0, color.b as f64 / 255.0);
    content.begin_text();
    content.set_font(alias, font_size);
    content.set_text_position(x, y);
    show_text(text, content);
    content.end_text();

    if let Some(decoration) = decoration {
        if !matches!(decoration, layout_types::TextDecoration::None) {
            render_text_decoration(decoration, x, y, width, font_size, color, content)?;
        }
    }
    Ok(())
}

fn convert_weight(weight: layout_types::FontWeight) -> font_toolkit::FontWeight {
    match weight {
        layout_types::FontWeight::Normal => font_toolkit::FontWeight::Normal,
        layout_types::FontWeight::Bold => font_toolkit::FontWeight::Bold,
        layout_types::FontWeight::Lighter => font_toolkit::FontWeight::Lighter,
        layout_types::FontWeight::Bolder => font_toolkit::FontWeight::Bolder,
    }
}

fn convert_style(style: layout_types::FontStyle) -> font_toolkit::FontStyle {
    match style {
        layout_types::FontStyle::Normal => font_toolkit::FontStyle::Normal,
        layout_types::FontStyle::Italic => font_toolkit::FontStyle::Italic,
        layout_types::FontStyle::Oblique => font_toolkit::FontStyle::Oblique,
    }
}

/// Show `text` using whichever encoding the content matches: an ASCII
/// fragment is a parenthesised literal with backslash escapes; anything
/// with a character outside US-ASCII is shown as a `FEFF`-prefixed
/// UTF-16BE hex string instead, so accented and non-Latin text still
/// renders rather than being dropped or mis-escaped as a literal.
fn show_text<C: ContentBuilder>(text: &str, content: &mut C) {
    if text.is_ascii() {
        content.show_text_literal(&escape_pdf_string(text));
    } else {
        content.show_text_hex(&encode_utf16be_hex(text));
    }
}

fn render_table<C: ContentBuilder>(table: &TableLayout, content: &mut C, ctx: &mut RenderCtx) -> Result<(), PDFError> {
    for row in &table.rows {
        for cell in &row.cells {
            if let Some(bg) = cell.style.background_color {
                render_background(&cell.frame, bg, content)?;
            }
            for payload in &cell.blocks {
                render_payload(&cell.frame, payload, &StyleDeclaration::default(), content, ctx)?;
            }
        }
    }

    for row in &table.rows {
        for cell in &row.cells {
            render_box_borders(&cell.frame, &cell.style, content)?;
        }
    }
    render_table_grid_lines(table, content)?;

    Ok(())
}

/// Draw the table's column/row separators with its default border style,
/// after cell content and cell-level borders (§4.8's "background, content,
/// then grid lines" order). A no-op for a table with no default border —
/// most cells still carry their own borders drawn above.
fn render_table_grid_lines<C: ContentBuilder>(table: &TableLayout, content: &mut C) -> Result<(), PDFError> {
    let Some(border) = &table.grid_border else { return Ok(()) };
    let top = table.frame.y + table.frame.height;
    let bottom = table.frame.y;

    for &x_offset in &table.grid_lines {
        let x = table.frame.x + x_offset;
        content.set_stroke_color_rgb(border.color.r as f64 / 255.0, border.color.g as f64 / 255.0, border.color.b as f64 / 255.0);
        content.set_line_width(border.width.max(1.0));
        content.move_to(x, bottom);
        content.line_to(x, top);
        content.stroke();
    }

    let mut y = top;
    content.set_stroke_color_rgb(border.color.r as f64 / 255.0, border.color.g as f64 / 255.0, border.color.b as f64 / 255.0);
    content.set_line_width(border.width.max(1.0));
    content.move_to(table.frame.x, y);
    content.line_to(table.frame.x + table.frame.width, y);
    content.stroke();
    for row in &table.rows {
        y -= row.height;
        content.move_to(table.frame.x, y);
        content.line_to(table.frame.x + table.frame.width, y);
        content.stroke();
    }

    Ok(())
}

fn render_payload<C: ContentBuilder>(
    frame: &Rect,
    payload: &BlockPayload,
    style: &StyleDeclaration,
    content: &mut C,
    ctx: &mut RenderCtx,
) -> Result<(), PDFError> {
    match payload {
        BlockPayload::Paragraph(paragraph) => render_paragraph(frame, paragraph, style, content, ctx),
        BlockPayload::Table(table) => render_table(table, content, ctx),
        BlockPayload::Image(image) => render_image(frame, image, content, ctx),
        BlockPayload::Textbox(textbox) => render_textbox(textbox, content, ctx),
        BlockPayload::Generic(_) => Ok(()),
    }
}

fn render_textbox<C: ContentBuilder>(textbox: &TextboxLayout, content: &mut C, ctx: &mut RenderCtx) -> Result<(), PDFError> {
    for payload in &textbox.blocks {
        render_payload(&textbox.frame, payload, &textbox.style, content, ctx)?;
    }
    Ok(())
}

fn render_image<C: ContentBuilder>(
    frame: &Rect,
    image: &ImageLayout,
    content: &mut C,
    ctx: &mut RenderCtx,
) -> Result<(), PDFError> {
    let key = match &image.source {
        ImageSource::Path(path) => path.as_str(),
        ImageSource::StreamKey(key) => key.as_str(),
    };

    let resolved = ctx.images.resolve(ctx.doc, key, ctx.image_resources, ctx.image_cache)?;

    let Some(image_id) = resolved else {
        ctx.warnings.push(format!("missing image data for '{}', leaving blank space", key));
        return Ok(());
    };

    ctx.image_counter += 1;
    let name = format!("Im{}", ctx.image_counter);
    ctx.resources.images.push((name.clone(), image_id));

    content.save_state();
    content.concat_matrix(frame.width, 0.0, 0.0, frame.height, frame.x, frame.y);
    content.paint_xobject(&name);
    content.restore_state();
    Ok(())
}

fn render_overlay<C: ContentBuilder>(overlay: &OverlayBox, content: &mut C, ctx: &mut RenderCtx) -> Result<(), PDFError> {
    let alpha = overlay.opacity.unwrap_or_else(|| {
        if overlay.is_watermark {
            match &overlay.payload {
                OverlayPayload::Image { .. } => ctx.watermark_opacities.images,
                OverlayPayload::Shape { .. } => ctx.watermark_opacities.vml_shape,
                OverlayPayload::Textbox { .. } => ctx.watermark_opacities.default,
            }
        } else {
            1.0
        }
    });

    let needs_gs = alpha < 1.0;
    if needs_gs {
        let gs_name = format!("GS{}", ctx.gs_counter + 1);
        ctx.gs_counter += 1;
        ctx.resources.graphics_states.push((gs_name.clone(), alpha));
        content.save_state();
        content.set_graphics_state(&gs_name);
    }

    match &overlay.payload {
        OverlayPayload::Image { source, preserve_aspect } => {
            let image = ImageLayout::new(overlay.frame, source.clone(), *preserve_aspect)
                .map_err(|e| PDFError::RenderingError(e.to_string()))?;
            render_image(&overlay.frame, &image, content, ctx)?;
        }
        OverlayPayload::Textbox { lines } => {
            render_plain_lines(&overlay.frame, lines, content, ctx);
        }
        OverlayPayload::Shape { shape_kind } => {
            ctx.warnings.push(format!("rendered '{}' shape as an outline only", shape_kind));
            content.set_stroke_color_rgb(0.0, 0.0, 0.0);
            content.set_line_width(0.5);
            content.rectangle(overlay.frame.x, overlay.frame.y, overlay.frame.width, overlay.frame.height);
            content.stroke();
        }
    }

    if needs_gs {
        content.restore_state();
    }
    Ok(())
}

/// Render an overlay textbox's flattened plain-text lines, one per line,
/// top-down within the overlay's frame, using the Helvetica baseline font.
fn render_plain_lines<C: ContentBuilder>(frame: &Rect, lines: &[String], content: &mut C, ctx: &mut RenderCtx) {
    const FONT_SIZE: f64 = 12.0;
    const LINE_HEIGHT: f64 = FONT_SIZE * 1.2;

    let alias = ctx.fonts.alias_for("Helvetica", font_toolkit::FontWeight::Normal, font_toolkit::FontStyle::Normal);
    content.set_fill_color_rgb(0.0, 0.0, 0.0);
    content.begin_text();
    content.set_font(alias, FONT_SIZE);
    let mut y = frame.y + frame.height - FONT_SIZE;
    for line in lines {
        content.set_text_position(frame.x, y);
        show_text(line, content);
        y -= LINE_HEIGHT;
    }
    content.end_text();
}

fn add_graphics_state_resources(
    doc: &mut Document,
    page_id: (u32, u16),
    states: &[(String, f64)],
) -> Result<(), PDFError> {
    if states.is_empty() {
        return Ok(());
    }
    use lopdf::{dictionary, Object};

    let page_obj = doc
        .get_object_mut(page_id)
        .map_err(|e| PDFError::RenderingError(format!("Failed to get page: {}", e)))?;
    let Object::Dictionary(page_dict) = page_obj else {
        return Err(PDFError::RenderingError("Page is not a dictionary".to_string()));
    };

    let resources = match page_dict.get(b"Resources") {
        Ok(Object::Dictionary(_)) => page_dict
            .get_mut(b"Resources")
            .and_then(|obj| obj.as_dict_mut())
            .map_err(|e| PDFError::RenderingError(format!("Invalid resources: {}", e)))?,
        _ => {
            page_dict.set("Resources", dictionary! {});
            page_dict
                .get_mut(b"Resources")
                .and_then(|obj| obj.as_dict_mut())
                .map_err(|e| PDFError::RenderingError(format!("Failed to create resources: {}", e)))?
        }
    };

    let ext_g_states = match resources.get(b"ExtGState") {
        Ok(Object::Dictionary(_)) => resources
            .get_mut(b"ExtGState")
            .and_then(|obj| obj.as_dict_mut())
            .map_err(|e| PDFError::RenderingError(format!("Invalid ExtGState: {}", e)))?,
        _ => {
            resources.set("ExtGState", dictionary! {});
            resources
                .get_mut(b"ExtGState")
                .and_then(|obj| obj.as_dict_mut())
                .map_err(|e| PDFError::RenderingError(format!("Failed to create ExtGState: {}", e)))?
        }
    };

    for (name, alpha) in states {
        ext_g_states.set(
            name.as_str(),
            dictionary! { "Type" => "ExtGState", "ca" => *alpha, "CA" => *alpha },
        );
    }
    Ok(())
}
