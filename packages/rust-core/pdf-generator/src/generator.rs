//! PDF Generator - Modular implementation following Single Responsibility Principle
//!
//! This module provides the main PDFGenerator struct which coordinates PDF document
//! generation through specialized sub-components.

use crate::config::PDFConfig;
use crate::dispatcher;
use crate::encoding::escape_pdf_string;
use crate::error::PDFError;
use crate::image_registry::ImageRegistry;
use image_cache::ImageCache;
use layout_types::UnifiedLayout;
use lopdf::{dictionary, Object};
use std::collections::HashMap;

// Import modular components
use crate::document_core::PDFDocumentCore;
use crate::font_registry::PDFFontRegistry;
use crate::page_manager::PDFPageManager;

/// PDF document generator with support for multi-page layouts and custom fonts.
///
/// This generator follows the Single Responsibility Principle by delegating to
/// specialized sub-components:
/// - `PDFDocumentCore`: Document lifecycle, metadata, and finalization
/// - `PDFPageManager`: Page creation, navigation, and tracking
/// - `PDFFontRegistry`: Font collection, registration, and embedding
/// - `ImageRegistry`: Image XObject resolution and embedding
///
/// # Architecture
///
/// The generator uses composition over inheritance, with each component handling
/// a single responsibility. This makes the codebase more maintainable, testable,
/// and easier to reason about.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```no_run
/// use pdf_generator::{PDFGenerator, PDFConfig};
///
/// // Create generator with default configuration
/// let config = PDFConfig::default();
/// let mut generator = PDFGenerator::new(config).unwrap();
///
/// // Add text content
/// generator.add_text("Hello, World!", 100.0, 700.0, 12.0).unwrap();
///
/// // Generate PDF bytes
/// let pdf_bytes = generator.finalize().unwrap();
/// ```
///
/// ## Rendering a layout
///
/// ```no_run
/// use pdf_generator::{PDFGenerator, PDFConfig, PageSize};
/// use layout_types::UnifiedLayout;
///
/// let config = PDFConfig {
///     page_size: PageSize::A4,
///     title: Some("Quarterly Report".to_string()),
///     ..Default::default()
/// };
///
/// let mut generator = PDFGenerator::new(config).unwrap();
///
/// let layout = UnifiedLayout::default();
/// generator.render_layout(&layout).unwrap();
///
/// let pdf_bytes = generator.finalize().unwrap();
/// ```
///
/// ## Multi-page Documents
///
/// ```no_run
/// use pdf_generator::{PDFGenerator, PDFConfig};
///
/// let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
///
/// // Add content to first page
/// generator.add_text("Page 1", 100.0, 700.0, 14.0).unwrap();
///
/// // Add second page
/// generator.add_page().unwrap();
/// generator.add_text("Page 2", 100.0, 700.0, 14.0).unwrap();
///
/// let pdf_bytes = generator.finalize().unwrap();
/// ```
pub struct PDFGenerator {
    document_core: PDFDocumentCore,
    page_manager: PDFPageManager,
    font_registry: PDFFontRegistry,
    image_registry: ImageRegistry,
    image_resources: HashMap<String, Vec<u8>>,
    image_cache: ImageCache,
    config: PDFConfig,
}

impl PDFGenerator {
    /// Creates a new PDF generator with the specified configuration.
    ///
    /// This initializes a new PDF document with:
    /// - PDF version 1.7
    /// - Document catalog and pages tree
    /// - Metadata from the provided configuration
    /// - One initial blank page
    ///
    /// # Arguments
    ///
    /// * `config` - PDF configuration including page size and metadata
    ///
    /// # Returns
    ///
    /// * `Ok(PDFGenerator)` - A new generator ready for content
    /// * `Err(PDFError)` - If initialization fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdf_generator::{PDFGenerator, PDFConfig, PageSize};
    ///
    /// let config = PDFConfig {
    ///     page_size: PageSize::Letter,
    ///     title: Some("My Document".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let generator = PDFGenerator::new(config).unwrap();
    /// ```
    pub fn new(config: PDFConfig) -> Result<Self, PDFError> {
        let mut document_core = PDFDocumentCore::new(config.clone())?;

        // Create pages tree
        let pages_id = document_core.doc.new_object_id();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        document_core
            .doc
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        // Initialize document with pages tree
        document_core.initialize(pages_id)?;

        // Create page manager with first page
        let (width, height) = config.page_size.dimensions();
        let page_manager = PDFPageManager::new(&mut document_core.doc, pages_id, width, height)?;

        Ok(Self {
            document_core,
            page_manager,
            font_registry: PDFFontRegistry::new(),
            image_registry: ImageRegistry::new(),
            image_resources: HashMap::new(),
            image_cache: ImageCache::new(2),
            config,
        })
    }

    /// Supplies the document's embedded media, keyed the same way an
    /// [`layout_types::ImageSource::Path`] names it. Call this before
    /// [`Self::render_layout`] — pictures referenced by the layout are
    /// resolved against this map first, then against the async conversion
    /// cache for `StreamKey` sources.
    pub fn set_image_resources(&mut self, resources: HashMap<String, Vec<u8>>) {
        self.image_resources = resources;
    }

    /// Adds a new blank page to the document.
    ///
    /// The new page will have the same dimensions as specified in the configuration.
    /// The page becomes the current page for subsequent content operations.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Page added successfully
    /// * `Err(PDFError)` - If page creation fails
    pub fn add_page(&mut self) -> Result<(), PDFError> {
        let (width, height) = self.config.page_size.dimensions();
        self.page_manager
            .add_page(&mut self.document_core.doc, width, height)
    }

    /// Renders a complete layout to the PDF, one page at a time.
    ///
    /// Fonts referenced anywhere in the layout are collected and assigned
    /// stable aliases up front, then registered onto each page as it's
    /// created. Recoverable rendering issues (a missing image, an
    /// unresolvable block) don't abort the document — they're returned as
    /// warnings for the caller to surface however it likes.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - warnings collected across all pages
    /// * `Err(PDFError)` - if rendering fails outright
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdf_generator::{PDFGenerator, PDFConfig};
    /// use layout_types::UnifiedLayout;
    ///
    /// let layout = UnifiedLayout::default();
    ///
    /// let config = PDFConfig::default();
    /// let mut generator = PDFGenerator::new(config).unwrap();
    ///
    /// generator.render_layout(&layout).unwrap();
    ///
    /// let pdf_bytes = generator.finalize().unwrap();
    /// ```
    pub fn render_layout(&mut self, layout: &UnifiedLayout) -> Result<Vec<String>, PDFError> {
        self.render_layout_with_progress(layout, None::<&fn(f32)>)
    }

    /// Same as [`Self::render_layout`], with an optional progress callback
    /// receiving a percentage in `[0.0, 100.0]` after each page.
    pub fn render_layout_with_progress<F>(
        &mut self,
        layout: &UnifiedLayout,
        progress_callback: Option<&F>,
    ) -> Result<Vec<String>, PDFError>
    where
        F: Fn(f32),
    {
        self.font_registry.collect_and_register(layout);

        let total_pages = layout.pages.len();
        let mut warnings = Vec::new();

        for (page_idx, page) in layout.pages.iter().enumerate() {
            if page_idx > 0 {
                let (width, height) = (page.size.width, page.size.height);
                self.page_manager
                    .add_page(&mut self.document_core.doc, width, height)?;
            }

            let page_id = self.page_manager.current_page_id();
            self.font_registry
                .register_fonts(&mut self.document_core.doc, page_id)?;

            let result = dispatcher::render_page(
                page,
                &mut self.document_core.doc,
                page_id,
                &self.font_registry,
                &mut self.image_registry,
                &self.image_resources,
                &self.image_cache,
                self.config.watermark_opacities,
            )?;
            warnings.extend(result.warnings);

            let content_id = {
                let page_obj = self
                    .document_core
                    .doc
                    .get_object(page_id)
                    .map_err(|e| PDFError::RenderingError(format!("Failed to get page: {}", e)))?;
                if let Object::Dictionary(page_dict) = page_obj {
                    page_dict
                        .get(b"Contents")
                        .and_then(|obj| obj.as_reference())
                        .ok()
                } else {
                    None
                }
            };

            if let Some(content_id) = content_id {
                let content_obj = self
                    .document_core
                    .doc
                    .get_object_mut(content_id)
                    .map_err(|e| {
                        PDFError::RenderingError(format!("Failed to get content: {}", e))
                    })?;
                if let Object::Stream(ref mut stream) = content_obj {
                    stream.set_plain_content(result.content.into_bytes());
                }
            }

            if let Some(callback) = progress_callback {
                let progress = ((page_idx + 1) as f32 / total_pages.max(1) as f32) * 100.0;
                callback(progress);
            }
        }

        Ok(warnings)
    }

    /// Adds text to the current page at the specified position.
    ///
    /// This is a low-level method for adding simple text. For complete
    /// document rendering, use [`Self::render_layout`] instead.
    ///
    /// # Coordinate System
    ///
    /// PDF uses a bottom-left origin coordinate system:
    /// - (0, 0) is the bottom-left corner
    /// - X increases to the right
    /// - Y increases upward
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdf_generator::{PDFGenerator, PDFConfig};
    ///
    /// let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
    ///
    /// // Add text at 100pt from left, 700pt from bottom
    /// generator.add_text("Hello, World!", 100.0, 700.0, 12.0).unwrap();
    ///
    /// let pdf_bytes = generator.finalize().unwrap();
    /// ```
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, font_size: f64) -> Result<(), PDFError> {
        if self.font_registry.is_empty() {
            self.font_registry.collect_and_register(&UnifiedLayout::default());
        }

        let page_id = self.page_manager.current_page_id();
        self.font_registry
            .register_fonts(&mut self.document_core.doc, page_id)?;

        let content_id = {
            let page_obj = self
                .document_core
                .doc
                .get_object(page_id)
                .map_err(|e| PDFError::RenderingError(format!("Failed to get page: {}", e)))?;
            if let Object::Dictionary(page_dict) = page_obj {
                page_dict
                    .get(b"Contents")
                    .and_then(|obj| obj.as_reference())
                    .ok()
            } else {
                None
            }
        };

        if let Some(content_id) = content_id {
            let existing = {
                let content_obj = self.document_core.doc.get_object(content_id).map_err(|e| {
                    PDFError::RenderingError(format!("Failed to get content: {}", e))
                })?;
                if let Object::Stream(ref stream) = content_obj {
                    String::from_utf8_lossy(&stream.content).to_string()
                } else {
                    String::new()
                }
            };

            let escaped = escape_pdf_string(text);
            let mut new_content = existing;
            if !new_content.is_empty() {
                new_content.push('\n');
            }
            new_content.push_str(&format!(
                "BT\n/F1 {} Tf\n{} {} Td\n({}) Tj\nET",
                font_size, x, y, escaped
            ));

            let content_obj = self
                .document_core
                .doc
                .get_object_mut(content_id)
                .map_err(|e| PDFError::RenderingError(format!("Failed to get content: {}", e)))?;
            if let Object::Stream(ref mut stream) = content_obj {
                stream.set_plain_content(new_content.as_bytes().to_vec());
            }
        }

        Ok(())
    }

    /// Finalizes the PDF document and returns the bytes.
    ///
    /// The generator is consumed by this operation.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - PDF document as bytes
    /// * `Err(PDFError)` - If finalization or serialization fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdf_generator::{PDFGenerator, PDFConfig};
    ///
    /// let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
    /// generator.add_text("Final document", 100.0, 700.0, 12.0).unwrap();
    ///
    /// let pdf_bytes = generator.finalize().unwrap();
    /// std::fs::write("output.pdf", &pdf_bytes).unwrap();
    /// ```
    pub fn finalize(mut self) -> Result<Vec<u8>, PDFError> {
        self.page_manager.finalize(&mut self.document_core.doc)?;
        self.image_cache.shutdown(true);

        let page_count = self.page_manager.page_count();
        self.document_core.finalize(page_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PDFConfig, PageSize};
    use layout_types::{
        BlockContent, BlockKind, BlockPayload, Color, InlineItem, InlineItemData, LayoutBlock,
        LayoutPage, Margins, ParagraphLayout, ParagraphLine, ParagraphMetadata, RawBlockData,
        Rect, Size, StyleDeclaration, TextAlign,
    };
    use std::cell::Cell;

    fn text_run_item(text: &str) -> InlineItem {
        InlineItem {
            x: 0.0,
            width: 40.0,
            ascent: 10.0,
            descent: 2.0,
            data: InlineItemData::TextRun {
                text: text.to_string(),
                font_family: "Arial".to_string(),
                font_size: 12.0,
                font_weight: layout_types::FontWeight::Normal,
                font_style: layout_types::FontStyle::Normal,
                color: Color::BLACK,
                hyperlink_target: None,
            },
        }
    }

    fn paragraph_block(frame: Rect, text: &str) -> LayoutBlock {
        let paragraph = ParagraphLayout {
            lines: vec![ParagraphLine {
                baseline_y: 10.0,
                height: 14.0,
                offset_x: 0.0,
                available_width: frame.width,
                items: vec![text_run_item(text)],
                align: TextAlign::Left,
            }],
            overlays: vec![],
            style: Default::default(),
            metadata: ParagraphMetadata::default(),
        };
        LayoutBlock {
            frame,
            block_type: BlockKind::Paragraph,
            content: BlockContent {
                payload: BlockPayload::Paragraph(paragraph),
                raw: RawBlockData::default(),
            },
            style: StyleDeclaration::default(),
            page_number: 1,
            source_uid: "p1".to_string(),
            sequence: 0,
            page_break_before: false,
            page_break_after: false,
            keep_with_next: false,
            keep_together: false,
            is_watermark: false,
        }
    }

    #[test]
    fn test_new_with_default_config() {
        let config = PDFConfig::default();
        let result = PDFGenerator::new(config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_with_custom_config() {
        let config = PDFConfig {
            page_size: PageSize::A4,
            title: Some("Test".to_string()),
            author: Some("Author".to_string()),
            ..Default::default()
        };
        let result = PDFGenerator::new(config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_add_page() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let result = generator.add_page();
        assert!(result.is_ok());
    }

    #[test]
    fn test_add_text() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let result = generator.add_text("Test", 100.0, 700.0, 12.0);
        assert!(result.is_ok());
    }

    #[test]
    fn test_finalize() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        generator.add_text("Test", 100.0, 700.0, 12.0).unwrap();
        let result = generator.finalize();
        assert!(result.is_ok());
        let pdf_bytes = result.unwrap();
        assert!(!pdf_bytes.is_empty());
        assert!(pdf_bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_layout_empty() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let layout = UnifiedLayout {
            pages: vec![],
            current_page: 0,
        };
        let result = generator.render_layout(&layout);
        assert!(result.is_ok());
    }

    #[test]
    fn test_render_layout_simple() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let mut page = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        page.blocks
            .push(paragraph_block(Rect::new(72.0, 700.0, 200.0, 20.0), "Test"));
        let layout = UnifiedLayout {
            pages: vec![page],
            current_page: 0,
        };
        let result = generator.render_layout(&layout);
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_render_layout_with_progress() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let page = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        let layout = UnifiedLayout {
            pages: vec![page],
            current_page: 0,
        };
        let progress_called = Cell::new(false);
        let result = generator.render_layout_with_progress(
            &layout,
            Some(&|_| {
                progress_called.set(true);
            }),
        );
        assert!(result.is_ok());
        assert!(progress_called.get());
    }

    #[test]
    fn test_render_layout_multi_page() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let mut page1 = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        page1
            .blocks
            .push(paragraph_block(Rect::new(72.0, 700.0, 200.0, 20.0), "Page 1"));
        let mut page2 = LayoutPage::new(2, Size::LETTER, Margins::ONE_INCH);
        page2
            .blocks
            .push(paragraph_block(Rect::new(72.0, 700.0, 200.0, 20.0), "Page 2"));

        let layout = UnifiedLayout {
            pages: vec![page1, page2],
            current_page: 0,
        };
        generator.render_layout(&layout).unwrap();
        let pdf_bytes = generator.finalize().unwrap();
        assert!(pdf_bytes.len() > 100);
    }

    #[test]
    fn test_render_layout_reports_missing_image_as_warning() {
        use layout_types::{ImageLayout, ImageSource};

        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let frame = Rect::new(72.0, 600.0, 100.0, 100.0);
        let image = ImageLayout::new(frame, ImageSource::Path("missing.png".to_string()), true)
            .unwrap();
        let block = LayoutBlock {
            frame,
            block_type: BlockKind::Image,
            content: BlockContent {
                payload: BlockPayload::Image(image),
                raw: RawBlockData::default(),
            },
            style: StyleDeclaration::default(),
            page_number: 1,
            source_uid: "img1".to_string(),
            sequence: 0,
            page_break_before: false,
            page_break_after: false,
            keep_with_next: false,
            keep_together: false,
            is_watermark: false,
        };
        let mut page = LayoutPage::new(1, Size::LETTER, Margins::ONE_INCH);
        page.blocks.push(block);
        let layout = UnifiedLayout {
            pages: vec![page],
            current_page: 0,
        };

        let warnings = generator.render_layout(&layout).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("missing.png"));
    }

    #[test]
    fn test_multi_page_workflow() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        generator.add_text("Page 1", 100.0, 700.0, 12.0).unwrap();
        generator.add_page().unwrap();
        generator.add_text("Page 2", 100.0, 700.0, 12.0).unwrap();
        let pdf_bytes = generator.finalize().unwrap();
        assert!(pdf_bytes.len() > 100);
    }

    #[test]
    fn test_metadata_in_output() {
        let config = PDFConfig {
            title: Some("Test Title".to_string()),
            author: Some("Test Author".to_string()),
            ..Default::default()
        };
        let mut generator = PDFGenerator::new(config).unwrap();
        generator.add_text("Test", 100.0, 700.0, 12.0).unwrap();
        let pdf_bytes = generator.finalize().unwrap();
        let pdf_str = String::from_utf8_lossy(&pdf_bytes);
        assert!(pdf_str.contains("Test Title"));
        assert!(pdf_str.contains("Test Author"));
    }

    #[test]
    fn test_set_image_resources() {
        let mut generator = PDFGenerator::new(PDFConfig::default()).unwrap();
        let mut resources = HashMap::new();
        resources.insert("logo.png".to_string(), vec![0u8; 4]);
        generator.set_image_resources(resources);
    }
}
