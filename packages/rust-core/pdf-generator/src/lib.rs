//! PDF generation crate.
//!
//! This crate is the final stage in the document-to-PDF pipeline: it takes
//! the positioned [`layout_types::UnifiedLayout`] produced by `layout-engine`
//! and renders it into bytes of a valid PDF document.
//!
//! # Overview
//!
//! The `pdf-generator` crate handles:
//! - **PDF document creation** using the lopdf library
//! - **Font management** restricted to the Standard 14 Type1 fonts, so the
//!   output never depends on embedding
//! - **Multi-page layout rendering** dispatched by block kind (paragraph,
//!   table, image, header/footer, textbox, decorator)
//! - **Image embedding** for inline pictures and page-anchored shapes
//! - **Content stream generation** from positioned layout blocks
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - `generator` - Core PDF document generation ([`PDFGenerator`])
//! - `dispatcher` - Converts layout blocks into PDF content stream operators
//! - `image_registry` - Resolves and embeds picture data as Image XObjects
//! - `font_registry` - Collects the fonts a layout references and assigns
//!   stable resource aliases
//! - `config` - PDF configuration types ([`PDFConfig`], [`PageSize`])
//! - `error` - Error types ([`PDFError`])
//!
//! # Key Types
//!
//! - [`PDFGenerator`] - Main entry point for PDF generation
//! - [`PDFConfig`] - Configuration for page size, margins, and metadata
//! - [`PDFError`] - Error type covering all failure modes
//!
//! # Usage Example
//!
//! ```no_run
//! use pdf_generator::{PDFGenerator, PDFConfig, PageSize};
//! use layout_types::UnifiedLayout;
//!
//! let config = PDFConfig {
//!     page_size: PageSize::A4,
//!     title: Some("Quarterly Report".to_string()),
//!     author: Some("Jane Doe".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut generator = PDFGenerator::new(config).unwrap();
//!
//! let layout = UnifiedLayout::default();
//! generator.render_layout(&layout).unwrap();
//!
//! let pdf_bytes = generator.finalize().unwrap();
//! std::fs::write("report.pdf", &pdf_bytes).unwrap();
//! ```
//!
//! # Error Handling
//!
//! All public APIs return `Result<T, PDFError>`:
//!
//! - `RenderingError` - content rendering or document-structure problems
//! - `MediaError` - image decoding or conversion failures
//! - `CompilationError` - PDF serialization failures
//! - `ConfigError` - invalid configuration parameters
//!
//! Recoverable failures (a missing image stream, an unresolved font) are
//! recorded as warnings on the render result rather than aborting the whole
//! document — a best-effort document beats no document.

pub mod color_utils; // RGB to PDF color conversion utilities
pub mod config;
pub mod content_builder; // PDF content stream builder abstraction
mod document_core; // Document lifecycle management
pub mod dispatcher; // Converts layout blocks into content stream operators
pub mod encoding; // Text encoding utilities for PDF content streams
pub mod error;
mod font_registry; // Font collection and registration
pub mod font_resolver; // Font name resolution based on style
pub mod generator;
pub mod image_registry; // Image XObject resolution and embedding
pub mod number_format; // Numbering/field formatting (page numbers, list counters)
mod page_manager; // Page creation and tracking
mod pdf_operators; // PDF content stream operators for rendering
pub mod text_utils; // Text transformation utilities
mod timestamp; // PDF timestamp generation without chrono

pub use config::{PDFConfig, PageSize};
pub use error::PDFError;
pub use generator::PDFGenerator;
