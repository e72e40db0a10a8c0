//! Core PDF document management
//!
//! This module handles PDF document initialization, metadata, and finalization.

use crate::config::PDFConfig;
use crate::error::PDFError;
use crate::timestamp::current_pdf_timestamp;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Document, Object};
use std::io::Write;

/// Core PDF document wrapper with metadata management
pub struct PDFDocumentCore {
    /// The lopdf Document
    pub doc: Document,
    /// Configuration
    config: PDFConfig,
}

impl PDFDocumentCore {
    /// Create a new PDF document with configuration
    pub fn new(config: PDFConfig) -> Result<Self, PDFError> {
        let doc = Document::with_version("1.7");

        Ok(Self { doc, config })
    }

    /// Initialize document catalog and metadata
    pub fn initialize(&mut self, pages_id: (u32, u16)) -> Result<(u32, u16), PDFError> {
        let catalog_id = self.doc.new_object_id();

        let catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        self.doc
            .objects
            .insert(catalog_id, Object::Dictionary(catalog));
        self.doc.trailer.set("Root", catalog_id);

        self.set_metadata()?;

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        self.doc
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        Ok(catalog_id)
    }

    /// Set PDF metadata in Info dictionary
    fn set_metadata(&mut self) -> Result<(), PDFError> {
        let info_id = self.doc.new_object_id();
        let mut info_dict = dictionary! {};

        if let Some(ref title) = self.config.title {
            info_dict.set(
                "Title",
                Object::String(title.as_bytes().to_vec(), lopdf::StringFormat::Literal),
            );
        }

        if let Some(ref author) = self.config.author {
            info_dict.set(
                "Author",
                Object::String(author.as_bytes().to_vec(), lopdf::StringFormat::Literal),
            );
        }

        if let Some(ref subject) = self.config.subject {
            info_dict.set(
                "Subject",
                Object::String(subject.as_bytes().to_vec(), lopdf::StringFormat::Literal),
            );
        }

        if let Some(ref keywords) = self.config.keywords {
            info_dict.set(
                "Keywords",
                Object::String(keywords.as_bytes().to_vec(), lopdf::StringFormat::Literal),
            );
        }

        if let Some(ref creator) = self.config.creator {
            info_dict.set(
                "Creator",
                Object::String(creator.as_bytes().to_vec(), lopdf::StringFormat::Literal),
            );
        }

        info_dict.set(
            "Producer",
            Object::String(b"lopdf document compiler".to_vec(), lopdf::StringFormat::Literal),
        );

        let date_str = current_pdf_timestamp();
        info_dict.set(
            "CreationDate",
            Object::String(date_str.as_bytes().to_vec(), lopdf::StringFormat::Literal),
        );

        self.doc
            .objects
            .insert(info_id, Object::Dictionary(info_dict));
        self.doc.trailer.set("Info", info_id);

        Ok(())
    }

    /// Finalize document and return PDF bytes.
    ///
    /// `page_count` isn't written anywhere — the page tree's own `/Count` is
    /// the PDF-native source of truth; an `Info`-dict `PageCount` entry isn't
    /// a field any reader looks at.
    pub fn finalize(mut self, _page_count: u32) -> Result<Vec<u8>, PDFError> {
        if self.config.compress_content_streams {
            compress_content_streams(&mut self.doc);
        }

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| PDFError::CompilationError(format!("Failed to save PDF: {}", e)))?;

        Ok(buffer)
    }
}

/// Compress each content stream independently, keeping the compressed form
/// only if it ends up smaller than the original — a scanned-image-heavy page
/// that's already near-incompressible shouldn't pay the the `/Filter` and
/// trailing-bytes overhead for nothing.
fn compress_content_streams(doc: &mut Document) {
    let stream_ids: Vec<(u32, u16)> = doc
        .objects
        .iter()
        .filter_map(|(id, obj)| matches!(obj, Object::Stream(_)).then_some(*id))
        .collect();

    for id in stream_ids {
        if let Some(Object::Stream(stream)) = doc.objects.get_mut(&id) {
            if stream.dict.has(b"Filter") {
                continue;
            }
            if let Some(compressed) = deflate(&stream.content) {
                if compressed.len() < stream.content.len() {
                    stream.dict.set("Filter", "FlateDecode");
                    stream.dict.set("Length", compressed.len() as i64);
                    stream.content = compressed;
                }
            }
        }
    }
}

fn deflate(bytes: &[u8]) -> Option<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes).ok()?;
    encoder.finish().ok()
}
