//! Image XObject registration for embedded and converted pictures
//!
//! Bytes arrive from two places: a `ImageSource::Path` resolves against a
//! resource map the caller supplies up front (the document's embedded media,
//! already extracted from the source package); a `ImageSource::StreamKey`
//! resolves against an [`ImageCache`](image_cache::ImageCache), the product of
//! an async WMF/EMF-to-PNG conversion kicked off earlier in the pipeline.
//! Either way the registry decodes the bytes once, builds an Image XObject,
//! and memoizes it by key so a picture reused across pages (a repeated
//! watermark, a masthead) is embedded exactly once.

use crate::color_utils::rgb_to_pdf_color;
use crate::error::PDFError;
use image::{DynamicImage, GenericImageView};
use image_cache::ImageCache;
use layout_types::Color;
use lopdf::{dictionary, Document, Object, Stream};
use std::collections::HashMap;

/// Resolves image bytes by key and embeds them as PDF Image XObjects,
/// memoizing the resulting object id so repeated references share one copy.
#[derive(Default)]
pub struct ImageRegistry {
    embedded: HashMap<String, (u32, u16)>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and embed the image at `key`, returning its XObject id.
    ///
    /// `resources` holds package-relative path bytes; `cache` holds
    /// already-converted stream-key bytes. Returns `Ok(None)` (not an error)
    /// when neither source has the bytes — callers substitute blank space
    /// and record a warning, per the dispatcher's recoverable-media policy.
    pub fn resolve(
        &mut self,
        doc: &mut Document,
        key: &str,
        resources: &HashMap<String, Vec<u8>>,
        cache: &ImageCache,
    ) -> Result<Option<(u32, u16)>, PDFError> {
        if let Some(id) = self.embedded.get(key) {
            return Ok(Some(*id));
        }

        let bytes = match resources.get(key) {
            Some(bytes) => Some(bytes.clone()),
            None => cache.get(key, true),
        };

        let Some(bytes) = bytes else {
            return Ok(None);
        };

        let id = self.embed(doc, &bytes)?;
        self.embedded.insert(key.to_string(), id);
        Ok(Some(id))
    }

    /// Decode `bytes` and add an Image XObject to the document.
    ///
    /// Alpha is composited against white rather than carried as an SMask —
    /// simpler, and watermark/photo content in this pipeline never needs a
    /// true transparent background once placed on a page.
    fn embed(&self, doc: &mut Document, bytes: &[u8]) -> Result<(u32, u16), PDFError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| PDFError::MediaError(format!("Failed to decode image: {}", e)))?;

        let (width, height) = image.dimensions();
        let (color_space, bits_per_component, samples) = rgb_samples(&image);

        let stream_dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => color_space,
            "BitsPerComponent" => bits_per_component as i64,
        };

        let mut stream = Stream::new(stream_dict, samples);
        stream
            .compress()
            .map_err(|e| PDFError::MediaError(format!("Failed to compress image stream: {}", e)))?;

        Ok(doc.add_object(Object::Stream(stream)))
    }

    /// Add an already-embedded XObject to a page's `/Resources /XObject`
    /// dictionary under `name`.
    pub fn add_to_page_resources(
        doc: &mut Document,
        page_id: (u32, u16),
        name: &str,
        image_id: (u32, u16),
    ) -> Result<(), PDFError> {
        let page_obj = doc
            .get_object_mut(page_id)
            .map_err(|e| PDFError::RenderingError(format!("Failed to get page: {}", e)))?;

        let Object::Dictionary(page_dict) = page_obj else {
            return Err(PDFError::RenderingError(
                "Page is not a dictionary".to_string(),
            ));
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
                    .map_err(|e| {
                        PDFError::RenderingError(format!("Failed to create resources: {}", e))
                    })?
            }
        };

        let xobjects = match resources.get(b"XObject") {
            Ok(Object::Dictionary(_)) => resources
                .get_mut(b"XObject")
                .and_then(|obj| obj.as_dict_mut())
                .map_err(|e| PDFError::RenderingError(format!("Invalid XObjects: {}", e)))?,
            _ => {
                resources.set("XObject", dictionary! {});
                resources
                    .get_mut(b"XObject")
                    .and_then(|obj| obj.as_dict_mut())
                    .map_err(|e| {
                        PDFError::RenderingError(format!("Failed to create XObjects: {}", e))
                    })?
            }
        };

        xobjects.set(name, Object::Reference(image_id));
        Ok(())
    }
}

/// Flatten a decoded image to 8-bit-per-channel RGB samples, compositing
/// any alpha channel against white.
fn rgb_samples(image: &DynamicImage) -> (&'static str, u8, Vec<u8>) {
    let rgba = image.to_rgba8();
    let mut samples = Vec::with_capacity(rgba.len() / 4 * 3);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let composited = composite_against_white(
            Color {
                r,
                g,
                b,
                a: a as f32 / 255.0,
            },
        );
        samples.push(composited.r);
        samples.push(composited.g);
        samples.push(composited.b);
    }
    ("DeviceRGB", 8, samples)
}

/// Alpha-composite a color against a white background, per the standard
/// `out = src*alpha + white*(1-alpha)` formula.
fn composite_against_white(color: Color) -> Color {
    let alpha = color.a.clamp(0.0, 1.0);
    let blend = |channel: u8| -> u8 {
        let src = channel as f32;
        (src * alpha + 255.0 * (1.0 - alpha)).round() as u8
    };
    Color {
        r: blend(color.r),
        g: blend(color.g),
        b: blend(color.b),
        a: 1.0,
    }
}

/// Kept for symmetry with `color_utils`'s RGB conversion used elsewhere in
/// content-stream rendering; unused here but documents the shared (r,g,b)
/// contract between this module and `pdf_operators`.
#[allow(dead_code)]
fn as_pdf_fill(color: Color) -> (f64, f64, f64) {
    rgb_to_pdf_color(&color)
}
