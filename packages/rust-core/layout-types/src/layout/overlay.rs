//! Floating elements anchored outside normal flow

use serde::{Deserialize, Serialize};

use super::image::ImageSource;
use crate::primitives::Rect;

/// What an `OverlayBox` renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayPayload {
    Image {
        source: ImageSource,
        preserve_aspect: bool,
    },
    Textbox {
        /// Flattened text lines; a textbox's internal layout is itself a
        /// `ParagraphLayout` in the general case, but overlay textboxes in
        /// practice carry simple fixed content, so plain lines are kept here
        /// to avoid a recursive type.
        lines: Vec<String>,
    },
    Shape {
        /// VML/DrawingML shape kind, e.g. "rect", "oval", "line".
        shape_kind: String,
    },
}

/// A floating element anchored to the page, a margin, or a column — never
/// involved in body flow.
///
/// Frame is expressed in page coordinates (PDF convention), already
/// resolved by the time it lands on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayBox {
    pub frame: Rect,
    pub payload: OverlayPayload,
    /// Watermarks render behind all other content with a default opacity.
    pub is_watermark: bool,
    /// Explicit opacity override; `None` means use the dispatcher's default
    /// watermark opacity policy (images 0.5, vml_shape 0.3, others 0.35).
    pub opacity: Option<f64>,
}

impl OverlayBox {
    pub fn kind_name(&self) -> &'static str {
        match self.payload {
            OverlayPayload::Image { .. } => "image",
            OverlayPayload::Textbox { .. } => "textbox",
            OverlayPayload::Shape { .. } => "shape",
        }
    }
}
