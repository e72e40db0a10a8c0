//! Positioned image content

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::primitives::Rect;

/// A positioned, already-measured image block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayout {
    pub frame: Rect,
    /// Either a filesystem/package path or a registered stream key; the
    /// compiler's image registry resolves whichever is present.
    pub source: ImageSource,
    pub preserve_aspect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageSource {
    Path(String),
    StreamKey(String),
}

impl ImageLayout {
    /// Construct an image layout, rejecting non-positive dimensions per the
    /// `ImageLayout` invariant (`width,height > 0`).
    pub fn new(
        frame: Rect,
        source: ImageSource,
        preserve_aspect: bool,
    ) -> Result<Self, ValidationError> {
        if frame.width <= 0.0 {
            return Err(ValidationError::NegativeDimension(frame.width));
        }
        if frame.height <= 0.0 {
            return Err(ValidationError::NegativeDimension(frame.height));
        }
        Ok(Self {
            frame,
            source,
            preserve_aspect,
        })
    }
}
