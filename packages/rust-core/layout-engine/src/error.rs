//! Error types for the layout engine
//!
//! Every variant here is recoverable per the pipeline's error-propagation
//! policy: the assembler attaches the error to the offending block's
//! warnings and emits a generic placeholder instead of aborting the whole
//! document. Only the PDF compiler stage can raise a fatal error.

use thiserror::Error;

/// Errors that can occur while building or packing a layout.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Text or table measurement could not produce a usable size.
    #[error("measurement failed for {source_uid}: {message}")]
    MeasurementFailed { source_uid: String, message: String },

    /// A table's declared grid and its rows' cell spans disagree.
    #[error("table column mismatch in {source_uid}: {message}")]
    TableColumnMismatch { source_uid: String, message: String },

    /// A block could not be made to fit on any page (e.g. a `cant_split`
    /// row taller than the whole body region).
    #[error("content overflow in {source_uid}: {message}")]
    ContentOverflow { source_uid: String, message: String },

    /// A textbox-within-textbox nesting exceeded the depth the assembler
    /// is willing to walk; the remainder is replaced with a generic block
    /// tagged `_circular_ref`.
    #[error("nesting depth exceeded at {source_uid} (depth {depth})")]
    CircularReference { source_uid: String, depth: usize },
}

impl LayoutError {
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::MeasurementFailed { .. } => "LAYOUT_MEASUREMENT_FAILED",
            LayoutError::TableColumnMismatch { .. } => "LAYOUT_TABLE_COLUMN_MISMATCH",
            LayoutError::ContentOverflow { .. } => "LAYOUT_CONTENT_OVERFLOW",
            LayoutError::CircularReference { .. } => "LAYOUT_CIRCULAR_REFERENCE",
        }
    }

    pub fn source_uid(&self) -> &str {
        match self {
            LayoutError::MeasurementFailed { source_uid, .. }
            | LayoutError::TableColumnMismatch { source_uid, .. }
            | LayoutError::ContentOverflow { source_uid, .. }
            | LayoutError::CircularReference { source_uid, .. } => source_uid,
        }
    }

    /// All layout errors are recoverable: the caller skips or substitutes
    /// the offending block and records a warning.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}
