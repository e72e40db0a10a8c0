//! Errors surfaced across the `PackageReader`/`SemanticParser` trait boundary

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed-source errors from the external parsing collaborator.
///
/// Propagated to the caller by the trait methods that produce it; the
/// layout-engine decides recoverability when it consumes these (almost
/// always: record a generic block or an empty marker and continue).
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq)]
pub enum ParsingError {
    #[error("part not found: {path}")]
    MissingPart { path: String },
    #[error("malformed XML in {part}: {message}")]
    MalformedXml { part: String, message: String },
    #[error("unresolvable relationship id: {rel_id}")]
    UnresolvableRelationship { rel_id: String },
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature { feature: String },
    #[error("I/O error extracting media: {message}")]
    ExtractionFailed { message: String },
}

impl ParsingError {
    pub fn code(&self) -> &'static str {
        match self {
            ParsingError::MissingPart { .. } => "PARSE_MISSING_PART",
            ParsingError::MalformedXml { .. } => "PARSE_MALFORMED_XML",
            ParsingError::UnresolvableRelationship { .. } => "PARSE_BAD_RELATIONSHIP",
            ParsingError::UnsupportedFeature { .. } => "PARSE_UNSUPPORTED_FEATURE",
            ParsingError::ExtractionFailed { .. } => "PARSE_EXTRACTION_FAILED",
        }
    }

    /// All parsing errors are recoverable per the propagation policy: the
    /// builder records a generic block with a diagnostic and continues.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}
