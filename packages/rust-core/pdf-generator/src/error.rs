use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `RenderingError` and `MediaError` are recoverable: the caller logs a
/// warning and the compiler substitutes a fallback (blank space, a default
/// font, an empty glyph) rather than aborting the document. `CompilationError`
/// is the only fatal kind — I/O failure, a zero-byte document, or an
/// inconsistent cross-reference table. `ConfigError` is raised at
/// construction time, before any document exists, so it sits outside that
/// recoverability axis entirely.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum PDFError {
    #[error("Rendering error: {0}")]
    RenderingError(String),

    #[error("Media error: {0}")]
    MediaError(String),

    #[error("PDF compilation failed: {0}")]
    CompilationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl PDFError {
    /// Get error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            PDFError::RenderingError(_) => "PDF_RENDERING_ERROR",
            PDFError::MediaError(_) => "PDF_MEDIA_ERROR",
            PDFError::CompilationError(_) => "PDF_COMPILATION_ERROR",
            PDFError::ConfigError(_) => "PDF_CONFIG_ERROR",
        }
    }

    /// Check if error is recoverable (i.e. the compile can proceed with a
    /// fallback rather than aborting).
    pub fn is_recoverable(&self) -> bool {
        match self {
            PDFError::RenderingError(_) => true,
            PDFError::MediaError(_) => true,
            PDFError::CompilationError(_) => false,
            PDFError::ConfigError(_) => true,
        }
    }

    /// Convert a technical error into a message suitable for surfacing to a
    /// caller that isn't going to read a stack trace.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PDFError::RenderingError(msg) => {
                if msg.contains("too large") || msg.contains("exceeds") {
                    "Some content didn't fit within the page and was truncated.".to_string()
                } else if msg.contains("layout") {
                    format!("A layout block couldn't be rendered and was skipped: {}", msg)
                } else {
                    format!("A rendering issue was recovered from: {}", msg)
                }
            }
            PDFError::MediaError(msg) => {
                format!("An image couldn't be embedded and was replaced with blank space: {}", msg)
            }
            PDFError::CompilationError(msg) => {
                format!("PDF compilation failed and could not be recovered from: {}", msg)
            }
            PDFError::ConfigError(msg) => {
                if msg.contains("page size") || msg.contains("margin") {
                    "There's an issue with the page configuration.".to_string()
                } else {
                    format!("There's a configuration issue: {}", msg)
                }
            }
        }
    }
}
