//! PDF Generator Error Tests
//!
//! Tests for PDFError enum and error handling, including error codes,
//! recoverability flags, and serialization/deserialization.

#[cfg(test)]
mod tests {
    use pdf_generator::PDFError;

    #[test]
    fn test_rendering_error_code() {
        let error = PDFError::RenderingError("block could not be placed".to_string());
        assert_eq!(error.code(), "PDF_RENDERING_ERROR");
        assert_eq!(
            error.to_string(),
            "Rendering error: block could not be placed"
        );
    }

    #[test]
    fn test_media_error_code() {
        let error = PDFError::MediaError("unsupported image format".to_string());
        assert_eq!(error.code(), "PDF_MEDIA_ERROR");
        assert_eq!(error.to_string(), "Media error: unsupported image format");
    }

    #[test]
    fn test_compilation_error_code() {
        let error = PDFError::CompilationError("xref table inconsistent".to_string());
        assert_eq!(error.code(), "PDF_COMPILATION_ERROR");
        assert_eq!(
            error.to_string(),
            "PDF compilation failed: xref table inconsistent"
        );
    }

    #[test]
    fn test_config_error_code() {
        let error = PDFError::ConfigError("invalid page size".to_string());
        assert_eq!(error.code(), "PDF_CONFIG_ERROR");
        assert_eq!(error.to_string(), "Invalid configuration: invalid page size");
    }

    #[test]
    fn test_rendering_error_is_recoverable() {
        let error = PDFError::RenderingError("missing font".to_string());
        assert!(error.is_recoverable(), "RenderingError should be recoverable");
    }

    #[test]
    fn test_media_error_is_recoverable() {
        let error = PDFError::MediaError("decode failure".to_string());
        assert!(error.is_recoverable(), "MediaError should be recoverable");
    }

    #[test]
    fn test_compilation_error_not_recoverable() {
        let error = PDFError::CompilationError("save failed".to_string());
        assert!(
            !error.is_recoverable(),
            "CompilationError should not be recoverable"
        );
    }

    #[test]
    fn test_config_error_is_recoverable() {
        let error = PDFError::ConfigError("bad margin".to_string());
        assert!(error.is_recoverable(), "ConfigError should be recoverable");
    }

    #[test]
    fn test_user_friendly_message_rendering_too_large() {
        let error = PDFError::RenderingError("content too large for page".to_string());
        let msg = error.user_friendly_message();
        assert!(msg.contains("didn't fit"));
    }

    #[test]
    fn test_user_friendly_message_media_error() {
        let error = PDFError::MediaError("corrupt PNG".to_string());
        let msg = error.user_friendly_message();
        assert!(msg.contains("image couldn't be embedded"));
        assert!(msg.contains("corrupt PNG"));
    }

    #[test]
    fn test_user_friendly_message_compilation_error() {
        let error = PDFError::CompilationError("disk full".to_string());
        let msg = error.user_friendly_message();
        assert!(msg.contains("could not be recovered"));
    }

    #[test]
    fn test_user_friendly_message_config_error_page_size() {
        let error = PDFError::ConfigError("invalid page size requested".to_string());
        let msg = error.user_friendly_message();
        assert!(msg.contains("page configuration"));
    }

    #[test]
    fn test_error_serialization() {
        let error = PDFError::RenderingError("test error".to_string());
        let serialized = serde_json::to_string(&error);
        assert!(serialized.is_ok(), "Error should be serializable");

        let json = serialized.unwrap();
        assert!(
            json.contains("RenderingError"),
            "Serialized error should contain variant name"
        );
        assert!(
            json.contains("test error"),
            "Serialized error should contain message"
        );
    }

    #[test]
    fn test_error_deserialization() {
        let json = r#"{"MediaError":"resource not available"}"#;
        let deserialized: Result<PDFError, _> = serde_json::from_str(json);

        assert!(deserialized.is_ok(), "Error should be deserializable");

        let error = deserialized.unwrap();
        match &error {
            PDFError::MediaError(msg) => {
                assert_eq!(msg, "resource not available");
                assert_eq!(error.code(), "PDF_MEDIA_ERROR");
            }
            _ => panic!("Expected MediaError variant"),
        }
    }
}
