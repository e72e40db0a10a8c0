//! Text encoding utilities for PDF content streams
//!
//! This module provides encoding functions for converting text to PDF-compatible formats:
//! - Legacy PDF literal strings (Standard 14 fonts)
//! - `FEFF`-prefixed UTF-16BE hex strings (any font addressed by Unicode code point)

mod text_encoding;

pub use text_encoding::{encode_utf16be_hex, escape_pdf_string};
