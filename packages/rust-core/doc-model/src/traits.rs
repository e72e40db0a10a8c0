//! Capability traits the core consumes; concrete implementations (XML/ZIP
//! parsing, WMF/EMF rasterization) are supplied by the caller and are out of
//! scope for this crate.

use std::path::Path;

use crate::error::ParsingError;
use crate::records::{
    EndnoteRecord, ElementRecord, FootnoteRecord, NumberingData, RelationshipMap, SectionRecord,
};

/// Read access to a DOCX package (a ZIP archive of XML parts).
pub trait PackageReader {
    fn get_xml_content(&self, part_path: &str) -> Result<String, ParsingError>;
    fn get_binary_content(&self, part_path: &str) -> Result<Vec<u8>, ParsingError>;
    fn get_relationships(&self, part_path: &str) -> Result<RelationshipMap, ParsingError>;
    fn get_media_files(&self) -> Result<Vec<String>, ParsingError>;
    /// Extract the package to a filesystem root, as a fallback path for
    /// media resolution when in-memory access isn't available.
    fn extract_to(&self, destination: &Path) -> Result<(), ParsingError>;
}

/// Produces the semantic tree the Layout Structure Builder walks.
pub trait SemanticParser {
    fn parse_sections(&self) -> Result<Vec<SectionRecord>, ParsingError>;
    fn parse_body(&self) -> Result<ElementRecord, ParsingError>;
    fn parse_header(&self, rel_id: &str) -> Result<ElementRecord, ParsingError>;
    fn parse_footer(&self, rel_id: &str) -> Result<ElementRecord, ParsingError>;
    fn parse_footnotes(&self) -> Result<Vec<FootnoteRecord>, ParsingError>;
    fn parse_endnotes(&self) -> Result<Vec<EndnoteRecord>, ParsingError>;
    fn numbering_data(&self) -> Result<NumberingData, ParsingError>;
}

/// Rasterizes a WMF/EMF image to PNG. Returns `None` when the image can't
/// be decoded; callers substitute a neutral placeholder in that case.
pub trait ImageConverter: Send + Sync {
    fn convert_emf_to_png(
        &self,
        bytes: &[u8],
        width_hint: Option<u32>,
        height_hint: Option<u32>,
    ) -> Option<Vec<u8>>;
}
