use serde::{Deserialize, Serialize};

/// Page size dimensions for PDF documents.
///
/// All dimensions are measured in points (1 point = 1/72 inch). These cover
/// the page sizes a `w:pgSz` section property most commonly names.
///
/// # Examples
///
/// ```
/// use pdf_generator::PageSize;
///
/// let letter = PageSize::Letter;
/// let (width, height) = letter.dimensions();
/// assert_eq!(width, 612.0);  // 8.5 inches
/// assert_eq!(height, 792.0); // 11 inches
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum PageSize {
    /// US Letter size (8.5 x 11 inches = 612 x 792 points)
    #[default]
    Letter,

    /// ISO A4 size (210 x 297 mm = 595.276 x 841.890 points)
    A4,

    /// US Legal size (8.5 x 14 inches = 612 x 1008 points)
    Legal,
}

impl PageSize {
    /// Returns the page dimensions as (width, height) in points.
    ///
    /// ```
    /// use pdf_generator::PageSize;
    ///
    /// let a4 = PageSize::A4;
    /// let (width, height) = a4.dimensions();
    /// assert_eq!(width, 595.276);
    /// assert_eq!(height, 841.890);
    /// ```
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.276, 841.890),
            PageSize::Legal => (612.0, 1008.0),
        }
    }
}

/// Default watermark opacities (§4.8), overridable per compiler run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WatermarkOpacities {
    /// Default opacity for image watermarks.
    pub images: f64,
    /// Default opacity for VML shape watermarks.
    pub vml_shape: f64,
    /// Default opacity for any other watermark block kind.
    pub default: f64,
}

impl Default for WatermarkOpacities {
    fn default() -> Self {
        Self { images: 0.5, vml_shape: 0.3, default: 0.35 }
    }
}

/// Configuration for PDF document generation.
///
/// Contains the settings this crate needs to compile an already-laid-out
/// `UnifiedLayout` into PDF bytes: page dimensions, document metadata, and
/// the handful of compiler-level knobs (compression, watermark opacity
/// overrides) that aren't decided upstream.
///
/// # Examples
///
/// ```
/// use pdf_generator::{PDFConfig, PageSize};
///
/// let config = PDFConfig::default();
///
/// let custom_config = PDFConfig {
///     page_size: PageSize::A4,
///     title: Some("Quarterly Report".to_string()),
///     author: Some("Jane Doe".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PDFConfig {
    /// Page size (Letter, A4, or Legal). The layout this crate is handed is
    /// assumed to already be sized for this page; this value only controls
    /// the emitted `/MediaBox`.
    pub page_size: PageSize,

    /// Document title (appears in PDF Info dict)
    pub title: Option<String>,

    /// Document author (appears in PDF Info dict)
    pub author: Option<String>,

    /// Document subject/description (appears in PDF Info dict)
    pub subject: Option<String>,

    /// Document keywords for searchability (appears in PDF Info dict)
    pub keywords: Option<String>,

    /// Creator application name (appears in PDF Info dict)
    pub creator: Option<String>,

    /// Default watermark opacities, overridable per compile.
    #[serde(default)]
    pub watermark_opacities: WatermarkOpacities,

    /// Enable content stream compression (DEFLATE).
    ///
    /// Each page's content stream is compressed independently and the
    /// compressed form kept only if it's smaller than the original — see
    /// `document_core`'s finalize step.
    #[serde(default)]
    pub compress_content_streams: bool,
}

impl Default for PDFConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: None,
            watermark_opacities: WatermarkOpacities::default(),
            compress_content_streams: false,
        }
    }
}
