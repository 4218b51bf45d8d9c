//! Document Export Port - Output kinds, exported files, and page composition.
//!
//! A captured region leaves the system either as a PNG image or as a
//! single-page PDF that embeds that image. The domain depends on
//! [`DocumentComposer`]; adapters provide the PDF writer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RasterImage;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for composing a raster image into a paged document.
///
/// # Contract
///
/// Implementations must:
/// - Produce exactly one page sized to the image's pixel dimensions
/// - Orient the page landscape (width is the longer edge)
/// - Place the image at the top-left corner at native size
#[async_trait]
pub trait DocumentComposer: Send + Sync {
    async fn compose(&self, image: &RasterImage) -> Result<Vec<u8>, ExportError>;
}

/// Output kinds an export can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// PNG raster image.
    Image,
    /// Single-page PDF embedding the raster image.
    Document,
}

impl ExportKind {
    /// Get the MIME content type for this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportKind::Image => "image/png",
            ExportKind::Document => "application/pdf",
        }
    }

    /// Get the file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Image => "png",
            ExportKind::Document => "pdf",
        }
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportKind::Image => write!(f, "image"),
            ExportKind::Document => write!(f, "document"),
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" | "png" => Ok(ExportKind::Image),
            "document" | "pdf" => Ok(ExportKind::Document),
            _ => Err(ExportError::UnsupportedKind(s.to_string())),
        }
    }
}

/// A finished export ready to be handed to the user as a download.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// The file content.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Name the download is saved under.
    pub file_name: String,
    /// The kind that was produced.
    pub kind: ExportKind,
}

impl ExportedFile {
    pub fn new(content: Vec<u8>, kind: ExportKind, file_name: impl Into<String>) -> Self {
        Self {
            content,
            content_type: kind.content_type().to_string(),
            file_name: file_name.into(),
            kind,
        }
    }
}

/// Errors that can occur while exporting a region.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unknown output kind requested.
    #[error("Unsupported export kind: {0}")]
    UnsupportedKind(String),

    /// The region could not be turned into pixels.
    #[error("Rasterization failed: {0}")]
    RasterizationFailed(String),

    /// The pixels could not be encoded as an image file.
    #[error("Image encoding failed: {0}")]
    EncodingFailed(String),

    /// The document could not be written.
    #[error("Document composition failed: {0}")]
    CompositionFailed(String),
}

impl ExportError {
    pub fn rasterization_failed(reason: impl Into<String>) -> Self {
        Self::RasterizationFailed(reason.into())
    }

    pub fn encoding_failed(reason: impl Into<String>) -> Self {
        Self::EncodingFailed(reason.into())
    }

    pub fn composition_failed(reason: impl Into<String>) -> Self {
        Self::CompositionFailed(reason.into())
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        let code = match &err {
            ExportError::UnsupportedKind(_) => ErrorCode::UnknownValue,
            ExportError::RasterizationFailed(_) => ErrorCode::RasterizationFailed,
            ExportError::EncodingFailed(_) => ErrorCode::EncodingFailed,
            ExportError::CompositionFailed(_) => ErrorCode::CompositionFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_kind_content_types_are_correct() {
        assert_eq!(ExportKind::Image.content_type(), "image/png");
        assert_eq!(ExportKind::Document.content_type(), "application/pdf");
    }

    #[test]
    fn export_kind_parses_from_string() {
        assert_eq!("image".parse::<ExportKind>().unwrap(), ExportKind::Image);
        assert_eq!("PNG".parse::<ExportKind>().unwrap(), ExportKind::Image);
        assert_eq!("document".parse::<ExportKind>().unwrap(), ExportKind::Document);
        assert_eq!("pdf".parse::<ExportKind>().unwrap(), ExportKind::Document);
    }

    #[test]
    fn export_kind_parse_rejects_unknown_kind() {
        let result = "docx".parse::<ExportKind>();
        assert!(matches!(result.unwrap_err(), ExportError::UnsupportedKind(_)));
    }

    #[test]
    fn exported_file_takes_content_type_from_kind() {
        let file = ExportedFile::new(vec![0x25, 0x50, 0x44, 0x46], ExportKind::Document, "a.pdf");
        assert_eq!(file.content_type, "application/pdf");
        assert_eq!(file.file_name, "a.pdf");
    }

    #[test]
    fn export_error_displays_messages() {
        let err = ExportError::composition_failed("xref");
        assert!(err.to_string().contains("Document composition failed"));
        let err = ExportError::rasterization_failed("empty region");
        assert!(err.to_string().contains("empty region"));
    }

    #[test]
    fn export_error_maps_to_domain_code() {
        let err: DomainError = ExportError::encoding_failed("png").into();
        assert_eq!(err.code, ErrorCode::EncodingFailed);
        let err: DomainError = ExportError::UnsupportedKind("gif".to_string()).into();
        assert_eq!(err.code, ErrorCode::UnknownValue);
    }

    #[test]
    fn document_composer_is_object_safe() {
        fn check<T: DocumentComposer + ?Sized>() {}
        check::<dyn DocumentComposer>();
    }
}
