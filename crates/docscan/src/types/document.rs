//! Uploaded document and its extraction path

use bytes::Bytes;
use std::path::Path;

use crate::error::{Error, Result};

/// Extraction path selected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Raster image, text recovered through OCR
    Image,
    /// PDF, text read from the text layer
    Pdf,
}

impl FileKind {
    /// Detect the kind from an extension (without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Some(Self::Image),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Detect the kind from a filename, rejecting anything outside the allow-list
    pub fn from_filename(filename: &str) -> Result<Self> {
        let ext = extension_of(filename);
        Self::from_extension(&ext).ok_or_else(|| {
            if ext.is_empty() {
                Error::UnsupportedFormat(format!("'{}' has no extension", filename))
            } else {
                Error::UnsupportedFormat(format!(".{}", ext))
            }
        })
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Pdf => "PDF",
        }
    }
}

/// Lowercase extension of a filename, empty when there is none
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// A single uploaded file, alive for one request
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Declared filename from the multipart field
    pub filename: String,
    /// Raw file content
    pub data: Bytes,
    /// Derived extraction path
    pub kind: FileKind,
}

impl ExtractionRequest {
    /// Build a request, failing with `UnsupportedFormat` for disallowed extensions
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Result<Self> {
        let filename = filename.into();
        let kind = FileKind::from_filename(&filename)?;
        Ok(Self {
            filename,
            data: data.into(),
            kind,
        })
    }

    /// Lowercase extension of the declared filename
    pub fn extension(&self) -> String {
        extension_of(&self.filename)
    }

    /// Size of the upload in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the upload carried no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
