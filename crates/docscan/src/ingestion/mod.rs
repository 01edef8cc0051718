//! Text extraction: OCR for images, text layer for PDFs

pub mod ocr;
pub mod pdf;

pub use ocr::{OcrEngine, TesseractOcr};
pub use pdf::PdfTextExtractor;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::OcrConfig;
use crate::error::{Error, Result};
use crate::types::{ExtractionRequest, FileKind};

/// Picks the extraction path for a request and runs it off the async runtime
#[derive(Clone)]
pub struct TextExtractor {
    ocr: Arc<dyn OcrEngine>,
    temp_dir: PathBuf,
}

impl TextExtractor {
    /// Create a new extractor around a shared OCR engine
    pub fn new(ocr: Arc<dyn OcrEngine>, config: &OcrConfig) -> Self {
        Self {
            ocr,
            temp_dir: config.temp_dir.clone().unwrap_or_else(std::env::temp_dir),
        }
    }

    /// Get the OCR engine
    pub fn ocr_engine(&self) -> &dyn OcrEngine {
        self.ocr.as_ref()
    }

    /// Extract raw text from the uploaded file
    pub async fn extract(&self, request: &ExtractionRequest) -> Result<String> {
        let data = request.data.clone();

        let text = match request.kind {
            FileKind::Image => {
                let engine = Arc::clone(&self.ocr);
                let temp_dir = self.temp_dir.clone();
                let extension = request.extension();
                tokio::task::spawn_blocking(move || {
                    ocr::recognize_bytes(engine.as_ref(), &data, &extension, &temp_dir)
                })
                .await
                .map_err(|e| Error::internal(format!("OCR task failed: {}", e)))??
            }
            FileKind::Pdf => tokio::task::spawn_blocking(move || PdfTextExtractor::extract(&data))
                .await
                .map_err(|e| Error::internal(format!("PDF task failed: {}", e)))??,
        };

        tracing::info!(
            "Extracted {} characters from '{}' ({})",
            text.len(),
            request.filename,
            request.kind.display_name()
        );
        Ok(text)
    }
}
