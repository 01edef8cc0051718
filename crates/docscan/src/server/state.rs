//! Application state for the docscan server

use std::sync::Arc;

use crate::config::DocscanConfig;
use crate::error::Result;
use crate::ingestion::{OcrEngine, TesseractOcr, TextExtractor};
use crate::processing::ExtractionAdapter;
use crate::providers::{HuggingFaceLlm, LlmProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: DocscanConfig,
    /// Extraction pipeline holding the process-wide OCR engine and model client
    adapter: ExtractionAdapter,
}

impl AppState {
    /// Create application state with the tesseract engine and the Hugging Face client
    pub fn new(config: DocscanConfig) -> Result<Self> {
        tracing::info!("Initializing docscan application state...");

        let ocr = TesseractOcr::new(&config.ocr);
        if ocr.is_available() {
            tracing::info!("OCR engine initialized ({})", config.ocr.command);
        } else {
            tracing::warn!(
                "'{}' not found; image uploads will fail. Install with: apt install tesseract-ocr",
                config.ocr.command
            );
        }

        let llm = HuggingFaceLlm::new(&config.llm)?;
        tracing::info!("LLM client initialized (model: {})", config.llm.model);
        if config.llm.api_key.is_none() {
            tracing::warn!(
                "{} is not set; requests to {} will be unauthenticated",
                crate::config::API_KEY_ENV,
                config.llm.base_url
            );
        }

        Ok(Self::with_providers(config, Arc::new(ocr), Arc::new(llm)))
    }

    /// Create application state around explicit OCR and LLM providers
    pub fn with_providers(
        config: DocscanConfig,
        ocr: Arc<dyn OcrEngine>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        let extractor = TextExtractor::new(ocr, &config.ocr);
        let adapter = ExtractionAdapter::new(extractor, llm, config.llm.max_tokens);

        Self {
            inner: Arc::new(AppStateInner { config, adapter }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &DocscanConfig {
        &self.inner.config
    }

    /// Get the extraction adapter
    pub fn adapter(&self) -> &ExtractionAdapter {
        &self.inner.adapter
    }
}
