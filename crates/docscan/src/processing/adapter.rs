//! The extraction adapter behind `POST /upload`

use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::ingestion::TextExtractor;
use crate::providers::LlmProvider;
use crate::types::ExtractionRequest;

/// Chains text extraction and the hosted model for a single upload
pub struct ExtractionAdapter {
    extractor: TextExtractor,
    llm: Arc<dyn LlmProvider>,
    max_tokens: u32,
}

impl ExtractionAdapter {
    /// Create a new adapter
    pub fn new(extractor: TextExtractor, llm: Arc<dyn LlmProvider>, max_tokens: u32) -> Self {
        Self {
            extractor,
            llm,
            max_tokens,
        }
    }

    /// Get the text extractor
    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }

    /// Get the LLM provider
    pub fn llm(&self) -> &dyn LlmProvider {
        self.llm.as_ref()
    }

    /// Extract text from the upload and return the model's unparsed answer
    pub async fn handle_upload(&self, filename: &str, data: Bytes) -> Result<String> {
        let start = Instant::now();
        let request = ExtractionRequest::new(filename, data)?;

        tracing::info!(
            "Processing upload: {} ({} bytes, {})",
            request.filename,
            request.len(),
            request.kind.display_name()
        );

        let text = self.extractor.extract(&request).await?;
        if text.trim().is_empty() {
            tracing::warn!("No text extracted from '{}'", request.filename);
        }

        let messages = PromptBuilder::extraction_messages(&text);
        let answer = self.llm.complete(&messages, self.max_tokens).await?;

        tracing::info!(
            "Processed '{}' with {} in {}ms",
            request.filename,
            self.llm.model(),
            start.elapsed().as_millis()
        );

        Ok(answer)
    }
}
