//! Hugging Face provider
//!
//! Wraps the streaming `HuggingFaceClient` to implement the provider trait.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::Result;
use crate::generation::HuggingFaceClient;
use crate::types::ChatMessage;

use super::llm::LlmProvider;

/// Hugging Face LLM provider
pub struct HuggingFaceLlm {
    client: Arc<HuggingFaceClient>,
}

impl HuggingFaceLlm {
    /// Create a new Hugging Face provider
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(Self::from_client(Arc::new(HuggingFaceClient::new(config)?)))
    }

    /// Create a provider around an existing shared client
    pub fn from_client(client: Arc<HuggingFaceClient>) -> Self {
        Self { client }
    }

    /// Get the shared client
    pub fn client(&self) -> Arc<HuggingFaceClient> {
        Arc::clone(&self.client)
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceLlm {
    async fn complete(&self, messages: &[ChatMessage], max_tokens: u32) -> Result<String> {
        self.client.complete(messages, max_tokens).await
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.health_check().await
    }

    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        self.client.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_shares_client() {
        let config = LlmConfig {
            model: "test/model".to_string(),
            ..LlmConfig::default()
        };
        let provider = HuggingFaceLlm::new(&config).unwrap();
        let client = provider.client();

        let other = HuggingFaceLlm::from_client(Arc::clone(&client));
        assert!(Arc::ptr_eq(&client, &other.client()));
        assert_eq!(provider.name(), "huggingface");
        assert_eq!(other.model(), "test/model");
    }
}
