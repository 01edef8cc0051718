//! LLM provider trait for field extraction

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ChatMessage;

/// Trait for hosted chat-completion models
///
/// Implementations:
/// - `HuggingFaceLlm`: Hugging Face inference router (Mistral-7B-Instruct by default)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send `messages` and return the model's full answer, capped at `max_tokens`
    async fn complete(&self, messages: &[ChatMessage], max_tokens: u32) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
