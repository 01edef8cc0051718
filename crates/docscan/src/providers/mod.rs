//! Provider abstractions for the hosted model
//!
//! The handler only sees `LlmProvider`, so the Hugging Face backend can be
//! swapped for another chat-completion service.

pub mod huggingface;
pub mod llm;

pub use huggingface::HuggingFaceLlm;
pub use llm::LlmProvider;
