//! Prompt construction and hosted model access

pub mod huggingface;
pub mod prompt;

pub use huggingface::{collect_fragments, HuggingFaceClient, SseDecoder};
pub use prompt::PromptBuilder;
