//! Core types for the extraction service

pub mod document;
pub mod message;
pub mod response;

pub use document::{ExtractionRequest, FileKind};
pub use message::{ChatMessage, Role};
pub use response::{ErrorBody, ExtractionResponse};
