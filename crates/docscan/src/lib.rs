//! docscan: document field extraction service
//!
//! Accepts an uploaded ID scan (image or PDF), recovers its text through OCR
//! or the PDF text layer, and asks a hosted language model to pull out the
//! holder's name, document number and expiration date. The model's answer is
//! returned as-is.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod processing;
pub mod providers;
pub mod server;
pub mod types;

pub use config::DocscanConfig;
pub use error::{Error, Result};
pub use processing::ExtractionAdapter;
pub use server::{build_router, state::AppState, DocscanServer};
pub use types::{ExtractionRequest, ExtractionResponse, FileKind};
