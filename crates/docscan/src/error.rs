//! Error types for the extraction service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::response::ErrorBody;

/// Result type alias for docscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Docscan errors
#[derive(Debug, Error)]
pub enum Error {
    /// Upload carried no `file` field
    #[error("No file provided")]
    MissingFile,

    /// Extension outside the allow-list
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Upload exceeded the configured size limit
    #[error("File too large: uploads are limited to {0} bytes")]
    PayloadTooLarge(usize),

    /// Malformed multipart body
    #[error("Invalid multipart body: {0}")]
    Multipart(String),

    /// OCR engine failure
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// PDF could not be parsed
    #[error("Failed to parse PDF: {0}")]
    PdfParse(String),

    /// Hosted model error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an OCR error
    pub fn ocr(message: impl Into<String>) -> Self {
        Self::Ocr(message.into())
    }

    /// Create a PDF parse error
    pub fn pdf_parse(message: impl Into<String>) -> Self {
        Self::PdfParse(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error.
    ///
    /// Only request-shape problems are client errors; every pipeline failure
    /// is reported as a plain 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFile | Error::UnsupportedFormat(_) | Error::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::warn!("Rejected request: {}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
