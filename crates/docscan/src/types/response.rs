//! HTTP response bodies

use serde::{Deserialize, Serialize};

/// Successful `/upload` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionResponse {
    /// The model's free-text answer, unparsed
    pub extracted_data: String,
}

/// Error response for both 4xx and 5xx
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
