//! Document upload endpoint

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::ExtractionResponse;

/// Multipart field carrying the document
const FILE_FIELD: &str = "file";

/// POST /upload - Extract fields from an uploaded image or PDF
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionResponse>> {
    // A body that is not multipart at all carries no file either
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Rejected non-multipart upload: {}", e);
        Error::MissingFile
    })?;

    let max_upload_size = state.config().server.max_upload_size;
    let (filename, data) = read_file_field(&mut multipart, max_upload_size).await?;
    let extracted_data = state.adapter().handle_upload(&filename, data).await?;

    Ok(Json(ExtractionResponse { extracted_data }))
}

/// Read the first `file` field, ignoring every other field
async fn read_file_field(
    multipart: &mut Multipart,
    max_upload_size: usize,
) -> Result<(String, Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_upload_size, "Failed to read form"))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(Error::MissingFile),
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_upload_size, "Failed to read file"))?;

        return Ok((filename, data));
    }

    Err(Error::MissingFile)
}

/// Body-limit overruns become 413, anything else is a malformed body
fn multipart_error(err: MultipartError, max_upload_size: usize, context: &str) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(max_upload_size)
    } else {
        Error::Multipart(format!("{}: {}", context, err.body_text()))
    }
}
