//! API routes for the docscan server

pub mod upload;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for scans
        .route(
            "/upload",
            post(upload::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let adapter = state.adapter();
    Json(serde_json::json!({
        "name": "docscan",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Extracts name, document number and expiration date from ID scans",
        "ocr_engine": adapter.extractor().ocr_engine().name(),
        "llm": {
            "provider": adapter.llm().name(),
            "model": adapter.llm().model(),
        },
        "endpoints": {
            "POST /upload": "Upload an image (.jpg, .jpeg, .png, .webp) or PDF as multipart field 'file'",
            "GET /info": "Service information",
            "GET /health": "Liveness check"
        }
    }))
}
