//! HTTP server for the extraction service

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::DocscanConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Docscan HTTP server
pub struct DocscanServer {
    config: DocscanConfig,
    state: AppState,
}

impl DocscanServer {
    /// Create a new server with the default OCR engine and model client
    pub fn new(config: DocscanConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Log whether the hosted model endpoint is reachable
    pub async fn check_llm(&self) {
        let llm = self.state.adapter().llm();
        tracing::info!("Checking {} at {}...", llm.name(), self.config.llm.base_url);
        match llm.health_check().await {
            Ok(true) => tracing::info!("{} is reachable", llm.name()),
            _ => tracing::warn!(
                "{} not reachable at {}; uploads will fail until it is",
                llm.name(),
                self.config.llm.base_url
            ),
        }
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = build_router(self.state)?;

        tracing::info!("Starting docscan server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        self.config.address()
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config().server.cors_origin)?;
    let max_upload_size = state.config().server.max_upload_size;

    Ok(Router::new()
        // Health check
        .route("/health", get(health_check))
        .merge(routes::api_routes(max_upload_size))
        .with_state(state)
        // Middleware layers (order matters - applied bottom to top)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// CORS restricted to the single configured origin
fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| Error::Config(format!("Invalid CORS origin {:?}: {}", origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
