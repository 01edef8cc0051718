//! Docscan server binary
//!
//! Run with: cargo run -p docscan --bin docscan-server -- --config docscan.toml

use clap::Parser;
use docscan::{config::DocscanConfig, server::DocscanServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Document field extraction server
#[derive(Debug, Parser)]
#[command(name = "docscan-server", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "DOCSCAN_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docscan=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = DocscanConfig::load(cli.config.as_deref())?;

    tracing::info!("Configuration loaded");
    if dotenv_loaded {
        tracing::info!("  - Environment: .env file applied");
    }
    tracing::info!("  - LLM endpoint: {}", config.llm.base_url);
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Max tokens: {}", config.llm.max_tokens);
    tracing::info!("  - OCR: {} ({})", config.ocr.command, config.ocr.language);
    tracing::info!("  - CORS origin: {}", config.server.cors_origin);

    // Create and start server
    let server = DocscanServer::new(config)?;
    server.check_llm().await;

    tracing::info!("Endpoints:");
    tracing::info!("  POST http://{}/upload - Extract fields from a document", server.address());
    tracing::info!("  GET  http://{}/info   - Service information", server.address());
    tracing::info!("  GET  http://{}/health - Liveness check", server.address());

    server.start().await?;

    Ok(())
}
