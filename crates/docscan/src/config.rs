//! Configuration for the extraction service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable holding the hosted model API key
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Main docscan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocscanConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// OCR engine configuration
    pub ocr: OcrConfig,
    /// Hosted model configuration
    pub llm: LlmConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// The single origin allowed to make cross-origin requests
    pub cors_origin: String,
    /// Maximum upload size in bytes (default: 20MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origin: "http://localhost:5173".to_string(),
            max_upload_size: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// OCR configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract binary
    pub command: String,
    /// Tesseract language code
    pub language: String,
    /// Directory for scoped temp files (system temp dir when unset)
    pub temp_dir: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            language: "eng".to_string(),
            temp_dir: None,
        }
    }
}

/// Hosted LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Output token budget per request
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// API key, only ever taken from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/v1".to_string(),
            model: "mistralai/Mistral-7B-Instruct-v0.3".to_string(),
            max_tokens: 500,
            timeout_secs: 120,
            api_key: None,
        }
    }
}

impl DocscanConfig {
    /// Load configuration: defaults, then the optional TOML file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&raw)
    }

    /// Parse TOML configuration text
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(host) = lookup("DOCSCAN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DOCSCAN_PORT") {
            self.server.port = parse_env("DOCSCAN_PORT", &port)?;
        }
        if let Some(origin) = lookup("DOCSCAN_CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }
        if let Some(model) = lookup("DOCSCAN_MODEL") {
            self.llm.model = model;
        }
        if let Some(url) = lookup("DOCSCAN_LLM_BASE_URL") {
            self.llm.base_url = url;
        }
        if let Some(tokens) = lookup("DOCSCAN_MAX_TOKENS") {
            self.llm.max_tokens = parse_env("DOCSCAN_MAX_TOKENS", &tokens)?;
        }
        if let Some(command) = lookup("DOCSCAN_OCR_COMMAND") {
            self.ocr.command = command;
        }
        if let Some(language) = lookup("DOCSCAN_OCR_LANGUAGE") {
            self.ocr.language = language;
        }
        Ok(())
    }

    /// Listen address as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} = {:?}: {}", key, value, e)))
}
