//! Hugging Face inference client (OpenAI-compatible chat completions)
//!
//! Responses are always requested as Server-Sent Events and drained into a
//! single string before returning.

use futures_util::{Stream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::types::ChatMessage;

/// Hugging Face chat-completions client
pub struct HuggingFaceClient {
    /// HTTP client
    client: Client,
    /// Configuration
    config: LlmConfig,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
}

#[derive(Deserialize, Default)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

impl HuggingFaceClient {
    /// Create a new client
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Check if the inference endpoint answers
    pub async fn health_check(&self) -> Result<bool> {
        let mut request = self.client.get(self.url("models"));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Start a streaming chat completion and return its text fragments
    pub async fn chat_stream(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<impl Stream<Item = Result<String>> + Send> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens,
            stream: true,
        };

        let mut request = self.client.post(self.url("chat/completions")).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        tracing::info!(
            "Requesting completion from {} (max_tokens: {})",
            self.config.model,
            max_tokens
        );

        let response = request
            .send()
            .await
            .map_err(|e| Error::llm(format!("Chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Chat completion failed: HTTP {} - {}",
                status, body
            )));
        }

        // The decoder lives in the unfold state so its tail is flushed once the body ends
        let bytes = Box::pin(response.bytes_stream());
        let fragments = futures_util::stream::unfold(
            Some((bytes, SseDecoder::default())),
            |state| async move {
                let (mut bytes, mut decoder) = state?;
                match bytes.next().await {
                    Some(Ok(chunk)) => {
                        let items = parse_payloads(decoder.push(&chunk));
                        Some((items, Some((bytes, decoder))))
                    }
                    Some(Err(e)) => {
                        let items = vec![Err(Error::llm(format!("Stream error: {}", e)))];
                        Some((items, None))
                    }
                    None => Some((parse_payloads(decoder.finish()), None)),
                }
            },
        )
        .flat_map(futures_util::stream::iter);

        Ok(fragments)
    }

    /// Run a chat completion and return the full answer
    pub async fn complete(&self, messages: &[ChatMessage], max_tokens: u32) -> Result<String> {
        let stream = self.chat_stream(messages, max_tokens).await?;
        let answer = collect_fragments(stream).await?;
        tracing::info!("Model answered with {} characters", answer.len());
        Ok(answer)
    }
}

/// Drain a fragment stream into one string, stopping at the first error
pub async fn collect_fragments<S>(stream: S) -> Result<String>
where
    S: Stream<Item = Result<String>>,
{
    futures_util::pin_mut!(stream);

    let mut output = String::new();
    while let Some(fragment) = stream.next().await {
        output.push_str(&fragment?);
    }
    Ok(output)
}

/// Incremental Server-Sent Events decoder.
///
/// Bytes are buffered until a full line is available, so `data:` lines split
/// across network chunks (including inside multi-byte characters) decode
/// correctly.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    /// Feed a network chunk, returning the `data:` payloads of every completed line
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            if let Some(payload) = data_payload(&line) {
                payloads.push(payload.to_string());
            }
        }
        payloads
    }

    /// Flush a trailing line left without a newline when the body ended
    pub fn finish(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&rest);
        data_payload(&line).map(str::to_string)
    }
}

fn parse_payloads(payloads: impl IntoIterator<Item = String>) -> Vec<Result<String>> {
    payloads
        .into_iter()
        .map(|payload| parse_fragment(&payload))
        .collect()
}

fn data_payload(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let data = line.strip_prefix("data:")?;
    Some(data.strip_prefix(' ').unwrap_or(data))
}

/// Turn one SSE payload into a text fragment
fn parse_fragment(payload: &str) -> Result<String> {
    if payload.trim() == "[DONE]" {
        return Ok(String::new());
    }

    let chunk: ChatCompletionChunk = serde_json::from_str(payload)?;
    if let Some(error) = chunk.error {
        let message = match &error {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(obj) => obj
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
            other => other.to_string(),
        };
        return Err(Error::llm(message));
    }

    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .unwrap_or_default())
}
