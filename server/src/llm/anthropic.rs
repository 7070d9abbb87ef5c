//! Anthropic Messages API client, streaming mode.
//!
//! Thin HTTP wrapper for `/v1/messages` with `stream: true`. Event payload
//! parsing lives in `delta_text` for testability.

use std::time::Duration;

use serde_json::Value;

use super::config::LlmTimeouts;
use super::sse;
use super::types::{LlmError, Message, TextStream};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    /// Open a streamed completion. Fails before the first fragment on
    /// transport errors or a non-200 provider status.
    pub async fn chat_stream(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<TextStream, LlmError> {
        let body = ApiRequest { model, max_tokens, system, messages, stream: true };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status, body });
        }

        Ok(sse::text_fragment_stream(response.bytes_stream(), delta_text))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
    stream: bool,
}

// =============================================================================
// EVENT PARSING
// =============================================================================

/// Extract the text fragment from one SSE payload. Only
/// `content_block_delta` events with a `text_delta` carry text; everything
/// else (`message_start`, `ping`, `message_delta`, ...) yields `None`.
pub(crate) fn delta_text(payload: &str) -> Option<String> {
    let event: Value = serde_json::from_str(payload).ok()?;
    if event.get("type").and_then(Value::as_str) != Some("content_block_delta") {
        return None;
    }
    let delta = event.get("delta")?;
    if delta.get("type").and_then(Value::as_str) != Some("text_delta") {
        return None;
    }
    delta.get("text").and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
