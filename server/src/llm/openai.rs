//! OpenAI-compatible API client, streaming mode.
//!
//! Supports both `/v1/chat/completions` and `/v1/responses` endpoints; each
//! has its own SSE payload shape, so each gets its own extractor.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::sse;
use super::types::{LlmError, Message, TextStream};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        mode: OpenAiApiMode,
        base_url: String,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, mode })
    }

    /// Open a streamed completion on the configured endpoint.
    pub async fn chat_stream(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<TextStream, LlmError> {
        match self.mode {
            OpenAiApiMode::ChatCompletions => {
                let msgs = build_chat_completions_messages(system, messages);
                let body = CcRequest { model, max_tokens, messages: &msgs, stream: true };
                let response = self.send_stream("/chat/completions", &body).await?;
                Ok(sse::text_fragment_stream(response.bytes_stream(), cc_delta_text))
            }
            OpenAiApiMode::Responses => {
                let input = build_responses_input(messages);
                let body = RespRequest {
                    model,
                    max_output_tokens: max_tokens,
                    instructions: system,
                    input: &input,
                    stream: true,
                };
                let response = self.send_stream("/responses", &body).await?;
                Ok(sse::text_fragment_stream(response.bytes_stream(), resp_delta_text))
            }
        }
    }

    async fn send_stream(&self, path: &str, body: &impl Serialize) -> Result<reqwest::Response, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status, body });
        }
        Ok(response)
    }
}

// =============================================================================
// CHAT COMPLETIONS — wire types
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [CcMessage],
    stream: bool,
}

#[derive(Serialize)]
struct CcMessage {
    role: String,
    content: String,
}

fn build_chat_completions_messages(system: &str, messages: &[Message]) -> Vec<CcMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(CcMessage { role: "system".to_string(), content: system.to_string() });
    }
    for message in messages {
        out.push(CcMessage { role: message.role.clone(), content: message.content.clone() });
    }
    out
}

// =============================================================================
// RESPONSES — wire types
// =============================================================================

#[derive(Serialize)]
struct RespRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    instructions: &'a str,
    input: &'a [RespInputItem],
    stream: bool,
}

#[derive(Serialize)]
struct RespInputItem {
    role: String,
    content: Vec<RespTextContent>,
}

#[derive(Serialize)]
struct RespTextContent {
    #[serde(rename = "type")]
    content_type: &'static str,
    text: String,
}

fn build_responses_input(messages: &[Message]) -> Vec<RespInputItem> {
    messages
        .iter()
        .map(|message| {
            // Assistant history items carry output_text, user items input_text.
            let content_type = if message.role == "assistant" { "output_text" } else { "input_text" };
            RespInputItem {
                role: message.role.clone(),
                content: vec![RespTextContent { content_type, text: message.content.clone() }],
            }
        })
        .collect()
}

// =============================================================================
// EVENT PARSING
// =============================================================================

/// Chat-completions streaming: text rides in `choices[0].delta.content`.
pub(crate) fn cc_delta_text(payload: &str) -> Option<String> {
    let event: Value = serde_json::from_str(payload).ok()?;
    event
        .get("choices")?
        .as_array()?
        .first()?
        .get("delta")?
        .get("content")?
        .as_str()
        .map(str::to_owned)
}

/// Responses streaming: text rides in `response.output_text.delta` events.
pub(crate) fn resp_delta_text(payload: &str) -> Option<String> {
    let event: Value = serde_json::from_str(payload).ok()?;
    if event.get("type").and_then(Value::as_str) != Some("response.output_text.delta") {
        return None;
    }
    event.get("delta").and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
