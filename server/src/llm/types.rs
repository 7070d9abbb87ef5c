//! LLM types — provider-neutral message and stream types shared by the
//! Anthropic and `OpenAI` clients.

use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGE TYPES
// =============================================================================

/// A single message in a conversation. Roles are the wire strings
/// (`"user"` / `"assistant"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Incrementally produced assistant text fragments, in receipt order.
/// An `Err` item terminates the stream.
pub type TextStream = BoxStream<'static, Result<String, LlmError>>;

// =============================================================================
// CHAT STREAM TRAIT
// =============================================================================

/// Provider-neutral async trait for streamed LLM chat. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ChatStream: Send + Sync {
    /// Open a streamed chat completion against the provider.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails before any fragment is
    /// produced (transport failure, non-success provider status).
    async fn chat_stream(
        &self,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<TextStream, LlmError>;
}
