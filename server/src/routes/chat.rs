//! Streaming chat gateway.
//!
//! DESIGN
//! ======
//! `POST /api/chat` takes the transcript, prepends the community persona as
//! the system prompt, and proxies the provider's streamed completion back as
//! chunked plaintext. The stream runs under a hard deadline; when it fires
//! the response ends cleanly with whatever text was already produced, and
//! the same applies to a mid-stream provider error. Failures before the
//! first fragment surface as HTTP errors instead.

use std::convert::Infallible;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use serde::Deserialize;
use tokio::time::Instant;
use uuid::Uuid;

use crate::llm::{Message, TextStream};
use crate::state::AppState;

const CHAT_MAX_TOKENS: u32 = 1024;

/// Persona prompt prepended to every turn.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for a community platform. Your role is to:

1. Help users explore their interests, goals, and what they're working on
2. Ask thoughtful follow-up questions to understand their needs better
3. Provide insights and suggestions related to their topics of interest
4. Be encouraging about connecting with like-minded community members

Keep responses conversational, insightful, and focused on helping users discover what they're passionate about. When appropriate, mention that the system will help them find aligned community members based on the conversation.

Be warm, curious, and genuinely interested in helping them connect with their community.";

#[derive(Deserialize)]
pub struct ChatRequestBody {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// `POST /api/chat` — stream an assistant reply as plaintext chunks.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequestBody>) -> Result<Response, StatusCode> {
    let Some(llm) = state.llm.clone() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let turn_id = Uuid::new_v4();
    tracing::info!(%turn_id, message_count = body.messages.len(), "chat turn started");

    let stream = llm
        .chat_stream(CHAT_MAX_TOKENS, SYSTEM_PROMPT, &body.messages)
        .await
        .map_err(|e| {
            tracing::warn!(%turn_id, error = %e, "chat stream open failed");
            StatusCode::BAD_GATEWAY
        })?;

    let deadline = Instant::now() + Duration::from_secs(state.config.chat_deadline_secs);
    let bounded = bounded_text_stream(stream, deadline, turn_id);

    Ok((
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(bounded),
    )
        .into_response())
}

/// Bound a provider text stream by a hard deadline.
///
/// Deadline expiry and mid-stream provider errors both end the stream
/// without an item, so the HTTP response always terminates cleanly.
fn bounded_text_stream(
    inner: TextStream,
    deadline: Instant,
    turn_id: Uuid,
) -> impl futures::Stream<Item = Result<String, Infallible>> + Send {
    futures::stream::unfold(Some(inner), move |state| async move {
        let mut inner = state?;
        match tokio::time::timeout_at(deadline, inner.next()).await {
            Ok(Some(Ok(text))) => Some((Ok(text), Some(inner))),
            Ok(Some(Err(e))) => {
                tracing::warn!(%turn_id, error = %e, "chat stream terminated by provider error");
                None
            }
            Ok(None) => {
                tracing::info!(%turn_id, "chat turn completed");
                None
            }
            Err(_) => {
                tracing::warn!(%turn_id, "chat stream deadline reached");
                None
            }
        }
    })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
