use std::sync::Arc;

use axum::body::to_bytes;

use super::*;
use crate::config::GatewayConfig;
use crate::llm::{ChatStream, TextStream};
use crate::llm::types::LlmError;
use crate::search::{ProfileRecord, ProfileSearch, SearchError};
use crate::state::AppState;

// ===== mocks =====

struct NoopSearch;

#[async_trait::async_trait]
impl ProfileSearch for NoopSearch {
    async fn search(&self, _query: &str, _limit: u32) -> Result<Vec<ProfileRecord>, SearchError> {
        Ok(Vec::new())
    }
}

enum Script {
    FailOpen,
    Fragments(&'static [&'static str]),
    FragmentsThenError(&'static [&'static str]),
    FragmentsThenHang(&'static [&'static str]),
}

struct MockLlm {
    script: Script,
}

fn ok_fragments(parts: &[&'static str]) -> Vec<Result<String, LlmError>> {
    parts.iter().map(|p| Ok((*p).to_string())).collect()
}

#[async_trait::async_trait]
impl ChatStream for MockLlm {
    async fn chat_stream(
        &self,
        _max_tokens: u32,
        _system: &str,
        _messages: &[Message],
    ) -> Result<TextStream, LlmError> {
        match &self.script {
            Script::FailOpen => Err(LlmError::ApiResponse { status: 500, body: "overloaded".into() }),
            Script::Fragments(parts) => Ok(Box::pin(futures::stream::iter(ok_fragments(parts)))),
            Script::FragmentsThenError(parts) => {
                let mut items = ok_fragments(parts);
                items.push(Err(LlmError::ApiRequest("connection reset".into())));
                Ok(Box::pin(futures::stream::iter(items)))
            }
            Script::FragmentsThenHang(parts) => Ok(Box::pin(
                futures::stream::iter(ok_fragments(parts)).chain(futures::stream::pending()),
            )),
        }
    }
}

fn state_with(script: Option<Script>) -> AppState {
    state_with_config(script, GatewayConfig::default())
}

fn state_with_config(script: Option<Script>, config: GatewayConfig) -> AppState {
    let llm: Option<Arc<dyn ChatStream>> = script.map(|script| {
        let mock: Arc<dyn ChatStream> = Arc::new(MockLlm { script });
        mock
    });
    AppState::new(llm, Arc::new(NoopSearch), config)
}

fn user_turn(text: &str) -> ChatRequestBody {
    ChatRequestBody { messages: vec![Message { role: "user".into(), content: text.into() }] }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ===== tests =====

#[tokio::test]
async fn chat_without_provider_returns_503() {
    let status = chat(State(state_with(None)), Json(user_turn("hi")))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn chat_open_failure_returns_502() {
    let status = chat(State(state_with(Some(Script::FailOpen))), Json(user_turn("hi")))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn chat_streams_plaintext_fragments() {
    let state = state_with(Some(Script::Fragments(&["Hello", " there", "!"])));
    let response = chat(State(state), Json(user_turn("hi"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "Hello there!");
}

#[tokio::test]
async fn chat_mid_stream_error_truncates_cleanly() {
    let state = state_with(Some(Script::FragmentsThenError(&["partial"])));
    let response = chat(State(state), Json(user_turn("hi"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "partial");
}

#[tokio::test(start_paused = true)]
async fn chat_deadline_ends_hung_stream() {
    let state = state_with(Some(Script::FragmentsThenHang(&["so far"])));
    let response = chat(State(state), Json(user_turn("hi"))).await.unwrap();

    // The provider never finishes; the deadline must close the body.
    assert_eq!(body_text(response).await, "so far");
}

#[tokio::test(start_paused = true)]
async fn chat_deadline_follows_configured_bound() {
    let config = GatewayConfig { chat_deadline_secs: 5, ..GatewayConfig::default() };
    let state = state_with_config(Some(Script::FragmentsThenHang(&["so far"])), config);

    let started = Instant::now();
    let response = chat(State(state), Json(user_turn("hi"))).await.unwrap();
    assert_eq!(body_text(response).await, "so far");

    // Body closes at the injected 5s bound, not the 30s default.
    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(5));
    assert!(waited < Duration::from_secs(30));
}

#[tokio::test]
async fn chat_accepts_empty_message_list() {
    let state = state_with(Some(Script::Fragments(&["hi"])));
    let response = chat(State(state), Json(ChatRequestBody { messages: Vec::new() }))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
