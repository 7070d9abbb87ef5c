use std::sync::{Arc, Mutex};

use super::*;
use crate::config::GatewayConfig;
use crate::search::{ProfileRecord, ProfileSearch, SearchError};

// ===== mocks =====

struct MockSearch {
    results: Result<Vec<ProfileRecord>, u16>,
}

#[async_trait::async_trait]
impl ProfileSearch for MockSearch {
    async fn search(&self, _query: &str, _limit: u32) -> Result<Vec<ProfileRecord>, SearchError> {
        match &self.results {
            Ok(records) => Ok(records.clone()),
            Err(status) => Err(SearchError::Response { status: *status, body: String::new() }),
        }
    }
}

struct LimitRecorder {
    seen: Arc<Mutex<Option<u32>>>,
}

#[async_trait::async_trait]
impl ProfileSearch for LimitRecorder {
    async fn search(&self, _query: &str, limit: u32) -> Result<Vec<ProfileRecord>, SearchError> {
        *self.seen.lock().unwrap() = Some(limit);
        Ok(Vec::new())
    }
}

fn state_with(results: Result<Vec<ProfileRecord>, u16>) -> AppState {
    AppState::new(None, Arc::new(MockSearch { results }), GatewayConfig::default())
}

fn request(conversation: &str) -> Json<MatchRequestBody> {
    Json(MatchRequestBody { conversation: conversation.to_string() })
}

// ===== tests =====

#[tokio::test]
async fn match_rejects_empty_conversation() {
    let (status, Json(body)) = match_members(State(state_with(Ok(vec![]))), request(""))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Conversation is required" }));
}

#[tokio::test]
async fn match_maps_upstream_failure_to_500() {
    let (status, Json(body)) = match_members(State(state_with(Err(503))), request("rust devs"))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to match members" }));
}

#[tokio::test]
async fn match_returns_mapped_members() {
    let profiles = vec![
        ProfileRecord { username: Some("sarah_dev".into()), similarity: Some(92.0), ..ProfileRecord::default() },
        ProfileRecord::default(),
    ];
    let Json(outcome) = match_members(State(state_with(Ok(profiles))), request("rust devs"))
        .await
        .unwrap();

    assert_eq!(outcome.members.len(), 2);
    assert_eq!(outcome.members[0].id, "sarah_dev");
    assert_eq!(outcome.members[1].id, "member-1");
    assert_eq!(outcome.keywords, vec!["rust devs".to_string()]);
    assert_eq!(
        outcome.reasoning,
        "Found 2 members based on semantic similarity to your conversation"
    );
}

#[tokio::test]
async fn match_forwards_configured_result_limit() {
    let seen = Arc::new(Mutex::new(None));
    let config = GatewayConfig { match_result_limit: 9, ..GatewayConfig::default() };
    let state = AppState::new(None, Arc::new(LimitRecorder { seen: seen.clone() }), config);

    match_members(State(state), request("rust devs")).await.unwrap();
    assert_eq!(*seen.lock().unwrap(), Some(9));
}

#[tokio::test]
async fn match_returns_empty_set_when_search_is_dry() {
    let Json(outcome) = match_members(State(state_with(Ok(vec![]))), request("obscure topic"))
        .await
        .unwrap();
    assert!(outcome.members.is_empty());
    assert_eq!(
        outcome.reasoning,
        "Found 0 members based on semantic similarity to your conversation"
    );
}
