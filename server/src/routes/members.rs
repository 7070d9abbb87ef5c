//! Member match gateway.
//!
//! `POST /api/members/match` forwards the conversation text to the profile
//! search service and returns the mapped member records. Error bodies carry
//! the fixed strings the client displays.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::services::matching::{self, MatchError, MatchOutcome};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchRequestBody {
    #[serde(default)]
    pub conversation: String,
}

/// `POST /api/members/match` — recommend members for a conversation.
pub async fn match_members(
    State(state): State<AppState>,
    Json(body): Json<MatchRequestBody>,
) -> Result<Json<MatchOutcome>, (StatusCode, Json<Value>)> {
    let request_id = Uuid::new_v4();

    match matching::match_members(state.search.as_ref(), &body.conversation, state.config.match_result_limit).await {
        Ok(outcome) => {
            tracing::info!(%request_id, member_count = outcome.members.len(), "member match succeeded");
            Ok(Json(outcome))
        }
        Err(e) => {
            tracing::warn!(%request_id, error = %e, "member match failed");
            Err(match_error_response(&e))
        }
    }
}

fn match_error_response(err: &MatchError) -> (StatusCode, Json<Value>) {
    match err {
        MatchError::EmptyConversation => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": "Conversation is required" })))
        }
        MatchError::Search(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to match members" })),
        ),
    }
}

#[cfg(test)]
#[path = "members_test.rs"]
mod tests;
