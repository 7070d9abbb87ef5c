//! Wire types shared with the server gateways.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::conversation::ChatMessage;

/// A recommendation record as returned by `POST /api/members/match`.
/// Field names ride the wire in camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub bio: String,
    pub match_score: f64,
    pub discord_handle: String,
    pub location: String,
    pub experience: String,
}

/// Match gateway response envelope. Only `members` is rendered; the echo
/// fields are tolerated but unused.
#[derive(Debug, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Body for `POST /api/chat`: the transcript stripped to role + content.
#[must_use]
pub fn chat_request_json(messages: &[ChatMessage]) -> String {
    let wire: Vec<WireMessage<'_>> = messages
        .iter()
        .map(|m| WireMessage { role: &m.role, content: &m.content })
        .collect();
    serde_json::json!({ "messages": wire }).to_string()
}

/// Body for `POST /api/members/match`.
#[must_use]
pub fn match_request_json(conversation: &str) -> String {
    serde_json::json!({ "conversation": conversation }).to_string()
}
