//! REST API helpers for the member match gateway.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds get stubs returning errors, since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics; a match failure
//! degrades to an empty recommendation list without crashing the UI.

#![allow(clippy::unused_async)]

use super::types::Member;

/// Fetch member recommendations for a conversation via
/// `POST /api/members/match`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-success status, or
/// an unparseable body.
pub async fn fetch_member_matches(conversation: &str) -> Result<Vec<Member>, String> {
    #[cfg(feature = "csr")]
    {
        use super::types::{MatchResponse, match_request_json};

        let resp = gloo_net::http::Request::post("/api/members/match")
            .header("Content-Type", "application/json")
            .body(match_request_json(conversation))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("match request failed: {}", resp.status()));
        }
        let body: MatchResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.members)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = conversation;
        Err("not available off the browser".to_owned())
    }
}
