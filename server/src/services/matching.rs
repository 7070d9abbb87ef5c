//! Member matching — maps search profiles into recommendation records.
//!
//! DESIGN
//! ======
//! The search service returns sparse `ProfileRecord`s; the client renders
//! fully populated member cards. This module owns the deterministic mapping
//! between the two: every display field has a fixed fallback, so the same
//! input always yields the same card. No caching, retries, or deduplication.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called by `routes::members` with the full conversation text as the search
//! query. The `ProfileSearch` seam keeps this module network-free in tests.

use serde::{Deserialize, Serialize};

use crate::search::{ProfileRecord, ProfileSearch, SearchError};

const DEFAULT_MATCH_SCORE: f64 = 75.0;
const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=40&width=40";
const UNKNOWN_NAME: &str = "Unknown Member";
const NO_DESCRIPTION: &str = "No description available";
const NO_LOCATION: &str = "Location not specified";
const NO_EXPERIENCE: &str = "Experience not specified";
const KEYWORD_PREFIX_CHARS: usize = 100;

// =============================================================================
// TYPES
// =============================================================================

/// Errors produced by the matching operation.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The request carried no usable conversation text.
    #[error("conversation is required")]
    EmptyConversation,

    /// The upstream search call failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A fully populated recommendation record. Field names serialize camelCase
/// to match what the client renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub interests: Vec<String>,
    pub goals: Vec<String>,
    pub bio: String,
    pub match_score: f64,
    pub discord_handle: String,
    pub location: String,
    pub experience: String,
}

/// Successful matching result: members plus the echo fields the client
/// surfaces alongside them.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub members: Vec<Member>,
    pub keywords: Vec<String>,
    pub reasoning: String,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Match community members against a conversation.
///
/// The conversation text is forwarded verbatim as the search query with the
/// configured result `limit`. Results are mapped positionally, so the order
/// the search service ranked them in is preserved.
///
/// # Errors
///
/// [`MatchError::EmptyConversation`] when the text is empty after trimming;
/// [`MatchError::Search`] when the upstream call fails.
pub async fn match_members(
    search: &dyn ProfileSearch,
    conversation: &str,
    limit: u32,
) -> Result<MatchOutcome, MatchError> {
    if conversation.trim().is_empty() {
        return Err(MatchError::EmptyConversation);
    }

    let profiles = search.search(conversation, limit).await?;
    let members: Vec<Member> = profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| member_from_profile(profile, index))
        .collect();

    let reasoning = format!(
        "Found {} members based on semantic similarity to your conversation",
        members.len()
    );

    Ok(MatchOutcome {
        members,
        keywords: vec![keyword_prefix(conversation)],
        reasoning,
    })
}

// =============================================================================
// MAPPING
// =============================================================================

/// Map one search profile into a member record. `index` is the profile's
/// position in the result list, used for the placeholder identifier.
#[must_use]
pub fn member_from_profile(profile: &ProfileRecord, index: usize) -> Member {
    let placeholder_id = format!("member-{index}");
    let id = first_non_empty(&[profile.username.as_deref()], &placeholder_id);
    let name = first_non_empty(&[profile.name.as_deref(), profile.username.as_deref()], UNKNOWN_NAME);

    Member {
        // Handle is synthesized from the resolved id so records without a
        // username still get a well-formed value.
        discord_handle: format!("@{id}#0000"),
        id,
        name,
        avatar: first_non_empty(&[profile.profile_image.as_deref()], PLACEHOLDER_AVATAR),
        interests: Vec::new(),
        goals: Vec::new(),
        bio: first_non_empty(&[profile.description.as_deref()], NO_DESCRIPTION),
        match_score: profile.similarity.unwrap_or(DEFAULT_MATCH_SCORE),
        location: first_non_empty(&[profile.location.as_deref()], NO_LOCATION),
        experience: NO_EXPERIENCE.to_string(),
    }
}

/// First candidate with non-whitespace content, else the fallback.
fn first_non_empty(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map_or_else(|| fallback.to_string(), |s| (*s).to_string())
}

/// Char-safe prefix of the conversation, echoed back as the single keyword.
fn keyword_prefix(conversation: &str) -> String {
    conversation.chars().take(KEYWORD_PREFIX_CHARS).collect()
}

#[cfg(test)]
#[path = "matching_test.rs"]
mod tests;
