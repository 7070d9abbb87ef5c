//! Gateway configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything tunable is read once at startup into typed structs and
//! injected through `AppState`; handlers and services never touch the
//! environment per request. LLM provider settings live in
//! `llm::config::LlmConfig`; the knobs below belong to the gateways
//! themselves.

pub const DEFAULT_CHAT_DEADLINE_SECS: u64 = 30;
pub const DEFAULT_MATCH_RESULT_LIMIT: u32 = 4;

/// Per-gateway tuning, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Hard upper bound on a streamed chat response.
    pub chat_deadline_secs: u64,
    /// Result count forwarded to the profile search service.
    pub match_result_limit: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            chat_deadline_secs: DEFAULT_CHAT_DEADLINE_SECS,
            match_result_limit: DEFAULT_MATCH_RESULT_LIMIT,
        }
    }
}

impl GatewayConfig {
    /// Build gateway config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_STREAM_DEADLINE_SECS`: default 30
    /// - `MATCH_RESULT_LIMIT`: default 4
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            chat_deadline_secs: env_parse("CHAT_STREAM_DEADLINE_SECS", DEFAULT_CHAT_DEADLINE_SECS),
            match_result_limit: env_parse("MATCH_RESULT_LIMIT", DEFAULT_MATCH_RESULT_LIMIT),
        }
    }
}

/// Parse an env var, falling back to `default` when unset or malformed.
pub fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
