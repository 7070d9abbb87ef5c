//! LLM provider settings.
//!
//! DESIGN
//! ======
//! Provider choice, model, and timeouts are resolved once at startup and
//! carried by value into the clients. The API key is reached through one
//! level of indirection: `LLM_API_KEY_ENV` names the variable that holds
//! the key, so switching providers never means renaming secrets.

use crate::config::env_parse;

use super::types::LlmError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    Anthropic,
    OpenAi,
}

impl LlmProviderKind {
    fn parse(raw: Option<&str>) -> Result<Self, LlmError> {
        match raw.unwrap_or("anthropic") {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            other => Err(LlmError::ConfigParse(format!("unknown LLM_PROVIDER: {other}"))),
        }
    }

    /// Model used when `LLM_MODEL` is unset.
    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Anthropic => "claude-sonnet-4-5-20250929",
            Self::OpenAi => "gpt-4o",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAiApiMode {
    ChatCompletions,
    Responses,
}

impl OpenAiApiMode {
    fn parse(raw: Option<&str>) -> Result<Self, LlmError> {
        match raw.unwrap_or("responses") {
            "responses" => Ok(Self::Responses),
            "chat_completions" => Ok(Self::ChatCompletions),
            other => Err(LlmError::ConfigParse(format!(
                "unsupported openai_api mode '{other}' (expected 'responses' or 'chat_completions')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    pub openai_mode: OpenAiApiMode,
    pub openai_base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Resolve the full provider config from the environment.
    ///
    /// `LLM_API_KEY_ENV` is required and names the variable holding the
    /// key. `LLM_PROVIDER` (default `anthropic`), `LLM_MODEL`,
    /// `LLM_OPENAI_MODE` (default `responses`), `LLM_OPENAI_BASE_URL`,
    /// `LLM_REQUEST_TIMEOUT_SECS` (120), and `LLM_CONNECT_TIMEOUT_SECS`
    /// (10) are optional.
    ///
    /// # Errors
    ///
    /// Fails when the key indirection is unset or a provider/mode value
    /// is unrecognized.
    pub fn from_env() -> Result<Self, LlmError> {
        let provider = LlmProviderKind::parse(std::env::var("LLM_PROVIDER").ok().as_deref())?;
        let openai_mode = OpenAiApiMode::parse(std::env::var("LLM_OPENAI_MODE").ok().as_deref())?;

        let key_var =
            std::env::var("LLM_API_KEY_ENV").map_err(|_| LlmError::MissingApiKey { var: "LLM_API_KEY_ENV".into() })?;
        let api_key = std::env::var(&key_var).map_err(|_| LlmError::MissingApiKey { var: key_var.clone() })?;

        Ok(Self {
            model: std::env::var("LLM_MODEL").unwrap_or_else(|_| provider.default_model().to_string()),
            openai_base_url: std::env::var("LLM_OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeouts: LlmTimeouts {
                request_secs: env_parse("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
            },
            provider,
            api_key,
            openai_mode,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
