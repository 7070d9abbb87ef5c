//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Both gateways are stateless proxies, so the state is just the two
//! upstream clients behind their trait seams. The LLM client is optional:
//! without provider configuration the chat gateway is disabled while the
//! member match gateway keeps working.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::llm::ChatStream;
use crate::search::ProfileSearch;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn ChatStream>>,
    pub search: Arc<dyn ProfileSearch>,
    pub config: GatewayConfig,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn ChatStream>>, search: Arc<dyn ProfileSearch>, config: GatewayConfig) -> Self {
        Self { llm, search, config }
    }
}
