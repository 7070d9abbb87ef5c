//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the two API gateways (streaming chat, member match)
//! and a health probe under a single Axum router. The compiled client is
//! served as static files at `/`.

pub mod chat;
pub mod members;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// API routes plus the static client site at `/`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(site_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/members/match", post(members::match_members))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(site)
}

/// Resolve the directory holding the compiled client site.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
