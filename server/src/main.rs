mod config;
mod llm;
mod routes;
mod search;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize LLM client (non-fatal: the chat gateway answers 503 if config missing).
    let llm: Option<Arc<dyn llm::ChatStream>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat gateway disabled");
            None
        }
    };

    let search: Arc<dyn search::ProfileSearch> = Arc::new(
        search::SearchClient::from_env().expect("search client init failed"),
    );

    let state = state::AppState::new(llm, search, config::GatewayConfig::from_env());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "connect server listening");
    axum::serve(listener, app).await.expect("server failed");
}
