//! HTTP server implementation

use std::sync::Arc;

use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::auth;
use crate::api::auth::ApiKeyState;
use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::llm::CompletionClient;
use crate::rag::ChatService;
use crate::rag::Retriever;
use crate::search::SearchClient;
use crate::Result;

/// Start the API server
pub async fn serve_api(
    config: &AppConfig,
    host: String,
    port: u16,
    enable_cors: bool,
) -> Result<()> {
    info!("Starting ragchat API server...");

    // Missing deployment or index identifiers fail here, before binding
    config.validate()?;

    // Collaborator clients are constructed once and shared read-only
    let completion = Arc::new(CompletionClient::new(config)?);
    let search = Arc::new(SearchClient::new(config)?);
    let retriever = Retriever::new(search, config.retrieval_top_k());
    let chat = Arc::new(ChatService::new(retriever, completion));

    let state = AppState { chat };

    let mut app = routes::app_routes(state);

    // Auth filter sits ahead of the router; health check and docs paths
    // are exempt
    if let Some(api_key) = &config.server.api_key {
        info!("API key authentication enabled");
        let auth_state = ApiKeyState {
            expected_key: api_key.clone(),
        };
        app = app.layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth::api_key_middleware,
        ));
    } else {
        info!("No API key configured - endpoints are open");
    }

    // Add middleware layers
    app = app
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Add CORS if enabled
    if enable_cors {
        info!("CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    // Start server
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /      - Health check");
    info!("  POST /chat  - Grounded chat");

    axum::serve(listener, app).await?;

    Ok(())
}
