/// API request handlers
use std::sync::Arc;

use axum::Json;

use crate::api::types::HealthResponse;
use crate::rag::ChatService;

pub mod chat;

pub use chat::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
