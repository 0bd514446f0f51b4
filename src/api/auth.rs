//! API key authentication middleware

use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::api::types::ErrorBody;

/// Header carrying the caller's key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Paths served without a key: health check and API documentation
const OPEN_PATHS: [&str; 4] = ["/", "/docs", "/redoc", "/openapi.json"];

#[derive(Clone)]
pub struct ApiKeyState {
    pub expected_key: String,
}

/// Whether a path bypasses the credential check
pub fn is_open_path(path: &str) -> bool {
    OPEN_PATHS.contains(&path)
}

/// Reject requests lacking the configured key before they reach a handler.
///
/// Only layered when a key is configured; without one the router carries no
/// auth middleware at all.
pub async fn api_key_middleware(
    State(state): State<ApiKeyState>,
    request: Request,
    next: Next,
) -> Response {
    if is_open_path(request.uri().path()) {
        return next.run(request).await;
    }

    let header = request.headers().get(API_KEY_HEADER);
    match header.and_then(|h| h.to_str().ok()) {
        Some(key) if key == state.expected_key => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Unauthorized")),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_and_docs_paths_are_open() {
        assert!(is_open_path("/"));
        assert!(is_open_path("/docs"));
        assert!(is_open_path("/redoc"));
        assert!(is_open_path("/openapi.json"));
    }

    #[test]
    fn test_chat_path_requires_key() {
        assert!(!is_open_path("/chat"));
    }

    #[test]
    fn test_prefix_of_open_path_is_not_open() {
        assert!(!is_open_path("/docs/secret"));
        assert!(!is_open_path("//"));
    }
}
