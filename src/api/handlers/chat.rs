/// Chat endpoint handler
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::ErrorBody;
use crate::errors::RagChatError;
use crate::rag::ChatRequest;
use crate::rag::ChatResponse;

/// Grounded chat (POST /chat)
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorBody>)> {
    info!("POST /chat ({} messages)", request.messages.len());

    match state.chat.handle(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(error_response(&e)),
    }
}

/// Map core errors onto the wire contract.
///
/// Caller mistakes are 400s and not logged as faults; collaborator failures
/// are 502s, never a 200 with empty evidence.
fn error_response(error: &RagChatError) -> (StatusCode, Json<ErrorBody>) {
    let status = match error {
        RagChatError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        RagChatError::Retrieval(_) | RagChatError::Completion(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::BAD_REQUEST {
        info!("Rejected chat request: {}", error);
    } else {
        error!("Error processing chat request: {}", error);
    }

    (status, Json(ErrorBody::new(error.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let (status, body) =
            error_response(&RagChatError::InvalidRequest("streaming is not supported".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("streaming"));
    }

    #[test]
    fn test_collaborator_failures_map_to_502() {
        let (status, _) = error_response(&RagChatError::Retrieval("index down".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = error_response(&RagChatError::Completion("quota exceeded".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let (status, _) = error_response(&RagChatError::Config("missing".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
