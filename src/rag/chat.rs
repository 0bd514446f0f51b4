//! Chat orchestrator: validate, retrieve, ground, complete, assemble

use std::sync::Arc;

use tracing::debug;
use tracing::info;
use uuid::Uuid;

use crate::errors::RagChatError;
use crate::errors::Result;
use crate::llm::CompletionProvider;
use crate::llm::ProviderMessage;
use crate::llm::ProviderRole;
use crate::rag::context;
use crate::rag::mapper;
use crate::rag::ChatRequest;
use crate::rag::ChatResponse;
use crate::rag::Retriever;

/// Drives one grounded chat turn end to end.
///
/// Holds only long-lived, shared collaborator handles; every request
/// constructs its own data fresh.
pub struct ChatService {
    retriever: Retriever,
    completion: Arc<dyn CompletionProvider>,
}

impl ChatService {
    /// Create a new chat service from injected collaborators
    pub fn new(retriever: Retriever, completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            retriever,
            completion,
        }
    }

    /// Handle one chat request.
    ///
    /// # Errors
    /// - `InvalidRequest` when streaming is requested, the message list is
    ///   empty, or no non-blank user turn exists
    /// - `Retrieval` when the search collaborator fails (never masked as an
    ///   empty result set)
    /// - `Completion` when the completion provider fails
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse> {
        if request.stream {
            return Err(RagChatError::InvalidRequest(
                "streaming is not supported".to_string(),
            ));
        }
        if request.messages.is_empty() {
            return Err(RagChatError::InvalidRequest(
                "messages must not be empty".to_string(),
            ));
        }

        // The most recent user turn is the retrieval query
        let query = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role.eq_ignore_ascii_case("user"))
            .map(|m| m.content.trim())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                RagChatError::InvalidRequest("no user query found in messages".to_string())
            })?;

        info!("Processing chat query: {}", query);

        // Step 1: Retrieve supporting chunks; failures propagate
        debug!("Step 1: Retrieving chunks");
        let chunks = self.retriever.retrieve(query).await?;

        // Step 2: Assemble the provider message sequence. With zero chunks
        // no grounding turn is prepended and the model answers ungrounded.
        debug!("Step 2: Assembling {} provider messages", request.messages.len());
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if !chunks.is_empty() {
            messages.push(ProviderMessage::new(
                ProviderRole::System,
                context::build_grounding_prompt(&chunks),
            ));
        }
        messages.extend(request.messages.iter().map(mapper::map_message));

        // Step 3: Generate the answer
        debug!("Step 3: Generating answer");
        let answer = self.completion.complete(&messages).await?;

        info!("Chat query completed with {} chunks", chunks.len());

        let conversation_id = request
            .conversation_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        // Chunk order stays exactly as the retriever returned it; citation
        // markers resolve positionally against this list
        Ok(ChatResponse {
            conversation_id,
            message: answer,
            retrieved_chunks: chunks,
        })
    }
}
