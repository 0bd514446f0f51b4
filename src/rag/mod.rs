//! RAG (Retrieval-Augmented Generation) orchestration
//!
//! This module drives a grounded chat turn end to end:
//! - validation of the inbound conversation
//! - retrieval of supporting passages from the search index
//! - grounding-prompt construction with `[source:N]` citation markers
//! - role mapping of conversation turns for the completion provider
//! - response assembly correlating the answer with its evidence
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ragchat::config::AppConfig;
//! use ragchat::llm::CompletionClient;
//! use ragchat::rag::{ChatMessage, ChatRequest, ChatService, Retriever};
//! use ragchat::search::SearchClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let retriever = Retriever::new(Arc::new(SearchClient::new(&config)?), 5);
//!     let service = ChatService::new(retriever, Arc::new(CompletionClient::new(&config)?));
//!
//!     let response = service
//!         .handle(ChatRequest {
//!             conversation_id: None,
//!             messages: vec![ChatMessage {
//!                 role: "user".to_string(),
//!                 content: "What is the refund policy?".to_string(),
//!             }],
//!             stream: false,
//!         })
//!         .await?;
//!     println!("Answer: {}", response.message);
//!     println!("Sources: {} chunks", response.retrieved_chunks.len());
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod context;
pub mod mapper;
pub mod retriever;

pub use chat::ChatService;
pub use retriever::Retriever;

use serde::Deserialize;
use serde::Serialize;

/// A single conversation turn as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Inbound chat request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Conversational order; preserved through the whole pipeline
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub stream: bool,
}

/// Outbound chat response: the generated answer plus its evidence
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub conversation_id: String,
    pub message: String,
    /// Chunk order matches citation numbering in the grounding prompt:
    /// `[source:N]` refers to `retrieved_chunks[N - 1]`
    pub retrieved_chunks: Vec<RetrievedChunk>,
}

/// One retrieved passage with optional score and citation metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedChunk {
    pub id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
}

/// Citation metadata, present only when a title or url is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
}
