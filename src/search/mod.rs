//! Search collaborator abstraction and client
//!
//! Documents come back with free-form fields; normalization into chunks
//! happens in the retriever, not here.

pub mod client;

pub use client::SearchClient;

use serde_json::Map;
use serde_json::Value;

use crate::errors::Result;

/// One ranked document from the search index, fields left free-form
#[derive(Debug, Clone)]
pub struct SearchDocument {
    pub score: Option<f32>,
    pub fields: Map<String, Value>,
}

/// Search provider: given a query and a result-count bound, return ranked
/// documents. Implementations are shared read-only across requests.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, top: usize) -> Result<Vec<SearchDocument>>;
}
