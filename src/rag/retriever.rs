//! Retrieval adapter: query the search index and normalize documents

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::errors::Result;
use crate::rag::Citation;
use crate::rag::RetrievedChunk;
use crate::search::SearchDocument;
use crate::search::SearchProvider;

/// Field aliases probed in order when normalizing a document's identifier
const ID_FIELDS: [&str; 3] = ["id", "chunk_id", "key"];
/// Field aliases probed in order when normalizing a document's content
const CONTENT_FIELDS: [&str; 3] = ["content", "text", "chunk"];

/// Adapter over the search collaborator producing canonical chunks
pub struct Retriever {
    search: Arc<dyn SearchProvider>,
    top_k: usize,
}

impl Retriever {
    /// Create a new retriever fetching `top_k` documents per query
    pub fn new(search: Arc<dyn SearchProvider>, top_k: usize) -> Self {
        Self { search, top_k }
    }

    /// Retrieve chunks for a query, preserving the index's ranking order.
    ///
    /// A collaborator failure propagates as-is; zero results and a broken
    /// index must stay distinguishable to the caller.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedChunk>> {
        debug!("Retrieving top {} chunks", self.top_k);

        let documents = self.search.search(query, self.top_k).await?;

        debug!("Retrieved {} documents", documents.len());

        Ok(documents.into_iter().map(chunk_from_document).collect())
    }
}

/// Normalize one free-form search document into a canonical chunk
pub(crate) fn chunk_from_document(document: SearchDocument) -> RetrievedChunk {
    let id = first_string(&document.fields, &ID_FIELDS)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let content = first_string(&document.fields, &CONTENT_FIELDS).unwrap_or_default();
    let title = string_field(&document.fields, "title");
    let url = string_field(&document.fields, "url");

    let citation = if title.is_some() || url.is_some() {
        Some(Citation {
            id: id.clone(),
            title,
            url,
        })
    } else {
        None
    };

    RetrievedChunk {
        id,
        content,
        score: document.score,
        citation,
    }
}

fn first_string(fields: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| string_field(fields, name))
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields.get(name).and_then(Value::as_str).map(str::to_string)
}
