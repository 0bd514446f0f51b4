//! Azure AI Search index client

use reqwest::Client;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::search::SearchDocument;
use crate::search::SearchProvider;

const SCORE_FIELD: &str = "@search.score";

/// Client for querying a single search index
pub struct SearchClient {
    endpoint: String,
    api_key: String,
    index: String,
    api_version: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    search: &'a str,
    top: usize,
}

impl SearchClient {
    /// Create a new search client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| RagChatError::Config(e.to_string()))?;

        Ok(Self {
            endpoint: config.search.endpoint.trim_end_matches('/').to_string(),
            api_key: config.search.api_key.clone(),
            index: config.search.index.clone(),
            api_version: config.search.api_version.clone(),
            client,
        })
    }

    fn document_from_value(value: Value) -> SearchDocument {
        let mut fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let score = fields
            .remove(SCORE_FIELD)
            .and_then(|v| v.as_f64())
            .map(|v| v as f32);

        SearchDocument { score, fields }
    }
}

#[async_trait::async_trait]
impl SearchProvider for SearchClient {
    async fn search(&self, query: &str, top: usize) -> Result<Vec<SearchDocument>> {
        let url = format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, self.index, self.api_version
        );

        debug!("Searching index {} (top {})", self.index, top);

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&SearchRequest { search: query, top })
            .send()
            .await
            .map_err(|e| RagChatError::Retrieval(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RagChatError::Retrieval(format!(
                "search request returned {status}: {body}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RagChatError::Retrieval(e.to_string()))?;

        // Index ordering is authoritative; preserve it as-is
        let documents = body
            .get("value")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Self::document_from_value)
            .collect();

        Ok(documents)
    }
}
