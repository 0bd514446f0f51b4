//! Azure OpenAI chat-completions client

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::llm::CompletionProvider;
use crate::llm::ProviderMessage;

/// Client for the chat-completions endpoint of an Azure OpenAI deployment
pub struct CompletionClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: &'a [ProviderMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionClient {
    /// Create a new completion client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| RagChatError::Config(e.to_string()))?;

        Ok(Self {
            endpoint: config.completion.endpoint.trim_end_matches('/').to_string(),
            api_key: config.completion.api_key.clone(),
            deployment: config.completion.deployment.clone(),
            api_version: config.completion.api_version.clone(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl CompletionProvider for CompletionClient {
    async fn complete(&self, messages: &[ProviderMessage]) -> Result<String> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        );

        debug!("Requesting completion with {} messages", messages.len());

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&ChatCompletionRequest { messages })
            .send()
            .await
            .map_err(|e| RagChatError::Completion(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RagChatError::Completion(format!(
                "completion request returned {status}: {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RagChatError::Completion(e.to_string()))?;

        // A missing or empty content field is an empty answer, not an error
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_content_deserializes_to_none() {
        let raw = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);
        assert!(content.is_none());
    }

    #[test]
    fn test_empty_choices_deserializes() {
        let raw = r"{}";
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
