//! Completion provider abstraction and client
//!
//! The orchestrator only depends on the [`CompletionProvider`] trait; the
//! concrete [`CompletionClient`] speaks the Azure OpenAI chat-completions
//! wire format.

pub mod client;

pub use client::CompletionClient;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::Result;

/// Role taxonomy understood by the completion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    System,
    User,
    Assistant,
}

/// One message in the sequence sent to the completion provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMessage {
    pub role: ProviderRole,
    pub content: String,
}

impl ProviderMessage {
    pub fn new(role: ProviderRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Completion provider: given an ordered message sequence, return one
/// generated text. Implementations are shared read-only across requests.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: &[ProviderMessage]) -> Result<String>;
}
