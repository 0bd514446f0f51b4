use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional API key; when set, requests must present it in `X-API-Key`.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    #[serde(default = "default_completion_api_version")]
    pub api_version: String,
}

fn default_completion_api_version() -> String {
    "2024-02-15-preview".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub api_key: String,
    pub index: String,
    #[serde(default = "default_search_api_version")]
    pub api_version: String,
    /// Number of documents fetched per query. Not caller-controlled.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_search_api_version() -> String {
    "2023-11-01".to_string()
}

fn default_top_k() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub completion: CompletionConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::RagChatError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::RagChatError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            eprintln!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::RagChatError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Validate that every required collaborator identifier is present.
    ///
    /// Called once at startup so a missing deployment or index name fails
    /// the process before it accepts requests, not on the first query.
    pub fn validate(&self) -> crate::Result<()> {
        if self.completion.endpoint.trim().is_empty() {
            return Err(crate::RagChatError::Config(
                "completion.endpoint is required".to_string(),
            ));
        }
        if self.completion.deployment.trim().is_empty() {
            return Err(crate::RagChatError::Config(
                "completion.deployment is required".to_string(),
            ));
        }
        if self.search.endpoint.trim().is_empty() {
            return Err(crate::RagChatError::Config(
                "search.endpoint is required".to_string(),
            ));
        }
        if self.search.index.trim().is_empty() {
            return Err(crate::RagChatError::Config(
                "search.index is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Get completion endpoint
    pub fn completion_endpoint(&self) -> &str {
        &self.completion.endpoint
    }

    /// Get completion deployment identifier
    pub fn completion_deployment(&self) -> &str {
        &self.completion.deployment
    }

    /// Get search endpoint
    pub fn search_endpoint(&self) -> &str {
        &self.search.endpoint
    }

    /// Get search index identifier
    pub fn search_index(&self) -> &str {
        &self.search.index
    }

    /// Get retrieval result count
    pub fn retrieval_top_k(&self) -> usize {
        self.search.top_k
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                api_key: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            completion: CompletionConfig {
                endpoint: "https://your-resource.openai.azure.com".to_string(),
                api_key: String::new(),
                deployment: "gpt-4o".to_string(),
                api_version: default_completion_api_version(),
            },
            search: SearchConfig {
                endpoint: "https://your-search.search.windows.net".to_string(),
                api_key: String::new(),
                index: "documents".to_string(),
                api_version: default_search_api_version(),
                top_k: default_top_k(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_default_config_validates() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_deployment_fails_validation() {
        let mut config = valid_config();
        config.completion.deployment = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("completion.deployment"));
    }

    #[test]
    fn test_missing_index_fails_validation() {
        let mut config = valid_config();
        config.search.index = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search.index"));
    }

    #[test]
    fn test_load_from_file() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080

[logging]
level = "debug"
backtrace = false

[completion]
endpoint = "https://example.openai.azure.com"
api_key = "secret"
deployment = "gpt-4o-mini"

[search]
endpoint = "https://example.search.windows.net"
api_key = "secret"
index = "kb"
"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, toml).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search_index(), "kb");
        // Defaults fill in the unspecified fields
        assert_eq!(config.retrieval_top_k(), 5);
        assert!(config.server.api_key.is_none());
        assert!(config.validate().is_ok());
    }
}
