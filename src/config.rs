//! Configuration management for docchat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from a YAML file with CLI overrides.

use crate::cli::Cli;
use crate::error::{DocchatError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for docchat
///
/// Holds the backend endpoint settings and chat behavior defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend endpoint configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat behavior configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Backend endpoint configuration
///
/// The client talks to two routes behind a single gateway: the
/// ingestion upload endpoint and the query endpoint. Both services are
/// opaque from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend gateway
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the document upload endpoint
    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    /// Path of the question-answering endpoint
    #[serde(default = "default_query_path")]
    pub query_path: String,

    /// Path of the document listing/deletion endpoint
    #[serde(default = "default_documents_path")]
    pub documents_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_upload_path() -> String {
    "/api/ingestion/upload".to_string()
}

fn default_query_path() -> String {
    "/api/query/query".to_string()
}

fn default_documents_path() -> String {
    "/api/ingestion/documents".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_path: default_upload_path(),
            query_path: default_query_path(),
            documents_path: default_documents_path(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Chat behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Number of context chunks requested per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    3
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file with CLI overrides
    ///
    /// A missing config file is not an error; defaults are used so the
    /// client works out of the box against a local gateway.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments whose overrides take precedence
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &str, cli: &Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents).map_err(DocchatError::Yaml)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path);
            Self::default()
        };

        config.apply_cli_overrides(cli);
        Ok(config)
    }

    /// Apply CLI overrides on top of file/default values
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.backend.base_url = server.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or not http(s), or if
    /// `top_k` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(DocchatError::Config("backend.base_url must not be empty".to_string()).into());
        }

        let parsed = url::Url::parse(&self.backend.base_url).map_err(|e| {
            DocchatError::Config(format!(
                "backend.base_url is not a valid URL: {}",
                e
            ))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(DocchatError::Config(format!(
                "backend.base_url must be http or https, got: {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.chat.top_k == 0 {
            return Err(DocchatError::Config("chat.top_k must be at least 1".to_string()).into());
        }

        Ok(())
    }
}
