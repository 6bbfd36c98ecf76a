//! Error types for docchat
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for docchat operations
///
/// This enum encompasses all possible errors that can occur while
/// loading configuration, talking to the backend services, and reading
/// documents from disk.
#[derive(Error, Debug)]
pub enum DocchatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend errors (upload or query endpoint failures)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Document loading errors (read errors, missing files)
    #[error("File load error: {0}")]
    FileLoad(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for docchat operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
