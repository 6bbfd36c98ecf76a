//! HTTP backend implementation
//!
//! Talks to the ingestion and query services over reqwest. The upload
//! uses a multipart form with a single `file` part carrying the
//! document bytes and its original file name; the query posts a JSON
//! body `{"question": ..., "top_k": ...}`.

use crate::backend::{Backend, DocumentInfo, QueryRequest, QueryResponse, UploadReceipt};
use crate::config::BackendConfig;
use crate::error::{DocchatError, Result};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the document Q&A backend
///
/// # Examples
///
/// ```no_run
/// use docchat::backend::{Backend, HttpBackend};
/// use docchat::config::BackendConfig;
///
/// # async fn example() -> docchat::error::Result<()> {
/// let backend = HttpBackend::new(&BackendConfig::default())?;
/// let response = backend.query("What is X?", 3).await?;
/// println!("{}", response.answer.unwrap_or_default());
/// # Ok(())
/// # }
/// ```
pub struct HttpBackend {
    client: Client,
    upload_url: String,
    query_url: String,
    documents_url: String,
}

impl HttpBackend {
    /// Create a new HTTP backend from configuration
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("docchat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DocchatError::Backend(format!("Failed to create HTTP client: {}", e)))?;

        let base = config.base_url.trim_end_matches('/');
        tracing::info!("Initialized HTTP backend: base_url={}", base);

        Ok(Self {
            client,
            upload_url: format!("{}{}", base, config.upload_path),
            query_url: format!("{}{}", base, config.query_path),
            documents_url: format!("{}{}", base, config.documents_path),
        })
    }

    /// The resolved upload endpoint URL
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// The resolved query endpoint URL
    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn upload_document(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadReceipt> {
        tracing::debug!(
            "Uploading {} ({} bytes) to {}",
            file_name,
            bytes.len(),
            self.upload_url
        );

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DocchatError::Backend(format!("Upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Upload endpoint returned {}: {}", status, body);
            return Err(
                DocchatError::Backend(format!("Upload endpoint returned {}", status)).into(),
            );
        }

        // Success is determined by the status alone; the receipt body is
        // parsed opportunistically for display.
        let receipt = response.json::<UploadReceipt>().await.unwrap_or_default();
        tracing::info!(
            "Uploaded {}: doc_id={:?}, chunks={:?}",
            file_name,
            receipt.doc_id,
            receipt.chunks
        );
        Ok(receipt)
    }

    async fn query(&self, question: &str, top_k: usize) -> Result<QueryResponse> {
        tracing::debug!("Sending question to {} (top_k={})", self.query_url, top_k);

        let request = QueryRequest {
            question: question.to_string(),
            top_k,
        };

        let response = self
            .client
            .post(&self.query_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DocchatError::Backend(format!("Query request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Query endpoint returned {}: {}", status, body);
            return Err(
                DocchatError::Backend(format!("Query endpoint returned {}", status)).into(),
            );
        }

        let parsed = response.json::<QueryResponse>().await.map_err(|e| {
            DocchatError::Backend(format!("Failed to parse query response: {}", e))
        })?;
        Ok(parsed)
    }

    async fn list_documents(&self) -> Result<Vec<DocumentInfo>> {
        let response = self
            .client
            .get(&self.documents_url)
            .send()
            .await
            .map_err(|e| DocchatError::Backend(format!("Documents request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                DocchatError::Backend(format!("Documents endpoint returned {}", status)).into(),
            );
        }

        let documents = response.json::<Vec<DocumentInfo>>().await.map_err(|e| {
            DocchatError::Backend(format!("Failed to parse documents response: {}", e))
        })?;
        Ok(documents)
    }

    async fn delete_document(&self, doc_id: i64) -> Result<()> {
        let url = format!("{}/{}", self.documents_url, doc_id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| DocchatError::Backend(format!("Delete request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                DocchatError::Backend(format!("Delete endpoint returned {}", status)).into(),
            );
        }
        Ok(())
    }
}
