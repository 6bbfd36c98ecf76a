//! Backend abstraction for docchat
//!
//! The client talks to two remote operations: uploading a document to
//! the ingestion service and submitting a question to the query
//! service. Both are modeled behind the [`Backend`] trait so the
//! controller can be exercised in tests without a live server.

pub mod http;

pub use http::HttpBackend;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Receipt returned by the upload endpoint
///
/// The client does not depend on the body; every field is defaulted so
/// a 2xx response with an unexpected or empty body still counts as a
/// successful upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadReceipt {
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
    /// Identifier assigned to the stored document
    #[serde(default)]
    pub doc_id: Option<i64>,
    /// Number of chunks the document was split into
    #[serde(default)]
    pub chunks: Option<usize>,
}

/// A retrieval source cited by the query endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Source {
    /// Document the chunk came from
    pub doc_id: i64,
    /// Similarity score of the chunk
    pub score: f64,
}

/// Response from the query endpoint
///
/// The `answer` field is optional from the client's perspective; its
/// absence is tolerated and rendered as a fixed fallback message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    /// Echo of the submitted question
    #[serde(default)]
    pub question: Option<String>,
    /// Generated answer text
    #[serde(default)]
    pub answer: Option<String>,
    /// Retrieval sources used to build the answer
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Metadata for an uploaded document, as reported by the ingestion service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentInfo {
    /// Document identifier
    pub id: i64,
    /// Original file name
    pub filename: String,
    /// Ingestion status ("processing", "completed", "failed")
    pub status: String,
    /// ISO-8601 creation timestamp
    #[serde(default)]
    pub created_at: String,
}

/// Request body for the query endpoint
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// The question to answer
    pub question: String,
    /// Number of context chunks to retrieve
    pub top_k: usize,
}

/// Remote operations the chat client depends on
///
/// Implemented by [`HttpBackend`] for production use; tests provide
/// scripted implementations to drive the controller through success and
/// failure paths.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Upload a document to the ingestion service
    ///
    /// # Arguments
    ///
    /// * `file_name` - Original file name, forwarded with the bytes
    /// * `bytes` - Raw document contents
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    async fn upload_document(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadReceipt>;

    /// Submit a question to the query service
    ///
    /// # Arguments
    ///
    /// * `question` - The natural-language question
    /// * `top_k` - Number of context chunks to retrieve
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx response, or an
    /// unparseable response body.
    async fn query(&self, question: &str, top_k: usize) -> Result<QueryResponse>;

    /// List documents known to the ingestion service
    async fn list_documents(&self) -> Result<Vec<DocumentInfo>>;

    /// Delete a document from the ingestion service
    async fn delete_document(&self, doc_id: i64) -> Result<()>;
}
