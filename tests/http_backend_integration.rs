//! Integration tests for the HTTP backend
//!
//! Exercises the reqwest-based backend against a mock HTTP server:
//! multipart uploads, JSON queries, and the document management
//! endpoints, on success and failure paths.

use serde_json::json;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docchat::backend::{Backend, HttpBackend};
use docchat::config::BackendConfig;

/// Backend config pointed at the mock server
fn config_for(server: &MockServer) -> BackendConfig {
    BackendConfig {
        base_url: server.uri(),
        ..BackendConfig::default()
    }
}

#[tokio::test]
async fn test_upload_success_returns_receipt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ingestion/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Document processed successfully",
            "doc_id": 1,
            "chunks": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let receipt = backend
        .upload_document("report.pdf", b"file bytes".to_vec())
        .await
        .unwrap();

    assert_eq!(receipt.doc_id, Some(1));
    assert_eq!(receipt.chunks, Some(12));
    assert_eq!(receipt.message, "Document processed successfully");
}

#[tokio::test]
async fn test_upload_success_with_unexpected_body() {
    let server = MockServer::start().await;

    // A 2xx with a body the client does not understand still counts as
    // a successful upload.
    Mock::given(method("POST"))
        .and(path("/api/ingestion/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let receipt = backend
        .upload_document("report.pdf", b"file bytes".to_vec())
        .await
        .unwrap();

    assert_eq!(receipt.doc_id, None);
    assert_eq!(receipt.chunks, None);
}

#[tokio::test]
async fn test_upload_non_2xx_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ingestion/upload"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Unsupported file type"})),
        )
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let result = backend
        .upload_document("archive.zip", b"file bytes".to_vec())
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_upload_connection_error() {
    let config = BackendConfig {
        // Nothing listens here
        base_url: "http://127.0.0.1:1".to_string(),
        ..BackendConfig::default()
    };

    let backend = HttpBackend::new(&config).unwrap();
    let result = backend.upload_document("a.txt", b"x".to_vec()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_query_sends_expected_body_and_parses_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/query/query"))
        .and(body_json(json!({"question": "What is X?", "top_k": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "What is X?",
            "answer": "X is Y.",
            "sources": [{"doc_id": 1, "score": 0.91}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let response = backend.query("What is X?", 3).await.unwrap();

    assert_eq!(response.answer.as_deref(), Some("X is Y."));
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].doc_id, 1);
}

#[tokio::test]
async fn test_query_tolerates_missing_answer_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/query/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let response = backend.query("What is X?", 3).await.unwrap();
    assert_eq!(response.answer, None);
}

#[tokio::test]
async fn test_query_non_2xx_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/query/query"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let result = backend.query("What is X?", 3).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_query_malformed_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/query/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let result = backend.query("What is X?", 3).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_documents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ingestion/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "filename": "report.pdf", "status": "completed", "created_at": "2026-01-01T00:00:00"},
            {"id": 2, "filename": "notes.txt", "status": "processing", "created_at": "2026-01-02T00:00:00"}
        ])))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let documents = backend.list_documents().await.unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].filename, "report.pdf");
    assert_eq!(documents[1].status, "processing");
}

#[tokio::test]
async fn test_delete_document() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/ingestion/documents/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Document deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    backend.delete_document(7).await.unwrap();
}

#[tokio::test]
async fn test_delete_document_non_2xx_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/ingestion/documents/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let result = backend.delete_document(7).await;
    assert!(result.is_err());
}
