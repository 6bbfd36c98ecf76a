//! End-to-end session tests over the HTTP backend
//!
//! Drives the controller through the full upload-then-ask flow against
//! a mock HTTP server, covering the state transitions the interactive
//! session relies on.

use serde_json::json;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docchat::backend::HttpBackend;
use docchat::config::BackendConfig;
use docchat::controller::{Controller, SendOutcome, UploadOutcome, SERVER_ERROR_TEXT};
use docchat::transcript::Sender;

fn backend_for(server: &MockServer) -> HttpBackend {
    let config = BackendConfig {
        base_url: server.uri(),
        ..BackendConfig::default()
    };
    HttpBackend::new(&config).unwrap()
}

fn write_doc(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("report.txt");
    std::fs::write(&path, "The answer to X is Y.\n").unwrap();
    path
}

#[tokio::test]
async fn test_upload_then_ask_full_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ingestion/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Document processed successfully",
            "doc_id": 1,
            "chunks": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/query/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "question": "What is X?",
            "answer": "X is Y.",
            "sources": [{"doc_id": 1, "score": 0.88}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(&dir);

    let mut controller = Controller::new(backend_for(&server), 3);
    assert!(!controller.can_ask());

    controller.select_file(&doc);
    let outcome = controller.upload_document().await;
    assert!(matches!(outcome, UploadOutcome::Uploaded { .. }));
    assert_eq!(controller.status_line(), "Uploaded: report.txt");
    assert!(controller.can_ask());

    let outcome = controller.send_question("What is X?").await;
    assert_eq!(outcome, SendOutcome::Replied("X is Y.".to_string()));

    let messages = controller.transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].text, "X is Y.");
}

#[tokio::test]
async fn test_failed_upload_keeps_questions_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ingestion/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(&dir);

    let mut controller = Controller::new(backend_for(&server), 3);
    controller.select_file(&doc);

    let outcome = controller.upload_document().await;
    assert!(matches!(outcome, UploadOutcome::Failed));
    assert_eq!(controller.status_line(), "Upload failed");
    assert!(!controller.can_ask());

    // A question after the failed upload never reaches the server
    let outcome = controller.send_question("What is X?").await;
    assert_eq!(outcome, SendOutcome::Ignored);
    assert!(controller.transcript().is_empty());
}

#[tokio::test]
async fn test_query_error_renders_server_error_and_recovers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ingestion/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"doc_id": 1})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/query/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(&dir);

    let mut controller = Controller::new(backend_for(&server), 3);
    controller.select_file(&doc);
    controller.upload_document().await;

    let outcome = controller.send_question("What is X?").await;
    assert_eq!(outcome, SendOutcome::Replied(SERVER_ERROR_TEXT.to_string()));

    // The failure is reflected only in the transcript; input stays usable
    assert!(controller.can_ask());
    let messages = controller.transcript().messages();
    assert_eq!(messages[1].text, SERVER_ERROR_TEXT);
    assert_eq!(messages[1].sender, Sender::Assistant);
}
