//! Chat controller
//!
//! Binds user actions to the two remote operations (upload a document,
//! submit a question) and reflects their results in the session state
//! and transcript. The backend is injected so the controller can be
//! driven in tests without a live server.
//!
//! Each operation follows the same lifecycle: idle, in flight, idle.
//! The in-flight flag for an operation is cleared on success and
//! failure alike, and each failure is converted at the call site into a
//! fixed user-visible message. Nothing is retried.

use crate::backend::{Backend, UploadReceipt};
use crate::error::{DocchatError, Result};
use crate::session::{SelectedFile, Session};
use crate::transcript::{Message, Transcript};

/// Assistant text when the query response carries no answer
pub const NO_RESPONSE_TEXT: &str = "No response.";
/// Assistant text when the query request fails
pub const SERVER_ERROR_TEXT: &str = "Server error.";
/// Status text when an upload fails
pub const UPLOAD_FAILED_TEXT: &str = "Upload failed";
/// Idle label of the upload action
pub const UPLOAD_LABEL: &str = "Upload";
/// Transient label while an upload is in flight
pub const UPLOADING_LABEL: &str = "Uploading...";
/// Status text before any file has been selected
pub const NO_FILE_TEXT: &str = "No file selected";

/// Result of an upload attempt
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// The document was stored by the ingestion service
    Uploaded {
        /// Display name of the uploaded file
        file_name: String,
        /// Receipt parsed from the response body (best effort)
        receipt: UploadReceipt,
    },
    /// The upload failed; session state is unchanged
    Failed,
    /// No file has been selected
    NoFileSelected,
    /// An upload is already in flight
    InFlight,
}

/// Result of submitting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// An assistant message was appended with this text
    Replied(String),
    /// The input was ignored: empty question, no uploaded document, or
    /// a query already in flight. Nothing was appended or sent.
    Ignored,
}

/// Controller for a document Q&A chat session
///
/// Owns the session state and transcript; the UI layer renders from
/// them after each operation.
pub struct Controller<B: Backend> {
    backend: B,
    session: Session,
    transcript: Transcript,
    top_k: usize,
    upload_busy: bool,
    query_busy: bool,
    status: String,
    upload_label: &'static str,
}

impl<B: Backend> Controller<B> {
    /// Create a controller over the given backend
    ///
    /// # Arguments
    ///
    /// * `backend` - Transport for the upload and query operations
    /// * `top_k` - Number of context chunks requested per question
    pub fn new(backend: B, top_k: usize) -> Self {
        Self {
            backend,
            session: Session::new(),
            transcript: Transcript::new(),
            top_k,
            upload_busy: false,
            query_busy: false,
            status: NO_FILE_TEXT.to_string(),
            upload_label: UPLOAD_LABEL,
        }
    }

    /// Record a file selection and enable the upload action
    ///
    /// Purely local: updates the status line to the file name. No
    /// failure path.
    pub fn select_file(&mut self, path: impl AsRef<std::path::Path>) -> String {
        let name = self.session.select_file(path).name.clone();
        self.status = name.clone();
        tracing::debug!("Selected file: {}", name);
        name
    }

    /// Upload the selected document
    ///
    /// Requires a selected file and no upload in flight. On success the
    /// session is marked as having an uploaded document and the status
    /// line confirms the stored file name. On any failure (file read,
    /// transport, non-2xx) the status line shows a generic failure
    /// message and session state is unchanged. The upload label and
    /// busy flag are restored on both paths.
    pub async fn upload_document(&mut self) -> UploadOutcome {
        let file = match &self.session.selected_file {
            Some(file) => file.clone(),
            None => return UploadOutcome::NoFileSelected,
        };
        if self.upload_busy {
            return UploadOutcome::InFlight;
        }

        self.upload_busy = true;
        self.upload_label = UPLOADING_LABEL;

        let outcome = match self.perform_upload(&file).await {
            Ok(receipt) => {
                self.session.mark_uploaded();
                self.status = format!("Uploaded: {}", file.name);
                UploadOutcome::Uploaded {
                    file_name: file.name.clone(),
                    receipt,
                }
            }
            Err(e) => {
                tracing::warn!("Upload of {} failed: {}", file.name, e);
                self.status = UPLOAD_FAILED_TEXT.to_string();
                UploadOutcome::Failed
            }
        };

        self.upload_label = UPLOAD_LABEL;
        self.upload_busy = false;
        outcome
    }

    async fn perform_upload(&self, file: &SelectedFile) -> Result<UploadReceipt> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|e| {
            DocchatError::FileLoad(format!("{}: {}", file.path.display(), e))
        })?;
        self.backend.upload_document(&file.name, bytes).await
    }

    /// Submit a question and append the exchange to the transcript
    ///
    /// The trimmed question must be non-empty, a document must have
    /// been uploaded, and no query may be in flight; otherwise the
    /// input is ignored without touching the transcript. The assistant
    /// reply is the response's answer, a fixed "no response" text when
    /// the answer is absent or empty, or a fixed "server error" text on
    /// failure. The busy flag is cleared on both paths.
    pub async fn send_question(&mut self, input: &str) -> SendOutcome {
        let question = input.trim();
        if question.is_empty() || !self.session.has_uploaded_document || self.query_busy {
            return SendOutcome::Ignored;
        }

        self.transcript.push(Message::user(question));
        self.query_busy = true;

        let reply = match self.backend.query(question, self.top_k).await {
            Ok(response) => response
                .answer
                .filter(|answer| !answer.is_empty())
                .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()),
            Err(e) => {
                tracing::warn!("Query failed: {}", e);
                SERVER_ERROR_TEXT.to_string()
            }
        };

        self.transcript.push(Message::assistant(reply.clone()));
        self.query_busy = false;
        SendOutcome::Replied(reply)
    }

    /// Whether the upload action is currently available
    pub fn can_upload(&self) -> bool {
        self.session.has_selection() && !self.upload_busy
    }

    /// Whether questions are currently accepted
    pub fn can_ask(&self) -> bool {
        self.session.has_uploaded_document && !self.query_busy
    }

    /// The session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The chat transcript
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current status line (file name label)
    pub fn status_line(&self) -> &str {
        &self.status
    }

    /// Current label of the upload action
    pub fn upload_label(&self) -> &str {
        self.upload_label
    }

    /// Configured number of context chunks per question
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// The backend the controller was built over
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
