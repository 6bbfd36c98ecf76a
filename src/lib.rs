//! docchat - Terminal chat client for a document Q&A backend
//!
//! This library provides the building blocks for a small chat client
//! that uploads documents to an ingestion service and asks questions
//! through a query service.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `controller`: session logic binding user actions to the backend
//! - `backend`: transport abstraction and the reqwest implementation
//! - `session` / `transcript`: session state and the chat transcript
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli` / `commands` / `render`: the terminal front end
//!
//! # Example
//!
//! ```no_run
//! use docchat::backend::HttpBackend;
//! use docchat::config::Config;
//! use docchat::controller::Controller;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let backend = HttpBackend::new(&config.backend)?;
//!     let mut controller = Controller::new(backend, config.chat.top_k);
//!
//!     controller.select_file("report.pdf");
//!     controller.upload_document().await;
//!     controller.send_question("What is X?").await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use backend::{Backend, HttpBackend, QueryResponse, UploadReceipt};
pub use config::Config;
pub use controller::{Controller, SendOutcome, UploadOutcome};
pub use error::{DocchatError, Result};
pub use session::Session;
pub use transcript::{Message, Sender, Transcript};
