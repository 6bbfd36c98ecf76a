/*!
Command handlers for the CLI

This module provides the handlers invoked by the CLI entrypoint:

- `chat`   — Interactive chat session
- `upload` — One-shot document upload
- `ask`    — One-shot question
- `docs`   — Document listing and deletion

The handlers are intentionally small and use the library components:
the backend client, the controller, and the renderer.
*/

use crate::backend::{Backend, HttpBackend};
use crate::config::Config;
use crate::controller::{Controller, SendOutcome, UploadOutcome};
use crate::error::Result;
use crate::render;

// Slash command parser for the interactive session
pub mod special_commands;

/// Interactive chat session handler
pub mod chat {
    //! Interactive chat handler.
    //!
    //! Instantiates the HTTP backend and controller, then runs a
    //! readline-based loop that routes slash commands to the session
    //! and everything else to the query endpoint.

    use super::*;
    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::path::PathBuf;

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `file` - Optional document to upload before the first question
    pub async fn run_chat(config: Config, file: Option<PathBuf>) -> Result<()> {
        tracing::info!("Starting interactive chat session");

        let backend = HttpBackend::new(&config.backend)?;
        let mut controller = Controller::new(backend, config.chat.top_k);

        render::print_banner(&config.backend.base_url);
        if controller.transcript().is_empty() {
            render::print_empty_state();
        }

        if let Some(path) = file {
            upload_and_report(&mut controller, &path.to_string_lossy()).await;
        }

        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(">> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(trimmed)?;

                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::Upload(path)) => {
                            upload_and_report(&mut controller, &path).await;
                        }
                        Ok(SpecialCommand::ShowStatus) => {
                            print_status_display(&controller);
                        }
                        Ok(SpecialCommand::ListDocs) => {
                            match controller.backend().list_documents().await {
                                Ok(documents) => super::docs::print_documents(&documents),
                                Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                            }
                        }
                        Ok(SpecialCommand::DeleteDoc(doc_id)) => {
                            match controller.backend().delete_document(doc_id).await {
                                Ok(()) => println!("Deleted document {}", doc_id),
                                Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                            }
                        }
                        Ok(SpecialCommand::Help) => print_help(),
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {
                            ask_and_report(&mut controller, trimmed).await;
                        }
                        Err(e) => {
                            eprintln!("{}", e.to_string().red());
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Select and upload a document, printing the outcome
    async fn upload_and_report(controller: &mut Controller<HttpBackend>, path: &str) {
        let name = controller.select_file(path);
        println!("{}", format!("Uploading {}...", name).cyan());

        match controller.upload_document().await {
            UploadOutcome::Uploaded { file_name, receipt } => {
                let chunks = receipt
                    .chunks
                    .map(|n| format!(" ({} chunks)", n))
                    .unwrap_or_default();
                println!("{}", format!("Uploaded: {}{}", file_name, chunks).green());
            }
            UploadOutcome::Failed => {
                eprintln!("{}", controller.status_line().red());
            }
            UploadOutcome::NoFileSelected => {
                eprintln!("{}", "No file selected".yellow());
            }
            UploadOutcome::InFlight => {
                eprintln!("{}", "An upload is already in progress".yellow());
            }
        }
    }

    /// Submit a question through the controller, printing the exchange
    async fn ask_and_report(controller: &mut Controller<HttpBackend>, question: &str) {
        match controller.send_question(question).await {
            SendOutcome::Replied(_) => {
                // The controller appended the user message and the reply
                let messages = controller.transcript().messages();
                for message in messages.iter().skip(messages.len().saturating_sub(2)) {
                    render::print_message(message);
                }
            }
            SendOutcome::Ignored => {
                println!(
                    "{}",
                    "Upload a document first: /upload <path>".yellow()
                );
            }
        }
    }

    /// Print session status for the /status command
    fn print_status_display(controller: &Controller<HttpBackend>) {
        let selected = controller
            .session()
            .selected_name()
            .unwrap_or("none");
        let uploaded = if controller.session().has_uploaded_document {
            "yes"
        } else {
            "no"
        };
        println!("Selected file: {}", selected);
        println!("Document uploaded: {}", uploaded);
        println!("Messages: {}", controller.transcript().len());
        println!("Status: {}", controller.status_line());
    }
}

/// One-shot upload handler
pub mod upload {
    use super::*;
    use std::path::Path;

    /// Upload a single document and exit
    ///
    /// # Errors
    ///
    /// Returns error when the upload fails, so the process exits
    /// non-zero.
    pub async fn run_upload(config: Config, file: &Path) -> Result<()> {
        let backend = HttpBackend::new(&config.backend)?;
        let mut controller = Controller::new(backend, config.chat.top_k);

        let name = controller.select_file(file);
        tracing::info!("Uploading {}", name);

        match controller.upload_document().await {
            UploadOutcome::Uploaded { file_name, receipt } => {
                let chunks = receipt
                    .chunks
                    .map(|n| format!(" ({} chunks)", n))
                    .unwrap_or_default();
                println!("Uploaded: {}{}", file_name, chunks);
                Ok(())
            }
            _ => anyhow::bail!("Upload failed: {}", name),
        }
    }
}

/// One-shot question handler
pub mod ask {
    use super::*;

    /// Ask a single question and print the answer
    ///
    /// Talks to the query endpoint directly: the uploaded-document gate
    /// belongs to the interactive session, while a one-shot question
    /// assumes documents were ingested by an earlier run.
    pub async fn run_ask(config: Config, question: &str, top_k: Option<usize>) -> Result<()> {
        let backend = HttpBackend::new(&config.backend)?;
        let top_k = top_k.unwrap_or(config.chat.top_k);

        let response = backend.query(question.trim(), top_k).await?;
        let answer = response
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| crate::controller::NO_RESPONSE_TEXT.to_string());
        println!("{}", answer);

        if !response.sources.is_empty() {
            let ids: Vec<String> = response
                .sources
                .iter()
                .map(|s| s.doc_id.to_string())
                .collect();
            println!("Sources: documents {}", ids.join(", "));
        }
        Ok(())
    }
}

/// Document management handlers
pub mod docs {
    use super::*;
    use crate::backend::DocumentInfo;

    /// List uploaded documents
    pub async fn run_list(config: Config) -> Result<()> {
        let backend = HttpBackend::new(&config.backend)?;
        let documents = backend.list_documents().await?;
        print_documents(&documents);
        Ok(())
    }

    /// Delete an uploaded document
    pub async fn run_delete(config: Config, doc_id: i64) -> Result<()> {
        let backend = HttpBackend::new(&config.backend)?;
        backend.delete_document(doc_id).await?;
        println!("Deleted document {}", doc_id);
        Ok(())
    }

    /// Print a document listing
    pub fn print_documents(documents: &[DocumentInfo]) {
        if documents.is_empty() {
            println!("No documents uploaded.");
            return;
        }
        for doc in documents {
            println!(
                "{:>5}  {:<10}  {}  {}",
                doc.id, doc.status, doc.filename, doc.created_at
            );
        }
    }
}
