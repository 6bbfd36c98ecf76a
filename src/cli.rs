//! Command-line interface definition for docchat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot upload and ask,
//! and document management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docchat - Terminal chat client for a document Q&A backend
///
/// Upload a document to the ingestion service, then ask questions about
/// it through the query service.
#[derive(Parser, Debug, Clone)]
#[command(name = "docchat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the backend base URL from config
    #[arg(short, long, env = "DOCCHAT_SERVER")]
    pub server: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for docchat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Document to upload before the first question
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Upload a single document and exit
    Upload {
        /// Document to upload
        file: PathBuf,
    },

    /// Ask a single question and print the answer
    Ask {
        /// The question to send
        question: String,

        /// Number of context chunks to request
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Manage uploaded documents
    Docs {
        /// Document management subcommand
        #[command(subcommand)]
        command: DocsCommand,
    },
}

/// Document management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum DocsCommand {
    /// List uploaded documents
    List,

    /// Delete an uploaded document
    Delete {
        /// Identifier of the document to delete
        doc_id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            server: None,
            command: Commands::Chat { file: None },
        }
    }
}
