//! Special commands parser for interactive chat mode
//!
//! Parses the slash commands available during a chat session. Anything
//! that is not a special command is treated as a question for the
//! backend. Commands are prefixed with `/` and are case-insensitive,
//! except for arguments such as file paths.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
///
/// These commands act on the session rather than being sent to the
/// query endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Select and upload a document
    ///
    /// Use `/upload <path>` to select a file and upload it in one step.
    Upload(String),

    /// Display session status
    ///
    /// Shows the selected file, upload state, and message count.
    ShowStatus,

    /// List documents stored by the ingestion service
    ListDocs,

    /// Delete a stored document by id
    DeleteDoc(i64),

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; treat the input as a question
    None,
}

/// Parse a user input string into a special command
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but
/// is not a valid command, `CommandError::MissingArgument` when a
/// required argument is absent, and `CommandError::UnsupportedArgument`
/// for malformed arguments.
///
/// # Examples
///
/// ```
/// use docchat::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// let cmd = parse_special_command("/upload report.pdf").unwrap();
/// assert_eq!(cmd, SpecialCommand::Upload("report.pdf".to_string()));
///
/// let cmd = parse_special_command("What is X?").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/frobnicate").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // Anything that does not start with "/" is a question,
    // except bare exit/quit.
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/docs" => Ok(SpecialCommand::ListDocs),
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "/quit" | "/exit" | "exit" | "quit" => Ok(SpecialCommand::Exit),

        "/upload" => Err(CommandError::MissingArgument {
            command: "/upload".to_string(),
            usage: "/upload <path>".to_string(),
        }),
        _ if lower.starts_with("/upload ") => {
            // Keep the original casing of the path argument
            let arg = trimmed["/upload ".len()..].trim();
            if arg.is_empty() {
                Err(CommandError::MissingArgument {
                    command: "/upload".to_string(),
                    usage: "/upload <path>".to_string(),
                })
            } else {
                Ok(SpecialCommand::Upload(arg.to_string()))
            }
        }

        "/delete" => Err(CommandError::MissingArgument {
            command: "/delete".to_string(),
            usage: "/delete <doc_id>".to_string(),
        }),
        _ if lower.starts_with("/delete ") => {
            let arg = trimmed["/delete ".len()..].trim();
            arg.parse::<i64>()
                .map(SpecialCommand::DeleteDoc)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/delete".to_string(),
                    arg: arg.to_string(),
                })
        }

        _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
    }
}

/// Print help for the interactive session
pub fn print_help() {
    println!("Available commands:");
    println!("  /upload <path>   Select a document and upload it");
    println!("  /status          Show session status");
    println!("  /docs            List uploaded documents");
    println!("  /delete <id>     Delete an uploaded document");
    println!("  /help            Show this help");
    println!("  /quit            Exit the session");
    println!();
    println!("Any other input is sent as a question once a document is uploaded.");
}
