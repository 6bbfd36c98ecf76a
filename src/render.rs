//! Terminal rendering for the chat transcript
//!
//! Formats chat messages with a short avatar tag (`U` / `AI`), the
//! status line, and the empty-state placeholder shown before any
//! message exists.

use crate::transcript::{Message, Sender};
use colored::Colorize;

/// Placeholder shown while the transcript is empty
pub const EMPTY_STATE_TEXT: &str = "No messages yet. Upload a document and ask a question.";

/// Format a chat message for terminal output
///
/// The avatar tag is colored by sender; the plain text form is
/// `[U] question` / `[AI] answer`.
pub fn format_message(message: &Message) -> String {
    let avatar = match message.sender {
        Sender::User => format!("[{}]", message.sender.avatar()).cyan(),
        Sender::Assistant => format!("[{}]", message.sender.avatar()).green(),
    };
    format!("{} {}", avatar, message.text)
}

/// Print a chat message to stdout
pub fn print_message(message: &Message) {
    println!("{}", format_message(message));
}

/// Print the empty-state placeholder
pub fn print_empty_state() {
    println!("{}", EMPTY_STATE_TEXT.dimmed());
}

/// Print the status line (file name label)
pub fn print_status(status: &str) {
    println!("{}", status.yellow());
}

/// Print the welcome banner for interactive chat
pub fn print_banner(base_url: &str) {
    println!("{}", "docchat — chat with your documents".bold());
    println!("Backend: {}", base_url);
    println!("Type '/help' for commands, '/quit' to exit.\n");
}
