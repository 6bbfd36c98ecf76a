//! Chat transcript types
//!
//! The transcript is an append-only, insertion-ordered list of chat
//! messages held in memory for the lifetime of the session. Nothing is
//! persisted; the transcript exists so the UI can render the
//! conversation and tests can assert on message order and content.

use std::fmt;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The person asking questions
    User,
    /// The answering backend
    Assistant,
}

impl Sender {
    /// Short avatar tag used when rendering the message
    pub fn avatar(&self) -> &'static str {
        match self {
            Self::User => "U",
            Self::Assistant => "AI",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single rendered chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message body
    pub text: String,
    /// Message author
    pub sender: Sender,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
        }
    }
}

/// Append-only chat transcript
///
/// Starts empty (the UI shows a placeholder until the first message is
/// appended). Messages keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, returning a reference to it
    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        // Just pushed above
        self.messages.last().unwrap()
    }

    /// Messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the transcript
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True while no message has been appended (the empty state)
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
