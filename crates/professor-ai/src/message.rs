//! Conversation entries shown to the user.

use chrono::{DateTime, Local};
use professor_common::MessageId;

use crate::grounding::Source;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Professor,
}

/// One entry of the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    text: String,
    timestamp: DateTime<Local>,
    is_error: bool,
    sources: Option<Vec<Source>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text.into(), false, None)
    }

    /// A completed answer. `sources` is `Some` only when the answer was grounded.
    pub fn professor(text: impl Into<String>, sources: Option<Vec<Source>>) -> Self {
        Self::new(Sender::Professor, text.into(), false, sources)
    }

    /// An error entry standing in for an answer that failed.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Sender::Professor, text.into(), true, None)
    }

    fn new(sender: Sender, text: String, is_error: bool, sources: Option<Vec<Source>>) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            text,
            timestamp: Local::now(),
            is_error,
            sources,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn sources(&self) -> Option<&[Source]> {
        self.sources.as_deref()
    }
}
