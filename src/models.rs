// src/models.rs

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who a transcript line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    AI,
    Error,
}

impl Author {
    pub fn prefix(self) -> &'static str {
        match self {
            Author::User => "You",
            Author::AI => "AI",
            Author::Error => "Error",
        }
    }
}

/// One line of the transcript. Never mutated once appended.
#[derive(Debug, Clone)]
pub struct Message {
    author: Author,
    text: String,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// The line as shown to the user, e.g. `You: Hello`.
    pub fn display_text(&self) -> String {
        format!("{}: {}", self.author.prefix(), self.text)
    }
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Size of the message in characters, as written to the log.
    pub fn summary(&self) -> String {
        format!("{} chars", self.message.chars().count())
    }
}

/// Expected success body. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
