// src/surface.rs

use crate::models::Message;

/// The three regions a host provides: the transcript container, the text
/// input and the transcript's scroll position. The activation control lives
/// in the host and calls into [`crate::chat::ChatClient::send_message`].
#[derive(Debug, Default)]
pub struct ChatSurface {
    transcript: Vec<Message>,
    input: String,
    scroll: u16,
}

impl ChatSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Transcript in append order.
    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    /// The only way into the transcript. Lines are never edited or removed.
    pub fn append(&mut self, message: Message) {
        self.transcript.push(message);
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Hosts clamp this against their real content height when drawing.
    pub fn set_scroll(&mut self, offset: u16) {
        self.scroll = offset;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = u16::MAX;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}
