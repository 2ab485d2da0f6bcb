// src/chat.rs

use crate::{
    api::ChatApi,
    errors::{ChatError, ChatResult},
    models::{Author, ChatRequest, Message},
    surface::ChatSurface,
};
use tokio::sync::mpsc;

/// Sequence number of a send cycle, used only for logging.
pub type CycleId = u64;

/// Outcome of one in-flight request, delivered back to whoever owns the surface.
#[derive(Debug)]
pub struct Reply {
    pub id: CycleId,
    pub outcome: ChatResult<String>,
}

/// Drives send cycles. Each cycle runs its HTTP call as its own task, so
/// several can be in flight at once; replies come back on the channel
/// returned by [`ChatClient::new`] in completion order.
#[derive(Debug)]
pub struct ChatClient {
    api: ChatApi,
    replies: mpsc::UnboundedSender<Reply>,
    next_id: CycleId,
}

impl ChatClient {
    pub fn new(api: ChatApi) -> (Self, mpsc::UnboundedReceiver<Reply>) {
        let (replies, rx) = mpsc::unbounded_channel();
        let client = Self {
            api,
            replies,
            next_id: 1,
        };
        (client, rx)
    }

    pub fn api(&self) -> &ChatApi {
        &self.api
    }

    /// Starts a send cycle from the surface's current input.
    ///
    /// Input that trims to nothing returns [`ChatError::EmptyInput`] and
    /// leaves the surface untouched. Otherwise the user line is appended and
    /// the input cleared before this returns; the request itself is spawned
    /// onto the tokio runtime.
    pub fn send_message(&mut self, surface: &mut ChatSurface) -> ChatResult<CycleId> {
        let text = surface.input().trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        let text = text.to_string();

        surface.append(Message::new(Author::User, text.clone()));
        surface.clear_input();

        let id = self.next_id;
        self.next_id += 1;
        let request = ChatRequest { message: text };
        log::debug!(
            "cycle {}: sending {} to {}",
            id,
            request.summary(),
            self.api.endpoint()
        );

        let api = self.api.clone();
        let replies = self.replies.clone();
        tokio::spawn(async move {
            let outcome = api.send(&request).await;
            if replies.send(Reply { id, outcome }).is_err() {
                log::debug!("cycle {}: view closed before the reply arrived", id);
            }
        });

        Ok(id)
    }
}

/// Resume point of a send cycle: appends the AI or error line and scrolls to it.
pub fn apply_reply(surface: &mut ChatSurface, reply: Reply) {
    let message = match reply.outcome {
        Ok(text) => {
            log::debug!("cycle {}: reply received", reply.id);
            Message::new(Author::AI, text)
        }
        Err(err) => {
            log::warn!("cycle {}: {}", reply.id, err);
            Message::new(Author::Error, err.to_string())
        }
    };

    surface.append(message);
    surface.scroll_to_end();
}
