use crate::chat::{apply_reply, ChatClient, Reply};
use crate::errors::ChatError;
use crate::status_indicator::StatusIndicator;
use crate::surface::ChatSurface;

/// State owned by the terminal event loop. Only the loop mutates it.
#[derive(Debug)]
pub struct App {
    pub surface: ChatSurface,
    pub client: ChatClient,
    pub status_indicator: StatusIndicator,
    pub in_flight: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: ChatClient) -> App {
        App {
            surface: ChatSurface::new(),
            client,
            status_indicator: StatusIndicator::new(),
            in_flight: 0,
            should_quit: false,
        }
    }

    /// Activation. Another submit while replies are pending starts another request.
    pub fn submit(&mut self) {
        match self.client.send_message(&mut self.surface) {
            Ok(_) => {
                self.in_flight += 1;
                self.refresh_status();
            }
            Err(ChatError::EmptyInput) => {}
            Err(e) => log::error!("send failed to start: {}", e),
        }
    }

    pub fn on_reply(&mut self, reply: Reply) {
        apply_reply(&mut self.surface, reply);
        self.in_flight = self.in_flight.saturating_sub(1);
        self.refresh_status();
    }

    pub fn on_tick(&mut self) {
        self.status_indicator.update_spinner();
    }

    fn refresh_status(&mut self) {
        self.status_indicator.set_thinking(self.in_flight > 0);
        match self.in_flight {
            0 => self.status_indicator.clear_status(),
            1 => self.status_indicator.set_status("Waiting for reply..."),
            n => self
                .status_indicator
                .set_status(format!("Waiting for {} replies...", n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatApi;
    use crate::models::Author;

    fn new_app() -> App {
        let (client, _rx) = ChatClient::new(ChatApi::new("http://127.0.0.1:5000/chat"));
        App::new(client)
    }

    #[test]
    fn test_submit_empty_does_nothing() {
        let mut app = new_app();
        app.surface.set_input("   ");
        app.submit();
        assert_eq!(app.in_flight, 0);
        assert!(app.surface.messages().is_empty());
        assert_eq!(app.surface.input(), "   ");
    }

    #[tokio::test]
    async fn test_submit_and_reply_track_in_flight() {
        let mut app = new_app();
        app.surface.set_input("one");
        app.submit();
        app.surface.set_input("two");
        app.submit();
        assert_eq!(app.in_flight, 2);
        assert!(app.status_indicator.is_thinking());

        app.on_reply(Reply {
            id: 2,
            outcome: Ok("second".to_string()),
        });
        assert_eq!(app.in_flight, 1);
        assert!(app.status_indicator.is_thinking());

        app.on_reply(Reply {
            id: 1,
            outcome: Err(ChatError::ServerError(502)),
        });
        assert_eq!(app.in_flight, 0);
        assert!(!app.status_indicator.is_thinking());

        let authors: Vec<Author> = app.surface.messages().iter().map(|m| m.author()).collect();
        assert_eq!(authors, vec![Author::User, Author::User, Author::AI, Author::Error]);
    }
}
