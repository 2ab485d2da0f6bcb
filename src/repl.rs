// src/repl.rs

use crate::{
    chat::{apply_reply, ChatClient, Reply},
    errors::ChatError,
    models::{Author, Message},
    surface::ChatSurface,
};
use crossterm::style::Stylize;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "quit" | "exit")
}

fn print_message<W: Write>(out: &mut W, message: &Message) -> std::io::Result<()> {
    match message.author() {
        Author::Error => writeln!(out, "{}", message.display_text().red()),
        _ => writeln!(out, "{}", message.display_text()),
    }
}

/// Line-mode chat: one send cycle per input line, waiting for each reply.
///
/// The user's own line is already on screen after the `You: ` prompt, so
/// only AI and error lines are printed.
pub async fn run_repl<R, W>(
    mut client: ChatClient,
    mut replies: mpsc::UnboundedReceiver<Reply>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        out,
        "Mini Chat connected to {}. Type 'quit' or 'exit' to stop.",
        client.api().endpoint()
    )?;

    let mut surface = ChatSurface::new();
    let mut lines = input.lines();

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        if is_quit(&line) {
            writeln!(out, "Goodbye!")?;
            break;
        }

        surface.set_input(line);
        let shown = surface.messages().len();
        match client.send_message(&mut surface) {
            Ok(_) => {}
            Err(ChatError::EmptyInput) => continue,
            Err(e) => return Err(e.into()),
        }

        match replies.recv().await {
            Some(reply) => apply_reply(&mut surface, reply),
            None => break,
        }

        for message in &surface.messages()[shown..] {
            if message.author() != Author::User {
                print_message(out, message)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatApi;
    use reqwest::Client;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method},
        Mock, MockServer, ResponseTemplate,
    };

    async fn run(endpoint: String, script: &str) -> String {
        let http = Client::builder().no_proxy().build().unwrap();
        let (client, replies) = ChatClient::new(ChatApi::with_client(http, endpoint));
        let mut out = Vec::new();
        run_repl(client, replies, script.as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit("quit"));
        assert!(is_quit("  EXIT \n"));
        assert!(!is_quit("quitting"));
    }

    #[tokio::test]
    async fn test_repl_round_trip_and_quit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({ "message": "Hello" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Hi there" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let output = run(format!("{}/chat", mock_server.uri()), "Hello\n   \nquit\nnever sent\n").await;

        assert!(output.contains("AI: Hi there"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_repl_shows_errors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let output = run(format!("{}/chat", mock_server.uri()), "test\n").await;

        assert!(output.contains("Error: Server error: 500"));
        assert!(!output.contains("AI:"));
    }
}
