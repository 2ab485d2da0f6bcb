// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;

use crate::{chat::Reply, key_handlers::handle_chat_input, App};
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);

/// Events the loop reacts to besides replies.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the full-screen chat view until the user quits.
pub async fn run_ui(app: App, replies: mpsc::UnboundedReceiver<Reply>) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, replies).await;

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut replies: mpsc::UnboundedReceiver<Reply>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // crossterm polling blocks, so it gets its own thread
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::error!("failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    let endpoint = app.client.api().endpoint().to_string();
    log::info!("chat view started against {}", endpoint);

    loop {
        terminal.draw(|f| draw(f, &mut app, &endpoint))?;

        tokio::select! {
            Some(reply) = replies.recv() => app.on_reply(reply),
            event = rx.recv() => match event {
                Some(Event::Input(CEvent::Key(key))) => handle_chat_input(key, &mut app),
                Some(Event::Input(_)) => {}
                Some(Event::Tick) => app.on_tick(),
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    if app.in_flight > 0 {
        log::info!("quitting with {} replies still pending", app.in_flight);
    }
    Ok(())
}

/// Lays out header, transcript, status line, input and footer.
pub fn draw(f: &mut Frame, app: &mut App, endpoint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::draw_header(f, chunks[0], endpoint);
    chat::draw_transcript(f, &mut app.surface, chunks[1]);
    app.status_indicator.render(f, chunks[2]);
    chat::draw_input(f, &app.surface, chunks[3]);
    footer::draw_footer(f, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::ChatApi, chat::ChatClient, models::Author, models::Message};
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_shows_transcript_and_input() {
        let (client, _rx) = ChatClient::new(ChatApi::new("http://127.0.0.1:5000/chat"));
        let mut app = App::new(client);
        app.surface.append(Message::new(Author::User, "Hello"));
        app.surface.append(Message::new(Author::AI, "Hi there"));
        app.surface.set_input("draft");

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|f| draw(f, &mut app, "http://127.0.0.1:5000/chat"))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Mini Chat"));
        assert!(text.contains("You: Hello"));
        assert!(text.contains("AI: Hi there"));
        assert!(text.contains("→ draft"));
    }
}
