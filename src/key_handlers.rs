use crate::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit(),
        KeyCode::PageUp => app.surface.scroll_up(),
        KeyCode::PageDown => app.surface.scroll_down(),
        KeyCode::Backspace => app.surface.pop_char(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.surface.scroll_up(),
                    'd' => app.surface.scroll_down(),
                    _ => {}
                }
            } else {
                app.surface.push_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatApi;
    use crate::chat::ChatClient;

    fn new_app() -> App {
        let (client, _rx) = ChatClient::new(ChatApi::new("http://127.0.0.1:5000/chat"));
        App::new(client)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_chat_input(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    #[test]
    fn test_typing_edits_input() {
        let mut app = new_app();
        for c in "hey".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.surface.input(), "he");
    }

    #[test]
    fn test_enter_on_blank_input_is_ignored() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(app.surface.messages().is_empty());
        assert_eq!(app.surface.input(), " ");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        handle_chat_input(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(app.should_quit);
        assert_eq!(app.surface.input(), "");
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.surface.scroll_offset(), 1);
    }
}
