use crate::models::{Author, Message};
use crate::surface::ChatSurface;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// "HH:MM " in front of the first line of every message.
const TIMESTAMP_WIDTH: usize = 6;

fn message_style(author: Author) -> Style {
    match author {
        Author::User => Style::default().fg(Color::LightGreen),
        Author::AI => Style::default().fg(Color::LightBlue),
        Author::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Renders one message, wrapped to `width` columns.
pub fn message_lines(message: &Message, width: u16) -> Vec<Line<'static>> {
    let style = message_style(message.author());
    let wrap_width = (width as usize).saturating_sub(TIMESTAMP_WIDTH).max(1);
    let text = message.display_text();

    wrap(&text, wrap_width)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let gutter = if i == 0 {
                Span::styled(
                    format!("{} ", message.timestamp().format("%H:%M")),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                )
            } else {
                Span::raw(" ".repeat(TIMESTAMP_WIDTH))
            };
            Line::from(vec![gutter, Span::styled(chunk.into_owned(), style)])
        })
        .collect()
}

/// Draws the transcript and writes the clamped scroll position back to the surface.
pub fn draw_transcript(f: &mut Frame, surface: &mut ChatSurface, area: Rect) {
    let lines: Vec<Line> = surface
        .messages()
        .iter()
        .flat_map(|message| message_lines(message, area.width))
        .collect();

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(area.height);
    let scroll = surface.scroll_offset().min(max_scroll);
    surface.set_scroll(scroll);

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

pub fn draw_input(f: &mut Frame, surface: &ChatSurface, area: Rect) {
    if area.height < 3 {
        return;
    }

    let separator = "─".repeat(area.width as usize);
    let separator_style = Style::default().fg(Color::DarkGray);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator.clone(), separator_style))),
        Rect { height: 1, ..area },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(surface.input(), Style::default().fg(Color::White)),
    ]);

    // Prefix plus one column for the cursor
    let visible_width = area.width.saturating_sub(3);
    let text_width = u16::try_from(surface.input().width()).unwrap_or(u16::MAX);
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            y: area.y + 1,
            height: area.height - 2,
            ..area
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator, separator_style))),
        Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        },
    );

    let cursor_x = area
        .x
        .saturating_add(2)
        .saturating_add(text_width - scroll_offset);
    f.set_cursor_position((cursor_x, area.y + 1));
}
