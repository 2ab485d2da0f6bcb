use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const INSTRUCTIONS: &str = "Enter to send · PgUp/PgDn or Ctrl+U/Ctrl+D to scroll · Esc to quit";

pub fn draw_footer(f: &mut Frame<'_>, area: Rect) {
    let footer = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
