use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Render the new-todo input box
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.mode == AppMode::Insert {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add a new todo ")
        .border_style(Style::default().fg(border_color));

    let content = if app.input.is_empty() && app.mode != AppMode::Insert {
        Span::styled("press 'a' to start typing", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.input.as_str())
    };

    f.render_widget(Paragraph::new(content).block(block), area);

    if app.mode == AppMode::Insert {
        let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
