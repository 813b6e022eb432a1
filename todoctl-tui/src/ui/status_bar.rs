use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the status bar (top line): mode, title, counts
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let done = app.todos.iter().filter(|t| t.completed).count();

    let spans = vec![
        Span::styled(
            format!(" {} ", app.mode.display_name()),
            Style::default()
                .fg(Color::Black)
                .bg(app.mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("To-Do List", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(
            format!("{}/{} done", done, app.todos.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
