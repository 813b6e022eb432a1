pub mod input_bar;
pub mod layout;
pub mod status_bar;
pub mod todo_list;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Render the whole view
pub fn render(f: &mut Frame, app: &App) {
    let areas = layout::Layout::main(f.area(), app.error.is_some());

    status_bar::render(f, areas.status, app);

    if let (Some(area), Some(message)) = (areas.error, app.error.as_deref()) {
        let error = Paragraph::new(Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(Color::Red),
        )));
        f.render_widget(error, area);
    }

    input_bar::render(f, areas.input, app);
    todo_list::render(f, areas.list, app);
    render_help(f, areas.help, app);
}

fn render_help(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let help = match app.mode {
        AppMode::Normal => {
            "a add  space toggle  d delete  j/k move  r reload  q quit"
        }
        AppMode::Insert => "enter add  esc done",
    };

    f.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        area,
    );
}
