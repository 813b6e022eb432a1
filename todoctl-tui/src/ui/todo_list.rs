use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the todo list (or the loading / empty placeholder)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Todos ")
        .border_style(Style::default().fg(Color::DarkGray));

    if app.loading || app.todos.is_empty() {
        let text = if app.loading {
            "Loading todos..."
        } else {
            "Nothing to do"
        };
        let placeholder = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .todos
        .iter()
        .map(|todo| {
            let (mark, title_style) = if todo.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default())
            };

            let created = todo.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");

            ListItem::new(Line::from(vec![
                Span::raw(mark),
                Span::styled(todo.title.as_str(), title_style),
                Span::styled(format!("  {}", created), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiClient;
    use chrono::Utc;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use todoctl_core::Todo;

    fn app_with(todos: Vec<Todo>) -> App {
        let mut app = App::new(ApiClient::new("http://127.0.0.1:9/api").unwrap());
        app.loading = false;
        app.todos = todos;
        app
    }

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| crate::ui::render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Cell position of the first occurrence of `needle`
    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        rows(buffer).iter().enumerate().find_map(|(y, row)| {
            row.find(needle)
                .map(|idx| (row[..idx].chars().count() as u16, y as u16))
        })
    }

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.into(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn oversized_input_keeps_cursor_in_box() {
        let mut app = app_with(Vec::new());
        app.mode = crate::mode::AppMode::Insert;
        app.input = "x".repeat(usize::from(u16::MAX));

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| crate::ui::render(f, &app)).unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 60);
    }

    #[test]
    fn shows_loading_placeholder() {
        let mut app = app_with(vec![todo(1, "hidden while loading", false)]);
        app.loading = true;

        let buffer = draw(&app);
        assert!(find(&buffer, "Loading todos...").is_some());
        assert!(find(&buffer, "hidden while loading").is_none());
    }

    #[test]
    fn lists_titles_in_order() {
        let app = app_with(vec![todo(2, "newer", false), todo(1, "older", false)]);

        let buffer = draw(&app);
        let (_, newer_y) = find(&buffer, "newer").unwrap();
        let (_, older_y) = find(&buffer, "older").unwrap();
        assert!(newer_y < older_y);
        assert!(find(&buffer, "0/2 done").is_some());
    }

    #[test]
    fn completed_titles_are_crossed_out() {
        let app = app_with(vec![todo(2, "open item", false), todo(1, "done item", true)]);

        let buffer = draw(&app);
        let done = find(&buffer, "done item").unwrap();
        let open = find(&buffer, "open item").unwrap();

        assert!(buffer[done].modifier.contains(Modifier::CROSSED_OUT));
        assert!(!buffer[open].modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn shows_error_line() {
        let mut app = app_with(Vec::new());
        app.error = Some("todo '4' not found".into());

        let buffer = draw(&app);
        let pos = find(&buffer, "Error: todo '4' not found").unwrap();
        assert_eq!(buffer[pos].fg, Color::Red);
    }
}
