use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use todoctl_core::Todo;

use crate::client::{ApiClient, ClientError};
use crate::mode::AppMode;

/// Shown when the add form is submitted with a blank title.
pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a to-do title";

/// Main application state
///
/// Every operation awaits its request before returning, so there is at most
/// one request in flight per user action. Failures never escape: they are
/// stored in `error` for the view to show.
pub struct App {
    /// Todos as last received from the server
    pub todos: Vec<Todo>,

    /// Title being typed for a new todo
    pub input: String,

    /// A list fetch (or create + refetch) is in progress
    pub loading: bool,

    /// Message from the last failed operation
    pub error: Option<String>,

    /// Index of the highlighted todo
    pub selected: usize,

    /// Current mode
    pub mode: AppMode,

    /// Should quit?
    pub should_quit: bool,

    client: ApiClient,
}

impl App {
    /// Create a new App. Nothing is fetched until `load`.
    pub fn new(client: ApiClient) -> Self {
        Self {
            todos: Vec::new(),
            input: String::new(),
            loading: true,
            error: None,
            selected: 0,
            mode: AppMode::Normal,
            should_quit: false,
            client,
        }
    }

    /// Replace local state with the server's list.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.list().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "Loaded todos");
                self.todos = todos;
                self.clamp_selection();
            }
            Err(e) => self.fail("load todos", e),
        }

        self.loading = false;
    }

    /// Create a todo from the input, then refetch the whole list.
    pub async fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.error = Some(EMPTY_TITLE_MESSAGE.to_string());
            return;
        }

        self.loading = true;
        self.error = None;

        match self.client.create(&self.input).await {
            Ok(todo) => {
                tracing::debug!(id = todo.id, "Created todo");
                self.input.clear();
                self.load().await;
                self.selected = 0;
            }
            Err(e) => self.fail("add todo", e),
        }

        self.loading = false;
    }

    /// Flip one todo's completed flag and swap in the server's record.
    pub async fn toggle(&mut self, id: i64) {
        let Some(current) = self.todos.iter().find(|t| t.id == id) else {
            return;
        };
        let completed = current.toggled().completed;

        match self.client.set_completed(id, completed).await {
            Ok(updated) => {
                self.error = None;
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
            }
            Err(e) => self.fail("toggle todo", e),
        }
    }

    /// Delete one todo and drop it locally without a refetch.
    pub async fn delete(&mut self, id: i64) {
        match self.client.delete(id).await {
            Ok(()) => {
                self.error = None;
                self.todos.retain(|t| t.id != id);
                self.clamp_selection();
            }
            Err(e) => self.fail("delete todo", e),
        }
    }

    /// The highlighted todo, if any
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.todos.len().saturating_sub(1));
    }

    fn fail(&mut self, action: &str, error: ClientError) {
        tracing::warn!(error = %error, "Failed to {}", action);
        self.error = Some(error.to_string());
    }

    /// Poll for a terminal event with timeout
    pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Handle keyboard input
    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key).await,
            AppMode::Insert => self.handle_insert_mode(key).await,
        }
    }

    /// Handle normal mode keys
    async fn handle_normal_mode(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                self.should_quit = true;
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            // Start typing a new todo
            (KeyCode::Char('a'), KeyModifiers::NONE) | (KeyCode::Char('i'), KeyModifiers::NONE) => {
                self.mode = AppMode::Insert;
            }

            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => self.select_next(),
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => self.select_previous(),

            (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => {
                if let Some(id) = self.selected_todo().map(|t| t.id) {
                    self.toggle(id).await;
                }
            }

            (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => {
                if let Some(id) = self.selected_todo().map(|t| t.id) {
                    self.delete(id).await;
                }
            }

            (KeyCode::Char('r'), KeyModifiers::NONE) => self.load().await,

            _ => {}
        }
    }

    /// Handle insert mode keys
    async fn handle_insert_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => self.submit().await,
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn offline_app() -> App {
        // Port 9 (discard) is never an API; no test here sends a request
        App::new(ApiClient::new("http://127.0.0.1:9/api").unwrap())
    }

    fn todo(id: i64) -> Todo {
        Todo {
            id,
            title: format!("todo {}", id),
            completed: false,
            created_at: Utc::now(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_loading_in_normal_mode() {
        let app = offline_app();
        assert!(app.loading);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.error.is_none());
    }

    #[tokio::test]
    async fn blank_submit_sets_error_without_request() {
        let mut app = offline_app();
        app.loading = false;
        app.input = "   ".into();

        app.submit().await;

        assert_eq!(app.error.as_deref(), Some(EMPTY_TITLE_MESSAGE));
        assert_eq!(app.input, "   ");
        assert!(!app.loading);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = offline_app();
        app.todos = vec![todo(3), todo(2), todo(1)];

        app.select_previous();
        assert_eq!(app.selected, 0);

        for _ in 0..5 {
            app.select_next();
        }
        assert_eq!(app.selected, 2);
        assert_eq!(app.selected_todo().map(|t| t.id), Some(1));

        app.todos.truncate(1);
        app.clamp_selection();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn insert_mode_edits_input() {
        let mut app = offline_app();

        app.handle_key_event(key(KeyCode::Char('a'))).await;
        assert_eq!(app.mode, AppMode::Insert);

        for c in "milkk".chars() {
            app.handle_key_event(key(KeyCode::Char(c))).await;
        }
        app.handle_key_event(key(KeyCode::Backspace)).await;
        assert_eq!(app.input, "milk");

        // 'q' is text while typing
        app.handle_key_event(key(KeyCode::Char('q'))).await;
        assert!(!app.should_quit);
        assert_eq!(app.input, "milkq");

        app.handle_key_event(key(KeyCode::Esc)).await;
        assert_eq!(app.mode, AppMode::Normal);

        app.handle_key_event(key(KeyCode::Char('q'))).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_ignored() {
        let mut app = offline_app();
        app.todos = vec![todo(1)];

        app.toggle(99).await;

        assert!(app.error.is_none());
        assert!(!app.todos[0].completed);
    }
}
