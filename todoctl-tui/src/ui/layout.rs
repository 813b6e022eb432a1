use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Screen regions, top to bottom
pub struct Areas {
    pub status: Rect,
    pub error: Option<Rect>,
    pub input: Rect,
    pub list: Rect,
    pub help: Rect,
}

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Status bar, optional error line, input box, list, help line
    pub fn main(area: Rect, with_error: bool) -> Areas {
        let error_height = if with_error { 1 } else { 0 };

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Status bar
                Constraint::Length(error_height), // Error line
                Constraint::Length(3),            // Input box
                Constraint::Min(0),               // Todo list
                Constraint::Length(1),            // Help line
            ])
            .split(area);

        Areas {
            status: chunks[0],
            error: with_error.then_some(chunks[1]),
            input: chunks[2],
            list: chunks[3],
            help: chunks[4],
        }
    }
}
