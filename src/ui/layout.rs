use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Rows taken by one text input: bordered box plus its error line.
pub const TEXT_FIELD_HEIGHT: u16 = 4;
pub const MEMBERSHIP_HEIGHT: u16 = 5;
pub const BUTTON_HEIGHT: u16 = 3;
const CARD_MAX_WIDTH: u16 = 72;

pub struct AppLayout {
    pub header: Rect,
    pub card: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

pub struct FormLayout {
    pub text_fields: [Rect; 4],
    pub membership: Rect,
    pub button: Rect,
    pub note: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center a column of bounded width
    let [column] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Form card
            Constraint::Length(1), // Footer
        ])
        .split(column);

    AppLayout {
        header: chunks[0],
        card: chunks[1],
        footer: chunks[2],
        status_bar,
    }
}

pub fn compute_form_layout(inner: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT),
            Constraint::Length(TEXT_FIELD_HEIGHT),
            Constraint::Length(TEXT_FIELD_HEIGHT),
            Constraint::Length(TEXT_FIELD_HEIGHT),
            Constraint::Length(MEMBERSHIP_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Required-fields note
            Constraint::Min(0),
        ])
        .split(inner);

    FormLayout {
        text_fields: [chunks[0], chunks[1], chunks[2], chunks[3]],
        membership: chunks[4],
        button: chunks[5],
        note: chunks[6],
    }
}
