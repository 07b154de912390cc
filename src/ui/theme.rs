use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const PITCH_GREEN: Color = Color::Rgb(22, 163, 74);
    pub const ACCENT_EMERALD: Color = Color::Rgb(5, 150, 105);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::PITCH_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn option_selected() -> Style {
        Style::default()
            .fg(Self::PITCH_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn option_normal() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_EMERALD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn note() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
