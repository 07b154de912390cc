use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.status_line()),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    let hints = if state.form.is_editing() {
        " Tab/↑↓ move | Enter submit | Esc quit "
    } else {
        " Esc quit "
    };
    parts.push(Span::styled(hints, Theme::status_bar()));

    // Focus indicator
    let focus_name = match state.focus {
        Focus::Field(field) => field.key().to_uppercase(),
        Focus::Submit => "SUBMIT".to_string(),
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
