use crate::app::state::*;
use crate::form::fields::{FieldName, MembershipType};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Three side-by-side boxes, one per tier; the selected one is highlighted.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Field(FieldName::MembershipType);
    let selected = state.form.form().fields().membership;

    let [label_area, options_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(4)]).areas(area);

    let label = FieldName::MembershipType.label();
    let hint = if focused { "  ←/→ or 1-3 to choose" } else { "" };
    let line = Line::from(vec![
        Span::styled(format!(" {}", label), if focused { Theme::title() } else { Theme::label() }),
        Span::styled(hint, Theme::note()),
    ]);
    frame.render_widget(Paragraph::new(line), label_area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(1)
        .split(options_area);

    for (tier, col) in MembershipType::ALL.into_iter().zip(columns.iter()) {
        let is_selected = tier == selected;
        let (border_style, border_type) = match (is_selected, focused) {
            (true, true) => (Theme::border_focused(), BorderType::Thick),
            (true, false) => (Theme::option_selected(), BorderType::Rounded),
            _ => (Theme::border(), BorderType::Plain),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);

        let marker = if is_selected { "(•) " } else { "( ) " };
        let text = vec![
            Line::from(Span::styled(
                format!("{}{}", marker, tier.label()),
                if is_selected { Theme::option_selected() } else { Theme::option_normal() },
            )),
            Line::from(Span::styled(tier.blurb(), Theme::note())),
        ];
        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(block);
        frame.render_widget(paragraph, *col);
    }
}
