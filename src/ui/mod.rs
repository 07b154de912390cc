mod input_box;
mod layout;
mod membership;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Focus};
use crate::form::controller::SubmissionState;
use crate::form::fields::FieldName;
use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = card.inner(app_layout.card);
    frame.render_widget(card, app_layout.card);

    match state.form.state() {
        SubmissionState::Editing => render_form(frame, inner, state),
        SubmissionState::Confirmed => render_confirmation(frame, inner, state),
    }

    render_footer(frame, app_layout.footer, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("⚽  Join Our Team", Theme::heading())),
        Line::from(Span::styled(
            "Subscribe to get exclusive updates and benefits",
            Theme::subtitle(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let form_layout = layout::compute_form_layout(area);

    for (field, rect) in FieldName::TEXT.into_iter().zip(form_layout.text_fields) {
        input_box::render(frame, rect, state, field);
    }
    membership::render(frame, form_layout.membership, state);

    let focused = state.focus == Focus::Submit;
    let button = Paragraph::new("Subscribe Now")
        .alignment(Alignment::Center)
        .style(if focused { Theme::button_focused() } else { Theme::button() })
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(button, form_layout.button);

    frame.render_widget(
        Paragraph::new(Span::styled("* Required fields", Theme::note())).alignment(Alignment::Center),
        form_layout.note,
    );
}

fn render_confirmation(frame: &mut Frame, area: Rect, state: &AppState) {
    let seconds = state
        .form
        .remaining()
        .map(|d| d.as_millis().div_ceil(1000))
        .unwrap_or(0);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("✔", Theme::heading())),
        Line::from(""),
        Line::from(Span::styled("Welcome to the Team!", Theme::heading())),
        Line::from(""),
        Line::from(Span::styled(
            "Your subscription has been confirmed. Check your email for details.",
            Theme::input_text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Returning to the form in {}s", seconds),
            Theme::note(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let year = state
        .config
        .ui
        .footer_year
        .unwrap_or_else(|| chrono::Local::now().year());
    let text = format!("© {} {}. All rights reserved.", year, state.config.ui.club_name);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Theme::note())).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::form::sink::RecordingSink;
    use ratatui::backend::TestBackend;
    use tokio::sync::mpsc;

    fn app() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = AppConfig::default();
        config.ui.footer_year = Some(2025);
        AppState::new(config, Box::new(RecordingSink::default()), tx)
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_form_renders_every_control() {
        let screen = draw(&app());
        assert!(screen.contains("Join Our Team"));
        for field in FieldName::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("your.email@example.com"));
        assert!(screen.contains("Basic Access"));
        assert!(screen.contains("All Access"));
        assert!(screen.contains("Subscribe Now"));
        assert!(screen.contains("© 2025 Football Team Subscription"));
    }

    #[test]
    fn test_errors_render_under_fields() {
        let mut state = app();
        assert!(matches!(
            state.form.submit(),
            crate::form::controller::SubmitOutcome::Rejected { errors: 4 }
        ));
        let screen = draw(&state);
        assert!(screen.contains("Full name is required"));
        assert!(screen.contains("Email is required"));
        assert!(screen.contains("Phone number is required"));
        assert!(screen.contains("Favorite team is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_replaces_form() {
        let mut state = app();
        state.form.set_field(FieldName::FullName, "Alex Smith").unwrap();
        state.form.set_field(FieldName::Email, "alex@example.com").unwrap();
        state.form.set_field(FieldName::Phone, "555-123-4567").unwrap();
        state.form.set_field(FieldName::FavoriteTeam, "Eagles").unwrap();
        state.form.submit();

        let screen = draw(&state);
        assert!(screen.contains("Welcome to the Team!"));
        assert!(screen.contains("Returning to the form in 3s"));
        assert!(!screen.contains("Subscribe Now"));
        assert!(!screen.contains("Full Name *"));
    }
}
