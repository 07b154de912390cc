use crate::app::state::*;
use crate::form::fields::FieldName;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A labeled single-line input with its error (if any) on the line below.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, field: FieldName) {
    let focused = state.focus == Focus::Field(field);
    let error = state.form.form().error(field);

    let border_style = if error.is_some() {
        Theme::border_error()
    } else if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let border_type = if focused {
        Theme::border_type_focused()
    } else {
        Theme::border_type()
    };

    let [box_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(if focused { Theme::title() } else { Theme::label() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let value = state.form.form().fields().value(field);
    let cursor = if focused { state.cursor(field) } else { 0 };
    let (start, cursor_col) = scroll_window(value, cursor, inner.width);
    let paragraph = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(Theme::placeholder())
    } else {
        Paragraph::new(&value[start..]).style(Theme::input_text())
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 {
        let cursor_x = inner.x.saturating_add(cursor_col);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }

    if let Some(message) = error {
        let line = Line::from(Span::styled(format!(" {}", message), Theme::error_message()));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}

/// First byte to draw and the cursor column, so the cursor stays inside a
/// box `width` columns wide.
fn scroll_window(value: &str, cursor: usize, width: u16) -> (usize, u16) {
    let width = usize::from(width.max(1));
    let mut start = 0;
    let mut col = value[..cursor].width();
    // Keep one column free for the cursor past the last char
    for c in value[..cursor].chars() {
        if col < width {
            break;
        }
        start += c.len_utf8();
        col = col.saturating_sub(c.width().unwrap_or(0));
    }
    (start, u16::try_from(col).unwrap_or(u16::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_is_not_scrolled() {
        assert_eq!(scroll_window("Alex", 4, 20), (0, 4));
        assert_eq!(scroll_window("Alex", 1, 20), (0, 1));
        assert_eq!(scroll_window("", 0, 20), (0, 0));
    }

    #[test]
    fn test_long_value_scrolls_to_keep_cursor_visible() {
        let value = "a".repeat(30);
        let (start, col) = scroll_window(&value, 30, 10);
        assert_eq!(start, 21);
        assert_eq!(col, 9);

        // Cursor near the start needs no scrolling
        assert_eq!(scroll_window(&value, 3, 10), (0, 3));
    }

    #[test]
    fn test_scroll_respects_wide_chars() {
        let value = "ＦＣ Ｂａｒｃｅｌｏｎａ";
        let (start, col) = scroll_window(value, value.len(), 8);
        assert!(value.is_char_boundary(start));
        assert!(col < 8);
        assert!(value[start..].width() < 8);
    }

    #[test]
    fn test_huge_value_width_does_not_wrap() {
        let value = "9".repeat(70_000);
        let (start, col) = scroll_window(&value, value.len(), u16::MAX);
        assert_eq!(col, u16::MAX - 1);
        assert_eq!(start, 70_000 - (usize::from(u16::MAX) - 1));
    }
}
