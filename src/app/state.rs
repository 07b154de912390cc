use crate::app::event::AppEvent;
use crate::config::AppConfig;
use crate::form::controller::{SubmissionController, SubmissionState};
use crate::form::fields::FieldName;
use crate::form::sink::SubmissionSink;
use std::collections::HashMap;
use tokio::sync::mpsc;

/// A single-line text value with a byte-offset cursor, used to apply one
/// key press to a field before handing the result back to the form.
#[derive(Debug)]
pub struct EditBuffer {
    pub text: String,
    pub cursor: usize,
}

impl EditBuffer {
    /// `cursor` is clamped to the text and snapped to a char boundary.
    pub fn new(text: &str, cursor: usize) -> Self {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Self {
            text: text.to_string(),
            cursor,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Field(FieldName::FullName),
        Focus::Field(FieldName::Email),
        Focus::Field(FieldName::Phone),
        Focus::Field(FieldName::FavoriteTeam),
        Focus::Field(FieldName::MembershipType),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = self.position();
        let prev = if pos == 0 { Self::ORDER.len() - 1 } else { pos - 1 };
        Self::ORDER[prev]
    }

    pub fn text_field(self) -> Option<FieldName> {
        match self {
            Focus::Field(f) if f.is_text() => Some(f),
            _ => None,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: SubmissionController,
    pub focus: Focus,
    /// Cursor byte offset per text field; absent means end of text.
    pub cursors: HashMap<FieldName, usize>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        sink: Box<dyn SubmissionSink>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let form = SubmissionController::new(sink, config.form.reset_delay(), event_tx);
        Self {
            config,
            form,
            focus: Focus::Field(FieldName::FullName),
            cursors: HashMap::new(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn cursor(&self, field: FieldName) -> usize {
        let len = self.form.form().fields().value(field).len();
        self.cursors.get(&field).copied().unwrap_or(len).min(len)
    }

    /// Apply `edit` to a text field and store the result through the form.
    pub fn edit_field(&mut self, field: FieldName, edit: impl FnOnce(&mut EditBuffer)) {
        let mut buf = EditBuffer::new(self.form.form().fields().value(field), self.cursor(field));
        edit(&mut buf);
        let changed = buf.text != self.form.form().fields().value(field);
        if changed {
            if let Err(e) = self.form.set_field(field, buf.text) {
                tracing::debug!(field = field.key(), error = %e, "Edit dropped");
                return;
            }
        }
        self.cursors.insert(field, buf.cursor);
        self.dirty = true;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    /// Back to a blank form: first field focused, cursors forgotten.
    pub fn on_form_reset(&mut self) {
        self.cursors.clear();
        self.focus = Focus::Field(FieldName::FullName);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.form.state() {
            SubmissionState::Editing => {
                let errors = self.form.form().errors().len();
                if errors == 0 {
                    "Editing".to_string()
                } else {
                    format!("Editing | {} field(s) need attention", errors)
                }
            }
            SubmissionState::Confirmed => "Confirmed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_buffer_unicode_editing() {
        let mut buf = EditBuffer::new("Zoë", 99);
        assert_eq!(buf.cursor, "Zoë".len());
        buf.delete_back();
        assert_eq!(buf.text, "Zo");
        buf.insert_char('é');
        buf.move_left();
        buf.move_left();
        buf.delete_forward();
        assert_eq!(buf.text, "Zé");
        buf.move_home();
        buf.insert_char('>');
        assert_eq!(buf.text, ">Zé");
    }

    #[test]
    fn test_edit_buffer_snaps_to_char_boundary() {
        let buf = EditBuffer::new("é", 1);
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn test_delete_word_back() {
        let mut buf = EditBuffer::new("Manchester United  ", 99);
        buf.delete_word_back();
        assert_eq!(buf.text, "Manchester ");
        buf.delete_word_back();
        assert_eq!(buf.text, "");
        buf.delete_word_back();
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn test_focus_cycles_through_every_control() {
        let mut focus = Focus::Field(FieldName::FullName);
        let mut seen = vec![focus];
        for _ in 0..5 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(seen.last(), Some(&Focus::Submit));
        assert_eq!(focus.next(), Focus::Field(FieldName::FullName));
        assert_eq!(Focus::Field(FieldName::FullName).prev(), Focus::Submit);
        assert_eq!(Focus::Field(FieldName::MembershipType).text_field(), None);
        assert_eq!(Focus::Field(FieldName::Phone).text_field(), Some(FieldName::Phone));
    }
}
