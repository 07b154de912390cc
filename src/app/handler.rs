use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::form::controller::{SubmissionState, SubmitOutcome};
use crate::form::fields::{FieldName, MembershipType};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ResetElapsed { generation } => {
            if state.form.handle_reset(generation) {
                state.on_form_reset();
            }
            vec![]
        }
        AppEvent::Tick => {
            // Keep the countdown on the confirmation card moving.
            if state.form.state() == SubmissionState::Confirmed {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    // The confirmation card takes no input
    if !state.form.is_editing() {
        return vec![];
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            return vec![];
        }
        KeyCode::Enter => return submit(state),
        _ => {}
    }

    match state.focus {
        Focus::Field(FieldName::MembershipType) => handle_membership_key(state, key),
        Focus::Submit => {
            if key.code == KeyCode::Char(' ') {
                return submit(state);
            }
        }
        focus => {
            if let Some(field) = focus.text_field() {
                handle_text_key(state, field, key);
            }
        }
    }
    vec![]
}

fn submit(state: &mut AppState) -> Vec<Action> {
    state.dirty = true;
    match state.form.submit() {
        SubmitOutcome::Accepted => vec![],
        SubmitOutcome::Rejected { .. } => {
            // Jump to the first field that needs fixing
            if let Some((field, _)) = state.form.form().errors().iter().next() {
                state.focus = Focus::Field(field);
            }
            vec![Action::Bell]
        }
        SubmitOutcome::Ignored => vec![],
    }
}

fn handle_membership_key(state: &mut AppState, key: KeyEvent) {
    let current = state.form.form().fields().membership;
    let chosen = match key.code {
        KeyCode::Left => current.prev(),
        KeyCode::Right | KeyCode::Char(' ') => current.next(),
        KeyCode::Char('1') | KeyCode::Char('f') => MembershipType::Fan,
        KeyCode::Char('2') | KeyCode::Char('p') => MembershipType::Premium,
        KeyCode::Char('3') | KeyCode::Char('v') => MembershipType::Vip,
        _ => return,
    };
    if state.form.set_membership(chosen).is_ok() {
        state.dirty = true;
    }
}

fn handle_text_key(state: &mut AppState, field: FieldName, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => state.edit_field(field, |b| b.delete_word_back()),
        KeyCode::Char('u') if ctrl => state.edit_field(field, |b| b.clear()),
        KeyCode::Char('a') if ctrl => state.edit_field(field, |b| b.move_home()),
        KeyCode::Char('e') if ctrl => state.edit_field(field, |b| b.move_end()),
        KeyCode::Char(c) if !ctrl => state.edit_field(field, |b| b.insert_char(c)),
        KeyCode::Backspace => state.edit_field(field, |b| b.delete_back()),
        KeyCode::Delete => state.edit_field(field, |b| b.delete_forward()),
        KeyCode::Left => state.edit_field(field, |b| b.move_left()),
        KeyCode::Right => state.edit_field(field, |b| b.move_right()),
        KeyCode::Home => state.edit_field(field, |b| b.move_home()),
        KeyCode::End => state.edit_field(field, |b| b.move_end()),
        _ => {}
    }
}
