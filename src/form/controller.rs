//! Submission lifecycle: editing → confirmed → (after a delay) editing.

use crate::app::event::AppEvent;
use crate::form::error::FormError;
use crate::form::fields::{FieldName, FormState, MembershipType};
use crate::form::sink::{SubmissionSink, Subscription};
use crate::form::timer::ResetTimer;
use crate::form::validate::validate;
use std::time::Duration;
use tokio::sync::mpsc;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Validation failed for `errors` fields; the form stays editable.
    Rejected { errors: usize },
    /// A submission is already confirmed and waiting for its reset.
    Ignored,
}

/// Owns the form for one session and drives it through submission.
pub struct SubmissionController {
    form: FormState,
    state: SubmissionState,
    sink: Box<dyn SubmissionSink>,
    reset_delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending_reset: Option<ResetTimer>,
    next_generation: u64,
}

impl SubmissionController {
    pub fn new(
        sink: Box<dyn SubmissionSink>,
        reset_delay: Duration,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            form: FormState::new(),
            state: SubmissionState::Editing,
            sink,
            reset_delay,
            event_tx,
            pending_reset: None,
            next_generation: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == SubmissionState::Editing
    }

    /// Time left before the form comes back, while the confirmation is shown.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending_reset.as_ref().map(ResetTimer::remaining)
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        if !self.is_editing() {
            return Err(FormError::NotEditing);
        }
        self.form.set_field(field, value)
    }

    pub fn set_membership(&mut self, membership: MembershipType) -> Result<(), FormError> {
        if !self.is_editing() {
            return Err(FormError::NotEditing);
        }
        self.form.set_membership(membership);
        Ok(())
    }

    /// Validate and, if everything passes, accept the record and show the
    /// confirmation. Must run inside a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmissionState::Confirmed {
            return SubmitOutcome::Ignored;
        }

        let errors = validate(self.form.fields());
        if !errors.is_empty() {
            let count = errors.len();
            tracing::debug!(
                fields = ?errors.iter().map(|(f, _)| f.key()).collect::<Vec<_>>(),
                "Submission rejected"
            );
            self.form.replace_errors(errors);
            return SubmitOutcome::Rejected { errors: count };
        }

        let record = Subscription::new(self.form.fields().clone());
        self.sink.accept(&record);
        self.form.replace_errors(errors);
        self.state = SubmissionState::Confirmed;

        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending_reset = Some(ResetTimer::schedule(
            generation,
            self.reset_delay,
            self.event_tx.clone(),
        ));
        SubmitOutcome::Accepted
    }

    /// Called when a reset timer fires. Returns `true` if the form was reset.
    pub fn handle_reset(&mut self, generation: u64) -> bool {
        let matches = self
            .pending_reset
            .as_ref()
            .is_some_and(|t| t.generation() == generation);
        if !matches {
            tracing::warn!(generation, "Ignoring stale form reset");
            return false;
        }

        self.pending_reset = None;
        self.form.reset();
        self.state = SubmissionState::Editing;
        tracing::info!("Form reset after confirmation");
        true
    }
}
