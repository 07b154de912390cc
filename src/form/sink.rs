//! Where accepted subscriptions go.
//!
//! Nothing is stored or transmitted; the production sink reports the record
//! to the diagnostic log. Anything that wants the record (a future backend,
//! tests) implements [`SubmissionSink`].

use crate::form::fields::FormFields;
use chrono::{DateTime, Local};

/// An accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub fields: FormFields,
    pub submitted_at: DateTime<Local>,
}

impl Subscription {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields,
            submitted_at: Local::now(),
        }
    }
}

pub trait SubmissionSink: Send {
    fn accept(&mut self, record: &Subscription);
}

/// Reports each accepted subscription as one structured `tracing` event.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accept(&mut self, record: &Subscription) {
        let f = &record.fields;
        tracing::info!(
            target: "subscription",
            full_name = %f.full_name,
            email = %f.email,
            phone = %f.phone,
            favorite_team = %f.favorite_team,
            membership_type = %f.membership,
            submitted_at = %record.submitted_at.to_rfc3339(),
            "Form submitted"
        );
    }
}

#[cfg(test)]
pub use recording::RecordingSink;

#[cfg(test)]
mod recording {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Keeps every accepted record; clones share the same list.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSink {
        records: Arc<Mutex<Vec<Subscription>>>,
    }

    impl RecordingSink {
        pub fn records(&self) -> Vec<Subscription> {
            self.records.lock().unwrap().clone()
        }
    }

    impl SubmissionSink for RecordingSink {
        fn accept(&mut self, record: &Subscription) {
            self.records.lock().unwrap().push(record.clone());
        }
    }
}
