use thiserror::Error;

/// Misuse of the string-keyed form API. Field validation failures are not
/// errors of this kind; they are reported as data in an
/// [`ErrorMap`](crate::form::fields::ErrorMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("unknown membership type '{0}' (expected fan, premium or vip)")]
    UnknownMembership(String),

    #[error("the form is not accepting edits while the confirmation is shown")]
    NotEditing,
}
