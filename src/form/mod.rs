//! The subscription form itself: field values, validation rules, and the
//! submit/confirm/reset lifecycle. Nothing in here knows about the terminal.

pub mod controller;
pub mod error;
pub mod fields;
pub mod sink;
pub mod timer;
pub mod validate;
