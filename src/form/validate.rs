//! Field validation rules.

use crate::form::fields::{ErrorMap, FieldName, FormFields};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]{10,}$").expect("phone pattern compiles"));

pub const MIN_NAME_LEN: usize = 2;

/// Check every field and collect the failures. Every rule runs on every call.
pub fn validate(fields: &FormFields) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let name = fields.full_name.trim();
    if name.is_empty() {
        errors.insert(FieldName::FullName, "Full name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.insert(FieldName::FullName, "Name must be at least 2 characters");
    }

    if fields.email.trim().is_empty() {
        errors.insert(FieldName::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&fields.email) {
        errors.insert(FieldName::Email, "Please enter a valid email");
    }

    let phone = fields.phone.trim();
    if phone.is_empty() {
        errors.insert(FieldName::Phone, "Phone number is required");
    } else if !PHONE_RE.is_match(phone) {
        errors.insert(FieldName::Phone, "Please enter a valid phone number");
    }

    if fields.favorite_team.trim().is_empty() {
        errors.insert(FieldName::FavoriteTeam, "Favorite team is required");
    }

    errors
}
