//! Form field model: the values behind every input and the per-field errors.
//!
//! [`FormState`] is the single source of truth for what the inputs display.
//! It never validates; it only stores values and forgets a field's error as
//! soon as that field is edited.

use crate::form::error::FormError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifies one input of the form. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FullName,
    Email,
    Phone,
    FavoriteTeam,
    MembershipType,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::FavoriteTeam,
        FieldName::MembershipType,
    ];

    /// The four free-text inputs, in display order.
    pub const TEXT: [FieldName; 4] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::FavoriteTeam,
    ];

    /// External key, as used by [`FieldName::from_str`].
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::FavoriteTeam => "favoriteTeam",
            FieldName::MembershipType => "membershipType",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name *",
            FieldName::Email => "Email Address *",
            FieldName::Phone => "Phone Number *",
            FieldName::FavoriteTeam => "Favorite Team *",
            FieldName::MembershipType => "Membership Type *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::FullName => "Enter your full name",
            FieldName::Email => "your.email@example.com",
            FieldName::Phone => "+1 (555) 123-4567",
            FieldName::FavoriteTeam => "Enter your favorite team",
            FieldName::MembershipType => "",
        }
    }

    /// Everything but the membership radio group is free text.
    pub fn is_text(self) -> bool {
        !matches!(self, FieldName::MembershipType)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Membership tier, chosen with a radio control. Always has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MembershipType {
    #[default]
    Fan,
    Premium,
    Vip,
}

impl MembershipType {
    pub const ALL: [MembershipType; 3] =
        [MembershipType::Fan, MembershipType::Premium, MembershipType::Vip];

    pub fn as_str(self) -> &'static str {
        match self {
            MembershipType::Fan => "fan",
            MembershipType::Premium => "premium",
            MembershipType::Vip => "vip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MembershipType::Fan => "Fan",
            MembershipType::Premium => "Premium",
            MembershipType::Vip => "VIP",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            MembershipType::Fan => "Basic Access",
            MembershipType::Premium => "Extra Benefits",
            MembershipType::Vip => "All Access",
        }
    }

    pub fn next(self) -> Self {
        match self {
            MembershipType::Fan => MembershipType::Premium,
            MembershipType::Premium => MembershipType::Vip,
            MembershipType::Vip => MembershipType::Fan,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            MembershipType::Fan => MembershipType::Vip,
            MembershipType::Premium => MembershipType::Fan,
            MembershipType::Vip => MembershipType::Premium,
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MembershipType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::UnknownMembership(s.to_string()))
    }
}

/// Current values of every input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub favorite_team: String,
    pub membership: MembershipType,
}

impl FormFields {
    /// Text value of a field; the membership tier yields its key (`"fan"`, ...).
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::FavoriteTeam => &self.favorite_team,
            FieldName::MembershipType => self.membership.as_str(),
        }
    }
}

/// Per-field error messages. A missing or empty entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.entries.remove(&field)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Failing fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Holds the field values and the errors currently on display.
#[derive(Debug, Default)]
pub struct FormState {
    fields: FormFields,
    errors: ErrorMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Replace one field's value, leaving the others alone. Drops that
    /// field's error, if it had one. The membership value must parse.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            FieldName::FullName => self.fields.full_name = value,
            FieldName::Email => self.fields.email = value,
            FieldName::Phone => self.fields.phone = value,
            FieldName::FavoriteTeam => self.fields.favorite_team = value,
            FieldName::MembershipType => self.fields.membership = value.parse()?,
        }
        self.errors.remove(field);
        Ok(())
    }

    pub fn set_membership(&mut self, membership: MembershipType) {
        self.fields.membership = membership;
        self.errors.remove(FieldName::MembershipType);
    }

    pub fn replace_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip_in_display_order() {
        let parsed: Vec<FieldName> = FieldName::ALL
            .iter()
            .map(|f| f.key().parse().unwrap())
            .collect();
        assert_eq!(parsed, FieldName::ALL.to_vec());
        assert_eq!(
            "nickname".parse::<FieldName>(),
            Err(FormError::UnknownField("nickname".into()))
        );
    }

    #[test]
    fn test_text_fields() {
        let text: Vec<FieldName> = FieldName::ALL.into_iter().filter(|f| f.is_text()).collect();
        assert_eq!(text, FieldName::TEXT.to_vec());
    }

    #[test]
    fn test_membership_parse() {
        assert_eq!("fan".parse(), Ok(MembershipType::Fan));
        assert_eq!("VIP".parse(), Ok(MembershipType::Vip));
        assert_eq!(" premium ".parse(), Ok(MembershipType::Premium));
        assert!("gold".parse::<MembershipType>().is_err());
        assert_eq!(MembershipType::default(), MembershipType::Fan);
    }

    #[test]
    fn test_membership_cycle_covers_all_tiers() {
        let mut m = MembershipType::Fan;
        for _ in 0..3 {
            m = m.next();
        }
        assert_eq!(m, MembershipType::Fan);
        assert_eq!(MembershipType::Fan.prev(), MembershipType::Vip);
    }

    #[test]
    fn test_set_field_replaces_only_that_field() {
        let mut form = FormState::new();
        form.set_field(FieldName::Email, "a@b.co").unwrap();
        form.set_field(FieldName::FullName, "Alex").unwrap();
        assert_eq!(form.fields().email, "a@b.co");
        assert_eq!(form.fields().full_name, "Alex");
        assert_eq!(form.fields().phone, "");
        assert_eq!(form.fields().membership, MembershipType::Fan);
    }

    #[test]
    fn test_bad_membership_leaves_state_unchanged() {
        let mut form = FormState::new();
        form.set_field(FieldName::MembershipType, "premium").unwrap();
        let err = form.set_field(FieldName::MembershipType, "platinum");
        assert_eq!(err, Err(FormError::UnknownMembership("platinum".into())));
        assert_eq!(form.fields().membership, MembershipType::Premium);
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut form = FormState::new();
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::FullName, "Full name is required");
        errors.insert(FieldName::Phone, "Phone number is required");
        form.replace_errors(errors);

        form.set_field(FieldName::FullName, "A").unwrap();
        assert_eq!(form.error(FieldName::FullName), None);
        assert_eq!(form.error(FieldName::Phone), Some("Phone number is required"));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_empty_message_counts_as_valid() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Email, "");
        assert!(errors.is_empty());
        assert_eq!(errors.get(FieldName::Email), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::new();
        form.set_field(FieldName::FavoriteTeam, "Eagles").unwrap();
        form.set_membership(MembershipType::Vip);
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::Email, "Email is required");
        form.replace_errors(errors);

        form.reset();
        assert_eq!(form.fields(), &FormFields::default());
        assert!(form.errors().is_empty());
    }
}
