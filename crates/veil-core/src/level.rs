//! Visibility levels and the field sets they expose

use serde::{Deserialize, Serialize};

use crate::Record;

/// A renderable unit of a record.
///
/// `Name` is a single unit covering both name attributes, so rendered
/// output reads "Alice Johnson, 123 Maple St" rather than splitting the
/// name across two comma-separated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    State,
    Country,
    Email,
    Phone,
}

impl Field {
    /// Stable label used when listing a level's fields.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::State => "state",
            Field::Country => "country",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// The field's display value for a record.
    pub fn value(&self, record: &Record) -> String {
        match self {
            Field::Name => format!("{} {}", record.first_name, record.last_name),
            Field::Address => record.address.clone(),
            Field::State => record.state.clone(),
            Field::Country => record.country.clone(),
            Field::Email => record.email.clone(),
            Field::Phone => record.phone.clone(),
        }
    }
}

/// How much of a record a viewer is allowed to see.
///
/// The policy crate resolves a level for every viewer/subject role pair;
/// there is no "undefined" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityLevel {
    /// All seven personal fields
    Full,
    /// Everything except email and phone
    NoContact,
    /// First and last name only
    NameOnly,
    /// Country only
    CountryOnly,
}

impl VisibilityLevel {
    /// Fields exposed at this level, in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            VisibilityLevel::Full => &[
                Field::Name,
                Field::Address,
                Field::State,
                Field::Country,
                Field::Email,
                Field::Phone,
            ],
            VisibilityLevel::NoContact => &[
                Field::Name,
                Field::Address,
                Field::State,
                Field::Country,
            ],
            VisibilityLevel::NameOnly => &[Field::Name],
            VisibilityLevel::CountryOnly => &[Field::Country],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_exposes_every_field() {
        let fields = VisibilityLevel::Full.fields();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], Field::Name);
        assert_eq!(fields[5], Field::Phone);
    }

    #[test]
    fn test_no_contact_excludes_email_and_phone() {
        let fields = VisibilityLevel::NoContact.fields();
        assert!(!fields.contains(&Field::Email));
        assert!(!fields.contains(&Field::Phone));
        assert!(fields.contains(&Field::Address));
    }

    #[test]
    fn test_restricted_levels() {
        assert_eq!(VisibilityLevel::NameOnly.fields(), &[Field::Name]);
        assert_eq!(VisibilityLevel::CountryOnly.fields(), &[Field::Country]);
    }
}
