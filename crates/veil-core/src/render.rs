//! Field renderer - turns a record into its permitted display string

use crate::{Record, VisibilityLevel};

/// Render the fields of `record` that `level` permits, comma-joined in
/// display order. Total function; records are validated upstream.
pub fn render(level: VisibilityLevel, record: &Record) -> String {
    level
        .fields()
        .iter()
        .map(|field| field.value(record))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: 1,
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            address: "123 Maple St".to_string(),
            state: "California".to_string(),
            country: "USA".to_string(),
            email: "alice.johnson@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            role: "Admin".to_string(),
        }
    }

    #[test]
    fn test_render_full() {
        assert_eq!(
            render(VisibilityLevel::Full, &record()),
            "Alice Johnson, 123 Maple St, California, USA, alice.johnson@example.com, 555-123-4567"
        );
    }

    #[test]
    fn test_render_no_contact() {
        assert_eq!(
            render(VisibilityLevel::NoContact, &record()),
            "Alice Johnson, 123 Maple St, California, USA"
        );
    }

    #[test]
    fn test_render_name_only() {
        assert_eq!(render(VisibilityLevel::NameOnly, &record()), "Alice Johnson");
    }

    #[test]
    fn test_render_country_only() {
        assert_eq!(render(VisibilityLevel::CountryOnly, &record()), "USA");
    }
}
