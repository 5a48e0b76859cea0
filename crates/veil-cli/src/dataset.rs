//! Record loading and validation
//!
//! The engine never observes an invalid record: every loader here runs
//! `Record::validate` before handing records over.

use std::path::Path;

use anyhow::{Context, Result};
use veil_core::Record;

/// The built-in demonstration dataset.
const SAMPLE_JSON: &str = include_str!("../data/sample_records.json");

/// Load the built-in sample records.
pub fn sample() -> Result<Vec<Record>> {
    parse(SAMPLE_JSON).context("Built-in sample dataset is invalid")
}

/// Load records from a JSON file.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid record file {}", path.display()))
}

/// Load from `path` when given, the sample set otherwise.
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<Record>> {
    match path {
        Some(path) => load(path),
        None => sample(),
    }
}

fn parse(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_loads_and_validates() {
        let records = sample().unwrap();
        assert_eq!(records.len(), 19);
    }

    #[test]
    fn test_sample_dataset_covers_every_policy_row() {
        let records = sample().unwrap();
        for role in ["SuperAdmin", "Admin", "User", "Driver", "American", "Contractor"] {
            assert!(
                records.iter().any(|r| r.role == role),
                "no sample record with role {role}"
            );
        }
    }

    #[test]
    fn test_scenario_records_keep_their_roles() {
        let records = sample().unwrap();
        let role_of = |id: u32| {
            records
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.role.as_str())
                .unwrap()
        };

        assert_eq!(role_of(1), "Admin"); // Alice Johnson
        assert_eq!(role_of(3), "User"); // Carla Martinez
        assert_eq!(role_of(4), "User"); // David Nguyen
        assert_eq!(role_of(12), "American"); // Leo Kim
    }

    #[test]
    fn test_parse_rejects_record_with_empty_field() {
        let json = r#"[{
            "id": 1,
            "firstName": "Alice",
            "lastName": "Johnson",
            "address": "",
            "state": "California",
            "country": "USA",
            "email": "alice.johnson@example.com",
            "phone": "555-123-4567",
            "role": "Admin"
        }]"#;

        let err = parse(json).unwrap_err();
        assert!(err.to_string().contains("address"));
    }
}
