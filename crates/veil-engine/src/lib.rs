//! Orchestrates visibility resolution, rendering, and decoration over a
//! record collection.

use tracing::debug;
use veil_core::{Record, render};
use veil_decorate::Pipeline;

/// Composes the policy, the field renderer, and a decorator pipeline.
///
/// Holds no mutable state; `process` is a pure fold over the input slice.
/// Records have no data dependency on each other, so any execution order
/// is valid as long as outputs keep their input slots.
pub struct Engine {
    pipeline: Pipeline,
}

impl Engine {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Convenience constructor from raw decorator tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Pipeline::from_tokens(tokens))
    }

    /// Produce one display line per record, preserving input order.
    ///
    /// For each record: resolve the visibility level for the viewer,
    /// render the permitted fields, then run the decorator chain.
    pub fn process(&self, viewer_role: &str, records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|record| {
                let level = veil_policy::resolve(viewer_role, &record.role);
                debug!(
                    "Record {}: {} viewing {} -> {:?}",
                    record.id, viewer_role, record.role, level
                );

                self.pipeline.apply(render(level, record))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, first: &str, last: &str, role: &str) -> Record {
        Record {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: "1 Test St".to_string(),
            state: "Testonia".to_string(),
            country: "USA".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "555-000-0000".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_one_output_per_record_in_input_order() {
        let records = vec![
            record(1, "Alice", "Johnson", "Admin"),
            record(2, "Brian", "Smith", "User"),
            record(3, "Carla", "Martinez", "Driver"),
        ];

        let engine = Engine::from_tokens(Vec::<String>::new());
        let output = engine.process("SuperAdmin", &records);

        assert_eq!(output.len(), 3);
        assert!(output[0].starts_with("Alice Johnson"));
        assert!(output[1].starts_with("Brian Smith"));
        assert!(output[2].starts_with("Carla Martinez"));
    }

    #[test]
    fn test_decorators_apply_to_every_record() {
        let records = vec![
            record(1, "Alice", "Johnson", "User"),
            record(2, "Brian", "Smith", "Driver"),
        ];

        let engine = Engine::from_tokens(["html"]);
        let output = engine.process("User", &records);

        assert!(output.iter().all(|line| line.starts_with("<div class='user'>")));
        assert!(output.iter().all(|line| line.ends_with("</div>")));
    }

    #[test]
    fn test_empty_record_set_yields_empty_output() {
        let engine = Engine::from_tokens(Vec::<String>::new());
        assert!(engine.process("Admin", &[]).is_empty());
    }
}
