//! Record domain model

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An immutable personal-data record with a role tag.
///
/// Wire names are camelCase to match the JSON record datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub state: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl Record {
    /// Check that every required attribute is non-empty.
    ///
    /// Loaders call this before records reach the engine; core operations
    /// assume it has already passed and never re-check.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
            ("state", &self.state),
            ("country", &self.country),
            ("email", &self.email),
            ("phone", &self.phone),
            ("role", &self.role),
        ] {
            if value.is_empty() {
                return Err(Error::MissingField { id: self.id, field });
            }
        }
        Ok(())
    }
}
