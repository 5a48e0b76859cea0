use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;

use crate::dataset;

pub fn handle(data: Option<PathBuf>) -> Result<()> {
    println!("Roles with dedicated policy rules:");
    for role in veil_policy::known_roles() {
        println!("  {}", role);
    }

    let records = dataset::load_or_sample(data.as_deref())?;
    let seen: BTreeSet<&str> = records.iter().map(|record| record.role.as_str()).collect();

    println!("\nRoles present in the dataset ({} records):", records.len());
    for role in seen {
        println!("  {}", role);
    }

    Ok(())
}
