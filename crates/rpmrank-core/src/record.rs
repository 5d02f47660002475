use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A package installed under the filesystem root being analyzed.
///
/// Records are read-only inputs: the pipeline never creates or mutates
/// packages, it only indexes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    /// Installed size in bytes.
    pub size: u64,
    /// Capability strings this package requires, in declaration order.
    /// May be empty and may contain duplicates.
    #[serde(default)]
    pub requires: Vec<String>,
    /// Capability strings this package provides. The package's own name
    /// always counts as provided, whether or not it is listed here.
    #[serde(default)]
    pub provides: Vec<String>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            requires: Vec::new(),
            provides: Vec::new(),
        }
    }
}

/// Fail fast on malformed catalog data before graph construction begins.
///
/// Package names are the identity for the whole pipeline, so a blank or
/// duplicated name is rejected rather than silently merged.
pub fn validate_records(records: &[PackageRecord]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        if record.name.trim().is_empty() {
            bail!("installed package record has an empty name");
        }
        if !seen.insert(record.name.as_str()) {
            bail!(
                "duplicate installed package name '{}' in catalog data",
                record.name
            );
        }
    }
    Ok(())
}
