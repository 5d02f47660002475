use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rpmrank_core::PackageRecord;

/// Load installed packages from a JSON snapshot: an array of records with
/// `name`, `size`, and optional `requires`/`provides` arrays. Used for
/// offline runs and tests in place of an rpm database.
pub fn load_snapshot(path: &Path) -> Result<Vec<PackageRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read package snapshot '{}'", path.display()))?;
    let records: Vec<PackageRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid package snapshot '{}'", path.display()))?;
    log::debug!(
        "snapshot '{}' contains {} packages",
        path.display(),
        records.len()
    );
    Ok(records)
}
