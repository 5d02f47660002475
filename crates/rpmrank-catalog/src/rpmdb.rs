use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use rpmrank_core::PackageRecord;

/// One `pkg` line per package followed by its requires and provides.
/// REQUIRENAME/PROVIDENAME carry plain capability names with the version
/// constraint already split off, and none of the fields can contain a tab.
const QUERY_FORMAT: &str = "pkg\\t%{NAME}\\t%{SIZE}\\n[req\\t%{REQUIRENAME}\\n][prov\\t%{PROVIDENAME}\\n]";

/// Enumerate the packages installed under `root` by querying its rpm
/// database. One subprocess invocation; the result is a consistent
/// snapshot of the installed set.
pub fn load_installed_from_root(root: &Path) -> Result<Vec<PackageRecord>> {
    let output = Command::new("rpm")
        .arg("--root")
        .arg(root)
        .arg("-qa")
        .arg("--queryformat")
        .arg(QUERY_FORMAT)
        .output()
        .with_context(|| {
            format!(
                "failed launching rpm query against root '{}'",
                root.display()
            )
        })?;
    if !output.status.success() {
        bail!(
            "rpm query against root '{}' failed: {}",
            root.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout =
        String::from_utf8(output.stdout).context("rpm query produced non-UTF-8 output")?;
    let records = parse_rpm_query_output(&stdout)?;
    log::debug!(
        "rpm query against root '{}' returned {} packages",
        root.display(),
        records.len()
    );
    Ok(records)
}

pub(crate) fn parse_rpm_query_output(output: &str) -> Result<Vec<PackageRecord>> {
    let mut records: Vec<PackageRecord> = Vec::new();
    for line in output.lines() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let tag = fields.next().unwrap_or_default();
        match tag {
            "pkg" => {
                let name = fields
                    .next()
                    .ok_or_else(|| anyhow!("malformed rpm query line: '{line}'"))?;
                let size = fields
                    .next()
                    .ok_or_else(|| anyhow!("malformed rpm query line: '{line}'"))?
                    .parse::<u64>()
                    .with_context(|| format!("invalid package size in rpm query line: '{line}'"))?;
                records.push(PackageRecord::new(name, size));
            }
            "req" | "prov" => {
                let capability = fields
                    .next()
                    .ok_or_else(|| anyhow!("malformed rpm query line: '{line}'"))?;
                let record = records
                    .last_mut()
                    .ok_or_else(|| anyhow!("rpm query emitted '{tag}' before any package line"))?;
                if tag == "req" {
                    record.requires.push(capability.to_string());
                } else {
                    record.provides.push(capability.to_string());
                }
            }
            other => bail!("unrecognized rpm query tag '{other}'"),
        }
    }
    Ok(records)
}
