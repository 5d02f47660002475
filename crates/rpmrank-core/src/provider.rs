use std::collections::{BTreeMap, BTreeSet};

use crate::record::PackageRecord;

/// Lookup table from capability name to the installed packages providing it.
///
/// Built once over a snapshot of the installed set; reads are cheap local
/// lookups. Requirements that match no entry are capabilities satisfied
/// outside the observed package set and are simply absent here.
#[derive(Debug, Clone, Default)]
pub struct ProviderIndex {
    providers: BTreeMap<String, BTreeSet<String>>,
}

impl ProviderIndex {
    pub fn build(records: &[PackageRecord]) -> Self {
        let mut providers: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            providers
                .entry(record.name.clone())
                .or_default()
                .insert(record.name.clone());
            for capability in &record.provides {
                providers
                    .entry(capability_name(capability).to_string())
                    .or_default()
                    .insert(record.name.clone());
            }
        }
        Self { providers }
    }

    /// Installed packages satisfying `requirement`, in name order.
    /// Empty when nothing installed provides it.
    pub fn providers_of(&self, requirement: &str) -> Vec<String> {
        self.providers
            .get(capability_name(requirement))
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Name token of a capability string, with any trailing version constraint
/// stripped: `"libfoo >= 1.2"` keys as `"libfoo"`.
pub fn capability_name(capability: &str) -> &str {
    capability.split_whitespace().next().unwrap_or("")
}
