use anyhow::Result;
use rpmrank_core::PackageRecord;

use crate::types::DependencyGraph;

/// Build the dependency graph of the installed set.
///
/// `providers` is the catalog's provider lookup: given a requirement
/// string it returns the installed packages satisfying it. A lookup
/// failure is an external catalog failure and propagates; a requirement
/// with no installed provider is satisfied outside the observed set and is
/// silently skipped. When several installed packages provide the same
/// capability, every one of them becomes a dependency edge.
pub fn build_graph<F>(records: &[PackageRecord], mut providers: F) -> Result<DependencyGraph>
where
    F: FnMut(&str) -> Result<Vec<String>>,
{
    let mut graph = DependencyGraph::new();
    for record in records {
        graph.add_node(&record.name);
    }

    for record in records {
        for requirement in &record.requires {
            for provider in providers(requirement)? {
                // Edge endpoints must be installed packages.
                if provider != record.name && graph.contains(&provider) {
                    graph.add_edge(&record.name, &provider);
                }
            }
        }
    }

    log::debug!(
        "built dependency graph: {} packages, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
