use crate::order::topo_sort;
use crate::types::{DependencyGraph, TopoResult};

/// Remove edges until the graph admits a topological order.
///
/// Greedy, non-minimal feedback-arc removal: each failed sort attempt
/// names one edge closing a cycle, that edge is dropped, and the sort is
/// retried from scratch. Every removal strictly shrinks the edge set, so
/// this terminates. Already-acyclic input comes back unchanged, which also
/// makes the operation idempotent.
pub fn break_cycles(mut graph: DependencyGraph) -> DependencyGraph {
    let mut removed = 0usize;
    loop {
        match topo_sort(&graph) {
            TopoResult::Sorted(_) => {
                if removed > 0 {
                    log::debug!("removed {removed} edge(s) to break dependency cycles");
                }
                return graph;
            }
            TopoResult::CycleFound { first, second } => {
                log::debug!("dependency cycle: dropping edge {second} -> {first}");
                graph.remove_edge(&second, &first);
                removed += 1;
            }
        }
    }
}
