use std::collections::BTreeMap;

use crate::types::{DependencyGraph, TopoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    New,
    Active,
    Done,
}

/// Attempt a topological sort of the graph, dependencies before dependents.
///
/// Depth-first with nodes and edges visited in name order, so identical
/// input always yields the identical result. A back edge from the node
/// currently being expanded to a node still on the traversal stack is a
/// cycle; it is reported as `CycleFound { first, second }` where `second`
/// is the node being expanded and `first` the stack node it reaches, i.e.
/// the edge `second -> first` closes the cycle.
pub fn topo_sort(graph: &DependencyGraph) -> TopoResult {
    let mut marks: BTreeMap<&str, Mark> = graph.nodes().map(|name| (name, Mark::New)).collect();
    let mut order = Vec::with_capacity(marks.len());

    let roots: Vec<&str> = graph.nodes().collect();
    for root in roots {
        if marks.get(root) == Some(&Mark::New) {
            if let Err((first, second)) = visit(graph, root, &mut marks, &mut order) {
                return TopoResult::CycleFound { first, second };
            }
        }
    }
    TopoResult::Sorted(order)
}

fn visit<'a>(
    graph: &'a DependencyGraph,
    node: &'a str,
    marks: &mut BTreeMap<&'a str, Mark>,
    order: &mut Vec<String>,
) -> Result<(), (String, String)> {
    marks.insert(node, Mark::Active);
    for dep in graph.dependencies(node) {
        match marks.get(dep).copied().unwrap_or(Mark::Done) {
            Mark::Done => {}
            Mark::Active => return Err((dep.to_string(), node.to_string())),
            Mark::New => visit(graph, dep, marks, order)?,
        }
    }
    marks.insert(node, Mark::Done);
    order.push(node.to_string());
    Ok(())
}
