use std::collections::{BTreeMap, BTreeSet};

use crate::types::DependencyGraph;

/// Memoized reachability sets, owned by one pipeline run.
///
/// A segment is the set of packages reachable from a root by following
/// dependency edges, the root included. Each root's set is computed once;
/// sub-segments already in the cache are reused. Only meaningful over a
/// graph that has been through `break_cycles`.
#[derive(Debug, Default)]
pub struct SegmentCache {
    segments: BTreeMap<String, BTreeSet<String>>,
}

impl SegmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reachability set of `root`, computing it if absent.
    pub fn segment(&mut self, root: &str, graph: &DependencyGraph) -> BTreeSet<String> {
        self.ensure(root, graph);
        self.segments.get(root).cloned().unwrap_or_default()
    }

    pub(crate) fn ensure(&mut self, root: &str, graph: &DependencyGraph) {
        if self.segments.contains_key(root) {
            return;
        }
        let mut segment = BTreeSet::new();
        segment.insert(root.to_string());
        for dep in graph.dependencies(root) {
            self.ensure(dep, graph);
            if let Some(sub) = self.segments.get(dep) {
                segment.extend(sub.iter().cloned());
            }
        }
        self.segments.insert(root.to_string(), segment);
    }

    pub fn into_segments(self) -> BTreeMap<String, BTreeSet<String>> {
        self.segments
    }
}
