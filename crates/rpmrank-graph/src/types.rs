use std::collections::{BTreeMap, BTreeSet};

/// Directed dependency graph over installed package names.
///
/// Adjacency maps a package to the set of packages it depends on. BTree
/// collections everywhere so iteration order, and with it the whole
/// pipeline, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: &str) {
        self.edges.entry(name.to_string()).or_default();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Add edge `from -> to` (`from` depends on `to`). Self-loops are
    /// rejected; adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        self.add_node(to);
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        self.edges
            .get_mut(from)
            .map(|deps| deps.remove(to))
            .unwrap_or(false)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn dependencies(&self, name: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(name)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}

/// Outcome of a topological sort attempt.
///
/// On failure the ordered pair of nodes at the point of cycle detection is
/// a first-class value: `second` was found to depend back on `first`, so
/// the edge `second -> first` exists and is the one a caller can remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopoResult {
    /// Dependency-first ordering of every node.
    Sorted(Vec<String>),
    CycleFound { first: String, second: String },
}

/// One entry of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPackage {
    pub name: String,
    /// Number of distinct installed packages whose transitive dependency
    /// closure contains this package (always at least 1: itself).
    pub score: u64,
    pub size: u64,
}
