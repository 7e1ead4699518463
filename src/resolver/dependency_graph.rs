//! Arena graph of resolved packages
//!
//! Records live in one `Vec` and refer to each other by [`NodeId`]. A package
//! depended on by several others is stored once, and a dependency cycle is an
//! edge back to an existing node.

use crate::package::PackageRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::ops::Index;

/// Index of a record inside its [`PackageGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Every record produced by one resolution
#[derive(Debug, Clone, Default)]
pub struct PackageGraph {
    nodes: Vec<PackageRecord>,
    by_name: HashMap<String, NodeId>,
}

impl PackageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record and return its id
    ///
    /// A graph holds at most one node per name; adding a name twice returns
    /// the existing node and drops `record`.
    pub fn add_node(&mut self, record: PackageRecord) -> NodeId {
        if let Some(&id) = self.by_name.get(&record.name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.by_name.insert(record.name.clone(), id);
        self.nodes.push(record);
        id
    }

    /// Append a depends edge `from -> to`
    pub fn add_dependency(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].depends.push(to);
    }

    /// Append a suggests edge `from -> to`
    pub fn add_suggestion(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].suggests.push(to);
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Names of the direct dependencies of `id`, in source order
    pub fn dependency_names(&self, id: NodeId) -> Vec<&str> {
        self[id].depends.iter().map(|&d| self[d].name.as_str()).collect()
    }

    /// Names of the direct suggestions of `id`, in source order
    pub fn suggestion_names(&self, id: NodeId) -> Vec<&str> {
        self[id].suggests.iter().map(|&s| self[s].name.as_str()).collect()
    }

    /// Whether a depends path leads from `id` back to itself
    pub fn is_on_cycle(&self, id: NodeId) -> bool {
        let mut visited = HashSet::new();
        let mut stack: Vec<NodeId> = self[id].depends.clone();

        while let Some(current) = stack.pop() {
            if current == id {
                return true;
            }
            if visited.insert(current) {
                stack.extend(self[current].depends.iter().copied());
            }
        }
        false
    }
}

impl Index<NodeId> for PackageGraph {
    type Output = PackageRecord;

    fn index(&self, id: NodeId) -> &PackageRecord {
        &self.nodes[id.0]
    }
}

/// A resolved package together with the graph that owns it
#[derive(Debug, Clone)]
pub struct ResolvedPackage {
    graph: PackageGraph,
    root: NodeId,
}

impl ResolvedPackage {
    pub(crate) fn new(graph: PackageGraph, root: NodeId) -> Self {
        Self { graph, root }
    }

    pub fn graph(&self) -> &PackageGraph {
        &self.graph
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The requested package
    pub fn record(&self) -> &PackageRecord {
        &self.graph[self.root]
    }

    /// Flat view of the root for display
    pub fn summary(&self) -> PackageSummary {
        let record = self.record();
        PackageSummary {
            name: record.name.clone(),
            version: record.version.clone(),
            description: record.description.clone(),
            component: record.component.clone(),
            filename: record.filename.clone(),
            size: record.size,
            checksum: record.checksum.clone(),
            depends: to_owned(self.graph.dependency_names(self.root)),
            suggests: to_owned(self.graph.suggestion_names(self.root)),
            cyclic: self.graph.is_on_cycle(self.root),
        }
    }
}

fn to_owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// Root record with its resolved relations flattened to names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub name: String,
    pub version: String,
    pub description: String,
    pub component: String,
    pub filename: String,
    pub size: u64,
    pub checksum: String,
    pub depends: Vec<String>,
    pub suggests: Vec<String>,
    /// The root depends on itself through some path
    pub cyclic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            version: "1.0".to_string(),
            description: String::new(),
            filename: format!("pool/main/{}_1.0_amd64.deb", name),
            size: 100,
            checksum: String::new(),
            component: "main".to_string(),
            depends: Vec::new(),
            suggests: Vec::new(),
        }
    }

    #[test]
    fn test_new_graph() {
        let graph = PackageGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.find("a"), None);
    }

    #[test]
    fn test_add_node_once_per_name() {
        let mut graph = PackageGraph::new();
        let a = graph.add_node(record("a"));
        let again = graph.add_node(record("a"));
        assert_eq!(a, again);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.find("a"), Some(a));
    }

    #[test]
    fn test_edges_keep_order() {
        let mut graph = PackageGraph::new();
        let a = graph.add_node(record("a"));
        let c = graph.add_node(record("c"));
        let b = graph.add_node(record("b"));
        graph.add_dependency(a, c);
        graph.add_dependency(a, b);
        graph.add_suggestion(a, b);

        assert_eq!(graph.dependency_names(a), vec!["c", "b"]);
        assert_eq!(graph.suggestion_names(a), vec!["b"]);
    }

    #[test]
    fn test_cycle_shares_node() {
        let mut graph = PackageGraph::new();
        let a = graph.add_node(record("a"));
        let b = graph.add_node(record("b"));
        graph.add_dependency(a, b);
        graph.add_dependency(b, a);

        let first = graph[a].depends[0];
        assert_eq!(graph[first].depends[0], a);
        assert!(graph.is_on_cycle(a));
        assert!(graph.is_on_cycle(b));
    }

    #[test]
    fn test_is_on_cycle_ignores_suggests() {
        let mut graph = PackageGraph::new();
        let a = graph.add_node(record("a"));
        let b = graph.add_node(record("b"));
        graph.add_dependency(a, b);
        graph.add_suggestion(b, a);

        assert!(!graph.is_on_cycle(a));
    }

    #[test]
    fn test_summary_flattens_relations() {
        let mut graph = PackageGraph::new();
        let a = graph.add_node(record("a"));
        let b = graph.add_node(record("b"));
        let d = graph.add_node(record("doc"));
        graph.add_dependency(a, b);
        graph.add_suggestion(a, d);

        let resolved = ResolvedPackage::new(graph, a);
        let summary = resolved.summary();
        assert_eq!(summary.name, "a");
        assert_eq!(summary.depends, vec!["b"]);
        assert_eq!(summary.suggests, vec!["doc"]);
        assert!(!summary.cyclic);
    }
}
