use super::dependency_graph::NodeId;
use std::collections::HashMap;

/// Where a name stands in the current resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Unvisited,
    /// Node created, children still being resolved
    InProgress(NodeId),
    Resolved(NodeId),
    /// Found in the index but left out by the exclusion list
    Excluded,
}

impl NodeState {
    pub fn node(self) -> Option<NodeId> {
        match self {
            NodeState::Unvisited | NodeState::Excluded => None,
            NodeState::InProgress(id) | NodeState::Resolved(id) => Some(id),
        }
    }
}

/// Per-call memory of the names already turned into nodes
///
/// A fresh session is used for every top-level resolve. Marking a node
/// in progress before its children are visited is what stops a cycle.
#[derive(Debug, Default)]
pub struct ResolutionSession {
    states: HashMap<String, NodeState>,
}

impl ResolutionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, name: &str) -> NodeState {
        self.states
            .get(name)
            .copied()
            .unwrap_or(NodeState::Unvisited)
    }

    /// Node already created for `name`, finished or not
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.state(name).node()
    }

    pub fn begin(&mut self, name: &str, id: NodeId) {
        self.states
            .insert(name.to_string(), NodeState::InProgress(id));
    }

    pub fn finish(&mut self, name: &str) {
        if let Some(state) = self.states.get_mut(name) {
            if let NodeState::InProgress(id) = *state {
                *state = NodeState::Resolved(id);
            }
        }
    }

    pub fn exclude(&mut self, name: &str) {
        self.states.insert(name.to_string(), NodeState::Excluded);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
