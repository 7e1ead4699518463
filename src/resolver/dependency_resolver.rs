//! Index-backed dependency resolver

use super::context::ResolutionContext;
use super::dependency_graph::{NodeId, PackageGraph, ResolvedPackage};
use super::session::{NodeState, ResolutionSession};
use crate::core::DebarResult;
use crate::package::PackageRecord;
use tracing::{debug, warn};

/// Turns a package name into a graph of resolved records
///
/// The resolver keeps its [`ResolutionContext`] across calls, so names found
/// missing once are not scanned for again. Each call to [`resolve`] works in
/// a fresh [`ResolutionSession`] and returns its own graph.
///
/// [`resolve`]: DependencyResolver::resolve
pub struct DependencyResolver {
    context: ResolutionContext,
}

impl DependencyResolver {
    pub fn new(context: ResolutionContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ResolutionContext {
        &mut self.context
    }

    /// Resolve `name` and everything it depends on or suggests
    ///
    /// Returns `Ok(None)` when the name is not in the index or is excluded.
    /// Errors looking up or parsing the root are returned; the same errors
    /// for a dependency only drop that dependency.
    pub fn resolve(&mut self, name: &str) -> DebarResult<Option<ResolvedPackage>> {
        let mut session = ResolutionSession::new();
        let mut graph = PackageGraph::new();

        let root = self.resolve_internal(name, &mut session, &mut graph)?;
        Ok(root.map(|id| ResolvedPackage::new(graph, id)))
    }

    /// Resolve `name` inside an ongoing session
    ///
    /// Names already in the session return their node without further work,
    /// including nodes whose children are still being resolved. That reuse
    /// is what terminates dependency cycles.
    pub fn resolve_internal(
        &mut self,
        name: &str,
        session: &mut ResolutionSession,
        graph: &mut PackageGraph,
    ) -> DebarResult<Option<NodeId>> {
        match session.state(name) {
            NodeState::Unvisited => {}
            NodeState::Excluded => return Ok(None),
            state => {
                debug!(name, ?state, "reusing node");
                return Ok(state.node());
            }
        }

        let Some(position) = self.context.lookup_mut().find_position(name)? else {
            return Ok(None);
        };
        if self.context.is_excluded(name) {
            debug!(name, "excluded");
            session.exclude(name);
            return Ok(None);
        }

        let mut stanza = self.context.parser().parse_at(&position)?;
        let depends = std::mem::take(&mut stanza.depends);
        let suggests = std::mem::take(&mut stanza.suggests);

        let id = graph.add_node(PackageRecord::from_stanza(stanza, position.component));
        session.begin(name, id);

        for dependency in &depends {
            if let Some(child) = self.resolve_edge(name, dependency, session, graph) {
                graph.add_dependency(id, child);
            }
        }
        for suggestion in &suggests {
            if let Some(child) = self.resolve_edge(name, suggestion, session, graph) {
                graph.add_suggestion(id, child);
            }
        }

        session.finish(name);
        Ok(Some(id))
    }

    fn resolve_edge(
        &mut self,
        parent: &str,
        name: &str,
        session: &mut ResolutionSession,
        graph: &mut PackageGraph,
    ) -> Option<NodeId> {
        match self.resolve_internal(name, session, graph) {
            Ok(Some(id)) => Some(id),
            Ok(None) => {
                debug!(parent, dependency = name, "dependency unavailable, omitted");
                None
            }
            Err(e) => {
                warn!(parent, dependency = name, error = %e, "skipping unresolvable dependency");
                None
            }
        }
    }
}
