pub mod context;
pub mod dependency_graph;
pub mod dependency_resolver;
pub mod session;

pub use context::ResolutionContext;
pub use dependency_graph::{NodeId, PackageGraph, PackageSummary, ResolvedPackage};
pub use dependency_resolver::DependencyResolver;
pub use session::{NodeState, ResolutionSession};
