//! Work-directory facade
//!
//! A [`Repository`] owns the services and the long-lived resolver of one work
//! directory. Every operation the CLI offers goes through it. Rebuilding and
//! resolving take `&mut self`, so an index is never read while it is being
//! rewritten.

use crate::config::Config;
use crate::core::path::{ensure_dir, index_file, metadata_dir, packages_dir};
use crate::core::{DebarError, DebarResult};
use crate::di::ServiceContainer;
use crate::index::{IndexBuilder, IndexReader, RebuildSummary};
use crate::package::{DownloadOrchestrator, FetchReport, PackageRecord};
use crate::resolver::{DependencyResolver, ResolutionContext, ResolvedPackage};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Set up an empty directory as a work directory
///
/// Creates `.debar/` and writes the default config.yaml. Any existing entry
/// in `root` is refused so a work directory is never initialised twice.
pub fn init_repository(root: &Path) -> DebarResult<Config> {
    if root.exists() {
        if !root.is_dir() {
            return Err(DebarError::Path(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        if fs::read_dir(root)?.next().is_some() {
            return Err(DebarError::Path(format!(
                "{} is not empty; `debar init` needs an empty directory",
                root.display()
            )));
        }
    }

    ensure_dir(&metadata_dir(root))?;
    let config = Config::default();
    config.save(root)?;
    info!(root = %root.display(), "initialised work directory");
    Ok(config)
}

pub struct Repository {
    root: PathBuf,
    services: ServiceContainer,
    resolver: DependencyResolver,
}

impl Repository {
    /// Open an initialised work directory with production services
    pub fn open(root: &Path) -> DebarResult<Self> {
        let services = ServiceContainer::new(root)?;
        Ok(Self::with_services(root, services))
    }

    /// Open a work directory with the given services
    pub fn with_services(root: impl Into<PathBuf>, services: ServiceContainer) -> Self {
        let root = root.into();
        let context =
            ResolutionContext::new(&root, services.config().exclusions().iter().cloned());
        Self {
            resolver: DependencyResolver::new(context),
            root,
            services,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn services(&self) -> &ServiceContainer {
        &self.services
    }

    pub fn resolver(&self) -> &DependencyResolver {
        &self.resolver
    }

    /// Download every component's metadata and rewrite the index
    ///
    /// Cached misses are dropped whether or not the rebuild succeeds, since
    /// the index file changed either way.
    pub async fn rebuild_index(&mut self) -> DebarResult<RebuildSummary> {
        let builder = IndexBuilder::new(self.root.clone(), self.services.clone());
        let result = builder.rebuild().await;
        self.resolver
            .context_mut()
            .lookup_mut()
            .clear_negative_cache();
        result
    }

    /// Resolve `name` into its dependency graph
    ///
    /// An absent or excluded name is `NotFound`.
    pub fn resolve(&mut self, name: &str) -> DebarResult<ResolvedPackage> {
        self.resolver
            .resolve(name)?
            .ok_or_else(|| DebarError::NotFound(name.to_string()))
    }

    /// Download the archives of an already resolved package into `packages/`
    pub async fn fetch_resolved(
        &self,
        resolved: &ResolvedPackage,
        include_suggests: bool,
    ) -> DebarResult<FetchReport> {
        let orchestrator = DownloadOrchestrator::new(&self.services, packages_dir(&self.root));
        orchestrator
            .fetch_closure(resolved.graph(), resolved.root(), include_suggests)
            .await
    }

    /// Resolve `name` and download its closure
    ///
    /// Per-archive failures are collected in the report; use
    /// [`FetchReport::into_result`] to turn them into an error.
    pub async fn fetch_with_dependencies(
        &mut self,
        name: &str,
        include_suggests: bool,
    ) -> DebarResult<FetchReport> {
        let resolved = self.resolve(name)?;
        self.fetch_resolved(&resolved, include_suggests).await
    }

    /// Packages whose name contains `text`, in index order
    ///
    /// Only the first record of each name is used, matching lookup priority.
    /// Excluded names are skipped. The returned records are not linked to
    /// their dependencies.
    pub fn search_by_substring(&self, text: &str) -> DebarResult<Vec<PackageRecord>> {
        let reader = IndexReader::open(&index_file(&self.root))?;
        let parser = self.resolver.context().parser();
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for record in reader {
            let record = record?;
            if !record.name.contains(text) || !seen.insert(record.name.clone()) {
                continue;
            }
            if self.resolver.context().is_excluded(&record.name) {
                continue;
            }
            let stanza = parser.parse_at(&record)?;
            results.push(PackageRecord::from_stanza(stanza, record.component));
        }

        Ok(results)
    }
}
