use crate::core::path::ensure_dir;
use crate::core::{DebarError, DebarResult};
use crate::di::{ConfigProvider, Retriever, ServiceContainer};
use crate::package::PackageRecord;
use crate::resolver::{NodeId, PackageGraph};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Nodes reachable from `root`, root first
///
/// Depth-first pre-order over depends edges, followed by suggests edges when
/// `include_suggests` is set. Each name appears once, so cycles and shared
/// dependencies are visited a single time.
pub fn collect_closure(graph: &PackageGraph, root: NodeId, include_suggests: bool) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        let record = &graph[id];
        if !seen.insert(record.name.as_str()) {
            continue;
        }
        order.push(id);

        let mut children = record.depends.clone();
        if include_suggests {
            children.extend_from_slice(&record.suggests);
        }
        stack.extend(children.into_iter().rev());
    }

    order
}

/// An archive written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArchive {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Outcome of downloading a closure
#[derive(Debug, Default)]
pub struct FetchReport {
    pub fetched: Vec<FetchedArchive>,
    pub failed: Vec<(String, DebarError)>,
}

impl FetchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Declared size of the archives that were fetched
    pub fn fetched_size(&self) -> u64 {
        self.fetched.iter().map(|a| a.size).sum()
    }

    /// Turn recorded failures into a single `Transfer` error
    pub fn into_result(self) -> DebarResult<Self> {
        if self.failed.is_empty() {
            return Ok(self);
        }
        let names: Vec<&str> = self.failed.iter().map(|(name, _)| name.as_str()).collect();
        Err(DebarError::transfer(
            names.join(", "),
            format!(
                "{} of {} archive(s) could not be downloaded",
                self.failed.len(),
                self.failed.len() + self.fetched.len()
            ),
        ))
    }
}

/// Downloads the archives of a resolved closure
pub struct DownloadOrchestrator {
    config: Arc<dyn ConfigProvider>,
    retriever: Arc<dyn Retriever>,
    dest_dir: PathBuf,
}

impl DownloadOrchestrator {
    pub fn new(services: &ServiceContainer, dest_dir: PathBuf) -> Self {
        Self {
            config: Arc::clone(&services.config),
            retriever: Arc::clone(&services.retriever),
            dest_dir,
        }
    }

    /// Where the archive of `record` is written
    pub fn destination_for(&self, record: &PackageRecord) -> DebarResult<PathBuf> {
        Path::new(&record.filename)
            .file_name()
            .map(|base| self.dest_dir.join(base))
            .ok_or_else(|| {
                DebarError::metadata(
                    record.component.as_str(),
                    format!("package '{}' has no Filename", record.name),
                )
            })
    }

    /// Fetch every archive of the closure of `root`
    ///
    /// Fetches run one after another. A failed archive is recorded in the
    /// report and the remaining ones are still attempted. Only failing to
    /// create the destination directory aborts.
    pub async fn fetch_closure(
        &self,
        graph: &PackageGraph,
        root: NodeId,
        include_suggests: bool,
    ) -> DebarResult<FetchReport> {
        ensure_dir(&self.dest_dir)?;

        let mut report = FetchReport::default();
        let mut fetched_names = HashSet::new();

        for id in collect_closure(graph, root, include_suggests) {
            let record = &graph[id];
            if !fetched_names.insert(record.name.clone()) {
                continue;
            }

            match self.fetch_one(record).await {
                Ok(path) => {
                    info!(package = %record.name, path = %path.display(), "fetched");
                    report.fetched.push(FetchedArchive {
                        name: record.name.clone(),
                        path,
                        size: record.size,
                    });
                }
                Err(e) => {
                    warn!(package = %record.name, error = %e, "fetch failed");
                    report.failed.push((record.name.clone(), e));
                }
            }
        }

        Ok(report)
    }

    async fn fetch_one(&self, record: &PackageRecord) -> DebarResult<PathBuf> {
        let destination = self.destination_for(record)?;
        let url = self.config.archive_url(&record.filename);
        self.retriever.fetch(&url, &destination).await?;
        Ok(destination)
    }
}
