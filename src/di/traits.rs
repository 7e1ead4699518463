//! Trait definitions for dependency injection

use crate::core::DebarResult;
use crate::transfer::join_url;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Trait for configuration access
///
/// Provides read-only access to the repository settings loaded from
/// config.yaml. Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the repository base URL
    fn repo_url(&self) -> &str;

    /// Get the release codename (e.g., "focal")
    fn release_name(&self) -> &str;

    /// Get the target architecture (e.g., "amd64")
    fn arch(&self) -> &str;

    /// Get the components to index, highest priority first
    fn components(&self) -> &[String];

    /// Get the names that must never be resolved
    fn exclusions(&self) -> &[String];

    /// URL of the compressed Packages file of a component
    fn component_index_url(&self, component: &str) -> String {
        join_url(
            self.repo_url(),
            &format!(
                "dists/{}/{}/binary-{}/Packages.gz",
                self.release_name(),
                component,
                self.arch()
            ),
        )
    }

    /// URL of a package archive given its `Filename` field
    fn archive_url(&self, filename: &str) -> String {
        join_url(self.repo_url(), filename)
    }
}

/// Trait for fetching a remote file to a local path
///
/// Used once per component `Packages.gz` during an index rebuild and once
/// per archive when downloading a closure.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Download `url` into `destination`, replacing any existing file
    async fn fetch(&self, url: &str, destination: &Path) -> DebarResult<()>;
}

/// Trait for unpacking a downloaded metadata file
pub trait Decompressor: Send + Sync {
    /// Decompress `path` next to itself and return the output path
    fn decompress(&self, path: &Path) -> DebarResult<PathBuf>;
}
