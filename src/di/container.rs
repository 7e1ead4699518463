//! Service container for dependency injection

use super::traits::{ConfigProvider, Decompressor, Retriever};
use crate::config::Config;
use crate::core::DebarResult;
use crate::transfer::{GzDecompressor, HttpRetriever};
use std::path::Path;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the configuration and the two I/O collaborators behind trait
/// objects. Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub retriever: Arc<dyn Retriever>,
    pub decompressor: Arc<dyn Decompressor>,
}

impl ServiceContainer {
    /// Create a container with production implementations
    ///
    /// Loads config.yaml from `root` and uses the HTTP retriever with
    /// progress bars and the gzip decompressor.
    ///
    /// # Errors
    ///
    /// Returns an error if config.yaml is missing or invalid, or if the HTTP
    /// client cannot be built.
    pub fn new(root: &Path) -> DebarResult<Self> {
        let config = Config::load(root)?;

        Ok(Self {
            config: Arc::new(config),
            retriever: Arc::new(HttpRetriever::new()?),
            decompressor: Arc::new(GzDecompressor),
        })
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        retriever: Arc<dyn Retriever>,
        decompressor: Arc<dyn Decompressor>,
    ) -> Self {
        Self {
            config,
            retriever,
            decompressor,
        }
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Get the retriever
    pub fn retriever(&self) -> &dyn Retriever {
        self.retriever.as_ref()
    }

    /// Get the decompressor
    pub fn decompressor(&self) -> &dyn Decompressor {
        self.decompressor.as_ref()
    }
}
