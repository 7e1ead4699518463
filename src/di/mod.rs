//! Dependency injection infrastructure for Debar
//!
//! The index builder and the download orchestrator never talk to the
//! network or to flate2 directly; they go through the traits defined here so
//! tests can swap in the mocks.
//!
//! # Example (Production)
//! ```no_run
//! use debar::di::ServiceContainer;
//! use std::path::Path;
//!
//! # fn example() -> debar::DebarResult<()> {
//! let container = ServiceContainer::new(Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use debar::config::Config;
//! use debar::di::{mocks::*, ServiceContainer};
//! use std::sync::Arc;
//!
//! let container = ServiceContainer::with_providers(
//!     Arc::new(Config::default()),
//!     Arc::new(MockRetriever::new()),
//!     Arc::new(MockDecompressor::new()),
//! );
//! assert_eq!(container.config().arch(), "amd64");
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ConfigProvider, Decompressor, Retriever};
