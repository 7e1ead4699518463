//! Debar: fetch Debian packages together with their dependency closure.
//!
//! The library builds a fixed-width binary index over the `Packages` files of
//! a mirrored repository, resolves a package into a (possibly cyclic)
//! dependency graph, and downloads every archive of the closure once.
//! `repository::Repository` ties the pieces together for the CLI.

pub use debar_core::{format_error_with_help, ControlStanza, DebarError, DebarResult, ErrorHelp};

/// Core module re-exported from debar-core.
pub mod core;

/// Configuration management (config.yaml).
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// HTTP retrieval and gzip decompression.
pub mod transfer;

/// Binary package index.
pub mod index;

/// Package records, stanza parsing and archive downloads.
pub mod package;

/// Dependency resolution.
pub mod resolver;

/// Size formatting and Mermaid dependency diagrams.
pub mod report;

/// Work-directory facade used by the CLI.
pub mod repository;
