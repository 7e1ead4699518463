use std::path::PathBuf;
use thiserror::Error;

pub type DebarResult<T> = Result<T, DebarError>;

#[derive(Error, Debug)]
pub enum DebarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The name is absent from the index or listed in the exclusion set.
    #[error("Package not found: {0}")]
    NotFound(String),

    /// The index file is missing, truncated or holds undecodable records.
    #[error("Corrupt index {}: {reason}", path.display())]
    CorruptIndex { path: PathBuf, reason: String },

    /// The component text file is missing or does not hold the expected
    /// stanza at the recorded offset.
    #[error("Metadata unavailable for component '{component}': {reason}")]
    MetadataUnavailable { component: String, reason: String },

    /// A Retriever or Decompressor failure. `target` is the URL or the
    /// local path that failed.
    #[error("Transfer failed for {target}: {reason}")]
    Transfer { target: String, reason: String },

    /// A key does not fit its fixed-width index field.
    #[error("{field} '{value}' is {len} bytes, the index allows at most {max}")]
    OversizedKey {
        field: &'static str,
        value: String,
        len: usize,
        max: usize,
    },

    /// An index rebuild aborted while processing `component`.
    #[error("Index rebuild failed at component '{component}': {source}")]
    Rebuild {
        component: String,
        #[source]
        source: Box<DebarError>,
    },
}

impl DebarError {
    pub fn transfer(target: impl Into<String>, reason: impl ToString) -> Self {
        DebarError::Transfer {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub fn metadata(component: impl Into<String>, reason: impl Into<String>) -> Self {
        DebarError::MetadataUnavailable {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn corrupt_index(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DebarError::CorruptIndex {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
