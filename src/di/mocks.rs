//! Mock implementations of service traits for testing

use super::traits::{Decompressor, Retriever};
use crate::core::{DebarError, DebarResult};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock retriever for testing
///
/// Serves registered bodies, fails every other URL with a transfer error,
/// and records each requested URL in order.
///
/// # Example
///
/// ```
/// use debar::di::mocks::MockRetriever;
///
/// let retriever = MockRetriever::new();
/// retriever.add_response("http://mirror/pool/a.deb", b"archive".to_vec());
/// assert!(retriever.requests().is_empty());
/// ```
#[derive(Clone)]
pub struct MockRetriever {
    responses: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockRetriever {
    /// Create a new mock retriever with no registered URLs
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register the body served for a URL
    pub fn add_response(&self, url: impl Into<String>, body: Vec<u8>) {
        self.responses.lock().unwrap().insert(url.into(), body);
    }

    /// Get every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Count how many times a URL was requested
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }
}

impl Default for MockRetriever {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Retriever for MockRetriever {
    async fn fetch(&self, url: &str, destination: &Path) -> DebarResult<()> {
        self.requests.lock().unwrap().push(url.to_string());

        let body = self.responses.lock().unwrap().get(url).cloned();
        match body {
            Some(body) => {
                if let Some(parent) = destination.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(destination, body)?;
                Ok(())
            }
            None => Err(DebarError::transfer(url, "HTTP status 404 Not Found")),
        }
    }
}

/// Mock decompressor for testing
///
/// Copies `X.gz` to `X` unchanged, so fixtures can be registered as plain
/// text. Paths marked with [`MockDecompressor::fail_on`] fail instead.
#[derive(Clone)]
pub struct MockDecompressor {
    failing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockDecompressor {
    /// Create a new mock decompressor
    pub fn new() -> Self {
        Self {
            failing: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make decompression of `path` fail
    pub fn fail_on(&self, path: PathBuf) {
        self.failing.lock().unwrap().insert(path);
    }
}

impl Default for MockDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for MockDecompressor {
    fn decompress(&self, path: &Path) -> DebarResult<PathBuf> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(DebarError::transfer(
                path.display().to_string(),
                "invalid gzip header",
            ));
        }
        let output = path.with_extension("");
        fs::copy(path, &output)?;
        Ok(output)
    }
}
