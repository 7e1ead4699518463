use super::reader::IndexReader;
use super::record::{self, IndexRecord, MAX_KEY_LEN};
use crate::core::DebarResult;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds the stanza location of a package name
///
/// Every lookup is a linear scan from the first record. Names that were not
/// found are remembered so repeated lookups of missing packages (common in
/// large dependency closures) cost no I/O.
#[derive(Debug)]
pub struct IndexLookup {
    index_path: PathBuf,
    not_found: HashSet<String>,
    scans: usize,
}

impl IndexLookup {
    pub fn new(index_path: PathBuf) -> Self {
        Self {
            index_path,
            not_found: HashSet::new(),
            scans: 0,
        }
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Return the first record named `name`, or `None` if the index has none
    pub fn find_position(&mut self, name: &str) -> DebarResult<Option<IndexRecord>> {
        if self.not_found.contains(name) {
            debug!(name, "negative lookup cache hit");
            return Ok(None);
        }
        if name.is_empty() || name.len() > MAX_KEY_LEN {
            self.not_found.insert(name.to_string());
            return Ok(None);
        }

        self.scans += 1;
        let mut reader = IndexReader::open(&self.index_path)?;
        while let Some(raw) = reader.next_raw()? {
            if record::name_matches(raw, name) {
                let raw = *raw;
                let found = reader.decode(&raw)?;
                debug!(name, component = %found.component, offset = found.offset, "index hit");
                return Ok(Some(found));
            }
        }

        debug!(name, "not in index");
        self.not_found.insert(name.to_string());
        Ok(None)
    }

    /// Number of full index scans performed so far
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    /// Whether `name` is cached as absent
    pub fn is_known_absent(&self, name: &str) -> bool {
        self.not_found.contains(name)
    }

    /// Forget cached misses; required after the index file is rewritten
    pub fn clear_negative_cache(&mut self) {
        self.not_found.clear();
    }
}
