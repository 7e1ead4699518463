use crate::core::path::index_file;
use crate::index::IndexLookup;
use crate::package::PackageRecordParser;
use std::collections::HashSet;
use std::path::Path;

/// Long-lived state shared by every resolution of one work directory
///
/// Owns the index lookup (and with it the negative cache), the stanza
/// parser and the exclusion set.
#[derive(Debug)]
pub struct ResolutionContext {
    lookup: IndexLookup,
    parser: PackageRecordParser,
    exclusions: HashSet<String>,
}

impl ResolutionContext {
    pub fn new<I, S>(root: &Path, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lookup: IndexLookup::new(index_file(root)),
            parser: PackageRecordParser::new(root),
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions.contains(name)
    }

    pub fn lookup(&self) -> &IndexLookup {
        &self.lookup
    }

    pub fn lookup_mut(&mut self) -> &mut IndexLookup {
        &mut self.lookup
    }

    pub fn parser(&self) -> &PackageRecordParser {
        &self.parser
    }
}
