use crate::resolver::NodeId;
use debar_core::ControlStanza;

/// A package as it appears in a resolved graph
///
/// `depends` and `suggests` point at other nodes of the same
/// [`PackageGraph`](crate::resolver::PackageGraph), in source order. A record
/// produced by a search is standalone and leaves both lists empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    pub filename: String,
    pub size: u64,
    pub checksum: String,
    /// Component the stanza was read from
    pub component: String,
    pub depends: Vec<NodeId>,
    pub suggests: Vec<NodeId>,
}

impl PackageRecord {
    /// Build an unlinked record from a parsed stanza
    pub fn from_stanza(stanza: ControlStanza, component: impl Into<String>) -> Self {
        Self {
            name: stanza.name,
            version: stanza.version,
            description: stanza.description,
            filename: stanza.filename,
            size: stanza.size,
            checksum: stanza.checksum,
            component: component.into(),
            depends: Vec::new(),
            suggests: Vec::new(),
        }
    }
}
