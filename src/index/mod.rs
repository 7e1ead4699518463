//! Binary package index
//!
//! `.debar/index` is a headerless sequence of fixed-width records, one per
//! stanza of every component's `Packages` file, in component-configuration
//! order. Lookups scan it linearly and stop at the first match, so the
//! component listed first in config.yaml wins when a name appears twice.

pub mod builder;
pub mod lookup;
pub mod reader;
pub mod record;

pub use builder::{index_component, IndexBuilder, RebuildSummary};
pub use lookup::IndexLookup;
pub use reader::IndexReader;
pub use record::IndexRecord;
