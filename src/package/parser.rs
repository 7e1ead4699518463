use crate::core::path::component_packages_file;
use crate::core::{DebarError, DebarResult};
use crate::index::IndexRecord;
use debar_core::ControlStanza;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Reads the stanza an index record points at
#[derive(Debug, Clone)]
pub struct PackageRecordParser {
    root: PathBuf,
}

impl PackageRecordParser {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parse the stanza at `position`
    ///
    /// Every failure is `MetadataUnavailable` naming the component. A stanza
    /// whose `Package` field differs from the index record means the
    /// component file changed after the index was built.
    pub fn parse_at(&self, position: &IndexRecord) -> DebarResult<ControlStanza> {
        let component = position.component.as_str();
        if position.offset < 0 {
            return Err(DebarError::metadata(
                component,
                format!("negative offset {} for '{}'", position.offset, position.name),
            ));
        }

        let path = component_packages_file(&self.root, component);
        let file = File::open(&path)
            .map_err(|e| DebarError::metadata(component, format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        reader
            .seek(SeekFrom::Start(position.offset as u64))
            .map_err(|e| {
                DebarError::metadata(
                    component,
                    format!("cannot seek to offset {}: {}", position.offset, e),
                )
            })?;

        let stanza = ControlStanza::read_from(&mut reader)
            .map_err(|e| {
                DebarError::metadata(
                    component,
                    format!("stanza at offset {}: {}", position.offset, e),
                )
            })?
            .ok_or_else(|| {
                DebarError::metadata(component, format!("no stanza at offset {}", position.offset))
            })?;

        if stanza.name != position.name {
            return Err(DebarError::metadata(
                component,
                format!(
                    "expected '{}' at offset {}, found '{}' (stale index, run `debar update`)",
                    position.name, position.offset, stanza.name
                ),
            ));
        }

        Ok(stanza)
    }
}
