use super::record::IndexRecord;
use crate::core::path::{
    component_archive_file, component_packages_file, ensure_dir, index_file, metadata_dir,
};
use crate::core::{DebarError, DebarResult};
use crate::di::ServiceContainer;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

/// Line prefix that starts a stanza in a `Packages` file.
const PACKAGE_MARKER: &[u8] = b"Package: ";

/// Packages indexed per component by one rebuild
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub components: Vec<(String, usize)>,
}

impl RebuildSummary {
    pub fn total_packages(&self) -> usize {
        self.components.iter().map(|(_, count)| count).sum()
    }
}

/// Downloads every component's `Packages.gz` and rewrites the index
pub struct IndexBuilder {
    root: PathBuf,
    services: ServiceContainer,
}

impl IndexBuilder {
    pub fn new(root: PathBuf, services: ServiceContainer) -> Self {
        Self { root, services }
    }

    /// Rebuild `.debar/index` from scratch
    ///
    /// The index is truncated first. Components are processed in configured
    /// order and each one's records are written only once the component is
    /// complete. On failure the rebuild stops; records of the components
    /// finished before it stay in the index, so a failed rebuild must be
    /// retried in full.
    pub async fn rebuild(&self) -> DebarResult<RebuildSummary> {
        ensure_dir(&metadata_dir(&self.root))?;
        let index_path = index_file(&self.root);
        let mut index = File::create(&index_path)?;
        let mut summary = RebuildSummary::default();

        for component in self.services.config().components() {
            let records = self.rebuild_component(component).await.map_err(|e| {
                DebarError::Rebuild {
                    component: component.clone(),
                    source: Box::new(e),
                }
            })?;

            index.write_all(&records.bytes)?;
            index.flush()?;
            info!(component = %component, packages = records.count, "indexed component");
            summary.components.push((component.clone(), records.count));
        }

        index.sync_all()?;
        Ok(summary)
    }

    async fn rebuild_component(&self, component: &str) -> DebarResult<ComponentRecords> {
        let config = self.services.config();
        let url = config.component_index_url(component);
        let archive = component_archive_file(&self.root, component);

        info!(component, url = %url, "downloading Packages.gz");
        self.services.retriever().fetch(&url, &archive).await?;

        let unpacked = self.services.decompressor().decompress(&archive)?;
        let packages_path = component_packages_file(&self.root, component);
        if unpacked != packages_path {
            fs::rename(&unpacked, &packages_path)?;
        }

        let file = File::open(&packages_path).map_err(|e| {
            DebarError::metadata(component, format!("{}: {}", packages_path.display(), e))
        })?;

        let mut records = ComponentRecords::default();
        records.count = index_component(component, BufReader::new(file), &mut records.bytes)?;
        Ok(records)
    }
}

#[derive(Default)]
struct ComponentRecords {
    bytes: Vec<u8>,
    count: usize,
}

/// Append one record per stanza of a `Packages` text to `writer`
///
/// Each record points at the byte offset where the stanza's `Package:`
/// line begins. Returns the number of records written.
pub fn index_component<R: BufRead, W: Write>(
    component: &str,
    mut reader: R,
    writer: &mut W,
) -> DebarResult<usize> {
    let mut offset: u64 = 0;
    let mut count = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }

        if let Some(rest) = line.strip_prefix(PACKAGE_MARKER) {
            let name = String::from_utf8_lossy(rest);
            let name = name.trim();
            if !name.is_empty() {
                let position = i64::try_from(offset).map_err(|_| {
                    DebarError::metadata(component, "Packages file too large to index")
                })?;
                let record = IndexRecord::new(name, component, position)?;
                writer.write_all(&record.encode()?)?;
                count += 1;
            }
        }

        offset += read as u64;
    }

    Ok(count)
}
