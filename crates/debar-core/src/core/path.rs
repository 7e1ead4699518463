use crate::core::error::DebarResult;
use std::path::{Path, PathBuf};

/// Name of the configuration file at the work-directory root.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Get the config file path (./config.yaml)
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Get the Debar metadata directory (./.debar)
pub fn metadata_dir(root: &Path) -> PathBuf {
    root.join(".debar")
}

/// Get the binary index file (./.debar/index)
pub fn index_file(root: &Path) -> PathBuf {
    metadata_dir(root).join("index")
}

/// Get the compressed Packages file of a component (./.debar/<component>.Packages.gz)
pub fn component_archive_file(root: &Path, component: &str) -> PathBuf {
    metadata_dir(root).join(format!("{}.Packages.gz", component))
}

/// Get the decompressed Packages file of a component (./.debar/<component>.Packages)
pub fn component_packages_file(root: &Path, component: &str) -> PathBuf {
    metadata_dir(root).join(format!("{}.Packages", component))
}

/// Get the directory downloaded archives land in (./packages)
pub fn packages_dir(root: &Path) -> PathBuf {
    root.join("packages")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> DebarResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
