pub mod get;
pub mod graph;
pub mod init;
pub mod search;
pub mod show;
pub mod update;

use debar::core::{DebarError, DebarResult};
use std::env;
use std::path::PathBuf;

/// Work directory from `--dir`, or the current directory
pub fn work_dir(dir: Option<PathBuf>) -> DebarResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => env::current_dir()
            .map_err(|e| DebarError::Path(format!("Failed to get current directory: {}", e))),
    }
}
