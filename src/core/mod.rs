//! Core module re-exports.
//!
//! Errors and work-directory paths live in `debar-core`.

pub use debar_core::core::{error, error_help, path};
pub use debar_core::core::{DebarError, DebarResult};
