//! Error handling and work-directory paths.

pub mod error;
pub mod error_help;
pub mod path;

pub use error::{DebarError, DebarResult};
