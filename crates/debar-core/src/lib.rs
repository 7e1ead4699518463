//! Core utilities shared by the Debar binary and library.
//!
//! This crate holds the pieces that do not touch the network: the error
//! type, the work-directory layout, and the parser for Debian control
//! stanzas as found in `Packages` files.

pub mod control;
pub mod core;

pub use control::{parse_relations, ControlStanza};
pub use crate::core::error::{DebarError, DebarResult};
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
