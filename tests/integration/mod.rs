//! Integration tests
//!
//! `properties` exercises the library through `Repository` with mock
//! services; `cli` runs the `debar` binary against a wiremock mirror.

pub mod cli;
pub mod common;
pub mod properties;
