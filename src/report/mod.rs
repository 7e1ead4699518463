//! Human-readable output: byte sizes and Mermaid dependency diagrams.

pub mod format;
pub mod mermaid;

pub use format::format_size;
