//! Network retrieval and decompression of repository files.

pub mod gzip;
pub mod http;

pub use gzip::GzDecompressor;
pub use http::{HttpRetriever, APT_USER_AGENT};

/// Join a repository base URL and a relative path with exactly one `/`.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
