//! Common utilities for integration tests

use assert_cmd::Command;
use debar::config::Config;
use debar::di::mocks::{MockDecompressor, MockRetriever};
use debar::di::{ConfigProvider, ServiceContainer};
use debar::repository::Repository;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub const MIRROR: &str = "http://mirror.test/ubuntu/";

pub fn debar_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_debar"))
}

/// One stanza with the fields the index and parser care about
pub fn stanza(name: &str, version: &str, depends: &str) -> String {
    let mut text = format!(
        "Package: {name}\nArchitecture: amd64\nVersion: {version}\n\
         Filename: pool/main/{name}/{name}_{version}_amd64.deb\nSize: 1024\n\
         MD5sum: 0123456789abcdef\nDescription: the {name} package\n extended text\n"
    );
    if !depends.is_empty() {
        text.push_str(&format!("Depends: {}\n", depends));
    }
    text.push('\n');
    text
}

pub fn archive_path(name: &str, version: &str) -> String {
    format!("pool/main/{name}/{name}_{version}_amd64.deb")
}

pub fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

pub fn config(components: &[&str], exclude: &[&str]) -> Config {
    let mut config = Config::default();
    config.repo.url = MIRROR.to_string();
    config.repo.components = components.iter().map(|c| c.to_string()).collect();
    config.exclude = exclude.iter().map(|e| e.to_string()).collect();
    config
}

/// Repository whose mirror serves `components` as plain `Packages` text
///
/// The index is rebuilt before returning.
pub async fn indexed_repository(
    root: &Path,
    components: &[(&str, String)],
    exclude: &[&str],
) -> (Repository, Arc<MockRetriever>) {
    let names: Vec<&str> = components.iter().map(|(c, _)| *c).collect();
    let config = config(&names, exclude);

    let retriever = Arc::new(MockRetriever::new());
    for (component, text) in components {
        retriever.add_response(
            config.component_index_url(component),
            text.as_bytes().to_vec(),
        );
    }

    let services = ServiceContainer::with_providers(
        Arc::new(config),
        retriever.clone(),
        Arc::new(MockDecompressor::new()),
    );
    let mut repo = Repository::with_services(root, services);
    repo.rebuild_index().await.unwrap();
    (repo, retriever)
}
