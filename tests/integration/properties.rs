//! End-to-end behaviour of index, resolver and downloader

use super::common::{archive_path, indexed_repository, stanza, MIRROR};
use debar::core::path::{index_file, packages_dir};
use debar::core::DebarError;
use debar::index::record::RECORD_WIDTH;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_rebuild_then_resolve_round_trip() {
    let temp = TempDir::new().unwrap();
    let main = stanza("zlib1g", "1:1.2.11.dfsg-2ubuntu1", "libc6 (>= 2.14)") + &stanza("libc6", "2.31", "");
    let (mut repo, _) = indexed_repository(temp.path(), &[("main", main)], &[]).await;

    let resolved = repo.resolve("zlib1g").unwrap();
    let record = resolved.record();
    assert_eq!(record.name, "zlib1g");
    assert_eq!(record.version, "1:1.2.11.dfsg-2ubuntu1");
    assert_eq!(record.filename, archive_path("zlib1g", "1:1.2.11.dfsg-2ubuntu1"));
    assert_eq!(record.size, 1024);
    assert_eq!(record.checksum, "0123456789abcdef");
    assert_eq!(record.description, "the zlib1g package");
    assert_eq!(resolved.graph().dependency_names(resolved.root()), vec!["libc6"]);

    let index_len = fs::metadata(index_file(temp.path())).unwrap().len();
    assert_eq!(index_len, 2 * RECORD_WIDTH as u64);
}

#[tokio::test]
async fn test_earliest_component_wins() {
    let temp = TempDir::new().unwrap();
    let main = stanza("p", "1.0", "");
    let universe = stanza("p", "2.0", "");
    let (mut repo, _) =
        indexed_repository(temp.path(), &[("main", main), ("universe", universe)], &[]).await;

    let resolved = repo.resolve("p").unwrap();
    assert_eq!(resolved.record().component, "main");
    assert_eq!(resolved.record().version, "1.0");
}

#[tokio::test]
async fn test_cycle_terminates_with_shared_node() {
    let temp = TempDir::new().unwrap();
    let main = stanza("a", "1", "b") + &stanza("b", "1", "a");
    let (mut repo, _) = indexed_repository(temp.path(), &[("main", main)], &[]).await;

    let resolved = repo.resolve("a").unwrap();
    let graph = resolved.graph();
    let b = graph[resolved.root()].depends[0];
    assert_eq!(graph[b].depends[0], resolved.root());
}

#[tokio::test]
async fn test_excluded_dependency_is_dropped() {
    let temp = TempDir::new().unwrap();
    let main = stanza("a", "1", "b, c") + &stanza("b", "1", "") + &stanza("c", "1", "");
    let (mut repo, _) = indexed_repository(temp.path(), &[("main", main)], &["b"]).await;

    let resolved = repo.resolve("a").unwrap();
    let depends = resolved.graph().dependency_names(resolved.root());
    assert_eq!(depends, vec!["c"]);
    assert!(matches!(repo.resolve("b"), Err(DebarError::NotFound(_))));
}

#[tokio::test]
async fn test_shared_dependency_downloaded_once() {
    let temp = TempDir::new().unwrap();
    let main = stanza("a", "1", "b, c")
        + &stanza("b", "1", "d")
        + &stanza("c", "1", "d")
        + &stanza("d", "1", "");
    let (mut repo, retriever) = indexed_repository(temp.path(), &[("main", main)], &[]).await;
    for name in ["a", "b", "c", "d"] {
        retriever.add_response(
            format!("{}{}", MIRROR, archive_path(name, "1")),
            name.as_bytes().to_vec(),
        );
    }

    let report = repo.fetch_with_dependencies("a", false).await.unwrap();
    assert!(report.is_success());
    assert_eq!(report.fetched.len(), 4);

    let d_url = format!("{}{}", MIRROR, archive_path("d", "1"));
    assert_eq!(retriever.request_count(&d_url), 1);
    assert_eq!(
        fs::read(packages_dir(temp.path()).join("d_1_amd64.deb")).unwrap(),
        b"d"
    );
}

#[tokio::test]
async fn test_failed_archive_does_not_stop_others() {
    let temp = TempDir::new().unwrap();
    let main = stanza("a", "1", "b, c") + &stanza("b", "1", "") + &stanza("c", "1", "");
    let (mut repo, retriever) = indexed_repository(temp.path(), &[("main", main)], &[]).await;
    for name in ["a", "c"] {
        retriever.add_response(format!("{}{}", MIRROR, archive_path(name, "1")), Vec::new());
    }

    let report = repo.fetch_with_dependencies("a", false).await.unwrap();
    assert_eq!(report.fetched.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        report.into_result(),
        Err(DebarError::Transfer { .. })
    ));
}

#[tokio::test]
async fn test_missing_name_scanned_once() {
    let temp = TempDir::new().unwrap();
    let (mut repo, _) =
        indexed_repository(temp.path(), &[("main", stanza("a", "1", ""))], &[]).await;

    assert!(matches!(repo.resolve("ghost"), Err(DebarError::NotFound(_))));
    assert!(matches!(repo.resolve("ghost"), Err(DebarError::NotFound(_))));
    assert_eq!(repo.resolver().context().lookup().scan_count(), 1);
}

#[tokio::test]
async fn test_alternation_takes_first_candidate() {
    let temp = TempDir::new().unwrap();
    let main = stanza("a", "1", "x | y (>= 2.0)") + &stanza("x", "1", "");
    let (mut repo, _) = indexed_repository(temp.path(), &[("main", main)], &[]).await;

    let resolved = repo.resolve("a").unwrap();
    assert_eq!(resolved.graph().dependency_names(resolved.root()), vec!["x"]);
    let lookup = repo.resolver().context().lookup();
    assert!(!lookup.is_known_absent("y"));
    assert_eq!(lookup.scan_count(), 2);
}

#[tokio::test]
async fn test_dependency_missing_from_index_is_omitted() {
    let temp = TempDir::new().unwrap();
    let main = stanza("a", "1", "gone, b") + &stanza("b", "1", "");
    let (mut repo, _) = indexed_repository(temp.path(), &[("main", main)], &[]).await;

    let resolved = repo.resolve("a").unwrap();
    assert_eq!(resolved.graph().dependency_names(resolved.root()), vec!["b"]);
}

#[tokio::test]
async fn test_search_prefers_first_component() {
    let temp = TempDir::new().unwrap();
    let main = stanza("python3", "3.8.2", "") + &stanza("python3-apt", "2.0.0", "python3");
    let universe = stanza("python3", "9.9", "") + &stanza("python3-yaml", "5.3.1", "");
    let (repo, _) =
        indexed_repository(temp.path(), &[("main", main), ("universe", universe)], &["python3-apt"])
            .await;

    let found = repo.search_by_substring("python3").unwrap();
    let names: Vec<(&str, &str)> = found
        .iter()
        .map(|r| (r.name.as_str(), r.version.as_str()))
        .collect();
    assert_eq!(names, vec![("python3", "3.8.2"), ("python3-yaml", "5.3.1")]);
}
