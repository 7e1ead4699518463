//! Tests for the `debar` binary

use super::common::{archive_path, config, debar_command, gzip, stanza};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_help_lists_commands() {
    debar_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    debar_command()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized Debar work directory"));

    let content = fs::read_to_string(temp.path().join("config.yaml")).unwrap();
    assert!(content.contains("release_name: focal"));
    assert!(temp.path().join(".debar").is_dir());
}

#[test]
fn test_init_refuses_non_empty_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README"), "keep me").unwrap();

    debar_command()
        .args(["--dir", temp.path().to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));
}

#[test]
fn test_show_without_config() {
    let temp = TempDir::new().unwrap();

    debar_command()
        .args(["show", "bash"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("debar init"));
}

#[test]
fn test_show_without_index() {
    let temp = TempDir::new().unwrap();
    debar_command()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();

    debar_command()
        .args(["show", "bash"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("debar update"));
}

async fn serve_mirror(server: &MockServer, packages: &str, archives: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/ubuntu/dists/focal/main/binary-amd64/Packages.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gzip(packages)))
        .mount(server)
        .await;
    for archive in archives {
        Mock::given(method("GET"))
            .and(path(format!("/ubuntu/{}", archive)))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"!<arch>\n".to_vec()))
            .mount(server)
            .await;
    }
}

fn write_config(root: &Path, server: &MockServer, exclude: &[&str]) {
    let mut config = config(&["main"], exclude);
    config.repo.url = format!("{}/ubuntu/", server.uri());
    config.save(root).unwrap();
}

fn run_in(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    debar_command()
        .arg("--dir")
        .arg(root)
        .args(args)
        .assert()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_update_show_search_graph_get() {
    let server = MockServer::start().await;
    let packages = stanza("hello", "2.10", "libc6 (>= 2.14), ghost")
        + &stanza("libc6", "2.31", "libgcc-s1")
        + &stanza("libgcc-s1", "10.1", "libc6");
    serve_mirror(
        &server,
        &packages,
        &[
            archive_path("hello", "2.10").as_str(),
            archive_path("libc6", "2.31").as_str(),
            archive_path("libgcc-s1", "10.1").as_str(),
        ],
    )
    .await;

    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server, &[]);

    run_in(temp.path(), &["update"])
        .success()
        .stdout(predicate::str::contains("Indexed 3 packages"));

    run_in(temp.path(), &["show", "hello"])
        .success()
        .stdout(predicate::str::contains("Version:     2.10"))
        .stdout(predicate::str::contains("Depends:     libc6\n"));

    let output = run_in(temp.path(), &["show", "libc6", "--json"])
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["name"], "libc6");
    assert_eq!(json["depends"][0], "libgcc-s1");
    assert_eq!(json["cyclic"], true);

    run_in(temp.path(), &["search", "lib"])
        .success()
        .stdout(predicate::str::contains("libc6"))
        .stdout(predicate::str::contains("libgcc-s1"))
        .stdout(predicate::str::contains("2 packages found"));

    run_in(temp.path(), &["graph", "hello"])
        .success()
        .stdout(predicate::str::starts_with("flowchart TD"))
        .stdout(predicate::str::contains("{{\"hello\"}}"));

    run_in(temp.path(), &["get", "hello"])
        .success()
        .stdout(predicate::str::contains("All 3 packages, total size 3.00 KB."))
        .stdout(predicate::str::contains("Downloaded 3 packages"));
    assert!(temp.path().join("packages/libgcc-s1_10.1_amd64.deb").exists());

    run_in(temp.path(), &["get", "ghost"])
        .failure()
        .stderr(predicate::str::contains("Package not found: ghost"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_reports_missing_archive() {
    let server = MockServer::start().await;
    let packages = stanza("hello", "2.10", "libc6") + &stanza("libc6", "2.31", "");
    serve_mirror(&server, &packages, &[archive_path("hello", "2.10").as_str()]).await;

    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server, &[]);
    run_in(temp.path(), &["update"]).success();

    run_in(temp.path(), &["get", "hello"])
        .failure()
        .stderr(predicate::str::contains("✗ libc6"))
        .stdout(predicate::str::contains("Downloaded 1 packages"));
    assert!(temp.path().join("packages/hello_2.10_amd64.deb").exists());
    assert!(!temp.path().join("packages/libc6_2.31_amd64.deb").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_update_fails_on_missing_component() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server, &[]);

    run_in(temp.path(), &["update"])
        .failure()
        .stderr(predicate::str::contains("component 'main'"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_excluded_package_is_not_found() {
    let server = MockServer::start().await;
    let packages = stanza("hello", "2.10", "systemd") + &stanza("systemd", "245", "");
    serve_mirror(&server, &packages, &[]).await;

    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &server, &["systemd"]);
    run_in(temp.path(), &["update"]).success();

    run_in(temp.path(), &["show", "hello"])
        .success()
        .stdout(predicate::str::contains("Depends:     (none)"));
    run_in(temp.path(), &["show", "systemd"]).failure();
}
