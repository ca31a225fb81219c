//! Integration tests for the `libris` CLI binary.
//!
//! Argument parsing, config handling and error exit codes run without a
//! books service; the list/add flows run against a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `libris` binary with env isolation.
///
/// Clears all `LIBRIS_*` env vars and points config directories at `home`
/// so tests never touch the user's real configuration.
fn libris_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("libris");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("LIBRIS_SERVER")
        .env_remove("LIBRIS_USER")
        .env_remove("LIBRIS_OUTPUT")
        .env_remove("LIBRIS_INSECURE")
        .env_remove("LIBRIS_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn two_books() -> serde_json::Value {
    json!([
        { "name": "B1", "author": "A1", "ownerId": "postnikov" },
        { "name": "B2", "author": "A2", "ownerId": "x" }
    ])
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = libris_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("shared library")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("add")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("libris"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Validation errors ───────────────────────────────────────────────

#[test]
fn test_add_requires_name_and_author_flags() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path())
        .args(["add", "--name", "Dune"])
        .assert()
        .code(2);
}

#[test]
fn test_add_blank_name_is_rejected_before_any_request() {
    let home = tempfile::tempdir().unwrap();
    // Nothing listens on port 9, so reaching the network would exit 7.
    libris_cmd(home.path())
        .args([
            "--server",
            "http://127.0.0.1:9",
            "add",
            "--name",
            "   ",
            "--author",
            "Herbert",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name and author are required"));
}

#[test]
fn test_invalid_server_url_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path())
        .args(["--server", "not a url", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("server"));
}

#[test]
fn test_unreachable_server_exits_with_connection_code() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path())
        .args(["--server", "http://127.0.0.1:9", "--timeout", "2", "list"])
        .assert()
        .code(7);
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path_uses_config_home() {
    let home = tempfile::tempdir().unwrap();
    libris_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults_as_json() {
    let home = tempfile::tempdir().unwrap();
    let output = libris_cmd(home.path())
        .args(["-o", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let cfg: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cfg["user"], "postnikov");
    assert_eq!(cfg["server"], "https://tdd.demo.reaktivate.com");
}

#[test]
fn test_config_init_writes_once() {
    let home = tempfile::tempdir().unwrap();

    libris_cmd(home.path())
        .args(["--user", "alice", "config", "init"])
        .assert()
        .success();

    libris_cmd(home.path())
        .args(["-o", "plain", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));

    libris_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    libris_cmd(home.path())
        .args(["--user", "bob", "config", "init", "--force"])
        .assert()
        .success();
}

// ── Books service flows ─────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_plain_and_private() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/books/postnikov/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_books()))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (all, private) = tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        let all = libris_cmd(home.path())
            .args(["--server", &uri, "-o", "plain", "list"])
            .output()
            .unwrap();
        let private = libris_cmd(home.path())
            .args(["--server", &uri, "-o", "plain", "list", "--private"])
            .output()
            .unwrap();
        (all, private)
    })
    .await
    .unwrap();

    assert!(all.status.success(), "{}", combined_output(&all));
    assert_eq!(String::from_utf8_lossy(&all.stdout), "A1: B1\nA2: B2\n");

    assert!(private.status.success(), "{}", combined_output(&private));
    assert_eq!(String::from_utf8_lossy(&private.stdout), "A1: B1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_table_shows_private_counter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/books/postnikov/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_books()))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        libris_cmd(home.path())
            .args(["--server", &uri, "list"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your books: 1"), "{stdout}");
    assert!(stdout.contains("B2"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_posts_draft_and_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/books/postnikov/books"))
        .and(body_json(json!({ "name": "Dune", "author": "Herbert" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/books/postnikov/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_books()))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        libris_cmd(home.path())
            .args(["--server", &uri, "add", "--name", "Dune", "--author", "Herbert"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Added 'Dune'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_rejected_by_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/books/postnikov/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        libris_cmd(home.path())
            .args(["--server", &uri, "add", "-n", "Dune", "-a", "Herbert"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(6), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("did not accept 'Dune'"));
}
