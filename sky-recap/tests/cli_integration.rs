//! End-to-end tests for the sky-recap binary against a local feed server

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::process::Output;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_PATH: &str = "/xrpc/app.bsky.feed.getAuthorFeed";

fn item(created_at: &str, text: &str) -> Value {
    json!({
        "post": {
            "uri": format!("at://did:plc:alice/app.bsky.feed.post/{}", created_at),
            "record": {"text": text, "createdAt": created_at}
        }
    })
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    let api_url = format!("{}/xrpc", server.uri());
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("sky-recap")
            .unwrap()
            .env("SKYRECAP_API_URL", api_url)
            .env_remove("SKYRECAP_CONFIG")
            .env_remove("RUST_LOG")
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

#[test]
fn test_missing_handle_prints_usage_and_exits_1() {
    let mut cmd = Command::cargo_bin("sky-recap").unwrap();

    // Unroutable endpoint: any request attempt would surface as an error
    cmd.env("SKYRECAP_API_URL", "http://127.0.0.1:9/xrpc")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: sky-recap <handle>"))
        .stderr(predicate::str::contains("Example:"));
}

#[test]
fn test_bare_at_sign_is_usage_error() {
    let mut cmd = Command::cargo_bin("sky-recap").unwrap();

    cmd.arg("@")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_exits_successfully() {
    let mut cmd = Command::cargo_bin("sky-recap").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account handle"));
}

#[tokio::test]
async fn test_missing_handle_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"feed": []})))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(&server, &[]).await;
    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_report_for_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .and(query_param("actor", "alice.bsky.social"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [
                item("2025-03-05T10:00:00.000Z", "three five"),
                item("2025-01-20T10:00:00.000Z", "one twenty"),
                item("2025-03-01T10:00:00.000Z", "three one")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["@alice.bsky.social"]).await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# @alice.bsky.social の2025年振り返りデータ\n"));
    assert!(stdout.contains("- 総投稿数: 3件\n"));
    assert!(stdout.contains("- 月別投稿数: 1月: 1件, 3月: 2件\n"));
    assert!(stdout.contains("### 3月 (2件)\n- 2025-03-05: three five\n- 2025-03-01: three one\n"));
}

#[tokio::test]
async fn test_reposts_excluded_from_report() {
    let server = MockServer::start().await;

    let mut repost = item("2025-02-01T00:00:00.000Z", "someone else's post");
    repost["reason"] = json!({"$type": "app.bsky.feed.defs#reasonRepost"});

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"feed": [repost]})))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["alice.bsky.social"]).await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("- 総投稿数: 0件\n"));
    assert!(!stdout.contains("someone else's post"));
}

#[tokio::test]
async fn test_service_unavailable_exits_1_without_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["alice.bsky.social"]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: API error: 503 Service Unavailable"));
    assert!(output.stdout.is_empty());
}
