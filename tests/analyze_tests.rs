//! Integration tests for analyze and details against a local stub classifier

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, sentra_cmd, StubServer};

const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

fn journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    temp
}

#[test]
fn test_analyze_shows_label_and_description() {
    let temp = journal();
    let server = StubServer::start(200, r#"{"mood":"Normal"}"#).unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .args(["analyze", "I feel okay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: Normal"))
        .stdout(predicate::str::contains("Your text appears to be balanced."))
        .stderr(predicate::str::contains("Analyzing..."));

    let bodies = server.received();
    assert_eq!(bodies.len(), 1);
    let body: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "I feel okay" }));
}

#[test]
fn test_analyze_unknown_label_uses_fallback() {
    let temp = journal();
    let server = StubServer::start(200, r#"{"mood":"Euphoria"}"#).unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .args(["analyze", "over the moon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: Euphoria"))
        .stdout(predicate::str::contains("Analysis complete."));
}

#[test]
fn test_analyze_server_error_notifies_once() {
    let temp = journal();
    let server = StubServer::start(500, r#"{"error":"model not loaded"}"#).unwrap();

    let output = sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .args(["analyze", "anything"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stdout.contains("Mood:"));
    assert_eq!(stderr.matches(FAILURE_NOTICE).count(), 1);
    assert_eq!(server.received().len(), 1);
}

#[test]
fn test_analyze_malformed_body_fails() {
    let temp = journal();
    let server = StubServer::start(200, "<html>not json</html>").unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .args(["analyze", "anything"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(FAILURE_NOTICE));
}

#[test]
fn test_analyze_unreachable_endpoint_fails() {
    let temp = journal();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", "http://127.0.0.1:1")
        .args(["analyze", "anything"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(FAILURE_NOTICE));
}

#[test]
fn test_analyze_blank_text_sends_nothing() {
    let temp = journal();
    let server = StubServer::start(200, r#"{"mood":"Normal"}"#).unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .args(["analyze", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(server.received().is_empty());
}

#[test]
fn test_analyze_with_details_hands_off_text() {
    let temp = journal();
    let server = StubServer::start(
        200,
        r#"{"mood":"Anxiety","confidence":"81.2%","highlighted_phrases":["worried","exam"]}"#,
    )
    .unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .args(["analyze", "worried about the exam", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text: worried about the exam"))
        .stdout(predicate::str::contains("Confidence: 81.2%"))
        .stdout(predicate::str::contains("Highlighted: worried, exam"));

    let session = fs::read_to_string(temp.path().join(".sentra/session.json")).unwrap();
    let session: serde_json::Value = serde_json::from_str(&session).unwrap();
    assert_eq!(session["analysisText"], "worried about the exam");

    assert_eq!(server.received().len(), 2);
}

#[test]
fn test_details_reuses_handoff() {
    let temp = journal();
    let server = StubServer::start(200, r#"{"mood":"Stress"}"#).unwrap();
    fs::write(
        temp.path().join(".sentra/session.json"),
        r#"{"analysisText":"deadline tomorrow"}"#,
    )
    .unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .arg("details")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text: deadline tomorrow"))
        .stdout(predicate::str::contains("Mood: Stress"));

    let bodies = server.received();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].contains("deadline tomorrow"));
}

#[test]
fn test_details_without_handoff() {
    let temp = journal();
    let server = StubServer::start(200, r#"{"mood":"Normal"}"#).unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .arg("details")
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to show"));

    assert!(server.received().is_empty());
}

#[test]
fn test_details_transport_failure() {
    let temp = journal();
    let server = StubServer::start(500, "{}").unwrap();
    fs::write(
        temp.path().join(".sentra/session.json"),
        r#"{"analysisText":"deadline tomorrow"}"#,
    )
    .unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .arg("details")
        .assert()
        .code(4)
        .stderr(predicate::str::contains(FAILURE_NOTICE));
}
