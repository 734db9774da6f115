//! Integration tests for the interactive shell

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_journal, read_journal, sentra_cmd, StubServer};

#[test]
fn test_shell_mood_save_show() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    sentra_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin("mood 4\nsave evening walk\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[4 🙂]  Good"))
        .stdout(predicate::str::contains("Saved ✓"))
        .stdout(predicate::str::contains("evening walk"));

    let log = read_journal(temp.path());
    assert_eq!(log.as_array().unwrap().len(), 1);
    assert_eq!(log[0]["text"], "evening walk");
    assert_eq!(log[0]["mood"], 4);
}

#[test]
fn test_shell_starts_with_empty_views() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    sentra_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."))
        .stdout(predicate::str::contains("No mood trend yet."));
}

#[test]
fn test_shell_empty_save_prompts_and_continues() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    sentra_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin("save\nsave second try\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Please write something or select a mood.",
        ));

    let log = read_journal(temp.path());
    assert_eq!(log.as_array().unwrap().len(), 1);
    assert_eq!(log[0]["text"], "second try");
}

#[test]
fn test_shell_unknown_command() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    sentra_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: 'dance'"));
}

#[test]
fn test_shell_details_requires_analysis() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    sentra_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin("details\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Analyze some text first."));
}

#[test]
fn test_shell_analyze_then_details() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let server = StubServer::start(200, r#"{"mood":"Depression","confidence":"64%"}"#).unwrap();

    sentra_cmd()
        .current_dir(temp.path())
        .env("SENTRA_ENDPOINT", &server.url)
        .arg("shell")
        .write_stdin("analyze nothing feels right\ndetails\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: Depression"))
        .stdout(predicate::str::contains("Text: nothing feels right"))
        .stdout(predicate::str::contains("Confidence: 64%"));

    assert_eq!(server.received().len(), 2);
}

#[test]
fn test_shell_keeps_running_after_failed_save() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let journal_path = temp.path().join(".sentra/sentra_journal.json");
    std::fs::create_dir(&journal_path).unwrap();
    std::fs::write(journal_path.join("occupied"), "x").unwrap();

    let output = sentra_cmd()
        .current_dir(temp.path())
        .arg("shell")
        .write_stdin("mood 2\nsave hello\nhelp\nquit\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: IO error"));
    assert!(!stdout.contains("Saved ✓"));
    assert_eq!(stdout.matches("Commands:").count(), 2);

    let leftovers: Vec<_> = std::fs::read_dir(temp.path().join(".sentra"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("sentra-tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
