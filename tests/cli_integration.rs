//! Integration tests for the `kp` CLI.
//!
//! Each test creates a temp store directory, runs `kp` as a subprocess,
//! and verifies stdout and/or the persisted `tasks` file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `kp` binary.
fn kp_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("kp");
    path
}

/// Run `kp` against the given store directory, returning (stdout, stderr, success).
fn run_kp(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(kp_bin())
        .arg("--dir")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to run kp");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn tasks_file(dir: &Path) -> String {
    fs::read_to_string(dir.join("tasks")).unwrap()
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[test]
fn add_creates_the_store_and_persists_the_task() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("store");

    let (stdout, _, ok) = run_kp(&dir, &["add", "Buy milk"]);
    assert!(ok);
    assert_eq!(stdout, "Buy milk\n");
    assert_eq!(tasks_file(&dir), "Buy milk\n");
}

#[test]
fn add_appends_in_insertion_order() {
    let tmp = TempDir::new().unwrap();
    run_kp(tmp.path(), &["add", "first"]);
    run_kp(tmp.path(), &["add", "second"]);
    run_kp(tmp.path(), &["add", "third"]);
    assert_eq!(tasks_file(tmp.path()), "first\nsecond\nthird\n");
}

#[test]
fn add_empty_text_fails_without_touching_the_store() {
    let tmp = TempDir::new().unwrap();

    let (_, stderr, ok) = run_kp(tmp.path(), &["add", ""]);
    assert!(!ok);
    assert!(stderr.contains("task is empty"));
    assert!(!tmp.path().join("tasks").exists());

    let (_, stderr, ok) = run_kp(tmp.path(), &["add", "   "]);
    assert!(!ok);
    assert!(stderr.contains("task is empty"));
}

#[test]
fn add_flattens_newlines() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_kp(tmp.path(), &["add", "line one\nline two"]);
    assert!(ok);
    assert_eq!(stdout, "line one line two\n");
    assert_eq!(tasks_file(tmp.path()), "line one line two\n");
}

#[test]
fn duplicate_tasks_are_permitted() {
    let tmp = TempDir::new().unwrap();
    run_kp(tmp.path(), &["add", "twice"]);
    run_kp(tmp.path(), &["add", "twice"]);
    assert_eq!(tasks_file(tmp.path()), "twice\ntwice\n");
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_on_a_fresh_store_reports_no_tasks() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_kp(tmp.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "(no tasks)\n");
}

#[test]
fn list_prints_one_task_per_line() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks"), "a\nb\nc\n").unwrap();
    let (stdout, _, ok) = run_kp(tmp.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "a\nb\nc\n");
}

#[test]
fn list_never_prints_the_placeholder() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, _) = run_kp(tmp.path(), &["list"]);
    assert!(!stdout.contains("Add a new task"));
}

#[test]
fn list_json_outputs_the_task_array() {
    let tmp = TempDir::new().unwrap();
    run_kp(tmp.path(), &["add", "a"]);
    run_kp(tmp.path(), &["add", "b"]);

    let (stdout, _, ok) = run_kp(tmp.path(), &["list", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["tasks"], serde_json::json!(["a", "b"]));
}

#[test]
fn list_json_on_a_fresh_store_is_an_empty_array() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_kp(tmp.path(), &["list", "--json"]);
    assert!(ok);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["tasks"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

#[test]
fn remove_deletes_the_first_match_only() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks"), "dup\nx\ndup\n").unwrap();

    let (stdout, _, ok) = run_kp(tmp.path(), &["remove", "dup"]);
    assert!(ok);
    assert_eq!(stdout, "removed: dup\n");
    assert_eq!(tasks_file(tmp.path()), "x\ndup\n");
}

#[test]
fn remove_missing_task_fails_and_leaves_the_store_alone() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks"), "a\n").unwrap();

    let (_, stderr, ok) = run_kp(tmp.path(), &["remove", "b"]);
    assert!(!ok);
    assert!(stderr.contains("no such task"));
    assert_eq!(tasks_file(tmp.path()), "a\n");
}

#[test]
fn removing_the_last_task_leaves_an_empty_file() {
    let tmp = TempDir::new().unwrap();
    run_kp(tmp.path(), &["add", "only"]);
    let (_, _, ok) = run_kp(tmp.path(), &["remove", "only"]);
    assert!(ok);
    // The placeholder is a display artifact, never persisted
    assert_eq!(tasks_file(tmp.path()), "");
}

#[test]
fn a_task_sharing_the_placeholder_text_is_still_a_task() {
    let tmp = TempDir::new().unwrap();
    run_kp(tmp.path(), &["add", "Add a new task"]);
    assert_eq!(tasks_file(tmp.path()), "Add a new task\n");

    let (stdout, _, ok) = run_kp(tmp.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "Add a new task\n");

    let (_, _, ok) = run_kp(tmp.path(), &["remove", "Add a new task"]);
    assert!(ok);
    assert_eq!(tasks_file(tmp.path()), "");
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

#[test]
fn clear_empties_the_store() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks"), "a\nb\n").unwrap();

    let (stdout, _, ok) = run_kp(tmp.path(), &["clear"]);
    assert!(ok);
    assert_eq!(stdout, "cleared 2 tasks\n");
    assert_eq!(tasks_file(tmp.path()), "");
}

#[test]
fn clear_on_an_empty_store_reports_zero() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, ok) = run_kp(tmp.path(), &["clear"]);
    assert!(ok);
    assert_eq!(stdout, "cleared 0 tasks\n");
    assert_eq!(tasks_file(tmp.path()), "");
}

// ---------------------------------------------------------------------------
// full flows
// ---------------------------------------------------------------------------

#[test]
fn add_remove_cycle_round_trips_across_invocations() {
    let tmp = TempDir::new().unwrap();
    run_kp(tmp.path(), &["add", "Buy milk"]);
    run_kp(tmp.path(), &["add", "walk dog"]);
    run_kp(tmp.path(), &["remove", "Buy milk"]);

    let (stdout, _, _) = run_kp(tmp.path(), &["list"]);
    assert_eq!(stdout, "walk dog\n");
    assert_eq!(tasks_file(tmp.path()), "walk dog\n");
}
