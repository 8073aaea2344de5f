//! CLI integration tests for checklist
//!
//! These tests drive the binary end to end against a temporary data
//! directory, verifying that commands work together and that state
//! persists across invocations.

use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the checklist binary rooted at `dir`
fn checklist_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("checklist"));
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

/// Runs `task add` and extracts the new task's ID from stdout
fn add_task(dir: &TempDir, text: &str) -> String {
    let output = checklist_cmd(dir)
        .args(["task", "add", text])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // "Added task t-xxxxxxx: ..."
    let stdout = String::from_utf8(output).unwrap();
    stdout
        .split_whitespace()
        .find(|w| w.starts_with("t-"))
        .expect("task id in output")
        .trim_end_matches(':')
        .to_string()
}

/// Runs `list add` and extracts the new list's ID from stdout
fn add_list(dir: &TempDir, title: &str, items: &[&str]) -> String {
    let mut cmd = checklist_cmd(dir);
    cmd.args(["list", "add", title]);
    for item in items {
        cmd.args(["-i", item]);
    }

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    stdout
        .split_whitespace()
        .find(|w| w.starts_with("l-"))
        .expect("list id in output")
        .trim_end_matches(':')
        .to_string()
}

// =============================================================================
// Task Tests
// =============================================================================

#[test]
fn test_task_add_and_list() {
    let dir = TempDir::new().unwrap();

    add_task(&dir, "Buy milk");

    checklist_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("[ ]"));
}

#[test]
fn test_task_add_with_deadline() {
    let dir = TempDir::new().unwrap();

    checklist_cmd(&dir)
        .args(["task", "add", "File taxes", "--deadline", "2026-09-30"])
        .assert()
        .success();

    checklist_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("due 2026-09-30"));
}

#[test]
fn test_task_add_rejects_blank_text() {
    let dir = TempDir::new().unwrap();

    checklist_cmd(&dir)
        .args(["task", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be blank"));

    // Nothing was created
    checklist_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet."));
}

#[test]
fn test_task_toggle_reports_highlight_tone() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");

    checklist_cmd(&dir)
        .args(["task", "toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"))
        .stdout(predicate::str::contains("(completing)"));

    // Second toggle reverts and flips the tone
    checklist_cmd(&dir)
        .args(["task", "toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("not completed"))
        .stdout(predicate::str::contains("(un-completing)"));
}

#[test]
fn test_task_toggle_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");

    checklist_cmd(&dir)
        .args(["task", "toggle", &id])
        .assert()
        .success();

    checklist_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"));
}

#[test]
fn test_task_rm() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");

    checklist_cmd(&dir)
        .args(["task", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task"));

    checklist_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet."));
}

#[test]
fn test_task_rm_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    checklist_cmd(&dir)
        .args(["task", "rm", "t-1234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task"));
}

#[test]
fn test_task_list_json_format() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk");

    let output = checklist_cmd(&dir)
        .args(["--format", "json", "task", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tasks: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["text"], "Buy milk");
    assert_eq!(tasks[0]["completed"], false);
}

// =============================================================================
// List Tests
// =============================================================================

#[test]
fn test_list_add_drops_blank_items() {
    let dir = TempDir::new().unwrap();

    add_list(&dir, "Groceries", &["Milk", "", "Eggs"]);

    checklist_cmd(&dir)
        .args(["list", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("0/2 done"));
}

#[test]
fn test_list_add_rejects_blank_title() {
    let dir = TempDir::new().unwrap();

    checklist_cmd(&dir)
        .args(["list", "add", "  ", "-i", "Milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be blank"));
}

#[test]
fn test_list_add_rejects_all_blank_items() {
    let dir = TempDir::new().unwrap();

    checklist_cmd(&dir)
        .args(["list", "add", "Title", "-i", "", "-i", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one"));
}

#[test]
fn test_list_show_numbers_items() {
    let dir = TempDir::new().unwrap();
    let id = add_list(&dir, "Groceries", &["Milk", "Eggs"]);

    checklist_cmd(&dir)
        .args(["list", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("1."))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("2."))
        .stdout(predicate::str::contains("Eggs"));
}

#[test]
fn test_list_rm_cascades() {
    let dir = TempDir::new().unwrap();
    let id = add_list(&dir, "Groceries", &["Milk"]);

    checklist_cmd(&dir)
        .args(["list", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted list"));

    checklist_cmd(&dir)
        .args(["list", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists created yet."));
}

// =============================================================================
// Item Tests
// =============================================================================

#[test]
fn test_item_add_and_toggle() {
    let dir = TempDir::new().unwrap();
    let id = add_list(&dir, "Groceries", &["Milk"]);

    checklist_cmd(&dir)
        .args(["item", "add", &id, "Eggs"])
        .assert()
        .success();

    checklist_cmd(&dir)
        .args(["item", "toggle", &id, "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now done"));

    checklist_cmd(&dir)
        .args(["list", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/2 done"));
}

#[test]
fn test_item_edit_overwrites_text() {
    let dir = TempDir::new().unwrap();
    let id = add_list(&dir, "Groceries", &["Milk"]);

    checklist_cmd(&dir)
        .args(["item", "edit", &id, "1", "Oat milk"])
        .assert()
        .success();

    checklist_cmd(&dir)
        .args(["list", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oat milk"));
}

#[test]
fn test_repeated_first_item_rm_uses_fresh_positions() {
    let dir = TempDir::new().unwrap();
    let id = add_list(&dir, "L", &["A", "B", "C"]);

    checklist_cmd(&dir)
        .args(["item", "rm", &id, "1"])
        .assert()
        .success();

    checklist_cmd(&dir)
        .args(["item", "rm", &id, "1"])
        .assert()
        .success();

    let output = checklist_cmd(&dir)
        .args(["--format", "json", "list", "show", &id])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "C");
}

#[test]
fn test_item_position_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    let id = add_list(&dir, "L", &["A"]);

    checklist_cmd(&dir)
        .args(["item", "toggle", &id, "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item at position 5"));
}

// =============================================================================
// Status and Robustness Tests
// =============================================================================

#[test]
fn test_status_overview() {
    let dir = TempDir::new().unwrap();
    let id = add_task(&dir, "Buy milk");
    add_task(&dir, "File taxes");
    add_list(&dir, "Groceries", &["Milk", "Eggs"]);

    checklist_cmd(&dir)
        .args(["task", "toggle", &id])
        .assert()
        .success();

    checklist_cmd(&dir)
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 open, 1 completed"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn test_corrupt_store_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tasks.json"), "{definitely not json").unwrap();

    checklist_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet."));
}

#[test]
fn test_tasks_and_lists_persist_in_separate_files() {
    let dir = TempDir::new().unwrap();
    add_task(&dir, "Buy milk");
    add_list(&dir, "Groceries", &["Milk"]);

    assert!(dir.path().join("tasks.json").is_file());
    assert!(dir.path().join("lists.json").is_file());
}
