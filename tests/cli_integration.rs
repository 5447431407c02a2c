//! Integration tests for the tickoff CLI

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the tickoff binary with colours off
fn tickoff() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("tickoff"));
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_help() {
    Command::new(cargo::cargo_bin!("tickoff"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu-driven todo list"));
}

#[test]
fn test_version() {
    Command::new(cargo::cargo_bin!("tickoff"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_exit_immediately() {
    tickoff()
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add Task"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_eof_exits_cleanly() {
    tickoff()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_add_view_delete_flow() {
    tickoff()
        .write_stdin("1\nBuy milk\n1\nWalk dog\n4\n1\ny\n1\nRead book\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Task added successfully with ID 1: Buy milk",
        ))
        .stdout(predicate::str::contains("Task 1 deleted successfully."))
        .stdout(predicate::str::contains(
            "Task added successfully with ID 3: Read book",
        ))
        .stdout(predicate::str::contains("Total tasks: 2"))
        .stdout(predicate::str::contains("2. [○] Walk dog"))
        .stdout(predicate::str::contains("3. [○] Read book"));
}

#[test]
fn test_mark_complete_twice() {
    tickoff()
        .write_stdin("1\nWalk dog\n5\n1\n5\n1\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Task 1 marked as complete: Walk dog",
        ))
        .stdout(predicate::str::contains(
            "Task 1 is already marked as complete.",
        ))
        .stdout(predicate::str::contains("1. [✓] Walk dog"));
}

#[test]
fn test_update_unknown_and_invalid_ids() {
    tickoff()
        .write_stdin("1\nBuy milk\n3\n99\n3\nnine\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Task with ID 99 not found.",
        ))
        .stdout(predicate::str::contains("Error: Task ID must be a number."));
}

#[test]
fn test_id_too_large_for_an_integer_is_not_found() {
    tickoff()
        .write_stdin("1\nBuy milk\n4\n99999999999999999999\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Task with ID 99999999999999999999 not found.",
        ))
        .stdout(predicate::str::contains("must be a number").not());
}

#[test]
fn test_eof_at_id_prompt_says_goodbye_once() {
    let output = tickoff()
        .args(["--seed", "Buy milk"])
        .write_stdin("3\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("MAIN MENU").count(), 1);
    assert_eq!(stdout.matches("Goodbye!").count(), 1);
}

#[test]
fn test_empty_description_rejected() {
    tickoff()
        .write_stdin("1\n   \n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Task description cannot be empty.",
        ))
        .stdout(predicate::str::contains("Your task list is empty."));
}

#[test]
fn test_invalid_menu_choice() {
    tickoff()
        .write_stdin("8\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please select a number between 1 and 7.",
        ));
}

#[test]
fn test_seed_and_json_on_exit() {
    let output = tickoff()
        .args(["--seed", "Buy milk", "--seed", "Walk dog", "--json-on-exit"])
        .write_stdin("5\n2\n7\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('[').expect("JSON list missing");
    let tasks: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["completed"], false);
    assert_eq!(tasks[1]["description"], "Walk dog");
    assert_eq!(tasks[1]["completed"], true);
}

#[test]
fn test_blank_seed_fails_with_validation_code() {
    tickoff()
        .args(["--seed", " "])
        .write_stdin("7\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("task description cannot be empty"));
}

#[test]
fn test_settings_file_disables_confirmation() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "confirmDelete": false, "seedTasks": ["Buy milk"] }"#,
    )
    .unwrap();

    tickoff()
        .arg("--config")
        .arg(&path)
        .write_stdin("4\n1\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure").not())
        .stdout(predicate::str::contains("Task 1 deleted successfully."))
        .stdout(predicate::str::contains("Your task list is empty."));
}

#[test]
fn test_invalid_settings_file_exits_with_config_code() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    std::fs::write(&path, "{ nope").unwrap();

    tickoff()
        .arg("--config")
        .arg(&path)
        .write_stdin("7\n")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}
