//! End-to-end tests for the ltask binary.
//!
//! Each test runs against its own temp directory via `LINKTASKER_DIR`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ltask(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ltask").unwrap();
    cmd.env("LINKTASKER_DIR", dir.path());
    cmd
}

#[test]
fn test_add_and_list_task() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args([
            "task",
            "add",
            "Write report",
            "--due",
            "2030-01-01",
            "--priority",
            "high",
            "--category",
            "work",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 'Write report'"));

    ltask(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report"));
}

#[test]
fn test_add_task_rejects_bad_due_date() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args(["task", "add", "Vague plans", "--due", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse due date"));
}

#[test]
fn test_complete_task_and_streak() {
    let dir = TempDir::new().unwrap();

    let out = ltask(&dir)
        .args(["task", "add", "Quick win", "--due", "today", "-o", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let task: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let id = task["id"].as_str().unwrap().to_string();

    ltask(&dir)
        .args(["task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task 'Quick win'"));

    ltask(&dir)
        .args(["stats", "streak"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak"))
        .stdout(predicate::str::contains("1 days"));
}

#[test]
fn test_task_list_filters_by_status() {
    let dir = TempDir::new().unwrap();

    let out = ltask(&dir)
        .args(["task", "add", "Done thing", "--due", "tomorrow", "-o", "json"])
        .output()
        .unwrap();
    let task: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let id = task["id"].as_str().unwrap().to_string();

    ltask(&dir)
        .args(["task", "add", "Open thing", "--due", "tomorrow"])
        .assert()
        .success();

    ltask(&dir).args(["task", "done", &id]).assert().success();

    ltask(&dir)
        .args(["task", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done thing"))
        .stdout(predicate::str::contains("Open thing").not());
}

#[test]
fn test_link_add_list_and_validation() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args([
            "link",
            "add",
            "https://www.investopedia.com/terms/i/indexfund.asp",
            "--title",
            "Index Funds Explained",
            "--category",
            "finance",
            "--tags",
            "investing, beginners",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved link 'Index Funds Explained'"));

    ltask(&dir)
        .args(["link", "list", "--search", "investing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Index Funds Explained"));

    ltask(&dir)
        .args(["link", "add", "not a url", "--title", "Broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid URL"));
}

#[test]
fn test_stats_on_empty_store() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LINKTASKER DASHBOARD"));

    ltask(&dir)
        .args(["stats", "status", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completed\": 0"));
}

#[test]
fn test_stats_priorities_always_three_rows() {
    let dir = TempDir::new().unwrap();

    let out = ltask(&dir)
        .args(["stats", "priorities", "-o", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[test]
fn test_demo_seed_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args(["demo", "seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 2 sample tasks"));

    ltask(&dir)
        .args(["demo", "seed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    ltask(&dir).args(["demo", "seed", "--force"]).assert().success();
}

#[test]
fn test_timeline_demo_overlay() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args(["stats", "timeline", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample data"));

    let out = ltask(&dir)
        .args(["stats", "timeline", "--demo", "-o", "json"])
        .output()
        .unwrap();
    let series: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let tasks: Vec<u64> = series["tasksCompleted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(tasks.iter().sum::<u64>(), 9);
}

#[test]
fn test_completions_generate() {
    let dir = TempDir::new().unwrap();

    ltask(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ltask"));
}
