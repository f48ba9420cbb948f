//! Integration tests for the `cramplan` binary.
//!
//! Exercises the plan and check subcommands through the actual binary:
//! stdin/file input, the rendered table, overdue reporting, `.ics` output,
//! and the non-zero exit on overlapping fixed events.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the payload.json fixture. Deadlines are pinned to 2099 so
/// the tests don't depend on the wall clock.
fn payload_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/payload.json")
}

fn overlapping_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/overlapping.json")
}

fn payload_json() -> String {
    std::fs::read_to_string(payload_path()).expect("payload.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Plan subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn plan_from_file_prints_the_timetable() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["plan", "-i", payload_path(), "--start-date", "2099-01-01", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tutoring"))
        .stdout(predicate::str::contains("algo hw 2"))
        .stdout(predicate::str::contains("fixed"))
        .stdout(predicate::str::contains("task"));
}

#[test]
fn plan_reports_overdue_tasks_separately() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["plan", "-i", payload_path(), "--start-date", "2099-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overdue (not scheduled):"))
        .stdout(predicate::str::contains("old quiz prep"));
}

#[test]
fn plan_reads_payload_from_stdin() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["plan", "--start-date", "2099-01-01"])
        .write_stdin(payload_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("algo hw 2"));
}

#[test]
fn plan_flags_shortfalls_when_the_horizon_is_too_tight() {
    // One 19:00-23:00 day minus the 2-hour tutoring block leaves 120 minutes,
    // exactly enough for the task — so shrink the window to force a gap.
    Command::cargo_bin("cramplan")
        .unwrap()
        .args([
            "plan",
            "-i",
            payload_path(),
            "--start-date",
            "2099-01-01",
            "--days",
            "1",
            "--window-start",
            "19",
            "--window-end",
            "21",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not fully scheduled:"))
        .stdout(predicate::str::contains("algo hw 2"));
}

#[test]
fn plan_writes_a_combined_ics_file() {
    let out = "/tmp/cramplan-test-all.ics";
    let _ = std::fs::remove_file(out);

    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["plan", "-i", payload_path(), "--start-date", "2099-01-01", "--ics", out])
        .assert()
        .success();

    let content = std::fs::read_to_string(out).expect("ics output must exist");
    assert!(content.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(content.contains("PRODID:-//HW Scheduler//TW//"));
    assert!(content.contains("SUMMARY:tutoring"));
    assert!(content.contains("CATEGORIES:Task"));

    let _ = std::fs::remove_file(out);
}

#[test]
fn plan_writes_split_ics_files() {
    let dir = "/tmp/cramplan-test-split";
    let _ = std::fs::remove_dir_all(dir);

    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["plan", "-i", payload_path(), "--start-date", "2099-01-01", "--split-ics", dir])
        .assert()
        .success();

    let fixed = std::fs::read_to_string(format!("{}/fixed_events.ics", dir))
        .expect("fixed_events.ics must exist");
    let tasks = std::fs::read_to_string(format!("{}/tasks_events.ics", dir))
        .expect("tasks_events.ics must exist");
    assert!(fixed.contains("CATEGORIES:Fixed"));
    assert!(!fixed.contains("CATEGORIES:Task"));
    assert!(tasks.contains("CATEGORIES:Task"));
    assert!(!tasks.contains("CATEGORIES:Fixed"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn plan_rejects_a_negative_daily_cap() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["plan", "-i", payload_path(), "--max-hours-per-day=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn plan_rejects_a_malformed_payload() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .arg("plan")
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode planner payload"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_passes_on_disjoint_fixed_events() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["check", "-i", payload_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overlaps"));
}

#[test]
fn check_fails_on_overlapping_fixed_events() {
    Command::cargo_bin("cramplan")
        .unwrap()
        .args(["check", "-i", overlapping_path()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("overlapping pair"))
        .stdout(predicate::str::contains("study group"))
        .stdout(predicate::str::contains("60 min"));
}
