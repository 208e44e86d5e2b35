use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::*;

fn json_output(args: &[&str]) -> Value {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    let out = rpr(dir.path())
        .arg("--data")
        .arg(&data)
        .arg("--json")
        .args(args)
        .output()
        .expect("failed to run rpresence");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

#[test]
fn test_day_completed() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap(), "--now", "2025-09-03 12:00"])
        .args(["day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Completed"))
        .stdout(contains("Presence:   08h 00m"))
        .stdout(contains("Completion: 100%"))
        .stdout(contains("Alpha").and(contains("Beta")));
}

#[test]
fn test_day_in_progress_uses_frozen_clock() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap(), "--now", "2025-09-03 12:00"])
        .arg("day")
        .assert()
        .success()
        .stdout(contains("2025-09-03"))
        .stdout(contains("Morning"))
        .stdout(contains("Next:       Break start"))
        .stdout(contains("Presence:   03h 00m"))
        .stdout(contains("running"));
}

#[test]
fn test_day_json() {
    let v = json_output(&["--now", "2025-09-03 12:00", "day", "2025-09-02"]);

    assert_eq!(v["status"], "completed");
    assert_eq!(v["next_expected"], Value::Null);
    assert_eq!(v["presence_time"], 7 * HOUR);
    assert_eq!(v["remaining_time"], HOUR);
    assert_eq!(v["is_complete"], false);
}

#[test]
fn test_week_json() {
    let v = json_output(&["--now", "2025-09-03 12:00", "week", "2025-09-03"]);

    assert_eq!(v["period"]["start_date"], "2025-09-01");
    assert_eq!(v["period"]["end_date"], "2025-09-07");
    assert_eq!(v["period"]["total_days"], 7);
    assert_eq!(v["period"]["worked_days"], 3);
    assert_eq!(v["period"]["complete_days"], 1);
    assert_eq!(v["period"]["incomplete_days"], 2);
    assert_eq!(v["time"]["total_presence"], 18 * HOUR);
    assert_eq!(v["time"]["average_presence_per_day"], 6 * HOUR);

    let projects = v["project_stats"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["project_name"], "Alpha");
    assert_eq!(projects[0]["percentage"], 77);
    assert_eq!(projects[0]["is_running"], true);
    assert_eq!(projects[0]["daily_durations"]["2025-09-01"], 2 * HOUR);
    assert_eq!(projects[1]["percentage"], 23);

    let incomplete = v["incomplete_days_list"].as_array().unwrap();
    assert_eq!(incomplete[0]["date"], "2025-09-02");
    assert_eq!(incomplete[0]["missing_time"], HOUR);
}

#[test]
fn test_month_table() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap(), "--now", "2025-09-03 12:00"])
        .args(["month", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 → 2025-09-30"))
        .stdout(contains("Worked: 3"))
        .stdout(contains("Incomplete days:"))
        .stdout(contains("missing 01h 00m"));
}

#[test]
fn test_range_rejects_reversed_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap()])
        .args(["range", "2025-09-10", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_range_json() {
    let v = json_output(&["--now", "2025-09-03 12:00", "range", "2025-09-01", "2025-09-02"]);

    assert_eq!(v["period"]["total_days"], 2);
    assert_eq!(v["time"]["average_presence_per_day"], 7 * HOUR + 30 * MINUTE);
}

#[test]
fn test_overlaps() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap()])
        .args(["overlaps", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Alpha / Beta"))
        .stdout(contains("01h 00m"));
}

#[test]
fn test_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();

    rpr(dir.path())
        .args(["--data", dir.path().join("none.json").to_str().unwrap()])
        .arg("day")
        .assert()
        .failure()
        .stderr(contains("Dataset file not found"));
}

#[test]
fn test_invalid_now() {
    let dir = tempfile::tempdir().unwrap();

    rpr(dir.path())
        .args(["--now", "yesterday", "day"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_init_and_print_config() {
    let dir = tempfile::tempdir().unwrap();

    rpr(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("rpresence.conf").exists());

    rpr(dir.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("min_work_duration: 8h"));
}

#[test]
fn test_configured_target_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rpresence.conf"), "min_work_duration: 7h\n").unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    let out = rpr(dir.path())
        .args(["--data", data.to_str().unwrap(), "--json", "--now", "2025-09-03 12:00"])
        .args(["day", "2025-09-02"])
        .output()
        .unwrap();
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();

    assert_eq!(v["is_complete"], true);
    assert_eq!(v["completion_percentage"], 100);
}

#[test]
fn test_reversed_session_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        r#"{ "sessions": [
            { "id": "s1", "project_id": "a", "start_time": "2025-09-01T12:00:00", "end_time": "2025-09-01T11:00:00" }
        ] }"#,
    );

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap(), "--now", "2025-09-03 12:00"])
        .args(["day", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid session").and(contains("s1")));
}

#[test]
fn test_entries_after_now_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), SAMPLE_DATASET);

    rpr(dir.path())
        .args(["--data", data.to_str().unwrap(), "--now", "2025-09-01 20:00"])
        .args(["day", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid entry"));
}
