#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rpresence::core::{FixedClock, PresenceCalculator};
use rpresence::models::{EntryType, Project, ProjectSession, PunchEntry};
use std::fs;
use std::path::{Path, PathBuf};

pub const HOUR: i64 = 60 * 60 * 1000;
pub const MINUTE: i64 = 60 * 1000;

/// Binary under test, isolated from any real config file.
pub fn rpr(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpresence");
    cmd.env("RPRESENCE_CONFIG", config_dir.join("rpresence.conf"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// `at("2025-09-01", "09:00")`
pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M")
        .expect("valid datetime")
}

pub fn entry(kind: EntryType, date: &str, time: &str) -> PunchEntry {
    PunchEntry::new(kind, at(date, time))
}

/// A full day: in, break start, break end, out.
pub fn full_day(date: &str, times: [&str; 4]) -> Vec<PunchEntry> {
    let kinds = [
        EntryType::ClockIn,
        EntryType::BreakStart,
        EntryType::BreakEnd,
        EntryType::ClockOut,
    ];
    kinds
        .into_iter()
        .zip(times)
        .map(|(k, t)| entry(k, date, t))
        .collect()
}

pub fn session(id: &str, project: &str, date: &str, start: &str, end: Option<&str>) -> ProjectSession {
    ProjectSession::new(id, project, at(date, start), end.map(|e| at(date, e)))
}

pub fn projects() -> Vec<Project> {
    vec![
        Project::new("a", "Alpha", "#ff0000"),
        Project::new("b", "Beta", "#00ff00"),
    ]
}

pub fn calc_at(date: &str, time: &str) -> PresenceCalculator<FixedClock> {
    PresenceCalculator::new(FixedClock(at(date, time)))
}

/// Write a JSON dataset inside `dir` and return its path.
pub fn write_dataset(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("data.json");
    fs::write(&path, json).expect("write dataset");
    path
}

pub const SAMPLE_DATASET: &str = r##"{
  "entries": [
    { "type": "clock_in",    "timestamp": "2025-09-01T09:00:00" },
    { "type": "break_start", "timestamp": "2025-09-01T12:30:00" },
    { "type": "break_end",   "timestamp": "2025-09-01T13:30:00" },
    { "type": "clock_out",   "timestamp": "2025-09-01T18:00:00" },
    { "type": "clock_in",    "timestamp": "2025-09-02T09:00:00" },
    { "type": "break_start", "timestamp": "2025-09-02T12:00:00" },
    { "type": "break_end",   "timestamp": "2025-09-02T13:00:00" },
    { "type": "clock_out",   "timestamp": "2025-09-02T17:00:00" },
    { "type": "clock_in",    "timestamp": "2025-09-03T09:00:00" }
  ],
  "sessions": [
    { "id": "s1", "project_id": "a", "start_time": "2025-09-01T09:00:00", "end_time": "2025-09-01T11:00:00" },
    { "id": "s2", "project_id": "b", "start_time": "2025-09-01T10:00:00", "end_time": "2025-09-01T11:20:00" },
    { "id": "s3", "project_id": "a", "start_time": "2025-09-03T09:30:00" }
  ],
  "projects": [
    { "id": "a", "name": "Alpha", "color": "#ff0000" },
    { "id": "b", "name": "Beta", "color": "#00ff00" }
  ]
}"##;
