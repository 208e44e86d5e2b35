mod common;
use common::*;
use rpresence::core::calculator::overlap::{find_session_overlaps, has_overlap};

const D: &str = "2025-09-04";

#[test]
fn test_overlap_is_the_intersection() {
    let sessions = vec![
        session("s1", "a", D, "09:00", Some("11:00")),
        session("s2", "b", D, "10:30", Some("12:00")),
    ];

    let overlaps = find_session_overlaps(&sessions, at(D, "18:00"));

    assert_eq!(overlaps.len(), 1);
    let o = &overlaps[0];
    assert_eq!(o.first_session_id, "s1");
    assert_eq!(o.second_session_id, "s2");
    assert_eq!(o.start, at(D, "10:30"));
    assert_eq!(o.end, at(D, "11:00"));
    assert_eq!(o.duration, 30 * MINUTE);
}

#[test]
fn test_same_project_never_overlaps() {
    let sessions = vec![
        session("s1", "a", D, "09:00", Some("11:00")),
        session("s2", "a", D, "10:00", Some("12:00")),
    ];

    assert!(!has_overlap(&sessions, at(D, "18:00")));
}

#[test]
fn test_touching_sessions_do_not_overlap() {
    let sessions = vec![
        session("s1", "a", D, "09:00", Some("10:00")),
        session("s2", "b", D, "10:00", Some("11:00")),
    ];

    assert!(find_session_overlaps(&sessions, at(D, "18:00")).is_empty());
}

#[test]
fn test_open_session_extends_to_now() {
    let sessions = vec![
        session("s1", "a", D, "09:00", None),
        session("s2", "b", D, "10:00", None),
    ];

    let overlaps = find_session_overlaps(&sessions, at(D, "10:45"));
    assert_eq!(overlaps[0].duration, 45 * MINUTE);

    let later = find_session_overlaps(&sessions, at(D, "11:00"));
    assert_eq!(later[0].duration, HOUR);
}

#[test]
fn test_three_concurrent_sessions_are_reported_pairwise() {
    let sessions = vec![
        session("s1", "a", D, "09:00", Some("12:00")),
        session("s2", "b", D, "10:00", Some("11:00")),
        session("s3", "c", D, "09:30", Some("10:30")),
    ];

    let overlaps = find_session_overlaps(&sessions, at(D, "18:00"));

    assert_eq!(overlaps.len(), 3);
    // sorted by start
    assert_eq!(overlaps[0].start, at(D, "09:30"));
    assert_eq!(overlaps[0].duration, HOUR);
    assert_eq!(overlaps[1].start, at(D, "10:00"));
    assert_eq!(overlaps[2].start, at(D, "10:00"));
    assert!(overlaps[1..].iter().all(|o| o.duration == HOUR || o.duration == 30 * MINUTE));
}
