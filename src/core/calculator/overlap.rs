//! Detection of sessions on different projects that run at the same time.
//!
//! Each unordered pair of sessions is measured on its own: with three
//! concurrent sessions the same wall-clock minute appears in up to three
//! reported overlaps. No union-of-overlaps metric is derived here.

use crate::models::ProjectSession;
use crate::models::stats::SessionOverlap;
use chrono::NaiveDateTime;

/// Pairwise intersections between sessions of different projects.
/// Open sessions extend to `now`. Touching intervals do not overlap.
/// Sorted by intersection start.
pub fn find_session_overlaps(
    sessions: &[ProjectSession],
    now: NaiveDateTime,
) -> Vec<SessionOverlap> {
    let mut overlaps = Vec::new();

    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if a.project_id == b.project_id {
                continue;
            }

            let start = a.start_time.max(b.start_time);
            let end = a.effective_end(now).min(b.effective_end(now));

            if end > start {
                overlaps.push(SessionOverlap {
                    first_session_id: a.id.clone(),
                    second_session_id: b.id.clone(),
                    first_project_id: a.project_id.clone(),
                    second_project_id: b.project_id.clone(),
                    start,
                    end,
                    duration: (end - start).num_milliseconds(),
                });
            }
        }
    }

    overlaps.sort_by_key(|o| o.start);
    overlaps
}

pub fn has_overlap(sessions: &[ProjectSession], now: NaiveDateTime) -> bool {
    !find_session_overlaps(sessions, now).is_empty()
}
