//! ANSI color helper utilities for terminal output.

use crate::models::DayStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::NotStarted => GREY,
        DayStatus::Morning | DayStatus::Afternoon => CYAN,
        DayStatus::Lunch => YELLOW,
        DayStatus::Completed => GREEN,
    }
}

/// Remaining time:
/// 0 → green (target reached)
/// \>0 → red
pub fn color_for_remaining(ms: i64) -> &'static str {
    if ms == 0 { GREEN } else { RED }
}
