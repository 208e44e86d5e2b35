//! Daily target helpers. Durations in milliseconds.

/// 8 hours.
pub const DAILY_TARGET_MS: i64 = 8 * 60 * 60 * 1000;

pub fn remaining_time(duration: i64, target: i64) -> i64 {
    (target - duration).max(0)
}

pub fn is_work_day_complete(duration: i64, target: i64) -> bool {
    duration >= target
}

/// Rounded percentage of the target. Not clamped: overtime shows above 100.
pub fn completion_percentage(duration: i64, target: i64) -> i64 {
    percentage_of(duration, target)
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub fn percentage_of(part: i64, whole: i64) -> i64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as i64
}
