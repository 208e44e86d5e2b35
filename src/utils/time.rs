//! Duration utilities: parsing configured durations, ms conversions.

use crate::errors::{AppError, AppResult};

pub const MS_PER_MINUTE: i64 = 60 * 1000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// `None` on overflow.
pub fn hours(h: i64) -> Option<i64> {
    h.checked_mul(MS_PER_HOUR)
}

/// `None` on overflow.
pub fn minutes(m: i64) -> Option<i64> {
    m.checked_mul(MS_PER_MINUTE)
}

/// Parse `8h`, `7h30m`, `7h 30m` or `450m` into milliseconds.
pub fn parse_work_duration(s: &str) -> AppResult<i64> {
    let raw: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let raw = raw.to_lowercase();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    let (h_part, m_part) = match raw.split_once('h') {
        Some((h, rest)) => (Some(h), rest),
        None => (None, raw.as_str()),
    };

    let h: i64 = match h_part {
        Some(h) => h.parse().map_err(|_| invalid())?,
        None => 0,
    };

    let m: i64 = if m_part.is_empty() {
        0
    } else {
        m_part
            .strip_suffix('m')
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?
    };

    if h < 0 || m < 0 {
        return Err(invalid());
    }

    hours(h)
        .zip(minutes(m))
        .and_then(|(h, m)| h.checked_add(m))
        .ok_or_else(invalid)
}
