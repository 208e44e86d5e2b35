//! Formatting utilities used for CLI output. The engine works in
//! milliseconds; only the terminal layer turns them into text.

use super::time::{MS_PER_HOUR, MS_PER_MINUTE};

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// `02h 25m` (or `+02h 25m` / `-01h 10m` with `want_sign`).
/// Seconds are truncated.
pub fn ms2readable(ms: i64, want_sign: bool) -> String {
    let abs = ms.abs();
    let hours = abs / MS_PER_HOUR;
    let minutes = (abs % MS_PER_HOUR) / MS_PER_MINUTE;

    let sign = if ms > 0 && want_sign {
        "+"
    } else if ms < 0 && want_sign {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, hours, minutes)
}

pub fn percent(p: i64) -> String {
    format!("{}%", p)
}
