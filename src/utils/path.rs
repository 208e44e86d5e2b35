//! Resolution of user-supplied file locations.

use std::path::PathBuf;

/// Expand a leading `~` (alone or as `~/...`) to the home directory.
/// Other paths, and `~user` forms, are returned as given.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) if r.starts_with('/') || r.starts_with('\\') => Some(&r[1..]),
        _ => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(r), Some(home)) => home.join(r),
        _ => PathBuf::from(raw),
    }
}

/// Dataset location: `--data` wins over the configured `data_file`.
pub fn data_file_path(cli_override: Option<&str>, configured: &str) -> PathBuf {
    expand_home(cli_override.unwrap_or(configured).trim())
}
