//! Path utilities for user supplied file arguments.

use std::path::PathBuf;

/// Expand a leading `~` (alone, `~/…` or `~\…`) to the home directory.
/// Anything else, including `~user/…`, is returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) if r.starts_with('/') || r.starts_with('\\') => Some(&r[1..]),
        _ => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(r), Some(home)) => home.join(r),
        _ => PathBuf::from(path),
    }
}
