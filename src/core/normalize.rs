/// Canonical matching key for an employee name: surrounding whitespace
/// trimmed, inner runs collapsed to one space, lower-cased.
///
/// Only a fallback key; exact names always win.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
