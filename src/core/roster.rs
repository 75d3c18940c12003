use crate::core::fields::FieldLookup;
use crate::models::{Roster, RosterEntry, Sheet};

/// Employees of the reference sheet in row order. Rows whose name cell is
/// blank (totals, spacer rows) are not part of the roster.
pub fn read_roster(reference: &Sheet, name_lookup: &FieldLookup) -> Roster {
    let header = reference.header();
    let name_col = name_lookup.resolve(&header).col;

    let entries = match reference.last_row() {
        Some(last) => (1..=last)
            .filter_map(|row| {
                let name = reference.get(row, name_col).as_text()?;
                if name.trim().is_empty() {
                    return None;
                }
                Some(RosterEntry { row, name })
            })
            .collect(),
        None => Vec::new(),
    };

    Roster { name_col, entries }
}
