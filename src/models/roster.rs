/// One employee row of the reference sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// 0-based row in the reference sheet.
    pub row: u32,
    /// Name exactly as written in the reference cell.
    pub name: String,
}

/// Employees in reference top-to-bottom order. Never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Column the names were read from.
    pub name_col: u32,
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
