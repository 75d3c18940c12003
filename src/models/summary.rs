use serde::Serialize;

/// Counters reported at the end of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub entries_found: usize,
    pub source_employees: usize,
    pub roster_employees: usize,
    pub date_columns: usize,
    pub matched: usize,
    pub unmatched_roster: usize,
    pub unmatched_source: usize,
    pub cells_filled: usize,
    pub skipped_no_name: usize,
    pub unparseable_fields: usize,
    pub undated_fields: usize,
}
