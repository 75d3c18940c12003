use super::date_key::DateKey;
use chrono::NaiveDate;

/// Output columns assigned to one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateColumn {
    /// Header text the column came from (header-inferred) or the generated label.
    pub label: String,
    /// `None` when a header looked like a date but could not be parsed.
    pub key: Option<DateKey>,
    pub login_col: u32,
    pub logout_col: u32,
    pub hours_col: Option<u32>,
}

/// Column layout of the output sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPlan {
    /// Date pairs found in the reference header; the reference layout is kept.
    HeaderInferred { columns: Vec<DateColumn> },
    /// Three columns per date, after the copied roster columns.
    RangeDriven {
        /// Reference columns copied verbatim, in output order
        /// (`copied[i]` lands in output column `i`).
        copied: Vec<u32>,
        dates: Vec<NaiveDate>,
        columns: Vec<DateColumn>,
    },
}

impl ColumnPlan {
    pub fn columns(&self) -> &[DateColumn] {
        match self {
            ColumnPlan::HeaderInferred { columns } => columns,
            ColumnPlan::RangeDriven { columns, .. } => columns,
        }
    }

    pub fn is_range_driven(&self) -> bool {
        matches!(self, ColumnPlan::RangeDriven { .. })
    }

    /// Total number of planned date columns (pairs count twice, triples three times).
    pub fn width(&self) -> usize {
        self.columns()
            .iter()
            .map(|c| if c.hours_col.is_some() { 3 } else { 2 })
            .sum()
    }
}
